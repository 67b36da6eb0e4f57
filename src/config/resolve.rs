// src/config/resolve.rs

//! Turn a parsed [`Document`] into a typed [`ResolvedConfig`].
//!
//! ```ini
//! [path]
//! terminal = usr/bin/mintty
//! icon = msys2.ico
//! position = /home/me/.mint_position
//!
//! [environment]
//! MSYSTEM = MINGW64
//! PATH = /opt/tools:%PATH%
//! ```
//!
//! Resolution never fails: every missing entry falls back to a default.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::document::Document;
use crate::config::loader::exe_dir;

pub const PATH_SECTION: &str = "path";
pub const ENV_SECTION: &str = "environment";
pub const ENV_SECTION_ALIAS: &str = "env";

pub const TERMINAL_KEY: &str = "terminal";
pub const ICON_KEY: &str = "icon";
pub const POSITION_KEY: &str = "position";

/// Environment variable naming the install root.
pub const ROOT_ENV: &str = "MINT_ROOT";

pub const DEFAULT_ICON: &str = "msys2.ico";
pub const DEFAULT_POSITION_FILE: &str = ".mint_position";

/// Default terminal path relative to the install root.
pub fn default_terminal() -> PathBuf {
    let binary = format!("mintty{}", env::consts::EXE_SUFFIX);
    ["usr", "bin", binary.as_str()].iter().collect()
}

/// Fully resolved, immutable configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub terminal: PathBuf,
    pub icon: PathBuf,
    pub position_file: PathBuf,
    /// `(name, raw value)` pairs in file order; expansion happens later.
    pub environment: Vec<(String, String)>,
}

impl ResolvedConfig {
    /// Resolve against `base` (install root) and `home`.
    pub fn resolve(document: Option<&Document>, base: &Path, home: &Path) -> Self {
        let lookup = |key: &str| document.and_then(|d| d.get(PATH_SECTION, key));
        let path_or = |key: &str, default: PathBuf| {
            lookup(key)
                .map(|p| absolutize(base, Path::new(p)))
                .unwrap_or(default)
        };

        let terminal = path_or(TERMINAL_KEY, base.join(default_terminal()));
        let icon = path_or(ICON_KEY, base.join(DEFAULT_ICON));
        let position_file = path_or(POSITION_KEY, home.join(DEFAULT_POSITION_FILE));

        let environment = document
            .and_then(|d| d.section(ENV_SECTION).or_else(|| d.section(ENV_SECTION_ALIAS)))
            .map(|table| {
                table
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            terminal,
            icon,
            position_file,
            environment,
        }
    }
}

/// `path` as-is when absolute, else joined onto `base`.
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Install root: `$MINT_ROOT` when set and non-empty, else the directory
/// of the running executable.
pub fn install_root(exe_path: &Path) -> PathBuf {
    match env::var_os(ROOT_ENV) {
        Some(root) if !root.is_empty() => PathBuf::from(root),
        _ => exe_dir(exe_path),
    }
}

/// The user's home directory, falling back to `base`.
pub fn home_dir(base: &Path) -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| base.to_path_buf())
}
