// src/config/loader.rs

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::document::Document;
use crate::config::parser::parse_reader;
use crate::errors::{MintError, Result};
use crate::fs::FileSystem;

/// Load a configuration document from `path`.
///
/// Returns `Ok(None)` when the file does not exist; that is the normal
/// first-run situation and means "use defaults". A file that exists but
/// cannot be read, or that contains an unrecognized line, is an error.
pub fn load_document(fs: &dyn FileSystem, path: &Path) -> Result<Option<Document>> {
    if !fs.exists(path) {
        info!(path = %path.display(), "no configuration file; using defaults");
        return Ok(None);
    }

    let bytes = fs.read(path).map_err(|source| MintError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let document = parse_reader(bytes.as_slice())?;

    debug!(
        path = %path.display(),
        sections = document.len(),
        "configuration loaded"
    );
    Ok(Some(document))
}

/// Resolve which configuration file to read.
///
/// - An explicit path is used as-is when absolute, else joined onto the
///   executable's directory.
/// - Otherwise the executable's own path with its extension replaced by
///   `ini` (`/opt/msys64/mint` -> `/opt/msys64/mint.ini`).
pub fn config_path(exe_path: &Path, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(p) if p.is_absolute() => p.to_path_buf(),
        Some(p) => exe_dir(exe_path).join(p),
        None => exe_path.with_extension("ini"),
    }
}

/// Directory holding the running executable.
pub fn exe_dir(exe_path: &Path) -> PathBuf {
    match exe_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
