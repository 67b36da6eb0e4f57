// src/environment.rs

//! Apply configured variables to mint's own environment block.
//!
//! The terminal inherits the environment, so everything set here reaches
//! the shell it starts.

use std::env;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::debug;

use crate::errors::{MintError, Result};

/// Set unconditionally: the console the MSYS2 profile should assume.
pub const CONSOLE_VARS: [(&str, &str); 2] =
    [("MSYSCON", "mintty.exe"), ("TERM_PROGRAM", "mintty")];

/// Set when a command was given, so the login profile keeps the current
/// directory instead of changing to `$HOME`.
pub const INVOKING_VAR: (&str, &str) = ("CHERE_INVOKING", "1");

static VAR_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%([^%\s=]+)%").expect("valid reference regex"));

/// Replace `%NAME%` references using `lookup`.
///
/// Unknown names are left as written.
pub fn expand_with<F>(value: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    VAR_REFERENCE
        .replace_all(value, |caps: &Captures<'_>| {
            lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Replace `%NAME%` references from the current process environment.
pub fn expand(value: &str) -> String {
    expand_with(value, |name| env::var(name).ok())
}

/// Set `name=value` in the current process.
pub fn set_var(name: &str, value: &str) -> Result<()> {
    let reason = if name.is_empty() {
        Some("name is empty")
    } else if name.contains('=') {
        Some("name contains '='")
    } else if name.contains('\0') || value.contains('\0') {
        Some("contains a NUL character")
    } else {
        None
    };
    if let Some(reason) = reason {
        return Err(MintError::EnvVar {
            name: name.to_string(),
            reason: reason.to_string(),
        });
    }

    debug!(name, value, "setting environment variable");
    // SAFETY: no other thread reads or writes the environment while this
    // runs. The binary calls this before it starts any thread; tests that
    // touch the environment serialise on a shared lock.
    unsafe { env::set_var(name, value) };
    Ok(())
}

/// Expand and apply every configured variable in order, then the fixed
/// console variables and, if `has_command`, the invoking marker.
///
/// Each value is expanded against the environment as it stands at that
/// point, so later entries can refer to earlier ones.
pub fn install(variables: &[(String, String)], has_command: bool) -> Result<()> {
    for (name, raw) in variables {
        set_var(name, &expand(raw))?;
    }
    for (name, value) in CONSOLE_VARS {
        set_var(name, value)?;
    }
    if has_command {
        set_var(INVOKING_VAR.0, INVOKING_VAR.1)?;
    }
    Ok(())
}
