//! Executable shell stubs standing in for the terminal and the elevation
//! helper.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Write `body` as an executable `/bin/sh` script at `dir/name`.
pub fn write_stub_script(dir: &Path, name: &str, body: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n"))
        .with_context(|| format!("writing stub {:?}", path))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .with_context(|| format!("chmod stub {:?}", path))?;
    }

    Ok(path)
}

/// A terminal stub that prints `report` (no newline) and exits.
pub fn reporting_terminal(dir: &Path, report: &str) -> Result<PathBuf> {
    let escaped = report.replace('\'', r"'\''");
    write_stub_script(dir, "mintty", &format!("printf '%s' '{escaped}'"))
}

/// A stub that records its arguments, one per line, into `dir/args.txt`
/// and exits with `code`.
pub fn recording_stub(dir: &Path, name: &str, code: i32) -> Result<PathBuf> {
    let log = dir.join("args.txt");
    let body = format!(
        "for a in \"$@\"; do printf '%s\\n' \"$a\" >> '{}'; done\nexit {code}",
        log.display()
    );
    write_stub_script(dir, name, &body)
}
