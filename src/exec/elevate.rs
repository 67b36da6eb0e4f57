// src/exec/elevate.rs

//! Privilege detection and elevated self-relaunch.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use tracing::{debug, info, warn};

use crate::errors::Result;
use crate::exec::cmdline::{build_command_line, command_for};

/// Environment variable overriding the elevation helper.
pub const ELEVATE_ENV: &str = "MINT_ELEVATE_WITH";

pub const DEFAULT_ELEVATE_PROGRAM: &str = "pkexec";

/// Helper exit codes meaning the user dismissed or failed authentication.
pub const DECLINED_CODES: [i32; 2] = [126, 127];

/// Whether the current process already runs with elevated privileges.
#[cfg(unix)]
pub fn is_elevated() -> Result<bool> {
    Ok(nix::unistd::geteuid().is_root())
}

#[cfg(not(unix))]
pub fn is_elevated() -> Result<bool> {
    Err(anyhow!("privilege query is not supported on this platform").into())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElevationOutcome {
    /// The elevated copy ran and exited with this code.
    Exited(i32),
    /// The user declined the elevation prompt.
    Declined,
}

/// Re-runs the current executable through an elevation helper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Elevator {
    program: PathBuf,
}

impl Elevator {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// `$MINT_ELEVATE_WITH` when set and non-empty, else `pkexec`.
    pub fn from_env() -> Self {
        match env::var_os(ELEVATE_ENV) {
            Some(p) if !p.is_empty() => Self::new(p),
            _ => Self::new(DEFAULT_ELEVATE_PROGRAM),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Run `exe_path` with `args` under the helper and wait for it.
    ///
    /// Failing to start or wait on the helper is an internal error; a
    /// declined prompt is an ordinary outcome.
    pub fn relaunch(&self, exe_path: &Path, args: &[String]) -> Result<ElevationOutcome> {
        let program = self.program.to_string_lossy();
        let exe = exe_path.to_string_lossy();
        let line = build_command_line(
            [&*program, &*exe]
                .into_iter()
                .chain(args.iter().map(String::as_str)),
        );
        info!(helper = %program, cmdline = %line, "relaunching with elevated privileges");

        let mut child = command_for(&self.program, &line)
            .spawn()
            .with_context(|| format!("starting elevation helper {:?}", self.program))?;
        let status = child
            .wait()
            .with_context(|| format!("waiting for elevation helper {:?}", self.program))?;

        let code = status
            .code()
            .ok_or_else(|| anyhow!("elevation helper terminated by a signal ({status})"))?;
        debug!(code, "elevated process exited");

        if DECLINED_CODES.contains(&code) {
            warn!(code, "elevation declined");
            return Ok(ElevationOutcome::Declined);
        }
        Ok(ElevationOutcome::Exited(code))
    }
}

impl Default for Elevator {
    fn default() -> Self {
        Self::new(DEFAULT_ELEVATE_PROGRAM)
    }
}
