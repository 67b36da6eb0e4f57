// src/exec/launcher.rs

//! Start the terminal and capture its position report.
//!
//! The terminal's stdout is bound to the write end of an anonymous pipe.
//! Once the process is started the parent drops its own copy of that end,
//! so the child is the only writer left. Reading until end-of-file then
//! blocks until the child has written its report and closed stdout
//! (usually on exit). There is no timeout.

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::Stdio;

use tracing::{debug, info};

use crate::errors::{MintError, Result};
use crate::exec::cmdline::{build_command_line, command_for, quote_arg};
use crate::position::PositionToken;

/// Leading token used when no position has been saved yet.
pub const DEFAULT_LEADING_TOKEN: &str = "mintty";

/// Program argument asking the terminal for an idle interactive shell.
pub const IDLE_SHELL: &str = "-";

pub const LOGIN_SHELL: &str = "/usr/bin/sh";

/// Upper bound on the position report.
pub const POSITION_REPORT_CAPACITY: u64 = 256;

/// How the running executable presents itself to the desktop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppIdentity {
    pub exe_path: PathBuf,
    pub stem: String,
}

impl AppIdentity {
    pub fn from_exe(exe_path: &Path) -> Self {
        let stem = exe_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "mint".to_string());
        Self {
            exe_path: exe_path.to_path_buf(),
            stem,
        }
    }

    pub fn app_id(&self) -> String {
        format!("mint.{}", self.stem)
    }
}

#[derive(Debug, Clone)]
pub struct LaunchRequest<'a> {
    pub terminal: &'a Path,
    pub icon: &'a Path,
    pub prior_position: Option<&'a PositionToken>,
    /// Command to run in a login shell; empty for an idle shell.
    pub command: &'a [String],
    pub identity: &'a AppIdentity,
}

/// Build the terminal's full command line.
///
/// The saved position (or [`DEFAULT_LEADING_TOKEN`]) goes first verbatim,
/// since it already has the terminal's option syntax. Everything added
/// here is quoted.
pub fn build_terminal_command_line(req: &LaunchRequest<'_>) -> String {
    let leading = req
        .prior_position
        .map(PositionToken::as_str)
        .filter(|p| !p.trim().is_empty())
        .unwrap_or(DEFAULT_LEADING_TOKEN);

    let identity = req.identity;
    let mut line = String::from(leading);
    let mut push = |part: String| {
        line.push(' ');
        line.push_str(&part);
    };

    push(format!("-i {}", quote_arg(&req.icon.to_string_lossy())));
    push(format!("-o {}", quote_arg(&format!("AppID={}", identity.app_id()))));
    push(format!("-o {}", quote_arg(&format!("AppName={}", identity.stem))));
    push(format!(
        "-o {}",
        quote_arg(&format!(
            "AppLaunchCmd={}",
            identity.exe_path.to_string_lossy()
        ))
    ));
    push("-R o".to_string());
    push("--store-taskbar-properties".to_string());
    push(program_part(req.command));

    line
}

/// `-` for an idle shell, else a login shell running `"$@"` with the
/// command as positional parameters.
fn program_part(command: &[String]) -> String {
    if command.is_empty() {
        return IDLE_SHELL.to_string();
    }
    let shell = [LOGIN_SHELL, "-lc", "\"$@\"", "sh"];
    let argv = shell
        .iter()
        .map(|s| s.to_string())
        .chain(command.iter().cloned());
    build_command_line(argv)
}

/// Start the terminal and wait for its position report.
pub fn launch(req: &LaunchRequest<'_>) -> Result<PositionToken> {
    let line = build_terminal_command_line(req);
    info!(terminal = %req.terminal.display(), cmdline = %line, "launching terminal");

    let (reader, writer) = io::pipe().map_err(MintError::Pipe)?;

    // The command owns the write end; dropping it at the end of this block
    // leaves the child as the only writer.
    let child = {
        let mut cmd = command_for(req.terminal, &line);
        cmd.stdin(Stdio::null()).stdout(writer);
        cmd.spawn().map_err(|source| MintError::Spawn {
            path: req.terminal.to_path_buf(),
            source,
        })?
    };
    debug!(pid = child.id(), "terminal started; waiting for position report");
    // The terminal outlives this handshake; releasing the handle does not
    // stop it.
    drop(child);

    let token = read_report(reader)?;
    info!(len = token.len(), "position report received");
    Ok(token)
}

/// Read at most [`POSITION_REPORT_CAPACITY`] bytes until end-of-file.
pub fn read_report(reader: impl Read) -> Result<PositionToken> {
    let mut buf = Vec::with_capacity(POSITION_REPORT_CAPACITY as usize);
    reader
        .take(POSITION_REPORT_CAPACITY)
        .read_to_end(&mut buf)
        .map_err(MintError::ReadReport)?;
    Ok(PositionToken::new(String::from_utf8_lossy(&buf).into_owned()))
}
