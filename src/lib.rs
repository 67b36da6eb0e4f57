// src/lib.rs

pub mod cli;
pub mod config;
pub mod environment;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod notify;
pub mod position;
pub mod types;

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, error, info, warn};

use crate::cli::CliArgs;
use crate::config::resolve::{home_dir, install_root};
use crate::config::{ResolvedConfig, config_path, load_document};
use crate::errors::{ErrorKind, MintError, Result};
use crate::exec::launcher::build_terminal_command_line;
use crate::exec::{AppIdentity, ElevationOutcome, Elevator, LaunchRequest, is_elevated, launch};
use crate::fs::FileSystem;
use crate::notify::Notifier;
use crate::types::{EXIT_FAILURE, EXIT_SUCCESS, RunOutcome};

/// Everything a run needs to know about how mint was started.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub args: CliArgs,
    /// Arguments as given (without the program name), replayed verbatim
    /// when relaunching elevated.
    pub raw_args: Vec<String>,
    pub exe_path: PathBuf,
    pub elevator: Elevator,
}

impl Invocation {
    /// Build from parsed arguments and the real process state.
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let exe_path = std::env::current_exe().context("locating the running executable")?;
        let raw_args = std::env::args_os()
            .skip(1)
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        Ok(Self {
            args,
            raw_args,
            exe_path,
            elevator: Elevator::from_env(),
        })
    }
}

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading and resolution
/// - the elevation gate
/// - environment installation
/// - the terminal launch and position handshake
pub fn run(inv: &Invocation, fs: &dyn FileSystem) -> Result<RunOutcome> {
    let base = install_root(&inv.exe_path);
    let home = home_dir(&base);
    let config_file = config_path(&inv.exe_path, inv.args.config.as_deref());

    let document = load_document(fs, &config_file)?;
    let config = ResolvedConfig::resolve(document.as_ref(), &base, &home);
    debug!(?config, "configuration resolved");

    let identity = AppIdentity::from_exe(&inv.exe_path);
    let has_command = !inv.args.command.is_empty();

    if inv.args.dry_run {
        let prior = position::load(fs, &config.position_file);
        let request = LaunchRequest {
            terminal: &config.terminal,
            icon: &config.icon,
            prior_position: prior.as_ref(),
            command: &inv.args.command,
            identity: &identity,
        };
        print_dry_run(&config_file, &config, &build_terminal_command_line(&request));
        return Ok(RunOutcome::DryRun);
    }

    if inv.args.runas && !is_elevated()? {
        return match inv.elevator.relaunch(&inv.exe_path, &inv.raw_args)? {
            ElevationOutcome::Exited(code) => Ok(RunOutcome::Relaunched(code)),
            ElevationOutcome::Declined => Ok(RunOutcome::ElevationDeclined),
        };
    }

    environment::install(&config.environment, has_command)?;

    let prior = position::load(fs, &config.position_file);
    let request = LaunchRequest {
        terminal: &config.terminal,
        icon: &config.icon,
        prior_position: prior.as_ref(),
        command: &inv.args.command,
        identity: &identity,
    };
    let token = launch(&request)?;

    position::save(fs, &config.position_file, &token)?;
    info!(position = %token, "run complete");
    Ok(RunOutcome::Launched(token))
}

/// Render the result of [`run`] for the user and pick the exit code.
///
/// This is the only place that talks to the notifier.
pub fn report(result: Result<RunOutcome>, notifier: &dyn Notifier) -> i32 {
    let err = match result {
        Ok(outcome) => return outcome.exit_code(),
        Err(err) => err,
    };

    match err.kind() {
        ErrorKind::User => warn!(error = %err, "run failed"),
        ErrorKind::Internal => error!(error = ?err, "unexpected error"),
    }
    notifier.notify(&err.user_message());

    exit_code_for(&err)
}

fn exit_code_for(err: &MintError) -> i32 {
    if err.after_launch() {
        EXIT_SUCCESS
    } else {
        EXIT_FAILURE
    }
}

/// Simple dry-run output: resolved paths, environment and command line.
fn print_dry_run(config_file: &Path, config: &ResolvedConfig, cmdline: &str) {
    println!("mint dry-run");
    println!("  config   = {}", config_file.display());
    println!("  terminal = {}", config.terminal.display());
    println!("  icon     = {}", config.icon.display());
    println!("  position = {}", config.position_file.display());
    println!();

    println!("environment ({}):", config.environment.len());
    for (name, value) in config.environment.iter() {
        println!("  {name}={value}");
    }
    println!();

    println!("command line:");
    println!("  {cmdline}");

    debug!("dry-run complete (nothing launched)");
}
