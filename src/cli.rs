// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `mint`.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "mint",
    version,
    about = "Start mintty with a configured environment and remember its window position.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the INI file.
    ///
    /// Relative paths are taken from the executable's directory. Default:
    /// the executable's path with an `.ini` extension.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Run as administrator (relaunch through the elevation helper).
    #[arg(short, long)]
    pub runas: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `MINT_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve configuration and print the terminal command line without
    /// launching anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Command to run in a login shell instead of an idle shell.
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
