use std::path::PathBuf;

use clap::Parser;
use mint::cli::{CliArgs, LogLevel};
use mint::logging::resolve_level;
use tracing::Level;

#[test]
fn no_arguments_opens_an_idle_shell() {
    let args = CliArgs::parse_from(["mint"]);

    assert!(args.config.is_none());
    assert!(!args.runas);
    assert!(!args.dry_run);
    assert!(args.command.is_empty());
}

#[test]
fn flags_before_the_command_belong_to_mint() {
    let args = CliArgs::parse_from(["mint", "-r", "-c", "alt.ini", "ls", "-la", "/tmp"]);

    assert!(args.runas);
    assert_eq!(args.config, Some(PathBuf::from("alt.ini")));
    assert_eq!(args.command, vec!["ls", "-la", "/tmp"]);
}

#[test]
fn flags_after_the_command_belong_to_the_command() {
    let args = CliArgs::parse_from(["mint", "vim", "-r", "--dry-run", "notes.txt"]);

    assert!(!args.runas);
    assert!(!args.dry_run);
    assert_eq!(args.command, vec!["vim", "-r", "--dry-run", "notes.txt"]);
}

#[test]
fn double_dash_passes_a_hyphenated_command() {
    let args = CliArgs::parse_from(["mint", "--runas", "--", "-weird-name", "x"]);

    assert!(args.runas);
    assert_eq!(args.command, vec!["-weird-name", "x"]);
}

#[test]
fn log_level_flag_is_parsed() {
    let args = CliArgs::parse_from(["mint", "--log-level", "debug", "--dry-run"]);

    assert_eq!(args.log_level, Some(LogLevel::Debug));
    assert!(args.dry_run);
}

#[test]
fn unknown_log_level_is_rejected() {
    assert!(CliArgs::try_parse_from(["mint", "--log-level", "loud"]).is_err());
}

#[test]
fn cli_level_wins_over_environment() {
    assert_eq!(resolve_level(Some(LogLevel::Trace), Some("error")), Level::TRACE);
}

#[test]
fn environment_level_is_used_when_flag_absent() {
    assert_eq!(resolve_level(None, Some(" Info ")), Level::INFO);
    assert_eq!(resolve_level(None, Some("warning")), Level::WARN);
}

#[test]
fn unparseable_or_missing_level_defaults_to_warn() {
    assert_eq!(resolve_level(None, Some("chatty")), Level::WARN);
    assert_eq!(resolve_level(None, None), Level::WARN);
}
