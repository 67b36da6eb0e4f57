use std::io::{self, Read};
use std::path::{Path, PathBuf};

use mint::errors::MintError;
use mint::exec::cmdline::split_command_line;
use mint::exec::launcher::{
    AppIdentity, DEFAULT_LEADING_TOKEN, IDLE_SHELL, LaunchRequest, POSITION_REPORT_CAPACITY,
    build_terminal_command_line, read_report,
};
use mint::position::PositionToken;

fn identity() -> AppIdentity {
    AppIdentity::from_exe(Path::new("/opt/msys64/mint"))
}

fn request<'a>(
    terminal: &'a Path,
    prior: Option<&'a PositionToken>,
    command: &'a [String],
    identity: &'a AppIdentity,
) -> LaunchRequest<'a> {
    LaunchRequest {
        terminal,
        icon: Path::new("/opt/msys64/msys2.ico"),
        prior_position: prior,
        command,
        identity,
    }
}

#[test]
fn identity_uses_exe_stem() {
    let id = identity();
    assert_eq!(id.stem, "mint");
    assert_eq!(id.app_id(), "mint.mint");
    assert_eq!(id.exe_path, PathBuf::from("/opt/msys64/mint"));
}

#[test]
fn empty_command_ends_with_idle_shell_sentinel() {
    let id = identity();
    let req = request(Path::new("/t"), None, &[], &id);
    let line = build_terminal_command_line(&req);

    let argv = split_command_line(&line);
    assert_eq!(argv.first().map(String::as_str), Some(DEFAULT_LEADING_TOKEN));
    assert_eq!(argv.last().map(String::as_str), Some(IDLE_SHELL));
    assert_eq!(argv.iter().filter(|a| a.as_str() == IDLE_SHELL).count(), 1);
    assert!(line.ends_with(" -"));
}

#[test]
fn fixed_flags_carry_icon_and_identity() {
    let id = identity();
    let req = request(Path::new("/t"), None, &[], &id);
    let argv = split_command_line(&build_terminal_command_line(&req));

    assert_eq!(
        argv,
        vec![
            "mintty",
            "-i",
            "/opt/msys64/msys2.ico",
            "-o",
            "AppID=mint.mint",
            "-o",
            "AppName=mint",
            "-o",
            "AppLaunchCmd=/opt/msys64/mint",
            "-R",
            "o",
            "--store-taskbar-properties",
            "-",
        ]
    );
}

#[test]
fn command_is_embedded_as_login_shell_invocation() {
    let id = identity();
    let command = vec!["echo".to_string(), "hi there".to_string()];
    let req = request(Path::new("/t"), None, &command, &id);
    let argv = split_command_line(&build_terminal_command_line(&req));

    let tail: Vec<&str> = argv[argv.len() - 6..].iter().map(String::as_str).collect();
    assert_eq!(tail, vec!["/usr/bin/sh", "-lc", "\"$@\"", "sh", "echo", "hi there"]);
    assert!(!argv.iter().any(|a| a == IDLE_SHELL));
}

#[test]
fn prior_position_replaces_leading_token() {
    let id = identity();
    let prior = PositionToken::new("mintty -o X=100 -o Y=200");
    let req = request(Path::new("/t"), Some(&prior), &[], &id);
    let line = build_terminal_command_line(&req);

    assert!(line.starts_with("mintty -o X=100 -o Y=200 -i "));
    let argv = split_command_line(&line);
    assert_eq!(&argv[..5], &["mintty", "-o", "X=100", "-o", "Y=200"]);
}

#[test]
fn blank_prior_position_falls_back_to_default_token() {
    let id = identity();
    let prior = PositionToken::new("   ");
    let req = request(Path::new("/t"), Some(&prior), &[], &id);
    assert!(build_terminal_command_line(&req).starts_with("mintty -i "));
}

#[test]
fn read_report_is_bounded() {
    let long = vec![b'x'; 1000];
    let token = read_report(long.as_slice()).unwrap();
    assert_eq!(token.len() as u64, POSITION_REPORT_CAPACITY);

    let token = read_report(&b"short"[..]).unwrap();
    assert_eq!(token.as_str(), "short");
}

/// Reader whose every read fails, like a pipe torn down mid-report.
struct BrokenPipe;

impl Read for BrokenPipe {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "report stream failed"))
    }
}

#[test]
fn failed_report_read_is_a_read_report_error() {
    let err = read_report(BrokenPipe).unwrap_err();

    assert!(matches!(err, MintError::ReadReport(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
    assert_eq!(err.kind(), mint::errors::ErrorKind::User);
    assert!(err.user_message().starts_with("Failed to read position report"));
}

#[cfg(unix)]
mod handshake {
    use super::*;

    use mint::exec::launch;
    use mint_test_utils::stub::{reporting_terminal, write_stub_script};
    use tempfile::TempDir;

    #[test]
    fn stub_report_of_42_bytes_is_returned_untruncated() {
        mint_test_utils::init_tracing();
        let dir = TempDir::new().unwrap();
        let report = "mintty -o X=100 -o Y=200 -o Width=80 -o H";
        let report = format!("{report}{}", "x".repeat(42 - report.len()));
        assert_eq!(report.len(), 42);
        let terminal = reporting_terminal(dir.path(), &report).unwrap();

        let id = identity();
        let token = launch(&request(&terminal, None, &[], &id)).unwrap();

        assert_eq!(token.len(), 42);
        assert_eq!(token.as_str(), report);
    }

    #[test]
    fn terminal_receives_the_constructed_arguments() {
        let dir = TempDir::new().unwrap();
        let log = dir.path().join("argv.txt");
        let body = format!(
            "printf '%s\\n' \"$0\" > '{log}'\nfor a in \"$@\"; do printf '%s\\n' \"$a\" >> '{log}'; done\nprintf 'pos'",
            log = log.display()
        );
        let terminal = write_stub_script(dir.path(), "mintty", &body).unwrap();

        let id = identity();
        let command = vec!["echo".to_string(), "hi there".to_string()];
        let token = launch(&request(&terminal, None, &command, &id)).unwrap();
        assert_eq!(token.as_str(), "pos");

        let recorded = std::fs::read_to_string(&log).unwrap();
        let lines: Vec<&str> = recorded.lines().collect();
        // $0 of a script is its path, not argv[0]; the arguments follow.
        assert_eq!(lines[1], "-i");
        assert_eq!(lines[lines.len() - 2], "echo");
        assert_eq!(lines[lines.len() - 1], "hi there");
    }

    #[test]
    fn silent_terminal_yields_empty_token() {
        let dir = TempDir::new().unwrap();
        let terminal = write_stub_script(dir.path(), "mintty", "exit 0").unwrap();

        let id = identity();
        let token = launch(&request(&terminal, None, &[], &id)).unwrap();
        assert!(token.is_empty());
    }

    #[test]
    fn missing_terminal_is_a_spawn_error() {
        let dir = TempDir::new().unwrap();
        let terminal = dir.path().join("does-not-exist");

        let id = identity();
        let err = launch(&request(&terminal, None, &[], &id)).unwrap_err();
        match err {
            MintError::Spawn { path, .. } => assert_eq!(path, terminal),
            other => panic!("expected spawn error, got {other:?}"),
        }
    }
}
