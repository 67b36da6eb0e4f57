#![cfg(unix)]

use std::path::Path;

use mint::errors::ErrorKind;
use mint::exec::elevate::{DEFAULT_ELEVATE_PROGRAM, ElevationOutcome, Elevator, is_elevated};
use mint_test_utils::stub::recording_stub;
use tempfile::TempDir;

#[test]
fn privilege_query_matches_effective_uid() {
    let elevated = is_elevated().unwrap();
    assert_eq!(elevated, nix::unistd::geteuid().is_root());
}

#[test]
fn default_helper_is_pkexec() {
    assert_eq!(Elevator::default().program(), Path::new(DEFAULT_ELEVATE_PROGRAM));
}

#[test]
fn relaunch_passes_exe_and_original_arguments() {
    let dir = TempDir::new().unwrap();
    let helper = recording_stub(dir.path(), "helper", 0).unwrap();
    let args: Vec<String> = ["-r", "--config", "my conf.ini", "echo", r#"say "hi"\"#]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let outcome = Elevator::new(&helper)
        .relaunch(Path::new("/opt/msys64/mint"), &args)
        .unwrap();
    assert_eq!(outcome, ElevationOutcome::Exited(0));

    let recorded = std::fs::read_to_string(dir.path().join("args.txt")).unwrap();
    let mut expected = vec!["/opt/msys64/mint".to_string()];
    expected.extend(args);
    assert_eq!(recorded.lines().collect::<Vec<_>>(), expected);
}

#[test]
fn elevated_exit_code_is_propagated() {
    let dir = TempDir::new().unwrap();
    let helper = recording_stub(dir.path(), "helper", 7).unwrap();

    let outcome = Elevator::new(&helper)
        .relaunch(Path::new("/opt/msys64/mint"), &[])
        .unwrap();
    assert_eq!(outcome, ElevationOutcome::Exited(7));
}

#[test]
fn dismissed_prompt_is_declined() {
    for code in [126, 127] {
        let dir = TempDir::new().unwrap();
        let helper = recording_stub(dir.path(), "helper", code).unwrap();

        let outcome = Elevator::new(&helper)
            .relaunch(Path::new("/opt/msys64/mint"), &[])
            .unwrap();
        assert_eq!(outcome, ElevationOutcome::Declined);
    }
}

#[test]
fn missing_helper_is_an_internal_error() {
    let dir = TempDir::new().unwrap();
    let err = Elevator::new(dir.path().join("no-such-helper"))
        .relaunch(Path::new("/opt/msys64/mint"), &[])
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Internal);
    assert_eq!(err.user_message(), "Unexpected error occurred");
}
