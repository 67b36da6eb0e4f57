#![cfg(target_os = "linux")]

// Lowers the open-file limit of the whole process, so it lives in its own
// test binary with a single test.

use std::path::Path;

use mint::errors::{ErrorKind, MintError};
use mint::exec::launcher::{AppIdentity, LaunchRequest, launch};
use nix::sys::resource::{Resource, getrlimit, setrlimit};

#[test]
fn pipe_creation_failure_is_reported_before_spawning() {
    let identity = AppIdentity::from_exe(Path::new("/opt/msys64/mint"));
    let req = LaunchRequest {
        terminal: Path::new("/bin/true"),
        icon: Path::new("/opt/msys64/msys2.ico"),
        prior_position: None,
        command: &[],
        identity: &identity,
    };

    let (soft, hard) = getrlimit(Resource::RLIMIT_NOFILE).unwrap();
    setrlimit(Resource::RLIMIT_NOFILE, 0, hard).unwrap();
    let result = launch(&req);
    setrlimit(Resource::RLIMIT_NOFILE, soft, hard).unwrap();

    let err = result.unwrap_err();
    assert!(matches!(err, MintError::Pipe(_)), "{err:?}");
    assert_eq!(err.kind(), ErrorKind::User);
    assert!(err.user_message().starts_with("Failed to create pipe"));
}
