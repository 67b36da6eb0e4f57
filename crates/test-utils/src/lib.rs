pub mod builders;
pub mod stub;

use std::sync::{Mutex, MutexGuard, Once};
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Serialise tests that read or write the process environment.
///
/// Hold the guard for the whole test. A panic in another holder does not
/// poison the lock for the rest.
pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // print only for failing tests unless --nocapture
            .with_target(true)
            .init();
    });
}
