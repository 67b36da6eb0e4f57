// src/notify.rs

//! User-facing notification channel.

/// Where messages for the user go. Called at most once per run.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Writes `mint: MESSAGE` to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str) {
        eprintln!("mint: {message}");
    }
}
