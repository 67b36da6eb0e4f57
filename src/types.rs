// src/types.rs

use crate::position::PositionToken;

pub const EXIT_SUCCESS: i32 = 0;
/// User errors and internal errors.
pub const EXIT_FAILURE: i32 = 1;
/// The user declined the elevation prompt.
pub const EXIT_ELEVATION_DECLINED: i32 = 3;

/// How a run ended when no error was raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The terminal ran and reported this position, which was saved.
    Launched(PositionToken),
    /// `--dry-run`: configuration printed, nothing started.
    DryRun,
    /// An elevated copy of mint ran and exited with this code.
    Relaunched(i32),
    /// The user declined the elevation prompt.
    ElevationDeclined,
}

impl RunOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::Launched(_) | RunOutcome::DryRun => EXIT_SUCCESS,
            RunOutcome::Relaunched(code) => *code,
            RunOutcome::ElevationDeclined => EXIT_ELEVATION_DECLINED,
        }
    }
}
