// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`cmdline`] quotes argument vectors into a single command line and
//!   splits it back; every child is started from such a line.
//! - [`launcher`] starts the terminal and runs the position handshake.
//! - [`elevate`] checks privileges and re-runs mint under an elevation
//!   helper.

pub mod cmdline;
pub mod elevate;
pub mod launcher;

pub use cmdline::{build_command_line, quote_arg, split_command_line};
pub use elevate::{ElevationOutcome, Elevator, is_elevated};
pub use launcher::{AppIdentity, LaunchRequest, launch};
