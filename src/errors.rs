// src/errors.rs

//! Crate-wide error type.
//!
//! Every step returns a [`MintError`]; only the outermost boundary
//! (`crate::report`) turns one into a message for the user. Variants are
//! split into two kinds:
//!
//! - [`ErrorKind::User`]: something the user can act on (bad config line,
//!   missing terminal binary, unwritable position file, ...).
//! - [`ErrorKind::Internal`]: platform calls that should not fail. These
//!   are rendered as a generic message and only logged in detail.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A configuration line that matched none of the known line shapes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: unrecognized line {content:?}")]
pub struct ParseError {
    /// 1-based logical line number.
    pub line: usize,
    pub content: String,
}

#[derive(Error, Debug)]
pub enum MintError {
    #[error("Failed to read configuration: {0}")]
    Parse(#[from] ParseError),

    #[error("Failed to read configuration {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to set environment variable {name:?}: {reason}")]
    EnvVar { name: String, reason: String },

    #[error("Failed to create pipe: {0}")]
    Pipe(#[source] io::Error),

    #[error("Failed to create process {path:?}: {source}")]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read position report: {0}")]
    ReadReport(#[source] io::Error),

    #[error("Position not saved to {path:?}: {source}")]
    PositionSave {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// How an error is presented at the top level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    User,
    Internal,
}

impl MintError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MintError::Internal(_) => ErrorKind::Internal,
            _ => ErrorKind::User,
        }
    }

    /// The text shown to the user.
    pub fn user_message(&self) -> String {
        match self.kind() {
            ErrorKind::User => self.to_string(),
            ErrorKind::Internal => "Unexpected error occurred".to_string(),
        }
    }

    /// True when the primary effect of the run (starting the terminal)
    /// already happened before this error was raised.
    pub fn after_launch(&self) -> bool {
        matches!(self, MintError::PositionSave { .. })
    }
}

pub type Result<T> = std::result::Result<T, MintError>;
