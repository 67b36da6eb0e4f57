// src/position.rs

//! Persistence of the terminal's last window position.
//!
//! The terminal describes its own geometry as a short string (for mintty,
//! something like `mintty -o X=100 -o Y=200`). mint never looks inside it;
//! it is stored verbatim and handed back as the leading part of the next
//! command line.

use std::fmt;
use std::path::Path;

use tracing::{debug, warn};

use crate::errors::{MintError, Result};
use crate::fs::FileSystem;

/// Opaque position report produced by the terminal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PositionToken(String);

impl PositionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PositionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read the first line of the position file.
///
/// A missing or empty file yields `None`. An unreadable file is logged and
/// also treated as absent: the terminal then simply opens at its default
/// position.
pub fn load(fs: &dyn FileSystem, path: &Path) -> Option<PositionToken> {
    if !fs.exists(path) {
        debug!(path = %path.display(), "no saved position");
        return None;
    }

    let bytes = match fs.read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unreadable position file");
            return None;
        }
    };

    let text = String::from_utf8_lossy(&bytes);
    let first = text.lines().next().unwrap_or("");
    if first.is_empty() {
        return None;
    }
    Some(PositionToken::new(first))
}

/// Overwrite the position file with exactly the token's text.
pub fn save(fs: &dyn FileSystem, path: &Path, token: &PositionToken) -> Result<()> {
    fs.write(path, token.as_str().as_bytes())
        .map_err(|source| MintError::PositionSave {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), len = token.len(), "position saved");
    Ok(())
}
