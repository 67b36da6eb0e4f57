// src/config/mod.rs

//! Configuration loading for mint.
//!
//! Responsibilities:
//! - Parse INI text into a case-insensitive document (`parser.rs`,
//!   `document.rs`).
//! - Locate and read the configuration file (`loader.rs`).
//! - Resolve paths and the environment list with defaults (`resolve.rs`).

pub mod document;
pub mod loader;
pub mod parser;
pub mod resolve;

pub use document::{Document, Entry, Section, Table};
pub use loader::{config_path, load_document};
pub use parser::{parse_reader, parse_str};
pub use resolve::ResolvedConfig;
