// src/config/parser.rs

//! Hand-rolled INI parser.
//!
//! Input is consumed as logical lines: bytes are accumulated until a `\n`
//! terminator (or end of input), however many buffer refills that takes.
//! Each logical line is then classified, in order, as:
//!
//! 1. blank or comment (`;` / `#` after optional whitespace) - ignored
//! 2. section header `[name]` - closes the current section, opens a new one
//! 3. `key=value`, split at the first `=` - both sides trimmed
//! 4. anything else - [`ParseError`]
//!
//! There is no quoting or escape syntax; values are taken literally.

use std::io::{self, BufRead};
use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::config::document::{BOM, Document, Section, Table};
use crate::errors::{MintError, ParseError, Result};

static BLANK_OR_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:[;#].*)?$").expect("valid comment regex"));

static SECTION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\[([^\]]*)\]\s*$").expect("valid section regex"));

static KEY_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^=]*)=(.*)$").expect("valid key/value regex"));

/// Classification of a single logical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    Ignored,
    Header(&'a str),
    KeyValue(&'a str, &'a str),
}

/// Classify one logical line (without its terminator).
pub fn classify(line: &str) -> Option<Line<'_>> {
    if BLANK_OR_COMMENT.is_match(line) {
        return Some(Line::Ignored);
    }
    if let Some(caps) = SECTION_HEADER.captures(line) {
        let name = caps.get(1).map_or("", |m| m.as_str());
        return Some(Line::Header(name.trim()));
    }
    if let Some(caps) = KEY_VALUE.captures(line) {
        let key = caps.get(1).map_or("", |m| m.as_str());
        let value = caps.get(2).map_or("", |m| m.as_str());
        return Some(Line::KeyValue(key.trim(), value.trim()));
    }
    None
}

/// Iterator over logical lines of a reader.
///
/// Terminators (`\n`, and a `\r` right before it) are stripped. A final
/// line without a terminator is still yielded once. A byte-order mark at
/// the very start of the input is dropped.
pub struct LogicalLines<R> {
    reader: R,
    buf: Vec<u8>,
    at_start: bool,
}

impl<R: BufRead> LogicalLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            at_start: true,
        }
    }
}

impl<R: BufRead> Iterator for LogicalLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        // `read_until` keeps extending `buf` across refills of the reader's
        // internal buffer, so long lines are never split.
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if std::mem::take(&mut self.at_start) && self.buf.starts_with(BOM.as_bytes()) {
                    self.buf.drain(..BOM.len());
                }
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

/// Parse INI text from a buffered reader.
///
/// I/O failures while reading surface as [`MintError::Internal`]; callers
/// that read from a named file wrap them with the path.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Document> {
    let mut document = Document::new();
    let mut current: Option<Section> = None;

    for (idx, line) in LogicalLines::new(reader).enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| MintError::Internal(e.into()))?;

        match classify(&line) {
            Some(Line::Ignored) => {}
            Some(Line::Header(name)) => {
                trace!(line = line_no, section = name, "section header");
                if let Some(done) = current.take() {
                    document.push_section(done);
                }
                current = Some(Section {
                    name: name.to_string(),
                    table: Table::new(),
                });
            }
            Some(Line::KeyValue(key, value)) => {
                let section = current.get_or_insert_with(|| Section {
                    name: String::new(),
                    table: Table::new(),
                });
                section.table.insert(key, value);
            }
            None => {
                return Err(ParseError {
                    line: line_no,
                    content: line.clone(),
                }
                .into());
            }
        }
    }

    if let Some(done) = current.take() {
        document.push_section(done);
    }
    Ok(document)
}

/// Parse INI text held in memory.
pub fn parse_str(text: &str) -> Result<Document> {
    parse_reader(text.as_bytes())
}
