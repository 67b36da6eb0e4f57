// src/config/document.rs

//! In-memory model of a parsed INI document.
//!
//! Section names and keys are looked up ignoring ASCII case while the text
//! as written is kept for display. Both tables keep insertion order: a key
//! stays at the position of its first occurrence and the last value wins.

use std::collections::HashMap;
use std::fmt;

/// Byte-order mark; skipped once at the start of the input.
pub const BOM: &str = "\u{feff}";

/// Lookup form of a section name or key.
fn fold(s: &str) -> String {
    s.to_ascii_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

/// Key/value table of one section.
#[derive(Debug, Clone, Default)]
pub struct Table {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `key`. An existing key keeps its position and
    /// its original spelling.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.index.get(&fold(&key)) {
            Some(&i) => self.entries[i].value = value,
            None => {
                self.index.insert(fold(&key), self.entries.len());
                self.entries.push(Entry { key, value });
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(&fold(key))
            .map(|&i| self.entries[i].value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|e| (e.key.as_str(), e.value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for Table {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|e| other.get(&e.key) == Some(e.value.as_str()))
    }
}

impl Eq for Table {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub table: Table,
}

/// Ordered sequence of sections.
#[derive(Debug, Clone, Default)]
pub struct Document {
    sections: Vec<Section>,
    index: HashMap<String, usize>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a finished section.
    ///
    /// A section whose name is already present is merged into the earlier
    /// one key by key, later values overriding earlier ones.
    pub fn push_section(&mut self, section: Section) {
        match self.index.get(&fold(&section.name)) {
            Some(&i) => {
                let target = &mut self.sections[i].table;
                for entry in section.table.entries {
                    target.insert(entry.key, entry.value);
                }
            }
            None => {
                self.index.insert(fold(&section.name), self.sections.len());
                self.sections.push(section);
            }
        }
    }

    pub fn section(&self, name: &str) -> Option<&Table> {
        self.index.get(&fold(name)).map(|&i| &self.sections[i].table)
    }

    /// `section.key` lookup.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|t| t.get(key))
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .sections
                .iter()
                .all(|s| other.section(&s.name) == Some(&s.table))
    }
}

impl Eq for Document {}

/// Renders the document back to INI text. Comments are not kept.
///
/// Entries of the implicit global section (empty name) are written first
/// without a header. An empty global section is written as `[]`, which
/// parses back to the same empty section. If the first global key starts
/// with a byte-order mark, a mark is written in front of it so the one the
/// parser drops from the start of the input is not the key's own.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (global, named): (Vec<&Section>, Vec<&Section>) =
            self.sections.iter().partition(|s| s.name.is_empty());

        for section in global {
            if section.table.is_empty() {
                writeln!(f, "[]")?;
                continue;
            }
            let mut keys = section.table.iter().peekable();
            if keys.peek().is_some_and(|(key, _)| key.starts_with(BOM)) {
                f.write_str(BOM)?;
            }
            for (key, value) in keys {
                writeln!(f, "{key}={value}")?;
            }
        }
        for section in named {
            writeln!(f, "[{}]", section.name)?;
            for (key, value) in section.table.iter() {
                writeln!(f, "{key}={value}")?;
            }
        }
        Ok(())
    }
}
