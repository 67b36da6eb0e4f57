#![allow(dead_code)]

use std::cell::RefCell;

use mint::config::{Document, Section, Table};
use mint::notify::Notifier;

/// Builder for `Document` to simplify test setup.
pub struct DocumentBuilder {
    document: Document,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self {
            document: Document::new(),
        }
    }

    pub fn with_section(mut self, name: &str, entries: &[(&str, &str)]) -> Self {
        let mut table = Table::new();
        for (key, value) in entries {
            table.insert(*key, *value);
        }
        self.document.push_section(Section {
            name: name.to_string(),
            table,
        });
        self
    }

    pub fn with_paths(self, terminal: &str, icon: &str, position: &str) -> Self {
        self.with_section(
            "path",
            &[("terminal", terminal), ("icon", icon), ("position", position)],
        )
    }

    pub fn build(self) -> Document {
        self.document
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Notifier that keeps every message for later assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
