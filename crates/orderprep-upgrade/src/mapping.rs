//! Accumulates `text=code` lines for the upgrade settings file.

use crate::dedup::is_blank;

/// Newline-terminated `escaped_text=code` lines, in append order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingBuffer {
    contents: String,
    entries: usize,
}

impl MappingBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line for `text` mapped to `code` and return the contents.
    ///
    /// Blank text or a missing code leaves the buffer unchanged.
    pub fn append(&mut self, text: &str, code: Option<i64>) -> &str {
        if let (false, Some(code)) = (is_blank(text), code) {
            self.contents.push_str(&escape_text(text));
            self.contents.push('=');
            self.contents.push_str(&code.to_string());
            self.contents.push('\n');
            self.entries += 1;
        }
        &self.contents
    }

    pub fn as_str(&self) -> &str {
        &self.contents
    }

    /// Number of lines appended.
    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// True when the contents are empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        is_blank(&self.contents)
    }
}

/// Escape every space as `\ `. Other characters pass through.
pub fn escape_text(text: &str) -> String {
    text.replace(' ', "\\ ")
}
