//! Writes the mapping buffer to the upgrade settings file.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::mapping::MappingBuffer;

/// Write `buffer` to `path`, minus its final line separator.
///
/// Returns `false` without touching the filesystem when the buffer is blank.
/// I/O failures are logged and reported as `false`. The parent directory
/// must already exist.
pub fn write_artifact(path: &Path, buffer: &MappingBuffer) -> bool {
    if buffer.is_blank() {
        tracing::info!(path = %path.display(), "mapping buffer is empty, settings file not written");
        return false;
    }

    let contents = remove_last_occurrence(buffer.as_str(), "\n");
    match write_contents(path, &contents) {
        Ok(()) => {
            tracing::info!(
                path = %path.display(),
                bytes = contents.len(),
                entries = buffer.len(),
                "wrote order entry upgrade settings file"
            );
            true
        }
        Err(e) => {
            tracing::error!(
                path = %path.display(),
                error = %e,
                "failed to write order entry upgrade settings file"
            );
            false
        }
    }
}

fn write_contents(path: &Path, contents: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;
    file.flush()
}

/// Remove the single character at the index of the last occurrence of
/// `pattern`. For a multi-character pattern only its first character goes.
/// Returns `text` unchanged when `pattern` does not occur.
pub fn remove_last_occurrence(text: &str, pattern: &str) -> String {
    let mut out = text.to_string();
    if let Some(idx) = text.rfind(pattern) {
        if let Some(ch) = text[idx..].chars().next() {
            out.replace_range(idx..idx + ch.len_utf8(), "");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_with(lines: &[(&str, i64)]) -> MappingBuffer {
        let mut buffer = MappingBuffer::new();
        for (text, code) in lines {
            buffer.append(text, Some(*code));
        }
        buffer
    }

    #[test]
    fn removes_only_the_final_newline() {
        assert_eq!(remove_last_occurrence("a=1\nb=2\n", "\n"), "a=1\nb=2");
    }

    #[test]
    fn removes_last_newline_even_when_not_final_char() {
        assert_eq!(remove_last_occurrence("a=1\nb=2", "\n"), "a=1b=2");
    }

    #[test]
    fn multi_char_pattern_loses_only_its_first_char() {
        assert_eq!(remove_last_occurrence("a=1\r\nb=2\r\n", "\r\n"), "a=1\r\nb=2\n");
    }

    #[test]
    fn missing_pattern_leaves_text_unchanged() {
        assert_eq!(remove_last_occurrence("a=1", "\n"), "a=1");
        assert_eq!(remove_last_occurrence("", "\n"), "");
    }

    #[test]
    fn writes_lines_without_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.txt");
        let buffer = buffer_with(&[("Once daily", 10), ("Twice daily", 11)]);

        assert!(write_artifact(&path, &buffer));
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "Once\\ daily=10\nTwice\\ daily=11");
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.txt");
        std::fs::write(&path, "stale content that is much longer than the new one").unwrap();

        assert!(write_artifact(&path, &buffer_with(&[("mg", 1)])));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "mg=1");
    }

    #[test]
    fn blank_buffer_is_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.txt");

        assert!(!write_artifact(&path, &MappingBuffer::new()));
        assert!(!path.exists());
    }

    #[test]
    fn missing_parent_directory_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("settings.txt");

        assert!(!write_artifact(&path, &buffer_with(&[("mg", 1)])));
        assert!(!path.exists());
    }
}
