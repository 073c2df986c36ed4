//! Python source emission helpers.
//!
//! [`PythonFile`] is a line buffer that tracks the current block depth so the
//! renderers never hand-count spaces. Indentation is always four spaces.

use std::path::Path;

use crate::error::{GenerateError, Result};

/// Spaces per indentation level.
pub const INDENT: &str = "    ";

/// Import block every fixture starts with. Covers every name used by the
/// standard type-hint vocabulary.
pub const PREAMBLE: &[&str] = &[
    "from __future__ import annotations",
    "",
    "import random",
    "from pathlib import Path",
    "from typing import Any",
    "from datetime import datetime",
    "from uuid import UUID",
];

/// Accumulates the lines of one Python module.
#[derive(Debug, Default)]
pub struct PythonFile {
    buf: String,
    depth: usize,
}

impl PythonFile {
    /// Creates an empty file at block depth zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one line at the current depth. An empty line carries no
    /// trailing whitespace.
    pub fn line(&mut self, text: &str) {
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.buf.push_str(INDENT);
            }
            self.buf.push_str(text);
        }
        self.buf.push('\n');
    }

    /// Appends an empty line.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Opens a nested block.
    pub fn indent(&mut self) {
        self.depth += 1;
    }

    /// Closes the innermost block.
    pub fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Appends a triple-quoted docstring.
    ///
    /// The first entry is the summary and shares a line with the opening
    /// quotes; the closing quotes get a line of their own.
    pub fn docstring<S: AsRef<str>>(&mut self, lines: &[S]) {
        let mut iter = lines.iter();
        let summary = iter.next().map(AsRef::as_ref).unwrap_or_default();
        self.line(&format!("\"\"\"{summary}"));
        for text in iter {
            self.line(text.as_ref());
        }
        self.line("\"\"\"");
    }

    /// Returns the rendered text.
    #[must_use]
    pub fn finish(self) -> String {
        self.buf
    }
}

/// Emits the fixed import block followed by a blank line.
pub fn preamble(f: &mut PythonFile) {
    for import in PREAMBLE {
        f.line(import);
    }
    f.blank();
}

/// Counts the lines of rendered text.
#[must_use]
pub fn line_count(text: &str) -> usize {
    text.lines().count()
}

/// Writes `content` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`GenerateError::Io`] if the directory or file cannot be written.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| GenerateError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, content).map_err(|source| GenerateError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_lines_are_indented() {
        let mut f = PythonFile::new();
        f.line("class A:");
        f.indent();
        f.line("pass");
        f.blank();
        f.dedent();
        f.line("x = 1");
        assert_eq!(f.finish(), "class A:\n    pass\n\nx = 1\n");
    }

    #[test]
    fn docstring_layout() {
        let mut f = PythonFile::new();
        f.indent();
        f.docstring(&["Summary.", "", "Details."]);
        assert_eq!(f.finish(), "    \"\"\"Summary.\n\n    Details.\n    \"\"\"\n");
    }

    #[test]
    fn dedent_saturates() {
        let mut f = PythonFile::new();
        f.dedent();
        f.line("x");
        assert_eq!(f.finish(), "x\n");
    }
}
