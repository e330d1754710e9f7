//! I/O boundary traits for testability
//!
//! Verb handlers only touch files through [`FileService`], so they can be
//! tested with in-memory or instrumented implementations.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::config::LineEnding;

/// Lazy, single-pass sequence of lines.
pub type LineIter<'a> = Box<dyn Iterator<Item = io::Result<String>> + 'a>;

/// File access abstraction. Stateless per call.
pub trait FileService: Send + Sync {
    /// Read file contents to string.
    fn read_all_text(&self, path: &Path) -> io::Result<String>;

    /// Read all lines; `\n` and `\r\n` both end a line.
    fn read_all_lines(&self, path: &Path) -> io::Result<Vec<String>>;

    /// Read lines one at a time.
    ///
    /// Nothing past the last consumed line is read, so callers may stop early.
    fn read_lines_lazily(&self, path: &Path) -> io::Result<LineIter<'_>>;

    /// Overwrite file with content.
    fn write_all_text(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Overwrite file with lines, each followed by the line terminator.
    fn write_all_lines(&self, path: &Path, lines: &[String]) -> io::Result<()>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileService {
    line_ending: LineEnding,
}

impl RealFileService {
    pub fn new(line_ending: LineEnding) -> Self {
        Self { line_ending }
    }
}

impl FileService for RealFileService {
    fn read_all_text(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn read_all_lines(&self, path: &Path) -> io::Result<Vec<String>> {
        let content = std::fs::read_to_string(path)?;
        Ok(content.lines().map(String::from).collect())
    }

    fn read_lines_lazily(&self, path: &Path) -> io::Result<LineIter<'_>> {
        let reader = BufReader::new(File::open(path)?);
        Ok(Box::new(reader.lines()))
    }

    fn write_all_text(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn write_all_lines(&self, path: &Path, lines: &[String]) -> io::Result<()> {
        let terminator = self.line_ending.as_str();
        let content: String = lines
            .iter()
            .flat_map(|line| [line.as_str(), terminator])
            .collect();
        std::fs::write(path, content)
    }
}
