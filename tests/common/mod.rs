//! Shared test doubles

#![allow(dead_code)]

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use cltools::infrastructure::traits::{FileService, LineIter};

/// In-memory file service counting every line handed out lazily.
#[derive(Default)]
pub struct MemoryFileService {
    files: Mutex<HashMap<PathBuf, String>>,
    line_reads: Arc<AtomicUsize>,
    writes: AtomicUsize,
    /// Lazy reads fail with `InvalidData` once this many lines were yielded
    fail_after: Option<usize>,
}

impl MemoryFileService {
    pub fn with_file(path: &str, content: &str) -> Self {
        let service = Self::default();
        service.put(path, content);
        service
    }

    pub fn failing_after(mut self, lines: usize) -> Self {
        self.fail_after = Some(lines);
        self
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn put(&self, path: &str, content: &str) {
        self.files
            .lock()
            .unwrap()
            .insert(PathBuf::from(path), content.to_string());
    }

    pub fn get(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(Path::new(path)).cloned()
    }

    pub fn line_reads(&self) -> usize {
        self.line_reads.load(Ordering::SeqCst)
    }

    fn content(&self, path: &Path) -> io::Result<String> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }
}

impl FileService for MemoryFileService {
    fn read_all_text(&self, path: &Path) -> io::Result<String> {
        self.content(path)
    }

    fn read_all_lines(&self, path: &Path) -> io::Result<Vec<String>> {
        Ok(self.content(path)?.lines().map(String::from).collect())
    }

    fn read_lines_lazily(&self, path: &Path) -> io::Result<LineIter<'_>> {
        let lines: Vec<String> = self.content(path)?.lines().map(String::from).collect();
        let counter = Arc::clone(&self.line_reads);
        let fail_after = self.fail_after;
        Ok(Box::new(lines.into_iter().enumerate().map(move |(i, line)| {
            counter.fetch_add(1, Ordering::SeqCst);
            match fail_after {
                Some(limit) if i >= limit => Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "stream did not contain valid UTF-8",
                )),
                _ => Ok(line),
            }
        })))
    }

    fn write_all_text(&self, path: &Path, content: &str) -> io::Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn write_all_lines(&self, path: &Path, lines: &[String]) -> io::Result<()> {
        let content: String = lines.iter().map(|l| format!("{l}\n")).collect();
        self.write_all_text(path, &content)
    }
}
