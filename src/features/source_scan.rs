//! Walking a source tree for trigger calls.
//!
//! Hidden directories and common dependency/output directories are skipped.
//! Files are visited in file-name order so reports are stable.

use std::{
    fs,
    path::{Path, PathBuf},
};

use walkdir::{DirEntry, WalkDir};

use crate::core::{FlatIndex, LineIndex, TriggerPattern};
use crate::features::{MissingKeyDiagnostic, is_supported_source, missing_keys};

const SKIPPED_DIRS: &[&str] = &["node_modules", "target", "dist", "build"];

/// Result of scanning a source tree.
#[derive(Debug)]
pub struct SourceScan<T> {
    pub files_checked: usize,
    /// Paths that could not be walked or read.
    pub skipped_count: usize,
    pub items: Vec<T>,
}

impl<T> Default for SourceScan<T> {
    fn default() -> Self {
        Self {
            files_checked: 0,
            skipped_count: 0,
            items: Vec::new(),
        }
    }
}

/// A missing key found in one source file.
#[derive(Debug, Clone)]
pub struct FileDiagnostic {
    pub path: PathBuf,
    pub source_line: String,
    pub diagnostic: MissingKeyDiagnostic,
}

/// One usage of a key in a source file. Positions are 0-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUsage {
    pub path: PathBuf,
    pub line: usize,
    pub column: usize,
    pub source_line: String,
}

/// Supported source files under `root`, and the number of unreadable entries.
pub fn source_files(root: &Path) -> (Vec<PathBuf>, usize) {
    let mut files = Vec::new();
    let mut skipped_count = 0;

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                log::warn!("Cannot access path: {}", e);
                continue;
            }
        };
        if entry.file_type().is_file() && is_supported_source(entry.path()) {
            files.push(entry.into_path());
        }
    }

    (files, skipped_count)
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.') || SKIPPED_DIRS.contains(&name))
}

/// Every missing key under `root`.
pub fn scan_missing(
    root: &Path,
    pattern: &TriggerPattern,
    index: &FlatIndex,
) -> SourceScan<FileDiagnostic> {
    scan_sources(root, |path, text| {
        let lines = LineIndex::new(text);
        missing_keys(text, pattern, index)
            .into_iter()
            .map(|diagnostic| FileDiagnostic {
                path: path.to_path_buf(),
                source_line: lines.line_text(diagnostic.line).unwrap_or("").to_string(),
                diagnostic,
            })
            .collect()
    })
}

/// Every usage of `key` under `root`.
pub fn scan_usages(root: &Path, pattern: &TriggerPattern, key: &str) -> SourceScan<FileUsage> {
    scan_sources(root, |path, text| {
        let lines = LineIndex::new(text);
        pattern
            .find_occurrences(text)
            .into_iter()
            .filter(|occurrence| occurrence.key == key)
            .map(|occurrence| {
                let (line, column) = lines.position(occurrence.start);
                FileUsage {
                    path: path.to_path_buf(),
                    line,
                    column,
                    source_line: lines.line_text(line).unwrap_or("").to_string(),
                }
            })
            .collect()
    })
}

fn scan_sources<T, F>(root: &Path, mut visit: F) -> SourceScan<T>
where
    F: FnMut(&Path, &str) -> Vec<T>,
{
    let (files, mut skipped_count) = source_files(root);
    let mut items = Vec::new();
    let mut files_checked = 0;

    for path in &files {
        match fs::read_to_string(path) {
            Ok(text) => {
                files_checked += 1;
                items.extend(visit(path, &text));
            }
            Err(e) => {
                skipped_count += 1;
                log::warn!("Failed to read {}: {}", path.display(), e);
            }
        }
    }

    SourceScan {
        files_checked,
        skipped_count,
        items,
    }
}
