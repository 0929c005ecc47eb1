//! Missing-key diagnostics for source files.

use std::path::Path;

use crate::core::{FlatIndex, LineIndex, TriggerPattern, UsageOccurrence};

/// Diagnostic code shared with quick fixes.
pub const NO_TRANSLATION_CODE: &str = "no-translation";

/// Extensions of the JavaScript, TypeScript and Vue files that are checked.
pub const SUPPORTED_EXTENSIONS: &[&str] =
    &["js", "jsx", "mjs", "cjs", "ts", "tsx", "mts", "cts", "vue"];

/// Missing keys are always reported as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A key used in source text but absent from the translation file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKeyDiagnostic {
    pub occurrence: UsageOccurrence,
    /// 0-based line of the key.
    pub line: usize,
    /// 0-based character columns of the key, end exclusive.
    pub start_column: usize,
    pub end_column: usize,
    pub severity: Severity,
}

impl MissingKeyDiagnostic {
    pub fn key(&self) -> &str {
        &self.occurrence.key
    }

    pub fn code(&self) -> &'static str {
        NO_TRANSLATION_CODE
    }

    pub fn message(&self) -> String {
        format!("No translation found for key: \"{}\"", self.occurrence.key)
    }

    /// True if the 0-based position falls on the key or right after it.
    pub fn contains(&self, line: usize, column: usize) -> bool {
        self.line == line && (self.start_column..=self.end_column).contains(&column)
    }
}

pub fn is_supported_source(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
}

/// Report every usage in `text` whose key is not in `index`.
pub fn missing_keys(
    text: &str,
    pattern: &TriggerPattern,
    index: &FlatIndex,
) -> Vec<MissingKeyDiagnostic> {
    let lines = LineIndex::new(text);

    pattern
        .find_occurrences(text)
        .into_iter()
        .filter(|occurrence| !index.contains_key(&occurrence.key))
        .map(|occurrence| {
            let (line, start_column) = lines.position(occurrence.start);
            let (_, end_column) = lines.position(occurrence.end);
            MissingKeyDiagnostic {
                occurrence,
                line,
                start_column,
                end_column,
                severity: Severity::Error,
            }
        })
        .collect()
}
