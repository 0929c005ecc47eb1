//! Quick fixes for missing-key diagnostics.

use std::path::{Path, PathBuf};

use crate::features::MissingKeyDiagnostic;

/// An "add translation" action for one missing key.
///
/// The host collects the value from the user and then calls the edit entry
/// point with `key` and `resource`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickFix {
    pub title: String,
    pub key: String,
    pub resource: PathBuf,
    pub is_preferred: bool,
}

/// Quick fixes for the diagnostics under a 0-based position.
pub fn quick_fixes_at(
    diagnostics: &[MissingKeyDiagnostic],
    resource: &Path,
    line: usize,
    column: usize,
) -> Vec<QuickFix> {
    diagnostics
        .iter()
        .filter(|diagnostic| diagnostic.contains(line, column))
        .map(|diagnostic| QuickFix {
            title: "Add Translation...".to_string(),
            key: diagnostic.key().to_string(),
            resource: resource.to_path_buf(),
            is_preferred: true,
        })
        .collect()
}
