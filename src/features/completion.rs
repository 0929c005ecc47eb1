//! Key completion inside trigger calls.

use crate::core::{FlatIndex, TriggerPattern};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionItem {
    pub label: String,
    pub detail: String,
    pub documentation: String,
}

/// Offer every key when `line_prefix` ends inside an opened key literal.
///
/// Items follow the index order.
pub fn completions(
    line_prefix: &str,
    pattern: &TriggerPattern,
    index: &FlatIndex,
) -> Vec<CompletionItem> {
    if !pattern.is_completion_context(line_prefix) {
        return Vec::new();
    }

    index
        .iter()
        .map(|(key, entry)| CompletionItem {
            label: key.to_string(),
            detail: "Transl8 Key".to_string(),
            documentation: format!("**Translation:** `{}`", entry.value),
        })
        .collect()
}
