//! Hover details for the key under the cursor.

use crate::core::{FlatIndex, TranslationEntry, TriggerPattern};

/// Minimum width of the key header, in characters.
const MIN_HEADER_WIDTH: usize = 60;

const NO_CONTEXT: &str = "_No comment provided._";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hover {
    pub key: String,
    /// The stored entry, or `None` when the key has no translation yet.
    pub entry: Option<TranslationEntry>,
}

impl Hover {
    /// Label of the edit action offered with the hover.
    pub fn action_label(&self) -> &'static str {
        if self.entry.is_some() {
            "Edit Translation"
        } else {
            "Add Translation"
        }
    }

    /// Render as Markdown: the key, a value/context table, and the action.
    pub fn to_markdown(&self) -> String {
        let padding = MIN_HEADER_WIDTH.saturating_sub(self.key.chars().count());
        let mut out = format!("`{}`{}\n\n", self.key, "&nbsp;".repeat(padding));

        match &self.entry {
            Some(entry) => {
                out.push_str("| | |\n|:---|:---|\n");
                out.push_str(&format!("| **Value** | {} |\n", escape_cell(&entry.value)));
                out.push_str(&format!(
                    "| **Context** | {} |\n",
                    entry
                        .context
                        .as_deref()
                        .map(escape_cell)
                        .unwrap_or_else(|| NO_CONTEXT.to_string())
                ));
            }
            None => out.push_str("No translation found for this key.\n"),
        }

        out.push_str(&format!("\n---\n{}\n", self.action_label()));
        out
    }
}

/// Build the hover for a 0-based `line` and character `column`.
pub fn hover_at(
    text: &str,
    line: usize,
    column: usize,
    pattern: &TriggerPattern,
    index: &FlatIndex,
) -> Option<Hover> {
    let key = pattern.key_at(text, line, column)?;
    let entry = index.get(&key).cloned();
    Some(Hover { key, entry })
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', "<br>")
}
