//! Translation entries and the flat key index.
//!
//! A translation file stores every leaf as a one- or two-element array:
//! `["Save"]` or `["Save", "Button label in the editor toolbar"]`.
//! In memory that becomes a [`TranslationEntry`] with an explicitly optional
//! context, so that "no context" and "empty context" stay distinguishable.

use std::collections::HashMap;

use serde_json::Value;

// ============================================================
// Translation Entry
// ============================================================

/// A single translation value with its optional context note.
///
/// Entries are replaced wholesale on edit, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TranslationEntry {
    pub value: String,
    pub context: Option<String>,
}

impl TranslationEntry {
    /// Create an entry, keeping `context` exactly as given.
    pub fn new(value: impl Into<String>, context: Option<String>) -> Self {
        Self {
            value: value.into(),
            context,
        }
    }

    /// Create an entry from user input, treating an empty context as absent.
    pub fn from_input(value: impl Into<String>, context: Option<String>) -> Self {
        Self {
            value: value.into(),
            context: context.filter(|c| !c.is_empty()),
        }
    }

    /// Read a leaf node of the translation document.
    ///
    /// Accepts `[value]`, `[value, context]` and `[value, null]`. Anything else
    /// is not a translation leaf and yields `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        let items = value.as_array()?;
        match items.as_slice() {
            [Value::String(value)] | [Value::String(value), Value::Null] => {
                Some(Self::new(value.clone(), None))
            }
            [Value::String(value), Value::String(context)] => {
                Some(Self::new(value.clone(), Some(context.clone())))
            }
            _ => None,
        }
    }

    /// Serialize as a leaf node: `[value]` when there is no context.
    pub fn to_json(&self) -> Value {
        match &self.context {
            Some(context) => Value::Array(vec![
                Value::String(self.value.clone()),
                Value::String(context.clone()),
            ]),
            None => Value::Array(vec![Value::String(self.value.clone())]),
        }
    }
}

// ============================================================
// Flat Index
// ============================================================

/// Ordered mapping from dot-notation key to entry.
///
/// Iteration follows insertion order, which for a flattened document is the
/// depth-first property order of the file. Re-inserting an existing key
/// replaces its entry but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatIndex {
    entries: Vec<(String, TranslationEntry)>,
    positions: HashMap<String, usize>,
}

impl FlatIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the previous entry for the key if any.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        entry: TranslationEntry,
    ) -> Option<TranslationEntry> {
        let key = key.into();
        match self.positions.get(&key) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, entry)),
            None => {
                self.positions.insert(key.clone(), self.entries.len());
                self.entries.push((key, entry));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&TranslationEntry> {
        self.positions.get(key).map(|&pos| &self.entries[pos].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TranslationEntry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }
}

impl<K: Into<String>> FromIterator<(K, TranslationEntry)> for FlatIndex {
    fn from_iter<I: IntoIterator<Item = (K, TranslationEntry)>>(iter: I) -> Self {
        let mut index = FlatIndex::new();
        for (key, entry) in iter {
            index.insert(key, entry);
        }
        index
    }
}
