//! Flattening of the nested translation document into a [`FlatIndex`].

use serde_json::Value;

use crate::core::{FlatIndex, TranslationEntry, key_path};

/// Walk the document depth-first and collect every translation leaf.
///
/// Objects are recursed into, well-formed `[value, context?]` arrays become
/// entries, and any other shape is skipped. A non-object root yields an
/// empty index.
pub fn flatten(document: &Value) -> FlatIndex {
    let mut index = FlatIndex::new();
    flatten_into(document, None, &mut index);
    index
}

fn flatten_into(value: &Value, prefix: Option<&str>, index: &mut FlatIndex) {
    let Value::Object(map) = value else {
        return;
    };

    for (key, child) in map {
        let path = key_path::join(prefix, key);
        match child {
            Value::Object(_) => flatten_into(child, Some(&path), index),
            _ => {
                if let Some(entry) = TranslationEntry::from_json(child) {
                    index.insert(path, entry);
                }
            }
        }
    }
}
