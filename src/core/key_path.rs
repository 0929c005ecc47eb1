//! Dot-notation key paths over the nested translation document.
//!
//! `"nav.home"` addresses `{"nav": {"home": [...]}}`. Segments are split on
//! every `.`, so empty segments (`"a..b"`) are kept as literal empty property
//! names rather than collapsed.

use serde_json::{Map, Value};

use crate::core::TranslationEntry;

pub const SEPARATOR: char = '.';

/// Compose a child key from an optional parent path.
///
/// The root has no path at all, which is different from a path consisting of
/// one empty segment.
pub fn join(prefix: Option<&str>, segment: &str) -> String {
    match prefix {
        Some(prefix) => format!("{}{}{}", prefix, SEPARATOR, segment),
        None => segment.to_string(),
    }
}

/// Set `entry` at `key`, creating intermediate objects as needed.
///
/// Any non-object found where an intermediate object is expected (including
/// an existing leaf) is replaced by an empty object.
pub fn write(document: &mut Value, key: &str, entry: &TranslationEntry) {
    let parts: Vec<&str> = key.split(SEPARATOR).collect();
    let (last, parents) = match parts.split_last() {
        Some(split) => split,
        None => return,
    };

    let mut current = document;
    for part in parents {
        current = object_mut(current)
            .entry(part.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }

    object_mut(current).insert(last.to_string(), entry.to_json());
}

/// Find an existing key that is an ancestor or a descendant of `key`.
///
/// Returns the first conflicting key. The key itself never conflicts, so
/// re-editing an existing leaf is allowed.
pub fn find_collision<'a, I>(key: &str, existing: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    existing
        .into_iter()
        .find(|other| *other != key && (is_ancestor(key, other) || is_ancestor(other, key)))
}

/// True if `ancestor` is a strict dot-prefix of `key`.
pub fn is_ancestor(ancestor: &str, key: &str) -> bool {
    key.len() > ancestor.len()
        && key.starts_with(ancestor)
        && key[ancestor.len()..].starts_with(SEPARATOR)
}

fn object_mut(value: &mut Value) -> &mut Map<String, Value> {
    if !value.is_object() {
        *value = Value::Object(Map::new());
    }
    match value {
        Value::Object(map) => map,
        _ => unreachable!("value was just replaced with an object"),
    }
}
