//! Get-or-insert helpers for the JSON tree.
//!
//! Each helper takes the parent object and a key, inserts the empty default
//! when the key is absent, and hands back the child with the right type. A key
//! that is present with the wrong type is an [`PatchError::InvalidStructure`];
//! the value is never replaced.

use crate::core::PatchError;
use serde_json::{Map, Value};

/// Views `value` as an object, or fails naming `location`.
pub fn as_object_mut<'a>(
    value: &'a mut Value,
    location: &str,
) -> Result<&'a mut Map<String, Value>, PatchError> {
    value.as_object_mut().ok_or_else(|| PatchError::InvalidStructure {
        key: location.to_string(),
        expected: "an object",
    })
}

/// Returns `parent[key]` as an object, inserting `{}` if the key is absent.
pub fn ensure_object<'a>(
    parent: &'a mut Map<String, Value>,
    key: &str,
    location: &str,
) -> Result<&'a mut Map<String, Value>, PatchError> {
    let value = parent.entry(key).or_insert_with(|| Value::Object(Map::new()));
    as_object_mut(value, location)
}

/// Returns `parent[key]` as an array, inserting `[]` if the key is absent.
pub fn ensure_array<'a>(
    parent: &'a mut Map<String, Value>,
    key: &str,
    location: &str,
) -> Result<&'a mut Vec<Value>, PatchError> {
    parent.entry(key).or_insert_with(|| Value::Array(Vec::new())).as_array_mut().ok_or_else(
        || PatchError::InvalidStructure {
            key: location.to_string(),
            expected: "an array",
        },
    )
}

/// Appends `item` as a string unless an equal string is already present.
///
/// Returns whether the item was appended. Non-string elements are left alone
/// and never match.
pub fn push_unique_str(array: &mut Vec<Value>, item: &str) -> bool {
    if array.iter().any(|existing| existing.as_str() == Some(item)) {
        return false;
    }
    array.push(Value::String(item.to_string()));
    true
}

/// Joins a parent location and a key into a dotted location for messages.
pub fn child_location(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}
