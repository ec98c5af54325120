//! Username extraction from export documents.
//!
//! Normalizes the JSON shapes platforms use for follower/following exports
//! into flat, ordered username lists. Extraction is best-effort: unknown
//! shapes are dropped, never reported as errors.

use serde_json::Value;

use crate::domain::{RelationshipEntry, Role};

/// Extracts usernames for `role` from a decoded export document.
///
/// A bare array is read as entries regardless of role. An object is read
/// from the role key, then the `relationships_` key. Order and duplicates
/// are preserved.
#[must_use]
pub fn extract_usernames(document: &Value, role: Role) -> Vec<String> {
    let entries = source_entries(document, role);

    let usernames: Vec<String> = entries
        .iter()
        .filter_map(classify_entry)
        .filter_map(|entry| entry.into_username(role))
        .collect();

    let dropped = entries.len() - usernames.len();
    if dropped > 0 {
        tracing::debug!(role = %role, dropped, "Skipped unrecognized entries");
    }

    tracing::info!(role = %role, count = usernames.len(), "Extracted usernames");

    usernames
}

/// Selects the entry sequence to read from.
fn source_entries(document: &Value, role: Role) -> &[Value] {
    match document {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => {
            let found = [role.key(), role.relationships_key()]
                .into_iter()
                .find_map(|key| map.get(key).map(|v| (key, v)));

            match found {
                Some((key, Value::Array(items))) => {
                    tracing::debug!(key, "Using export key");
                    items.as_slice()
                }
                Some((key, _)) => {
                    tracing::debug!(key, "Export key is not a list");
                    &[]
                }
                None => &[],
            }
        }
        _ => &[],
    }
}

/// Classifies one raw entry by shape, first match wins.
fn classify_entry(raw: &Value) -> Option<RelationshipEntry> {
    if let Value::String(name) = raw {
        return non_empty(name).map(RelationshipEntry::Plain);
    }

    let object = raw.as_object()?;

    if let Some(name) = object
        .get("string_list_data")
        .and_then(|list| list.get(0))
        .and_then(|first| first.get("value"))
        .and_then(Value::as_str)
        .and_then(non_empty)
    {
        return Some(RelationshipEntry::StringListData(name));
    }

    let value = object
        .get("value")
        .and_then(Value::as_str)
        .and_then(non_empty);

    if let Some(title) = object
        .get("title")
        .and_then(Value::as_str)
        .and_then(non_empty)
    {
        return Some(RelationshipEntry::Titled { title, value });
    }

    value.map(RelationshipEntry::Value)
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}
