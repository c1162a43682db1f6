//! Recursive merge of nested containers.

use crate::value::{Key, Value};

/// Recursively merges `incoming` into a copy of `base`.
///
/// For each entry of `incoming`:
///
/// - a container whose key holds a container in the result is merged into it
///   recursively;
/// - a non-container is appended when `merge_indexed` is set and the result so
///   far is indexed, so indexed containers are concatenated;
/// - anything else overwrites the entry under its key.
///
/// With `merge_indexed` unset, two indexed containers under the same key are
/// merged position by position, later positions of the base surviving:
///
/// ```
/// use arrayutil::{merge_distinct, Value};
/// use serde_json::json;
///
/// let base = Value::from(json!({"methods": ["GET", "HEAD"], "path": "/a"}));
/// let incoming = Value::from(json!({"methods": ["POST"]}));
///
/// let merged = merge_distinct(&base, &incoming, false);
/// assert_eq!(merged, Value::from(json!({"methods": ["POST", "HEAD"], "path": "/a"})));
///
/// let merged = merge_distinct(&base, &incoming, true);
/// assert_eq!(merged, Value::from(json!({"methods": ["GET", "HEAD", "POST"], "path": "/a"})));
/// ```
///
/// Neither argument is modified. A non-container `incoming` adds nothing; a
/// non-container `base` is replaced by the merged entries.
pub fn merge_distinct(base: &Value, incoming: &Value, merge_indexed: bool) -> Value {
    let mut merged = base.clone();
    // Tracked per entry instead of rescanning the keys of `merged`.
    let mut indexed = merged.is_indexed();

    for (key, value) in incoming.entries() {
        let current = merged.get(&key);
        let existed = current.is_some();
        let nested = match current {
            Some(current) if value.is_container() && current.is_container() => {
                Some(merge_distinct(current, value, merge_indexed))
            }
            _ => None,
        };

        if let Some(nested) = nested {
            merged.set(key, nested);
        } else if !value.is_container() && merge_indexed && indexed {
            tracing::trace!(%key, "appending to indexed container");
            let next = Key::Index(merged.len());
            merged.set(next, value.clone());
        } else {
            let appends_next = key == Key::Index(merged.len());
            let was_container = merged.is_container();
            merged.set(key, value.clone());
            indexed = if was_container {
                indexed && (existed || appends_next)
            } else {
                merged.is_indexed()
            };
        }
    }

    merged
}
