//! Splicing items into a container.

use crate::value::{Key, Map, Value};

fn splice_offset(len: usize, position: isize) -> usize {
    if position < 0 {
        len.saturating_sub(position.unsigned_abs())
    } else {
        position.unsigned_abs().min(len)
    }
}

/// Returns a copy of `container` with `items` inserted before the entry at
/// `position`.
///
/// A negative position counts from the end (`-1` inserts before the last
/// entry); positions past either end clamp to it. Integer keys are renumbered
/// from zero in the resulting order while name keys are kept, so the result is
/// a list unless the container had name keys. A non-container is treated as
/// empty.
pub fn insert(container: &Value, items: &[Value], position: isize) -> Value {
    if let Value::List(list) = container {
        let at = splice_offset(list.len(), position);
        let mut out = Vec::with_capacity(list.len() + items.len());
        out.extend_from_slice(&list[..at]);
        out.extend_from_slice(items);
        out.extend_from_slice(&list[at..]);
        return Value::List(out);
    }

    let mut entries: Vec<(Option<Key>, &Value)> = container
        .as_map()
        .map(|map| {
            map.iter()
                .map(|(key, value)| (key.as_name().map(|_| key.clone()), value))
                .collect()
        })
        .unwrap_or_default();
    let at = splice_offset(entries.len(), position);
    let tail = entries.split_off(at);
    entries.extend(items.iter().map(|item| (None, item)));
    entries.extend(tail);

    if entries.iter().all(|(key, _)| key.is_none()) {
        return Value::List(entries.into_iter().map(|(_, v)| v.clone()).collect());
    }

    let mut map = Map::with_capacity(entries.len());
    for (key, value) in entries {
        match key {
            Some(key) => map.set(key, value.clone()),
            None => map.push(value.clone()),
        }
    }
    Value::Map(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn v(json: serde_json::Value) -> Value {
        Value::from(json)
    }

    fn ints(values: &[i64]) -> Vec<Value> {
        values.iter().map(|i| Value::Int(*i)).collect()
    }

    #[test]
    fn test_insert_at_position() {
        let list = v(json!([1, 2, 3, 5]));
        assert_eq!(insert(&list, &ints(&[4]), 3), v(json!([1, 2, 3, 4, 5])));
    }

    #[test]
    fn test_insert_past_the_end_appends() {
        let list = v(json!([1, 2, 3, 5]));
        assert_eq!(insert(&list, &ints(&[4]), 6), v(json!([1, 2, 3, 5, 4])));
    }

    #[test]
    fn test_insert_negative_position() {
        let list = v(json!([1, 2, 3]));
        assert_eq!(insert(&list, &ints(&[4]), -2), v(json!([1, 4, 2, 3])));
        assert_eq!(insert(&list, &ints(&[0]), -10), v(json!([0, 1, 2, 3])));
    }

    #[test]
    fn test_insert_nothing() {
        let list = v(json!([1, 2]));
        assert_eq!(insert(&list, &[], 1), list);
    }

    #[test]
    fn test_insert_into_empty() {
        let items = vec![Value::Null, Value::Bool(false), v(json!([]))];
        assert_eq!(insert(&v(json!([])), &items, 0), Value::List(items.clone()));
        assert_eq!(insert(&Value::Null, &items, 0), Value::List(items));
    }

    #[test]
    fn test_insert_renumbers_integer_keys() {
        let map = v(json!({"5": "a", "name": "b", "9": "c"}));
        let result = insert(&map, &[Value::from("x")], 1);

        let keys: Vec<Key> = result.as_map().unwrap().keys().cloned().collect();
        assert_eq!(
            keys,
            vec![Key::from(0), Key::from(1), Key::from("name"), Key::from(2)]
        );
        assert_eq!(result.get(&Key::from(1)), Some(&Value::from("x")));
        assert_eq!(result.get(&Key::from(2)), Some(&Value::from("c")));
    }

    #[test]
    fn test_insert_into_indexed_map_gives_list() {
        let map = v(json!({"0": "a", "1": "b"}));
        assert_eq!(insert(&map, &[Value::from("x")], -1), v(json!(["a", "x", "b"])));
    }
}
