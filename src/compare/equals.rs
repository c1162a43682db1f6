//! Order-insensitive deep equality.

use std::cmp::Ordering;

use crate::value::{Key, Value};

use super::loose::{loose_eq, strict_eq};
use super::natural::natural_cmp_ci;
use super::Strictness;

/// Key order used by [`key_sort`]: natural and case-insensitive on the key's
/// string form, ties broken by byte order.
pub fn key_cmp(a: &Key, b: &Key) -> Ordering {
    let (a, b) = (a.to_str(), b.to_str());
    natural_cmp_ci(&a, &b).then_with(|| a.cmp(&b))
}

fn key_sort_in_place(value: &mut Value) {
    match value {
        Value::List(items) => items.iter_mut().for_each(key_sort_in_place),
        Value::Map(map) => {
            map.sort_by_key_order(key_cmp);
            map.values_mut().for_each(key_sort_in_place);
        }
        _ => {}
    }
}

/// Returns a copy of `value` with the entries of every map, at any depth,
/// sorted by [`key_cmp`]. List element order is kept.
pub fn key_sort(value: &Value) -> Value {
    let mut sorted = value.clone();
    key_sort_in_place(&mut sorted);
    sorted
}

fn rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Int(_) | Value::Float(_) => 2,
        Value::String(_) if value.as_number().is_some() => 2,
        Value::String(_) => 3,
        Value::List(_) | Value::Map(_) => 4,
        Value::Object(_) => 5,
    }
}

fn numeric_tie(value: &Value) -> u8 {
    match value {
        Value::Int(_) => 0,
        Value::Float(_) => 1,
        _ => 2,
    }
}

fn pairs_cmp<'a>(
    a: impl Iterator<Item = (Key, &'a Value)>,
    b: impl Iterator<Item = (Key, &'a Value)>,
) -> Ordering {
    a.zip(b)
        .map(|((ka, va), (kb, vb))| key_cmp(&ka, &kb).then_with(|| canonical_cmp(va, vb)))
        .find(|ord| *ord != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

/// Total order used to sort indexed containers before comparing them.
///
/// null < booleans < numbers and numeric strings (by value) < other strings
/// < containers < objects.
pub fn canonical_cmp(a: &Value, b: &Value) -> Ordering {
    rank(a).cmp(&rank(b)).then_with(|| match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::String(x), Value::String(y)) if rank(a) == 3 => x.cmp(y),
        (Value::Object(x), Value::Object(y)) => {
            let (px, py) = (x.properties(), y.properties());
            x.class()
                .cmp(y.class())
                .then_with(|| px.len().cmp(&py.len()))
                .then_with(|| {
                    pairs_cmp(
                        px.iter().map(|(k, v)| (k.clone(), v)),
                        py.iter().map(|(k, v)| (k.clone(), v)),
                    )
                })
        }
        (x, y) if x.is_container() => x
            .len()
            .cmp(&y.len())
            .then_with(|| pairs_cmp(x.entries(), y.entries())),
        (x, y) => match (x.as_number(), y.as_number()) {
            (Some(nx), Some(ny)) => nx
                .num_cmp(ny)
                .then_with(|| numeric_tie(x).cmp(&numeric_tie(y)))
                .then_with(|| x.as_str().cmp(&y.as_str())),
            _ => Ordering::Equal,
        },
    })
}

/// Folds strings in loose mode and sorts indexed containers, children first.
/// Indexed maps come out as lists.
fn normalize(value: &mut Value, strictness: Strictness) {
    match value {
        Value::String(s) if strictness.is_loose() => *s = s.to_lowercase(),
        Value::List(items) => {
            for item in items.iter_mut() {
                normalize(item, strictness);
            }
            items.sort_by(canonical_cmp);
        }
        Value::Map(map) => {
            for child in map.values_mut() {
                normalize(child, strictness);
            }
            if map.is_indexed() {
                let mut items = std::mem::take(map).into_values();
                items.sort_by(canonical_cmp);
                *value = Value::List(items);
            }
        }
        _ => {}
    }
}

fn canonicalize(value: &Value, strictness: Strictness) -> Value {
    let mut value = key_sort(value);
    normalize(&mut value, strictness);
    value
}

/// Checks whether two nested values hold the same keys and values.
///
/// Key order is ignored everywhere, and element order is ignored inside
/// indexed containers. In strict mode types and string case must match; in
/// loose mode strings are compared case-insensitively and scalars through
/// [`loose_eq`]. Objects are compared as opaque handles: by instance in strict
/// mode, by class and properties in loose mode.
pub fn equals(a: &Value, b: &Value, strictness: Strictness) -> bool {
    let a = canonicalize(a, strictness);
    let b = canonicalize(b, strictness);
    tracing::trace!(?strictness, "comparing normalized values");

    match strictness {
        Strictness::Strict => strict_eq(&a, &b),
        Strictness::Loose => loose_eq(&a, &b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Map;
    use serde_json::json;

    #[test]
    fn test_key_sort_is_natural_and_case_insensitive() {
        let mut inner = Map::new();
        inner.set("c".into(), Value::Bool(true));
        inner.set("b".into(), Value::Bool(true));
        inner.set("B".into(), Value::Bool(true));
        inner.set(Key::from(1), Value::Bool(true));
        let mut outer = Map::new();
        outer.set("x".into(), Value::Int(1));
        outer.set("a".into(), Value::Map(inner));

        let sorted = key_sort(&Value::Map(outer));

        let keys: Vec<Key> = sorted.as_map().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec![Key::from("a"), Key::from("x")]);
        let inner = sorted.get(&Key::from("a")).unwrap().as_map().unwrap();
        let keys: Vec<Key> = inner.keys().cloned().collect();
        assert_eq!(
            keys,
            vec![Key::from(1), Key::from("B"), Key::from("b"), Key::from("c")]
        );
    }

    #[test]
    fn test_key_sort_orders_numbered_keys_naturally() {
        let value = Value::from(json!({"item10": 1, "item9": 2, "Item1": 3}));
        let sorted = key_sort(&value);
        let keys: Vec<String> = sorted
            .as_map()
            .unwrap()
            .keys()
            .map(|k| k.to_string())
            .collect();
        assert_eq!(keys, vec!["Item1", "item9", "item10"]);
    }

    #[test]
    fn test_key_sort_keeps_list_order() {
        let value = Value::from(json!([{"b": 1, "a": 2}, "z", "a"]));
        let sorted = key_sort(&value);
        assert_eq!(sorted, Value::from(json!([{"a": 2, "b": 1}, "z", "a"])));
    }

    #[test]
    fn test_canonical_order() {
        let mut items: Vec<Value> = vec![
            Value::from("b"),
            Value::from(json!([1])),
            Value::Int(10),
            Value::from("2"),
            Value::Null,
            Value::Bool(true),
            Value::from("a"),
            Value::Float(1.5),
        ];
        items.sort_by(canonical_cmp);
        assert_eq!(
            items,
            vec![
                Value::Null,
                Value::Bool(true),
                Value::Float(1.5),
                Value::from("2"),
                Value::Int(10),
                Value::from("a"),
                Value::from("b"),
                Value::from(json!([1])),
            ]
        );
    }

    #[test]
    fn test_top_level_list_order_is_ignored() {
        let a = Value::from(json!([1, 2, 3]));
        let b = Value::from(json!([3, 1, 2]));
        assert!(equals(&a, &b, Strictness::Strict));
    }

    #[test]
    fn test_equals_does_not_mutate_inputs() {
        let a = Value::from(json!({"b": ["Y", "X"], "a": "Text"}));
        let before = a.clone();
        let _ = equals(&a, &a, Strictness::Loose);
        assert_eq!(a, before);
    }

    #[test]
    fn test_canonical_order_of_large_numbers_is_transitive() {
        let int = Value::Int((1 << 53) + 1);
        let float = Value::Float(9_007_199_254_740_992.0);
        let text = Value::from("9007199254740992");

        assert_eq!(canonical_cmp(&float, &text), Ordering::Less);
        assert_eq!(canonical_cmp(&text, &int), Ordering::Less);
        assert_eq!(canonical_cmp(&float, &int), Ordering::Less);

        let a = Value::List(vec![int.clone(), float.clone(), text.clone()]);
        let b = Value::List(vec![text, int, float]);
        assert!(equals(&a, &b, Strictness::Strict));
        assert!(equals(&a, &b, Strictness::Loose));
    }
}
