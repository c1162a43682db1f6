//! Flattening of nested containers.

use crate::value::{Key, Map, Value};

fn collect_leaves<'a>(value: &'a Value, leaves: &mut Vec<(Key, &'a Value)>) {
    for (key, child) in value.entries() {
        if child.is_container() {
            collect_leaves(child, leaves);
        } else {
            leaves.push((key, child));
        }
    }
}

/// Collects every non-container value of `container`, depth first.
///
/// Without `preserve_keys` the leaves are returned as a list. With it they are
/// returned as a map under their own keys; a later leaf overwrites an earlier
/// one with the same key, keeping the earlier position.
pub fn flatten(container: &Value, preserve_keys: bool) -> Value {
    let mut leaves = Vec::new();
    collect_leaves(container, &mut leaves);

    if preserve_keys {
        let mut map = Map::with_capacity(leaves.len());
        for (key, leaf) in leaves {
            map.set(key, leaf.clone());
        }
        Value::Map(map)
    } else {
        Value::List(leaves.into_iter().map(|(_, leaf)| leaf.clone()).collect())
    }
}
