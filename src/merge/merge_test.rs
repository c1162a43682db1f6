//! Tests for merge operations.

#[cfg(test)]
mod tests {
    use crate::merge::merge_distinct;
    use crate::value::{Key, Map, Value};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn v(json: serde_json::Value) -> Value {
        Value::from(json)
    }

    fn route_base() -> Value {
        v(json!({
            "path": "/prods",
            "methods": ["GET", "HEAD"],
            "headers": {"x-1": "a", "x-2": "b"},
        }))
    }

    fn route_incoming() -> Value {
        v(json!({
            "path": "/products",
            "methods": ["POST"],
            "headers": {"x-2": null, "x-3": "c"},
            "fragment": "#name",
        }))
    }

    #[test]
    fn test_merge_overwrites_by_key() {
        let merged = merge_distinct(&route_base(), &route_incoming(), false);

        assert_eq!(merged.len(), 4);
        assert_eq!(merged.get(&"path".into()), Some(&Value::from("/products")));
        assert_eq!(merged.get(&"methods".into()), Some(&v(json!(["POST", "HEAD"]))));
        assert_eq!(merged.get(&"fragment".into()), Some(&Value::from("#name")));

        let headers = merged.get(&"headers".into()).unwrap();
        assert_eq!(headers, &v(json!({"x-1": "a", "x-2": null, "x-3": "c"})));
    }

    #[test]
    fn test_merge_indexed_containers() {
        let merged = merge_distinct(&route_base(), &route_incoming(), true);

        assert_eq!(
            merged.get(&"methods".into()),
            Some(&v(json!(["GET", "HEAD", "POST"])))
        );
        assert_eq!(merged.get(&"headers".into()).map(Value::len), Some(3));
        assert_eq!(merged.get(&"path".into()), Some(&Value::from("/products")));
    }

    #[test]
    fn test_single_element_lists_are_replaced() {
        let base = v(json!({"path": "/a", "methods": ["GET"]}));
        let incoming = v(json!({"path": "/b", "methods": ["POST"]}));
        assert_eq!(
            merge_distinct(&base, &incoming, false),
            v(json!({"path": "/b", "methods": ["POST"]}))
        );
    }

    #[test]
    fn test_merge_indexed_appends_scalars() {
        let base = v(json!({"methods": ["GET", "HEAD"]}));
        let incoming = v(json!({"methods": ["POST"]}));
        assert_eq!(
            merge_distinct(&base, &incoming, true),
            v(json!({"methods": ["GET", "HEAD", "POST"]}))
        );
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let base = route_base();
        let incoming = route_incoming();
        let _ = merge_distinct(&base, &incoming, true);
        let _ = merge_distinct(&base, &incoming, false);
        assert_eq!(base, route_base());
        assert_eq!(incoming, route_incoming());
    }

    #[test]
    fn test_container_replaces_scalar_and_scalar_replaces_container() {
        let base = v(json!({"a": "text", "b": {"c": 1}}));
        let incoming = v(json!({"a": {"nested": true}, "b": "flat"}));
        assert_eq!(
            merge_distinct(&base, &incoming, false),
            v(json!({"a": {"nested": true}, "b": "flat"}))
        );
    }

    #[test]
    fn test_deep_merge() {
        let base = v(json!({"db": {"primary": {"host": "localhost", "port": 5432}}}));
        let incoming = v(json!({"db": {"primary": {"port": 6432}, "replica": {"host": "r1"}}}));
        assert_eq!(
            merge_distinct(&base, &incoming, false),
            v(json!({
                "db": {
                    "primary": {"host": "localhost", "port": 6432},
                    "replica": {"host": "r1"},
                }
            }))
        );
    }

    #[test]
    fn test_indexed_containers_of_containers_merge_by_position() {
        let base = v(json!({"items": [{"id": 1, "tags": ["a"]}]}));
        let incoming = v(json!({"items": [{"tags": ["b"]}, {"id": 2}]}));
        assert_eq!(
            merge_distinct(&base, &incoming, true),
            v(json!({"items": [{"id": 1, "tags": ["a", "b"]}, {"id": 2}]}))
        );
    }

    #[test]
    fn test_longer_list_extends_base() {
        let base = v(json!(["a"]));
        let incoming = v(json!(["b", "c"]));
        assert_eq!(merge_distinct(&base, &incoming, false), v(json!(["b", "c"])));
        assert_eq!(merge_distinct(&base, &incoming, true), v(json!(["a", "b", "c"])));
    }

    #[test]
    fn test_keyed_entries_into_empty_base_when_merging_indexed() {
        // An empty container counts as indexed, so scalars are appended.
        let merged = merge_distinct(&Value::Map(Map::new()), &v(json!({"a": 1, "b": 2})), true);
        assert_eq!(merged, v(json!([1, 2])));
    }

    #[test]
    fn test_named_key_turns_list_into_map() {
        let merged = merge_distinct(&v(json!(["a"])), &v(json!({"name": "x"})), false);
        assert!(!merged.is_indexed());
        assert_eq!(merged.get(&Key::from(0)), Some(&Value::from("a")));
        assert_eq!(merged.get(&"name".into()), Some(&Value::from("x")));
    }

    #[test]
    fn test_absent_keys_are_added() {
        let merged = merge_distinct(&v(json!({})), &v(json!({"a": {"b": 1}})), false);
        assert_eq!(merged, v(json!({"a": {"b": 1}})));
    }

    #[test]
    fn test_scalar_incoming_adds_nothing() {
        let base = route_base();
        assert_eq!(merge_distinct(&base, &Value::from("x"), true), base);
    }

    #[test]
    fn test_merge_wide_maps() {
        let wide: Map = (0..50_000)
            .map(|i| (format!("key{}", i), Value::Int(i)))
            .collect();
        let wide = Value::Map(wide);

        let merged = merge_distinct(&wide, &wide, false);
        assert_eq!(merged, wide);

        let list = Value::List((0..50_000).map(Value::Int).collect());
        let appended = merge_distinct(&list, &list, true);
        assert_eq!(appended.len(), 100_000);
        assert_eq!(appended.get(&Key::from(99_999)), Some(&Value::Int(49_999)));
    }
}
