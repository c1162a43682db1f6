//! Core value types and operations.

use super::key::Key;
use super::map::Map;
use super::object::Object;
use crate::compare::loose::strict_eq;
use crate::compare::numeric::{parse_numeric, Number};
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt;

/// Value is a node of a loosely-typed nested document.
///
/// `List` and `Map` are the containers. A `List` is always indexed; a `Map` is
/// indexed when its keys happen to be `0..n-1` in order.
///
/// `==` on values is identity comparison: variants must match, containers must
/// hold equal entries in the same order and objects must be the same instance.
/// See [`crate::compare::loose_eq`] for the coercive comparison.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(Map),
    Object(Object),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns true for lists and maps.
    pub fn is_container(&self) -> bool {
        matches!(self, Value::List(_) | Value::Map(_))
    }

    /// Returns true for lists, empty maps and maps keyed `0..n-1` in order.
    pub fn is_indexed(&self) -> bool {
        match self {
            Value::List(_) => true,
            Value::Map(map) => map.is_indexed(),
            _ => false,
        }
    }

    /// Returns the numeric reading of ints, floats and numeric strings.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Int(i) => Some(Number::Int(*i)),
            Value::Float(f) => Some(Number::Float(*f)),
            Value::String(s) => parse_numeric(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Name of the value's type, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) | Value::Map(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// Number of entries of a container; zero for anything else.
    pub fn len(&self) -> usize {
        match self {
            Value::List(l) => l.len(),
            Value::Map(m) => m.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the child stored under `key`, if this is a container holding it.
    pub fn get(&self, key: &Key) -> Option<&Value> {
        match (self, key) {
            (Value::List(l), Key::Index(i)) => l.get(*i),
            (Value::Map(m), key) => m.get(key),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, key: &Key) -> Option<&mut Value> {
        match (self, key) {
            (Value::List(l), Key::Index(i)) => l.get_mut(*i),
            (Value::Map(m), key) => m.get_mut(key),
            _ => None,
        }
    }

    /// Iterates the `(key, child)` pairs of a container in order. Non-containers
    /// have no entries.
    pub fn entries(&self) -> Entries<'_> {
        match self {
            Value::List(l) => Entries::List(l.iter().enumerate()),
            Value::Map(m) => Entries::Map(m.iter()),
            _ => Entries::Empty,
        }
    }

    /// Sets `key` to `value`.
    ///
    /// A list receiving a key other than an existing index or the next one is
    /// turned into a map. A non-container becomes a map holding the one entry.
    pub fn set(&mut self, key: Key, value: Value) {
        match self {
            Value::List(l) => match key {
                Key::Index(i) if i < l.len() => l[i] = value,
                Key::Index(i) if i == l.len() => l.push(value),
                key => {
                    let mut map = Map::from(std::mem::take(l));
                    map.set(key, value);
                    *self = Value::Map(map);
                }
            },
            Value::Map(m) => m.set(key, value),
            _ => {
                let mut map = Map::new();
                map.set(key, value);
                *self = Value::Map(map);
            }
        }
    }

    /// Appends `value` under the next integer key. A non-container becomes a
    /// single element list.
    pub fn push(&mut self, value: Value) {
        match self {
            Value::List(l) => l.push(value),
            Value::Map(m) => m.push(value),
            _ => *self = Value::List(vec![value]),
        }
    }
}

/// Iterator over the entries of a container, see [`Value::entries`].
pub enum Entries<'a> {
    List(std::iter::Enumerate<std::slice::Iter<'a, Value>>),
    Map(indexmap::map::Iter<'a, Key, Value>),
    Empty,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (Key, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Entries::List(it) => it.next().map(|(i, v)| (Key::Index(i), v)),
            Entries::Map(it) => it.next().map(|(k, v)| (k.clone(), v)),
            Entries::Empty => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Entries::List(it) => it.size_hint(),
            Entries::Map(it) => it.size_hint(),
            Entries::Empty => (0, Some(0)),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        strict_eq(self, other)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(l: Vec<Value>) -> Self {
        Value::List(l)
    }
}

impl From<Map> for Value {
    fn from(m: Map) -> Self {
        Value::Map(m)
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(o)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(fields) => Value::Map(
                fields
                    .into_iter()
                    .map(|(k, v)| (Key::from(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::List(l) => {
                let mut seq = serializer.serialize_seq(Some(l.len()))?;
                for item in l {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Map(m) if !m.is_empty() && m.is_indexed() => {
                let mut seq = serializer.serialize_seq(Some(m.len()))?;
                for item in m.values() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Map(m) => serialize_map(m, serializer),
            Value::Object(o) => serialize_map(o.properties(), serializer),
        }
    }
}

fn serialize_map<S: Serializer>(map: &Map, serializer: S) -> Result<S::Ok, S::Error> {
    let mut out = serializer.serialize_map(Some(map.len()))?;
    for (key, value) in map.iter() {
        out.serialize_entry(key, value)?;
    }
    out.end()
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON or YAML value")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        match i64::try_from(v) {
            Ok(i) => Ok(Value::Int(i)),
            Err(_) => Ok(Value::Float(v as f64)),
        }
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Value, A::Error> {
        let mut map = Map::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<Key, Value>()? {
            map.set(key, value);
        }
        Ok(Value::Map(map))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

/// Parse a value from JSON.
pub fn from_json(json: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(json)
}

/// Serialize a value to JSON.
pub fn to_json(value: &Value) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// Serialize a value to indented JSON.
pub fn to_json_pretty(value: &Value) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Parse a value from YAML.
pub fn from_yaml(yaml: &str) -> Result<Value, serde_yaml::Error> {
    serde_yaml::from_str(yaml)
}

/// Serialize a value to YAML.
pub fn to_yaml(value: &Value) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(value)
}
