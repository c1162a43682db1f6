//! Identity and coercive equality.
//!
//! [`strict_eq`] requires matching types. [`loose_eq`] coerces scalars using
//! this table (first matching row wins):
//!
//! | left / right            | equal when                                           |
//! |-------------------------|------------------------------------------------------|
//! | null / null             | always                                               |
//! | bool / any              | the bool equals the other side's [`to_bool`]         |
//! | null / string           | the string is empty                                  |
//! | null / any              | the other side's [`to_bool`] is false                |
//! | number / number         | numerically equal                                    |
//! | number / string         | the string is numeric and numerically equal          |
//! | string / string         | both numeric and numerically equal, else same bytes  |
//! | container / container   | same size, each key of one is in the other and equal |
//! | object / object         | same instance, or same class and equal properties    |
//! | object / string         | the object's string representation equals it        |
//! | anything else           | never                                                |
//!
//! So `null == false`, `null == ""`, `false == "0"` and `"1" == "01"` hold, while
//! `null == "0"`, `0 == ""` and `"abc" == 0` do not.

use crate::value::{Map, Value};

use super::numeric::{parse_numeric, Number};

/// Truthiness: null, false, zero, `""`, `"0"` and empty containers are false.
pub fn to_bool(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Int(i) => *i != 0,
        Value::Float(f) => *f != 0.0,
        Value::String(s) => !(s.is_empty() || s == "0"),
        Value::List(l) => !l.is_empty(),
        Value::Map(m) => !m.is_empty(),
        Value::Object(_) => true,
    }
}

/// Identity comparison: same type and value, containers with equal entries in
/// the same order, objects that are the same instance.
pub fn strict_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Int(x), Value::Int(y)) => x == y,
        (Value::Float(x), Value::Float(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::List(x), Value::List(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(x, y)| strict_eq(x, y))
        }
        (Value::Object(x), Value::Object(y)) => x.same_instance(y),
        (x, y) if x.is_container() && y.is_container() => {
            x.len() == y.len()
                && x.entries()
                    .zip(y.entries())
                    .all(|((kx, vx), (ky, vy))| kx == ky && strict_eq(vx, vy))
        }
        _ => false,
    }
}

fn number(value: &Value) -> Option<Number> {
    match value {
        Value::Int(i) => Some(Number::Int(*i)),
        Value::Float(f) => Some(Number::Float(*f)),
        _ => None,
    }
}

fn containers_loose_eq(a: &Value, b: &Value) -> bool {
    a.len() == b.len()
        && a.entries()
            .all(|(key, va)| b.get(&key).is_some_and(|vb| loose_eq(va, vb)))
}

fn properties_loose_eq(a: &Map, b: &Map) -> bool {
    a.len() == b.len()
        && a.iter()
            .all(|(key, va)| b.get(key).is_some_and(|vb| loose_eq(va, vb)))
}

/// Coercive comparison; see the module documentation for the table.
pub fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), other) | (other, Value::Bool(x)) => *x == to_bool(other),
        (Value::Null, Value::String(s)) | (Value::String(s), Value::Null) => s.is_empty(),
        (Value::Null, other) | (other, Value::Null) => !to_bool(other),
        (Value::String(x), Value::String(y)) => {
            match (parse_numeric(x), parse_numeric(y)) {
                (Some(nx), Some(ny)) => nx.num_eq(ny),
                _ => x == y,
            }
        }
        (Value::String(s), other) | (other, Value::String(s)) if number(other).is_some() => {
            match (parse_numeric(s), number(other)) {
                (Some(ns), Some(no)) => ns.num_eq(no),
                _ => false,
            }
        }
        (Value::Object(x), Value::Object(y)) => {
            x.same_instance(y)
                || (x.class() == y.class() && properties_loose_eq(x.properties(), y.properties()))
        }
        (Value::Object(o), Value::String(s)) | (Value::String(s), Value::Object(o)) => {
            o.display() == Some(s.as_str())
        }
        (x, y) if x.is_container() && y.is_container() => containers_loose_eq(x, y),
        (x, y) => match (number(x), number(y)) {
            (Some(nx), Some(ny)) => nx.num_eq(ny),
            _ => false,
        },
    }
}
