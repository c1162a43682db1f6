//! Container keys.

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;

/// Key addresses one entry of a container.
///
/// Strings holding a canonical non-negative decimal number (`"0"`, `"42"`, but
/// not `"042"` or `"-1"`) are normalized to [`Key::Index`] on conversion, so
/// `Key::from("0") == Key::from(0)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Integer key.
    Index(usize),
    /// String key.
    Name(String),
}

impl Key {
    /// Returns the integer key, if this is one.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(i) => Some(*i),
            Key::Name(_) => None,
        }
    }

    /// Returns the string key, if this is one.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Index(_) => None,
            Key::Name(name) => Some(name),
        }
    }

    /// Returns the key in its string form.
    pub fn to_str(&self) -> Cow<'_, str> {
        match self {
            Key::Index(i) => Cow::Owned(i.to_string()),
            Key::Name(name) => Cow::Borrowed(name),
        }
    }
}

fn canonical_index(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    match bytes {
        [] => None,
        [b'0'] => Some(0),
        [b'0', ..] => None,
        _ if bytes.iter().all(u8::is_ascii_digit) => s.parse().ok(),
        _ => None,
    }
}

impl From<usize> for Key {
    fn from(i: usize) -> Self {
        Key::Index(i)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        match canonical_index(s) {
            Some(i) => Key::Index(i),
            None => Key::Name(s.to_string()),
        }
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        match canonical_index(&s) {
            Some(i) => Key::Index(i),
            None => Key::Name(s),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{}", i),
            Key::Name(name) => write!(f, "{}", name),
        }
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct KeyVisitor;

impl<'de> Visitor<'de> for KeyVisitor {
    type Value = Key;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or integer key")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Key, E> {
        match usize::try_from(v) {
            Ok(i) => Ok(Key::Index(i)),
            Err(_) => Ok(Key::Name(v.to_string())),
        }
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Key, E> {
        match usize::try_from(v) {
            Ok(i) => Ok(Key::Index(i)),
            Err(_) => Ok(Key::Name(v.to_string())),
        }
    }

    /// Integral non-negative floats become indexes, other floats keep their
    /// text form.
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Key, E> {
        if v.fract() == 0.0 && v >= 0.0 && v < usize::MAX as f64 {
            Ok(Key::Index(v as usize))
        } else {
            Ok(Key::Name(v.to_string()))
        }
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Key, E> {
        Ok(Key::Index(usize::from(v)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Key, E> {
        Ok(Key::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Key, E> {
        Ok(Key::from(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Key, E> {
        Ok(Key::Name(String::new()))
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(KeyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_strings_become_indexes() {
        assert_eq!(Key::from("0"), Key::Index(0));
        assert_eq!(Key::from("42"), Key::Index(42));
        assert_eq!(Key::from(String::from("7")), Key::from(7));
    }

    #[test]
    fn test_non_canonical_strings_stay_names() {
        assert_eq!(Key::from("042"), Key::Name("042".into()));
        assert_eq!(Key::from("-1"), Key::Name("-1".into()));
        assert_eq!(Key::from("1.5"), Key::Name("1.5".into()));
        assert_eq!(Key::from(""), Key::Name(String::new()));
        assert_eq!(Key::from(" 1"), Key::Name(" 1".into()));
    }

    #[test]
    fn test_string_form() {
        assert_eq!(Key::from(3).to_str(), "3");
        assert_eq!(Key::from("path").to_str(), "path");
        assert_eq!(Key::from("path").as_name(), Some("path"));
        assert_eq!(Key::from(3).as_index(), Some(3));
    }

    #[test]
    fn test_float_keys() {
        let value = crate::value::from_yaml("1.0: a\n1.5: b\n-2.0: c\n").unwrap();
        let keys: Vec<Key> = value.as_map().unwrap().keys().cloned().collect();
        assert_eq!(
            keys,
            vec![Key::Index(1), Key::Name("1.5".into()), Key::Name("-2".into())]
        );
    }
}
