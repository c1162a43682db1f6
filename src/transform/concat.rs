//! Index-wise string concatenation.

use crate::error::{Error, Result};
use crate::value::{Key, Value};

/// Separators placed between the values of consecutive arrays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Separators {
    /// The same separator between every pair of arrays.
    Single(String),
    /// One separator per pair of consecutive arrays; extra ones are unused.
    PerArray(Vec<String>),
}

impl From<&str> for Separators {
    fn from(separator: &str) -> Self {
        Separators::Single(separator.to_string())
    }
}

impl From<String> for Separators {
    fn from(separator: String) -> Self {
        Separators::Single(separator)
    }
}

impl From<Vec<String>> for Separators {
    fn from(separators: Vec<String>) -> Self {
        Separators::PerArray(separators)
    }
}

impl From<Vec<&str>> for Separators {
    fn from(separators: Vec<&str>) -> Self {
        Separators::PerArray(separators.into_iter().map(String::from).collect())
    }
}

impl Separators {
    fn expand(self, expected: usize) -> Result<Vec<String>> {
        match self {
            Separators::Single(separator) => Ok(vec![separator; expected]),
            Separators::PerArray(separators) if separators.len() < expected => {
                let missing = expected - separators.len();
                Err(Error::invalid_argument(format!(
                    "Missing {} value separator{} of {} expected.",
                    missing,
                    if missing > 1 { "s" } else { "" },
                    expected
                )))
            }
            Separators::PerArray(separators) => Ok(separators),
        }
    }
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::String(s) => Some(s.clone()),
        Value::Int(i) => Some(i.to_string()),
        Value::Float(f) => Some(f.to_string()),
        Value::Object(o) => o.display().map(str::to_string),
        _ => None,
    }
}

/// Joins the values sharing an index across `arrays`.
///
/// Element `i` of the result is element `i` of every array, in order, with
/// the separators between them. The first array decides the number of results.
/// Values may be null (empty text), strings, numbers, or objects with a string
/// representation.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when fewer than two arrays are given,
/// when separators are missing, when an array is shorter than the first one,
/// or when a value has no text form.
pub fn concat_strings(separators: impl Into<Separators>, arrays: &[Value]) -> Result<Vec<String>> {
    if arrays.len() < 2 {
        return Err(Error::invalid_argument(
            "Missing arrays with values to concatenate. At least two arrays must be specified.",
        ));
    }

    let expected = arrays.len() - 1;
    let separators = separators.into().expand(expected)?;
    let total = arrays[0].len();
    let mut strings = Vec::with_capacity(total);

    for i in 0..total {
        let mut text = String::new();

        for (index, array) in arrays.iter().enumerate() {
            let value = array.get(&Key::Index(i)).ok_or_else(|| {
                Error::invalid_argument(format!("Missing index #{} in array #{}.", i, index + 1))
            })?;

            let part = value_text(value).ok_or_else(|| {
                tracing::debug!(index = i, array = index + 1, kind = value.type_name(), "value has no text form");
                Error::invalid_argument(format!(
                    "Invalid type \"{}\" of value of index #{} in array #{}. Allowed types are: \
                     null, string, numeric or an object with a string representation.",
                    value.type_name(),
                    i,
                    index + 1
                ))
            })?;
            text.push_str(&part);

            if index < expected {
                text.push_str(&separators[index]);
            }
        }

        strings.push(text);
    }

    Ok(strings)
}
