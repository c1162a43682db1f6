//! Property name case conversion.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// PropertyCase is the naming convention applied to object property names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyCase {
    /// `fooBar`
    Camel,
    /// `foo_bar`
    Snake,
}

impl PropertyCase {
    pub fn as_str(self) -> &'static str {
        match self {
            PropertyCase::Camel => "camel",
            PropertyCase::Snake => "snake",
        }
    }

    /// Converts a name to this case.
    pub fn convert(self, name: &str) -> String {
        let words = split_words(name);
        match self {
            PropertyCase::Snake => words
                .iter()
                .map(|w| w.to_lowercase())
                .collect::<Vec<_>>()
                .join("_"),
            PropertyCase::Camel => {
                let mut out = String::with_capacity(name.len());
                for (i, word) in words.iter().enumerate() {
                    if i == 0 {
                        out.push_str(&word.to_lowercase());
                    } else {
                        let mut chars = word.chars();
                        if let Some(first) = chars.next() {
                            out.extend(first.to_uppercase());
                            out.push_str(&chars.as_str().to_lowercase());
                        }
                    }
                }
                out
            }
        }
    }
}

impl fmt::Display for PropertyCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyCase {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "camel" => Ok(PropertyCase::Camel),
            "snake" => Ok(PropertyCase::Snake),
            other => Err(Error::invalid_argument(format!(
                "Invalid property case \"{}\". Permissible values are: \"camel\", \"snake\" or none.",
                other
            ))),
        }
    }
}

/// Splits a name into words at `_`, `-`, whitespace, lower-to-upper
/// transitions (`fooBar`) and the end of an uppercase run (`HTTPServer`).
fn split_words(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower) {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}
