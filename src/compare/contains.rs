//! Membership check over the top-level entries of a container.

use crate::value::Value;

use super::loose::{loose_eq, strict_eq};
use super::Strictness;

/// Checks whether any top-level entry of `container` matches `search`.
///
/// - A numeric `search` (number or numeric string) matches an identical entry,
///   or in loose mode a number or string entry that is loosely equal to it.
/// - A string `search` matches string entries byte for byte, or ignoring case
///   in loose mode.
/// - Anything else only matches an identical entry.
///
/// `null`, booleans and containers never take part in coercion, so `null`
/// does not match `false` or `0`.
pub fn contains(container: &Value, search: &Value, strictness: Strictness) -> bool {
    let search_numeric = search.as_number().is_some();

    container.entries().any(|(_, value)| {
        if search_numeric {
            strict_eq(value, search)
                || (strictness.is_loose()
                    && (value.as_number().is_some() || value.is_string())
                    && loose_eq(value, search))
        } else if let (Value::String(value), Value::String(search)) = (value, search) {
            match strictness {
                Strictness::Strict => value == search,
                Strictness::Loose => value.to_lowercase() == search.to_lowercase(),
            }
        } else {
            strict_eq(value, search)
        }
    })
}
