//! Key path lookup.

use crate::error::{Error, Result};
use crate::value::{Key, Value};

/// Returns true if `value` is a list, an empty map, or a map keyed `0..n-1`
/// in order.
pub fn is_indexed(value: &Value) -> bool {
    value.is_indexed()
}

/// Resolves `keys` through nested containers.
///
/// Returns `None` as soon as a step reaches a non-container or a missing key.
/// An empty path resolves to `value` itself.
pub fn lookup<'a>(value: &'a Value, keys: &[Key]) -> Option<&'a Value> {
    keys.iter().try_fold(value, |current, key| current.get(key))
}

/// Resolves `keys` like [`lookup`], returning `default` when the path does not
/// exist. A path that resolves to `null` returns that `null`.
pub fn find<'a>(value: &'a Value, keys: &[Key], default: &'a Value) -> &'a Value {
    lookup(value, keys).unwrap_or(default)
}

/// Checks whether the key path exists.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `keys` is empty.
pub fn key_exists(value: &Value, keys: &[Key]) -> Result<bool> {
    if keys.is_empty() {
        tracing::debug!("key_exists called with an empty key path");
        return Err(Error::invalid_argument("The key path cannot be empty."));
    }

    Ok(lookup(value, keys).is_some())
}
