//! Compare module - Equality, membership and ordering of nested values.
//!
//! Scalars are compared either by identity ([`Strictness::Strict`]) or with
//! type coercion ([`Strictness::Loose`]); see [`loose`] for the coercion table.

mod contains;
mod equals;
pub mod loose;
pub mod natural;
pub mod numeric;


pub use contains::contains;
pub use equals::{canonical_cmp, equals, key_cmp, key_sort};
pub use loose::{loose_eq, strict_eq, to_bool};

/// Strictness selects how scalars are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strictness {
    /// Types and string case must match.
    Strict,
    /// Scalars are coerced and strings compared ignoring case.
    Loose,
}

impl Strictness {
    pub fn is_loose(self) -> bool {
        self == Strictness::Loose
    }
}

impl From<bool> for Strictness {
    /// `true` means strict.
    fn from(strict: bool) -> Self {
        if strict {
            Strictness::Strict
        } else {
            Strictness::Loose
        }
    }
}
