//! Transform module - Reshaping of nested containers.
//!
//! Splicing, flattening, index-wise string concatenation and conversion of
//! keyed containers into objects.

mod case;
mod concat;
mod flatten;
mod insert;
mod object;

pub use case::PropertyCase;
pub use concat::{concat_strings, Separators};
pub use flatten::flatten;
pub use insert::insert;
pub use object::{to_object, PLAIN_OBJECT_CLASS};
