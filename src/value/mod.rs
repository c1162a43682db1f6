//! Value module - In-memory representation of nested array-like documents.
//!
//! Scalars, ordered containers and opaque objects, with JSON/YAML support.

mod key;
mod map;
mod object;
mod value;

pub use key::Key;
pub use map::Map;
pub use object::Object;
pub use value::*;
