//! Path module - Classification of containers and lookup by key path.

mod lookup;

pub use lookup::*;
