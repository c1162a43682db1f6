//! # arrayutil
//!
//! Helpers for inspecting, comparing, transforming and merging loosely-typed
//! nested data such as parsed configuration or API payloads.
//!
//! Every operation is a pure function over [`Value`]: inputs are borrowed and
//! new values are returned.
//!
//! ## Modules
//!
//! - [`value`] - In-memory representation of nested values with JSON/YAML support
//! - [`path`] - Container classification and lookup by key path
//! - [`compare`] - Deep equality, membership checks and the coercion rules they use
//! - [`merge`] - Recursive merging of containers
//! - [`transform`] - Splicing, flattening, concatenation and object conversion

pub mod compare;
pub mod error;
pub mod merge;
pub mod path;
pub mod transform;
pub mod value;

pub use compare::{contains, equals, key_sort, Strictness};
pub use error::{Error, Result};
pub use merge::merge_distinct;
pub use path::{find, is_indexed, key_exists, lookup};
pub use transform::{concat_strings, flatten, insert, to_object, PropertyCase, Separators};
pub use value::{Key, Map, Object, Value};
