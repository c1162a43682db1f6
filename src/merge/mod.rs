//! Merge module - Recursive merging of nested containers.

mod distinct;

#[cfg(test)]
mod merge_test;

pub use distinct::*;
