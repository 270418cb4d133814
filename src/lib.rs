//! Prefix Tree Library
//!
//! This library provides a multi-way prefix tree (trie) for indexing strings
//! by shared prefixes, together with the configuration, error handling and
//! word list loading used by the `prefix_tree` binary.
//!
//! # Architecture
//!
//! - `data_structures`: the prefix tree and its nodes
//! - `app`: command line arguments and command dispatch for the binary
//! - `loader`: builds a tree from a line-oriented word list
//! - `config`: layered configuration (defaults, file, environment)
//! - `error`: application error type and error reporting

pub mod app;
pub mod config;
pub mod data_structures;
pub mod error;
pub mod loader;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::{PrefixTree, PrefixTreeNode};

