//! Data structures provided by the crate.
//!
//! Everything here is single-threaded and synchronous. Structures that need to
//! be shared across threads should be wrapped by the caller.

pub mod prefix_tree;

pub use prefix_tree::{
    PrefixTree, PrefixTreeError, PrefixTreeNode, PrefixTreeResult, TraversalStats,
};
