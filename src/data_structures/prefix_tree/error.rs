//! Error types for the prefix tree.
//!
//! Lookups that miss are reported to callers of the tree as `false` or an
//! empty result. These errors only surface at the node level.

/// Errors that can occur in prefix tree node operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrefixTreeError {
    /// No child exists for the requested symbol.
    #[error("No child exists for symbol {0:?}")]
    ChildNotFound(char),

    /// A child already exists for the symbol being attached.
    #[error("Child already exists for symbol {0:?}")]
    DuplicateChild(char),
}

/// Result type for prefix tree node operations.
pub type PrefixTreeResult<T> = Result<T, PrefixTreeError>;
