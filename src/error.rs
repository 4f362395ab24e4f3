//! Error types for the tree.

use thiserror::Error;

/// Result type alias for fallible tree operations.
pub type Result<T> = std::result::Result<T, TreeError>;

/// Errors that can occur when working with a [`Tree`][crate::Tree].
///
/// None of the core operations fail. These only come from the checked
/// entry points: [`Tree::try_insert`][crate::Tree::try_insert] and parsing
/// an [`Order`][crate::Order].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The key could not be ordered against a key already in the tree
    /// (for example a floating point `NaN`).
    #[error("key is not comparable with an existing key")]
    Incomparable,

    /// The string did not name a traversal order.
    #[error("unknown traversal order: {0}")]
    UnknownOrder(String),
}
