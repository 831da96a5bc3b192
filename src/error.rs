//! Error types for tree mutations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when mutating a [`Tree`][crate::linked::Tree].
///
/// Queries never error. Absence is an expected outcome for them so they return `Option`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The item asked to be removed isn't stored in the tree.
    #[error("item not found in tree")]
    NotFound,
}
