//! Error types for the algo crate.

use thiserror::Error;

/// Errors that can occur when running a fallible algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AlgoError {
    /// The requested element is not present in the target collection.
    #[error("element not found")]
    NotFound,
}

/// Result type for algo operations.
pub type Result<T> = std::result::Result<T, AlgoError>;
