//! Store error types
//!
//! Only two failure modes are visible to callers: an id that matches
//! nothing, and a write body that fails validation. Anything else
//! (a poisoned lock) is internal.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// In-memory store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record with the requested id
    #[error("record not found")]
    NotFound,

    /// Write body failed validation
    #[error("{0}")]
    InvalidInput(String),

    /// Unexpected internal failure
    #[error("internal error: {0}")]
    Internal(String),
}

impl StoreError {
    pub fn invalid(message: impl Into<String>) -> Self {
        StoreError::InvalidInput(message.into())
    }
}
