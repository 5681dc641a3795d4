//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a deterministic failure of caller-supplied input. The
/// engine performs no IO, so there is nothing to retry: callers surface these
/// to the user for correction.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A count or cash amount was missing, non-numeric, or negative.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation that needs at least one selected item got none.
    #[error("empty selection: {0}")]
    EmptySelection(String),

    /// A checkout asked for more units than are on hand.
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: i64, available: i64 },

    /// A record failed validation (e.g. negative reorder point).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A referenced record is not part of the snapshot.
    #[error("not found: {0}")]
    NotFound(String),
}

impl DomainError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn empty_selection(msg: impl Into<String>) -> Self {
        Self::EmptySelection(msg.into())
    }

    pub fn insufficient_stock(requested: i64, available: i64) -> Self {
        Self::InsufficientStock {
            requested,
            available,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// True for errors the user fixes by re-entering a value.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::EmptySelection(_))
    }
}
