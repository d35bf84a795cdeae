//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, stock checks). Process-level concerns belong in the binary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. empty name, unknown flower type).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// A sale asked for more bouquets than the shop holds.
    #[error("{shop} doesn't have enough {bouquet} (requested {requested}, available {available})")]
    InsufficientStock {
        shop: String,
        bouquet: String,
        requested: u32,
        available: u32,
    },

    /// A keyed removal targeted an entry that does not exist.
    #[error("key not found: {0}")]
    KeyNotFound(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound(key.into())
    }

    pub fn insufficient_stock(
        shop: impl Into<String>,
        bouquet: impl Into<String>,
        requested: u32,
        available: u32,
    ) -> Self {
        Self::InsufficientStock {
            shop: shop.into(),
            bouquet: bouquet.into(),
            requested,
            available,
        }
    }
}
