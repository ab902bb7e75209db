//! Domain Errors

use thiserror::Error;

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("item description must not be empty")]
    EmptyDescription,
    #[error("invalid list config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
    #[error("max quantity must be at least 1, got {0}")]
    InvalidQuantityRange(u32),
}
