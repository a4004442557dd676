// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// A `(locale, slug)` uniqueness violation raised while persisting. The
    /// caller recomputes the next free slug and retries once.
    #[error("retryable conflict: {0}")]
    RetryableConflict(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, DomainError::RetryableConflict(_))
    }
}
