//! Domain-level error types.

use thiserror::Error;

/// Domain errors - defects in the compiled-in content pools.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Pool is empty: {pool}")]
    EmptyPool { pool: &'static str },

    #[error("Quotation must contain exactly one \" - \" delimiter: {0}")]
    MalformedQuotation(String),
}
