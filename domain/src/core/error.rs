//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// This is deliberately small: a tier that finds nothing or cannot reach its
/// store reports a zero-confidence [`Solution`](crate::Solution), not an
/// error. The only condition that crosses the resolver boundary as a failure
/// is a malformed query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

impl DomainError {
    /// Check if this error is a query validation failure
    pub fn is_invalid_query(&self) -> bool {
        matches!(self, DomainError::InvalidQuery(_))
    }
}
