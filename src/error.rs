//! Quoting errors

use thiserror::Error;

/// Errors that can occur while building a quote
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    /// The requested product code has no rate formula
    #[error("Unrecognized policy type: {0}")]
    UnrecognizedPolicyType(String),
}

impl QuoteError {
    /// Creates an unrecognized policy type error
    pub fn unrecognized(label: impl Into<String>) -> Self {
        QuoteError::UnrecognizedPolicyType(label.into())
    }
}

/// Result alias for quoting operations
pub type Result<T> = std::result::Result<T, QuoteError>;
