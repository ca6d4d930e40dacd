//! Domain-level errors.
//!
//! These errors represent the outcomes a caller can branch on after a
//! use-case invocation. They are independent of the transport that
//! produced them; mapping from HTTP status codes happens in the data layer.

use thiserror::Error;

/// Domain error taxonomy shared by all use cases.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Authentication rejected by the server
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Account creation conflict: the e-mail already belongs to an account
    #[error("The received e-mail is already in use")]
    EmailInUse,

    /// The current account is not allowed to perform the operation
    #[error("Access denied")]
    AccessDenied,

    /// Any other failure the caller cannot act on
    #[error("Something unexpected happened. Please try again soon")]
    Unexpected,

    /// Transport failure with no server response attached
    #[error("Network failure: {0}")]
    Network(String),
}

impl DomainError {
    /// Create a network error from any transport failure description
    pub fn network(msg: impl Into<String>) -> Self {
        DomainError::Network(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
