//! Domain error types.

use thiserror::Error;

/// Value object construction failures.
///
/// Every variant surfaces to HTTP callers as `422 Unprocessable Entity`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("participant name must not be empty")]
    EmptyParticipantName,

    #[error("recipient must not be empty")]
    EmptyRecipient,

    #[error("message text must not be empty")]
    EmptyMessageText,

    #[error("unknown message type '{0}'")]
    UnknownMessageKind(String),

    #[error("limit must be a positive integer, got '{0}'")]
    InvalidLimit(String),

    #[error("malformed request body: {0}")]
    MalformedBody(String),
}

/// Document store failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// Unique index on `participants.name` rejected the insert
    #[error("participant '{0}' already exists")]
    DuplicateParticipantName(String),

    #[error("document store unavailable: {0}")]
    Unavailable(String),
}
