//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// SessionId validation error
    #[error("SessionId cannot be empty")]
    SessionIdEmpty,

    /// SessionId too long error
    #[error("SessionId cannot exceed {max} characters (got {actual})")]
    SessionIdTooLong { max: usize, actual: usize },

    /// RoomId validation error
    #[error("RoomId cannot be empty")]
    RoomIdEmpty,

    /// RoomId too long error
    #[error("RoomId cannot exceed {max} characters (got {actual})")]
    RoomIdTooLong { max: usize, actual: usize },

    /// MessageBody validation error (empty after trimming)
    #[error("MessageBody cannot be empty")]
    MessageBodyEmpty,

    /// MessageBody too long error
    #[error("MessageBody cannot exceed {max} characters (got {actual})")]
    MessageBodyTooLong { max: usize, actual: usize },
}

/// Errors related to repository operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The requested room does not exist
    #[error("Room not found: {0}")]
    RoomNotFound(String),

    /// The requested session does not exist
    #[error("Session not found: {0}")]
    SessionNotFound(String),
}
