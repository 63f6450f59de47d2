//! UseCase layer error definitions.

use thiserror::Error;

use crate::domain::{RepositoryError, ValueObjectError};

/// Errors while joining a room
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JoinError {
    /// The room could not be updated
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Errors while processing an inbound chat message
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SendMessageError {
    /// The body failed validation (empty or over the length limit).
    /// Reported to the sender only, never broadcast.
    #[error("invalid message: {0}")]
    InvalidMessage(ValueObjectError),

    /// The sender's room vanished from the store
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Errors while fanning out a payload
#[derive(Debug, Error)]
pub enum BroadcastError {
    /// The payload could not be serialized
    #[error("failed to serialize broadcast payload: {0}")]
    Serialize(#[from] serde_json::Error),
}
