//! Top-level server error definitions.

use thiserror::Error;

/// Errors that abort server startup or the serve loop
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind the listener or serve connections
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
