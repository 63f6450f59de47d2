//! Domain factories for generating identifiers.

use super::value_object::{MessageId, SessionId};

/// Factory for generating SessionId instances.
///
/// Used when a client does not supply its own identity token; a fresh
/// UUID v4 keeps generated ids collision-resistant.
pub struct SessionIdFactory;

impl SessionIdFactory {
    /// Generate a new SessionId from a random UUID v4.
    pub fn generate() -> SessionId {
        let uuid = uuid::Uuid::new_v4();
        // A UUID string is never empty nor over-long, so this cannot fail.
        SessionId::new(uuid.to_string()).unwrap_or_else(|_| unreachable!())
    }
}

/// Factory for generating MessageId instances.
pub struct MessageIdFactory;

impl MessageIdFactory {
    /// Generate a new MessageId from a random UUID v4.
    pub fn generate() -> MessageId {
        MessageId::from_uuid(uuid::Uuid::new_v4())
    }
}
