//! Repository traits owned by the domain layer.
//!
//! The usecase layer depends on these traits, not on the in-memory
//! implementations in the infrastructure layer (dependency inversion).

use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedSender;

#[cfg(test)]
use mockall::automock;

use super::{
    entity::{ChatMessage, Room, Session},
    error::RepositoryError,
    value_object::{RoomId, SessionId},
};
use crate::ui::state::SessionHandle;

/// Room Store: owns room entities (member set, bounded message history).
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Get a snapshot of a room, creating it first if it does not exist.
    async fn get_or_create(&self, room_id: &RoomId, name: &str) -> Room;

    /// Get a snapshot of a room, or None if it does not exist.
    async fn find_room(&self, room_id: &RoomId) -> Option<Room>;

    /// Get snapshots of all rooms.
    async fn rooms(&self) -> Vec<Room>;

    /// Add a session to a room's member set.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::RoomNotFound` if the room does not exist.
    async fn add_member(&self, room_id: &RoomId, session_id: SessionId)
    -> Result<(), RepositoryError>;

    /// Remove a session from a room's member set.
    ///
    /// Idempotent: removing an absent member (or from an absent room) is a
    /// no-op, never an error.
    async fn remove_member(&self, room_id: &RoomId, session_id: &SessionId);

    /// Append a message to its room's history, evicting the oldest entry
    /// when the history exceeds its capacity.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::RoomNotFound` if the room does not exist.
    async fn append_message(&self, message: ChatMessage) -> Result<(), RepositoryError>;

    /// Get at most `limit` of a room's most recent messages, oldest first.
    /// An absent room yields an empty list.
    async fn recent_messages(&self, room_id: &RoomId, limit: usize) -> Vec<ChatMessage>;
}

/// Session Registry: maps each live connection to its session and
/// transport handle. The registry, not the room's member set, is the
/// source of truth for fan-out targets.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SessionRegistry: Send + Sync {
    /// Register a session with its transport handle.
    ///
    /// Registering an already-present session id replaces the old entry:
    /// the same id is identity continuation across reconnects, not a
    /// distinct user.
    async fn register(&self, session: Session, sender: UnboundedSender<String>);

    /// Unregister a session. Called unconditionally on connection close.
    async fn unregister(&self, session_id: &SessionId);

    /// Look up a session by id.
    async fn get(&self, session_id: &SessionId) -> Option<Session>;

    /// Snapshot of the live sessions currently in a room, taken at call
    /// time (never a stale cache).
    async fn members_of(&self, room_id: &RoomId) -> Vec<SessionHandle>;

    /// Number of live sessions currently in a room (presence count).
    async fn count_in_room(&self, room_id: &RoomId) -> usize;
}
