//! UseCase: participant disconnection.
//!
//! Runs unconditionally when a connection closes, even if earlier
//! processing for that connection failed. Both steps are idempotent, so
//! the cleanup itself cannot fail.

use std::sync::Arc;

use crate::domain::{RoomRepository, Session, SessionRegistry};

/// UseCase for removing a disconnected participant
pub struct DisconnectUseCase {
    rooms: Arc<dyn RoomRepository>,
    sessions: Arc<dyn SessionRegistry>,
}

impl DisconnectUseCase {
    /// Create a new DisconnectUseCase
    pub fn new(rooms: Arc<dyn RoomRepository>, sessions: Arc<dyn SessionRegistry>) -> Self {
        Self { rooms, sessions }
    }

    /// Remove the session from its room's member set and from the registry.
    pub async fn execute(&self, session: &Session) {
        self.rooms
            .remove_member(&session.room_id, &session.id)
            .await;
        self.sessions.unregister(&session.id).await;
    }
}
