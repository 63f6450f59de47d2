//! In-memory Session Registry implementation.
//!
//! The registry is keyed by session id; `members_of` is a pure read over
//! the registry ("sessions where room_id = X"), synchronized independently
//! of any room's lock. Snapshots are collected under the lock and used
//! after release, so fan-out never iterates a structure being mutated by
//! another connection's join/leave.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::{Mutex, mpsc::UnboundedSender};

use crate::{
    domain::{RoomId, Session, SessionId, SessionRegistry},
    ui::state::SessionHandle,
};

/// In-memory Session Registry
pub struct InMemorySessionRegistry {
    sessions: Mutex<HashMap<SessionId, SessionHandle>>,
}

impl InMemorySessionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRegistry for InMemorySessionRegistry {
    async fn register(&self, session: Session, sender: UnboundedSender<String>) {
        let mut sessions = self.sessions.lock().await;
        // Insert-or-replace: a reconnect with the same id continues the
        // same identity and supersedes the stale handle.
        sessions.insert(session.id.clone(), SessionHandle { session, sender });
    }

    async fn unregister(&self, session_id: &SessionId) {
        let mut sessions = self.sessions.lock().await;
        sessions.remove(session_id);
    }

    async fn get(&self, session_id: &SessionId) -> Option<Session> {
        let sessions = self.sessions.lock().await;
        sessions.get(session_id).map(|handle| handle.session.clone())
    }

    async fn members_of(&self, room_id: &RoomId) -> Vec<SessionHandle> {
        let sessions = self.sessions.lock().await;
        sessions
            .values()
            .filter(|handle| &handle.session.room_id == room_id)
            .cloned()
            .collect()
    }

    async fn count_in_room(&self, room_id: &RoomId) -> usize {
        let sessions = self.sessions.lock().await;
        sessions
            .values()
            .filter(|handle| &handle.session.room_id == room_id)
            .count()
    }
}
