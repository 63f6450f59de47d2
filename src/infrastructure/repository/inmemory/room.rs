//! In-memory Room Store implementation.
//!
//! A HashMap behind a single async Mutex serves as the store. Membership
//! mutation and history append for a room happen under the lock, so no
//! reader observes a partially-applied mutation; every read returns a
//! cloned snapshot taken at call time.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    common::time::now_timestamp_millis,
    domain::{
        ChatMessage, RepositoryError, Room, RoomId, RoomRepository, SessionId, Timestamp,
    },
};

/// In-memory Room Store
pub struct InMemoryRoomRepository {
    rooms: Mutex<HashMap<RoomId, Room>>,
    /// History capacity applied to lazily created rooms
    history_capacity: usize,
}

impl InMemoryRoomRepository {
    /// Create an empty store
    pub fn new(history_capacity: usize) -> Self {
        Self {
            rooms: Mutex::new(HashMap::new()),
            history_capacity,
        }
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn get_or_create(&self, room_id: &RoomId, name: &str) -> Room {
        let mut rooms = self.rooms.lock().await;
        rooms
            .entry(room_id.clone())
            .or_insert_with(|| {
                Room::with_capacity(
                    room_id.clone(),
                    name.to_string(),
                    Timestamp::new(now_timestamp_millis()),
                    self.history_capacity,
                )
            })
            .clone()
    }

    async fn find_room(&self, room_id: &RoomId) -> Option<Room> {
        let rooms = self.rooms.lock().await;
        rooms.get(room_id).cloned()
    }

    async fn rooms(&self) -> Vec<Room> {
        let rooms = self.rooms.lock().await;
        rooms.values().cloned().collect()
    }

    async fn add_member(
        &self,
        room_id: &RoomId,
        session_id: SessionId,
    ) -> Result<(), RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        let room = rooms
            .get_mut(room_id)
            .ok_or_else(|| RepositoryError::RoomNotFound(room_id.as_str().to_string()))?;
        room.add_member(session_id);
        Ok(())
    }

    async fn remove_member(&self, room_id: &RoomId, session_id: &SessionId) {
        let mut rooms = self.rooms.lock().await;
        if let Some(room) = rooms.get_mut(room_id) {
            room.remove_member(session_id);
        }
    }

    async fn append_message(&self, message: ChatMessage) -> Result<(), RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        let room = rooms
            .get_mut(&message.room_id)
            .ok_or_else(|| RepositoryError::RoomNotFound(message.room_id.as_str().to_string()))?;
        room.append_message(message);
        Ok(())
    }

    async fn recent_messages(&self, room_id: &RoomId, limit: usize) -> Vec<ChatMessage> {
        let rooms = self.rooms.lock().await;
        rooms
            .get(room_id)
            .map(|room| room.recent_messages(limit))
            .unwrap_or_default()
    }
}
