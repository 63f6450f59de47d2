//! Core domain models for the chat server.

use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

use super::value_object::{Color, DisplayName, MessageBody, MessageId, RoomId, SessionId, Timestamp};

/// Identifier of the room every session joins (the only room this server
/// creates on its own)
pub const DEFAULT_ROOM_ID: &str = "general";

/// Display name of the default room
pub const DEFAULT_ROOM_NAME: &str = "General";

/// Default maximum number of messages retained per room
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Default number of recent messages replayed to a newly joined session
pub const DEFAULT_JOIN_REPLAY_LIMIT: usize = 20;

/// Default number of recent messages returned on an explicit fetch
pub const DEFAULT_HISTORY_FETCH_LIMIT: usize = 50;

/// Represents a chat room with its member set and bounded message history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Room identifier
    pub id: RoomId,
    /// Human-readable room name
    pub name: String,
    /// Session ids currently joined (back-references, not ownership)
    pub members: HashSet<SessionId>,
    /// Message history, oldest first. Bounded by `history_capacity`.
    pub history: VecDeque<ChatMessage>,
    /// Timestamp when the room was created
    pub created_at: Timestamp,
    /// Maximum number of retained messages; oldest evicted first
    pub history_capacity: usize,
}

impl Room {
    /// Create a new empty room with the default history capacity
    pub fn new(id: RoomId, name: String, created_at: Timestamp) -> Self {
        Self::with_capacity(id, name, created_at, DEFAULT_HISTORY_CAPACITY)
    }

    /// Create a new empty room with a custom history capacity
    pub fn with_capacity(
        id: RoomId,
        name: String,
        created_at: Timestamp,
        history_capacity: usize,
    ) -> Self {
        Self {
            id,
            name,
            members: HashSet::new(),
            history: VecDeque::new(),
            created_at,
            history_capacity,
        }
    }

    /// Add a member to the room. Adding a member twice is a no-op.
    pub fn add_member(&mut self, session_id: SessionId) {
        self.members.insert(session_id);
    }

    /// Remove a member from the room. Removing an absent member is a no-op.
    pub fn remove_member(&mut self, session_id: &SessionId) {
        self.members.remove(session_id);
    }

    /// Append a message to the history tail, evicting from the head while
    /// the history exceeds its capacity. Never rejects a message.
    pub fn append_message(&mut self, message: ChatMessage) {
        self.history.push_back(message);
        while self.history.len() > self.history_capacity {
            self.history.pop_front();
        }
    }

    /// Get at most `limit` of the most recent messages, oldest first.
    pub fn recent_messages(&self, limit: usize) -> Vec<ChatMessage> {
        let skip = self.history.len().saturating_sub(limit);
        self.history.iter().skip(skip).cloned().collect()
    }
}

/// Server-side record of one connected, identified participant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Session identifier (client-supplied token or generated)
    pub id: SessionId,
    /// Sanitized display name
    pub display_name: DisplayName,
    /// The room this session is currently joined to (exactly one)
    pub room_id: RoomId,
    /// Presentation color derived from the display name
    pub color: Color,
    /// Timestamp when the session connected
    pub connected_at: Timestamp,
}

impl Session {
    /// Create a new session. The color is derived from the display name.
    pub fn new(
        id: SessionId,
        display_name: DisplayName,
        room_id: RoomId,
        connected_at: Timestamp,
    ) -> Self {
        let color = Color::for_display_name(&display_name);
        Self {
            id,
            display_name,
            room_id,
            color,
            connected_at,
        }
    }
}

/// A validated, enriched chat message. Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique message identifier
    pub id: MessageId,
    /// Sender's session id
    pub session_id: SessionId,
    /// Sender's display name at send time
    pub display_name: DisplayName,
    /// The room this message belongs to
    pub room_id: RoomId,
    /// Validated message body
    pub body: MessageBody,
    /// Sender's presentation color
    pub color: Color,
    /// Server-assigned creation timestamp
    pub created_at: Timestamp,
}

impl ChatMessage {
    /// Create a new chat message from a sender session and validated body
    pub fn new(id: MessageId, session: &Session, body: MessageBody, created_at: Timestamp) -> Self {
        Self {
            id,
            session_id: session.id.clone(),
            display_name: session.display_name.clone(),
            room_id: session.room_id.clone(),
            body,
            color: session.color.clone(),
            created_at,
        }
    }
}
