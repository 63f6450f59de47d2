//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

use super::websocket::ChatMessagePayload;

/// Room summary for the list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSummaryDto {
    pub id: String,
    pub name: String,
    pub members: Vec<String>,
    pub created_at: String, // ISO 8601
}

/// Room detail for the detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDetailDto {
    pub id: String,
    pub name: String,
    pub members: Vec<MemberDetailDto>,
    /// The room's most recent messages, oldest first
    pub recent_messages: Vec<ChatMessagePayload>,
    pub created_at: String, // ISO 8601
}

/// Member detail for the room detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberDetailDto {
    pub session_id: String,
    pub username: String,
    pub connected_at: String, // ISO 8601
}
