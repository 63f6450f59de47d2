//! HTTP API endpoint handlers for server inspection.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    common::time::timestamp_to_rfc3339,
    domain::{DEFAULT_HISTORY_FETCH_LIMIT, RoomId},
    infrastructure::dto::{
        http::{MemberDetailDto, RoomDetailDto, RoomSummaryDto},
        websocket::ChatMessagePayload,
    },
    ui::state::AppState,
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Get list of rooms
pub async fn get_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomSummaryDto>> {
    let rooms = state.rooms.rooms().await;

    let summaries = rooms
        .iter()
        .map(|room| RoomSummaryDto {
            id: room.id.as_str().to_string(),
            name: room.name.clone(),
            members: room
                .members
                .iter()
                .map(|session_id| session_id.as_str().to_string())
                .collect(),
            created_at: timestamp_to_rfc3339(room.created_at.value()),
        })
        .collect();

    Json(summaries)
}

/// Get room detail by ID, including the most recent messages
pub async fn get_room_detail(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomDetailDto>, StatusCode> {
    let room_id = RoomId::new(room_id).map_err(|_| StatusCode::BAD_REQUEST)?;

    let room = state
        .rooms
        .find_room(&room_id)
        .await
        .ok_or(StatusCode::NOT_FOUND)?;

    let mut members = Vec::with_capacity(room.members.len());
    for session_id in &room.members {
        // Membership is pruned on disconnect, so a registered session
        // should exist for every member; a missing one is skipped.
        if let Some(session) = state.sessions.get(session_id).await {
            members.push(MemberDetailDto {
                session_id: session.id.as_str().to_string(),
                username: session.display_name.as_str().to_string(),
                connected_at: timestamp_to_rfc3339(session.connected_at.value()),
            });
        }
    }
    members.sort_by(|a, b| a.session_id.cmp(&b.session_id));

    let recent_messages = state
        .rooms
        .recent_messages(&room.id, DEFAULT_HISTORY_FETCH_LIMIT)
        .await
        .iter()
        .map(ChatMessagePayload::from)
        .collect();

    Ok(Json(RoomDetailDto {
        id: room.id.as_str().to_string(),
        name: room.name.clone(),
        members,
        recent_messages,
        created_at: timestamp_to_rfc3339(room.created_at.value()),
    }))
}
