//! UseCase: joining the default room.
//!
//! The first decodable payload of a connection carries a candidate display
//! name and optionally a client-supplied identity token. This usecase
//! resolves the identity, sanitizes the name once for the session's
//! lifetime, registers the session and returns the history to replay.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use crate::{
    common::time::now_timestamp_millis,
    config::ServerConfig,
    domain::{
        ChatMessage, DEFAULT_ROOM_ID, DEFAULT_ROOM_NAME, DisplayName, RoomRepository, Session,
        SessionId, SessionIdFactory, SessionRegistry, Timestamp,
    },
};

use super::error::JoinError;

/// Result of a successful join
#[derive(Debug, Clone)]
pub struct JoinOutcome {
    /// The registered session
    pub session: Session,
    /// Recent room history to replay to the newcomer only, oldest first
    pub history: Vec<ChatMessage>,
}

/// UseCase for connecting a participant to the default room
pub struct JoinRoomUseCase {
    rooms: Arc<dyn RoomRepository>,
    sessions: Arc<dyn SessionRegistry>,
    config: ServerConfig,
}

impl JoinRoomUseCase {
    /// Create a new JoinRoomUseCase
    pub fn new(
        rooms: Arc<dyn RoomRepository>,
        sessions: Arc<dyn SessionRegistry>,
        config: ServerConfig,
    ) -> Self {
        Self {
            rooms,
            sessions,
            config,
        }
    }

    /// Execute the join.
    ///
    /// A valid client-supplied token is reused as the session id so a
    /// reconnecting client keeps its identity; an invalid or missing token
    /// falls back to a generated id. Registering an id that is already
    /// present replaces the stale entry (identity continuation).
    pub async fn execute(
        &self,
        client_token: Option<&str>,
        raw_username: &str,
        sender: UnboundedSender<String>,
    ) -> Result<JoinOutcome, JoinError> {
        let session_id = client_token
            .and_then(|token| SessionId::new(token.to_string()).ok())
            .unwrap_or_else(SessionIdFactory::generate);

        // Sanitization happens once per session, not per message.
        let display_name =
            DisplayName::sanitize_with_limit(raw_username, self.config.max_display_name_length);

        let room = self
            .rooms
            .get_or_create(&default_room_id(), DEFAULT_ROOM_NAME)
            .await;

        let session = Session::new(
            session_id,
            display_name,
            room.id.clone(),
            Timestamp::new(now_timestamp_millis()),
        );

        self.rooms
            .add_member(&session.room_id, session.id.clone())
            .await?;
        self.sessions.register(session.clone(), sender).await;

        let history = self
            .rooms
            .recent_messages(&session.room_id, self.config.join_replay_limit)
            .await;

        Ok(JoinOutcome { session, history })
    }
}

/// RoomId of the default room. The constant is a valid id, so this cannot
/// fail.
pub fn default_room_id() -> crate::domain::RoomId {
    crate::domain::RoomId::new(DEFAULT_ROOM_ID.to_string()).unwrap_or_else(|_| unreachable!())
}
