//! WebSocket envelope DTOs.
//!
//! The application-level envelope is plain JSON. Outbound payloads are
//! distinguished by shape, not by a type tag: a history replay carries
//! `messageHistory`, system notices carry `system: true`, presence updates
//! carry `userCount`, and everything else is a broadcast chat message.

use serde::{Deserialize, Serialize};

use crate::{common::time::timestamp_to_rfc3339, domain::ChatMessage};

/// Inbound client envelope.
///
/// The first message of a connection must carry `username`; subsequent
/// messages carry `message`. `userId` is an optional client-supplied token
/// for identity continuity across reconnects.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundEnvelope {
    /// Client-supplied identity token (reconnect continuity)
    pub user_id: Option<String>,
    /// Raw display name, sanitized server-side
    pub username: Option<String>,
    /// Chat body
    pub message: Option<String>,
}

/// A broadcast chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessagePayload {
    pub username: String,
    pub message: String,
    pub color: String,
    /// RFC 3339 creation timestamp
    pub timestamp: String,
    pub user_id: String,
}

impl From<&ChatMessage> for ChatMessagePayload {
    fn from(message: &ChatMessage) -> Self {
        Self {
            username: message.display_name.as_str().to_string(),
            message: message.body.as_str().to_string(),
            color: message.color.as_str().to_string(),
            timestamp: timestamp_to_rfc3339(message.created_at.value()),
            user_id: message.session_id.as_str().to_string(),
        }
    }
}

/// History replay sent once, immediately after join, to the newcomer only
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPayload {
    pub message_history: Vec<ChatMessagePayload>,
}

impl HistoryPayload {
    pub fn new(messages: &[ChatMessage]) -> Self {
        Self {
            message_history: messages.iter().map(ChatMessagePayload::from).collect(),
        }
    }
}

/// System notice (join/leave/error)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemNotice {
    pub system: bool,
    pub message: String,
}

impl SystemNotice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            system: true,
            message: message.into(),
        }
    }
}

/// Presence update
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCountPayload {
    pub user_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        DisplayName, MessageBody, MessageIdFactory, RoomId, Session, SessionId, Timestamp,
    };

    fn test_message() -> ChatMessage {
        let session = Session::new(
            SessionId::new("alice-id".to_string()).unwrap(),
            DisplayName::sanitize("alice"),
            RoomId::new("general".to_string()).unwrap(),
            Timestamp::new(0),
        );
        ChatMessage::new(
            MessageIdFactory::generate(),
            &session,
            MessageBody::new("hello").unwrap(),
            Timestamp::new(1_700_000_000_000),
        )
    }

    #[test]
    fn test_inbound_envelope_deserializes_partial_fields() {
        // テスト項目: フィールドが一部欠けた受信エンベロープを解析できる
        // given (前提条件):
        let join = r#"{"username":"alice","userId":"alice-id"}"#;
        let chat = r#"{"message":"hello"}"#;

        // when (操作):
        let join_envelope: InboundEnvelope = serde_json::from_str(join).unwrap();
        let chat_envelope: InboundEnvelope = serde_json::from_str(chat).unwrap();

        // then (期待する結果):
        assert_eq!(join_envelope.username.as_deref(), Some("alice"));
        assert_eq!(join_envelope.user_id.as_deref(), Some("alice-id"));
        assert!(join_envelope.message.is_none());
        assert_eq!(chat_envelope.message.as_deref(), Some("hello"));
        assert!(chat_envelope.username.is_none());
    }

    #[test]
    fn test_chat_message_payload_wire_shape() {
        // テスト項目: チャットメッセージの wire 形式が仕様どおり
        // when (操作):
        let payload = ChatMessagePayload::from(&test_message());
        let json: serde_json::Value = serde_json::to_value(&payload).unwrap();

        // then (期待する結果): camelCase のフィールド名
        assert_eq!(json["username"], "alice");
        assert_eq!(json["message"], "hello");
        assert_eq!(json["userId"], "alice-id");
        assert!(json["color"].as_str().unwrap().starts_with('#'));
        assert!(json["timestamp"].as_str().unwrap().starts_with("2023-"));
    }

    #[test]
    fn test_history_payload_wire_shape() {
        // テスト項目: 履歴リプレイは messageHistory キーで配列を返す
        // when (操作):
        let payload = HistoryPayload::new(&[test_message()]);
        let json: serde_json::Value = serde_json::to_value(&payload).unwrap();

        // then (期待する結果):
        assert!(json["messageHistory"].is_array());
        assert_eq!(json["messageHistory"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_system_notice_and_user_count_wire_shape() {
        // テスト項目: システム通知と人数通知の wire 形式が仕様どおり
        // when (操作):
        let notice = serde_json::to_value(SystemNotice::new("alice joined the chat")).unwrap();
        let count = serde_json::to_value(UserCountPayload { user_count: 2 }).unwrap();

        // then (期待する結果):
        assert_eq!(notice["system"], true);
        assert_eq!(notice["message"], "alice joined the chat");
        assert_eq!(count["userCount"], 2);
    }
}
