//! UseCase: room fan-out (the broadcast engine).
//!
//! The payload is serialized once and the identical bytes go to every
//! session currently registered in the room. Delivery is fire-and-forget:
//! a handle whose connection is gone is skipped, never retried or queued,
//! and one dead recipient never aborts delivery to the rest.

use std::sync::Arc;

use serde::Serialize;

use crate::{
    domain::{RoomId, SessionRegistry},
    infrastructure::dto::websocket::UserCountPayload,
};

use super::error::BroadcastError;

/// UseCase for delivering payloads to every live member of a room
pub struct BroadcastUseCase {
    sessions: Arc<dyn SessionRegistry>,
}

impl BroadcastUseCase {
    /// Create a new BroadcastUseCase
    pub fn new(sessions: Arc<dyn SessionRegistry>) -> Self {
        Self { sessions }
    }

    /// Serialize `payload` once and deliver it to every live member of
    /// the room, the sender of the payload included.
    ///
    /// The membership snapshot is taken under the registry lock; the sends
    /// happen after release, against per-connection channels that never
    /// block on network I/O.
    pub async fn broadcast_to_room(
        &self,
        room_id: &RoomId,
        payload: &impl Serialize,
    ) -> Result<(), BroadcastError> {
        let json = serde_json::to_string(payload)?;
        let members = self.sessions.members_of(room_id).await;

        for handle in members {
            if handle.sender.send(json.clone()).is_err() {
                tracing::warn!(
                    "Skipping delivery to session '{}': connection gone",
                    handle.session.id
                );
            }
        }

        Ok(())
    }

    /// Recompute the room's live membership size and fan out a presence
    /// update. Invoked after every join and every leave.
    pub async fn broadcast_presence_count(&self, room_id: &RoomId) -> Result<(), BroadcastError> {
        let user_count = self.sessions.count_in_room(room_id).await;
        self.broadcast_to_room(room_id, &UserCountPayload { user_count })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{DisplayName, Session, SessionId, Timestamp, repository::MockSessionRegistry},
        ui::state::SessionHandle,
    };
    use tokio::sync::mpsc::{self, UnboundedReceiver};

    fn general() -> RoomId {
        RoomId::new("general".to_string()).unwrap()
    }

    fn test_handle(name: &str) -> (SessionHandle, UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let session = Session::new(
            SessionId::new(format!("{name}-id")).unwrap(),
            DisplayName::sanitize(name),
            general(),
            Timestamp::new(0),
        );
        (SessionHandle { session, sender: tx }, rx)
    }

    #[tokio::test]
    async fn test_broadcast_delivers_identical_payload_to_all_members() {
        // テスト項目: 全メンバーに同一のシリアライズ済みペイロードが届く
        // given (前提条件): general に 2 人
        let (alice_handle, mut alice_rx) = test_handle("alice");
        let (bob_handle, mut bob_rx) = test_handle("bob");

        let mut registry = MockSessionRegistry::new();
        registry.expect_members_of().returning(move |_| {
            vec![alice_handle.clone(), bob_handle.clone()]
        });

        let usecase = BroadcastUseCase::new(Arc::new(registry));

        // when (操作):
        let payload = serde_json::json!({"message": "hello"});
        usecase
            .broadcast_to_room(&general(), &payload)
            .await
            .unwrap();

        // then (期待する結果): 両者が同じ文字列を受信
        let alice_got = alice_rx.recv().await.unwrap();
        let bob_got = bob_rx.recv().await.unwrap();
        assert_eq!(alice_got, bob_got);
        assert_eq!(alice_got, r#"{"message":"hello"}"#);
    }

    #[tokio::test]
    async fn test_broadcast_skips_dead_recipient() {
        // テスト項目: 受信側が閉じたハンドルはスキップされ、他への配信は継続する
        // given (前提条件): bob の受信側を drop
        let (alice_handle, mut alice_rx) = test_handle("alice");
        let (bob_handle, bob_rx) = test_handle("bob");
        drop(bob_rx);

        let mut registry = MockSessionRegistry::new();
        registry.expect_members_of().returning(move |_| {
            // 配信順で bob が先（失敗後も継続することを確認するため）
            vec![bob_handle.clone(), alice_handle.clone()]
        });

        let usecase = BroadcastUseCase::new(Arc::new(registry));

        // when (操作):
        let payload = serde_json::json!({"message": "hello"});
        let result = usecase.broadcast_to_room(&general(), &payload).await;

        // then (期待する結果): エラーにならず alice には届く
        assert!(result.is_ok());
        assert_eq!(alice_rx.recv().await.unwrap(), r#"{"message":"hello"}"#);
    }

    #[tokio::test]
    async fn test_broadcast_to_empty_room_is_noop() {
        // テスト項目: メンバー不在のルームへのブロードキャストは何もしない
        // given (前提条件):
        let mut registry = MockSessionRegistry::new();
        registry.expect_members_of().returning(|_| Vec::new());

        let usecase = BroadcastUseCase::new(Arc::new(registry));

        // when (操作):
        let result = usecase
            .broadcast_to_room(&general(), &serde_json::json!({"message": "hello"}))
            .await;

        // then (期待する結果):
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_presence_count_broadcasts_current_membership_size() {
        // テスト項目: 人数通知は現在のメンバー数を再計算して配信する
        // given (前提条件): 2 人のルーム
        let (alice_handle, mut alice_rx) = test_handle("alice");
        let (bob_handle, mut bob_rx) = test_handle("bob");

        let mut registry = MockSessionRegistry::new();
        registry.expect_count_in_room().returning(|_| 2);
        registry.expect_members_of().returning(move |_| {
            vec![alice_handle.clone(), bob_handle.clone()]
        });

        let usecase = BroadcastUseCase::new(Arc::new(registry));

        // when (操作):
        usecase.broadcast_presence_count(&general()).await.unwrap();

        // then (期待する結果):
        assert_eq!(alice_rx.recv().await.unwrap(), r#"{"userCount":2}"#);
        assert_eq!(bob_rx.recv().await.unwrap(), r#"{"userCount":2}"#);
    }
}
