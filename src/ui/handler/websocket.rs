//! WebSocket connection handler: the connection lifecycle controller.
//!
//! Each connection walks UNINITIALIZED -> ACTIVE -> CLOSED. The session is
//! `None` until the first decodable payload carrying a display name joins
//! the default room; after that every payload is routed through the message
//! pipeline; the close of the socket stream is the only cleanup trigger.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc::{self, UnboundedSender};

use crate::{
    domain::Session,
    infrastructure::dto::websocket::{
        ChatMessagePayload, HistoryPayload, InboundEnvelope, SystemNotice,
    },
    ui::state::AppState,
    usecase::{
        BroadcastUseCase, DisconnectUseCase, JoinRoomUseCase, SendMessageError, SendMessageUseCase,
    },
};

/// Notice sent when a payload cannot be decoded or processed
const PROCESSING_FAILED_NOTICE: &str = "Message processing failed.";

/// Notice sent when a chat body fails validation
const INVALID_MESSAGE_NOTICE: &str = "Invalid message format or length.";

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut ws_sender, mut ws_receiver) = socket.split();

    // Per-connection outbound channel: the transport handle registered for
    // this session. Senders never block on network I/O; this task alone
    // writes to the socket.
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();
    let send_task = tokio::spawn(async move {
        while let Some(payload) = rx.recv().await {
            if ws_sender.send(Message::Text(payload.into())).await.is_err() {
                break;
            }
        }
    });

    let broadcast = BroadcastUseCase::new(state.sessions.clone());

    // UNINITIALIZED until the first successful join
    let mut session: Option<Session> = None;

    while let Some(received) = ws_receiver.next().await {
        let message = match received {
            Ok(message) => message,
            Err(e) => {
                // Observed but not acted on: cleanup happens when the
                // stream ends, and a read error ends it right here.
                tracing::error!("WebSocket error: {}", e);
                break;
            }
        };

        match message {
            Message::Text(text) => {
                handle_inbound(&state, &broadcast, &tx, &mut session, text.as_str()).await;
            }
            Message::Ping(_) => {
                tracing::debug!("Received ping");
                // Ping/pong is handled automatically by the WebSocket protocol
            }
            Message::Close(_) => {
                tracing::info!("Client requested close");
                break;
            }
            _ => {}
        }
    }

    // CLOSED: terminal. No further events are processed for this
    // connection.
    send_task.abort();

    if let Some(session) = session {
        let disconnect = DisconnectUseCase::new(state.rooms.clone(), state.sessions.clone());
        disconnect.execute(&session).await;

        let notice = SystemNotice::new(format!("{} left the chat", session.display_name));
        if let Err(e) = broadcast.broadcast_to_room(&session.room_id, &notice).await {
            tracing::error!("Failed to broadcast leave notice: {}", e);
        }
        if let Err(e) = broadcast.broadcast_presence_count(&session.room_id).await {
            tracing::error!("Failed to broadcast presence count: {}", e);
        }

        tracing::info!("Session '{}' disconnected", session.id);
    }
}

/// Route one inbound text payload according to the connection state.
async fn handle_inbound(
    state: &Arc<AppState>,
    broadcast: &BroadcastUseCase,
    tx: &UnboundedSender<String>,
    session: &mut Option<Session>,
    text: &str,
) {
    let envelope = match serde_json::from_str::<InboundEnvelope>(text) {
        Ok(envelope) => envelope,
        Err(e) => {
            tracing::warn!("Failed to decode payload: {}", e);
            send_notice(tx, PROCESSING_FAILED_NOTICE);
            return;
        }
    };

    match session {
        // UNINITIALIZED: the first payload must carry a display name
        None => {
            let Some(username) = envelope.username.as_deref() else {
                tracing::warn!("First payload carried no username");
                send_notice(tx, PROCESSING_FAILED_NOTICE);
                return;
            };

            let join = JoinRoomUseCase::new(
                state.rooms.clone(),
                state.sessions.clone(),
                state.config.clone(),
            );
            match join
                .execute(envelope.user_id.as_deref(), username, tx.clone())
                .await
            {
                Ok(outcome) => {
                    // History replay goes to the newcomer only
                    match serde_json::to_string(&HistoryPayload::new(&outcome.history)) {
                        Ok(json) => {
                            let _ = tx.send(json);
                        }
                        Err(e) => tracing::error!("Failed to serialize history replay: {}", e),
                    }

                    let notice = SystemNotice::new(format!(
                        "{} joined the chat",
                        outcome.session.display_name
                    ));
                    if let Err(e) = broadcast
                        .broadcast_to_room(&outcome.session.room_id, &notice)
                        .await
                    {
                        tracing::error!("Failed to broadcast join notice: {}", e);
                    }
                    if let Err(e) = broadcast
                        .broadcast_presence_count(&outcome.session.room_id)
                        .await
                    {
                        tracing::error!("Failed to broadcast presence count: {}", e);
                    }

                    tracing::info!(
                        "Session '{}' joined room '{}' as '{}'",
                        outcome.session.id,
                        outcome.session.room_id,
                        outcome.session.display_name
                    );

                    // -> ACTIVE
                    *session = Some(outcome.session);
                }
                Err(e) => {
                    tracing::warn!("Join failed: {}", e);
                    send_notice(tx, PROCESSING_FAILED_NOTICE);
                }
            }
        }

        // ACTIVE: route through the message pipeline
        Some(active) => {
            let raw_body = envelope.message.as_deref().unwrap_or_default();
            let pipeline =
                SendMessageUseCase::new(state.rooms.clone(), state.config.max_message_length);

            match pipeline.execute(active, raw_body).await {
                Ok(message) => {
                    let payload = ChatMessagePayload::from(&message);
                    if let Err(e) = broadcast.broadcast_to_room(&active.room_id, &payload).await {
                        tracing::error!("Failed to broadcast chat message: {}", e);
                    }
                }
                Err(SendMessageError::InvalidMessage(e)) => {
                    // Sender only; never broadcast, not a fault
                    tracing::debug!("Rejected message from '{}': {}", active.id, e);
                    send_notice(tx, INVALID_MESSAGE_NOTICE);
                }
                Err(e) => {
                    tracing::warn!("Failed to record message from '{}': {}", active.id, e);
                    send_notice(tx, PROCESSING_FAILED_NOTICE);
                }
            }
        }
    }
}

/// Send a system notice to this connection only.
fn send_notice(tx: &UnboundedSender<String>, message: &str) {
    if let Ok(json) = serde_json::to_string(&SystemNotice::new(message)) {
        let _ = tx.send(json);
    }
}
