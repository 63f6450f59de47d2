//! Server assembly and serve loop.

use std::{net::SocketAddr, sync::Arc};

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{
    config::ServerConfig,
    domain::{DEFAULT_ROOM_NAME, RoomRepository, SessionRegistry},
    error::ServerError,
    infrastructure::repository::{InMemoryRoomRepository, InMemorySessionRegistry},
    ui::{
        handler::{get_room_detail, get_rooms, health_check, websocket_handler},
        signal::shutdown_signal,
        state::AppState,
    },
    usecase::join_room::default_room_id,
};

/// Build the application router for the given shared state.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/ws", get(websocket_handler))
        .route("/api/health", get(health_check))
        .route("/api/rooms", get(get_rooms))
        .route("/api/rooms/{room_id}", get(get_room_detail))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Build the shared state: repositories owned here, injected everywhere
/// else, alive for the whole process.
pub async fn build_state(config: ServerConfig) -> Arc<AppState> {
    let rooms: Arc<dyn RoomRepository> =
        Arc::new(InMemoryRoomRepository::new(config.history_capacity));
    let sessions: Arc<dyn SessionRegistry> = Arc::new(InMemorySessionRegistry::new());

    // The default room exists from startup
    rooms
        .get_or_create(&default_room_id(), DEFAULT_ROOM_NAME)
        .await;

    Arc::new(AppState {
        rooms,
        sessions,
        config,
    })
}

/// Run the chat server until a shutdown signal arrives.
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = build_state(config).await;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Chat server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
