//! Server state and connection management.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use crate::{
    config::ServerConfig,
    domain::{RoomRepository, Session, SessionRegistry},
};

/// A live room member: the session plus its transport handle.
///
/// The sender is the write end of the per-connection channel; a forwarding
/// task drains it into the WebSocket sink. Cloning is cheap, so membership
/// snapshots can be taken under the registry lock and used afterwards.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    /// The registered session
    pub session: Session,
    /// Outbound message channel for this connection
    pub sender: UnboundedSender<String>,
}

/// Shared application state, injected into every handler
pub struct AppState {
    /// Room Store (data access abstraction)
    pub rooms: Arc<dyn RoomRepository>,
    /// Session Registry (live connections)
    pub sessions: Arc<dyn SessionRegistry>,
    /// Runtime configuration
    pub config: ServerConfig,
}
