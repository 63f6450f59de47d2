//! Shared test fixtures.

use std::net::SocketAddr;

use retrochat::{
    config::ServerConfig,
    ui::runner::{build_router, build_state},
};

/// A chat server running on an OS-assigned port for the duration of one
/// test.
pub struct TestServer {
    addr: SocketAddr,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Start a server with the default configuration.
    pub async fn start() -> Self {
        Self::start_with_config(ServerConfig::default()).await
    }

    /// Start a server with a custom configuration. The listener is bound
    /// before this returns, so tests can connect immediately.
    pub async fn start_with_config(config: ServerConfig) -> Self {
        let state = build_state(config).await;
        let app = build_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Test server crashed");
        });

        Self { addr, handle }
    }

    /// Base URL for HTTP requests
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// URL for WebSocket connections
    pub fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
