//! Room-scoped WebSocket chat server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin retrochat-server
//! ```

use clap::Parser;

use retrochat::{config::ServerConfig, logger::setup_logger};

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger("retrochat", "debug");

    let config = ServerConfig::parse();

    // Run the server
    if let Err(e) = retrochat::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
