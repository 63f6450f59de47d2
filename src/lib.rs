//! Room-scoped real-time chat server.
//!
//! Clients connect over WebSocket, join a room and exchange short text
//! messages that are fanned out to every live member of that room, with a
//! bounded recent-history replay for newcomers.

pub mod common;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod ui;
pub mod usecase;

// Re-export entry point
pub use ui::run_server;
