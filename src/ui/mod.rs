//! UI layer: WebSocket/HTTP endpoints and server assembly.

pub mod handler;
pub mod runner;
pub mod signal;
pub mod state;

pub use runner::run_server;
