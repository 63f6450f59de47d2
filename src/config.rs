//! Server configuration.
//!
//! Every knob can be set either as a CLI flag or as an environment
//! variable; defaults mirror the domain constants.

use clap::Parser;

use crate::domain::{
    DEFAULT_HISTORY_CAPACITY, DEFAULT_JOIN_REPLAY_LIMIT, DEFAULT_MAX_DISPLAY_NAME_LENGTH,
    DEFAULT_MAX_MESSAGE_LENGTH,
};

/// Runtime configuration for the chat server
#[derive(Debug, Clone, Parser)]
#[command(name = "retrochat-server", about = "Room-scoped real-time chat server")]
pub struct ServerConfig {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Maximum chat message length in characters (after trimming)
    #[arg(long, env = "MAX_MESSAGE_LENGTH", default_value_t = DEFAULT_MAX_MESSAGE_LENGTH)]
    pub max_message_length: usize,

    /// Maximum display name length in characters
    #[arg(long, env = "MAX_DISPLAY_NAME_LENGTH", default_value_t = DEFAULT_MAX_DISPLAY_NAME_LENGTH)]
    pub max_display_name_length: usize,

    /// Maximum number of messages retained per room (oldest evicted first)
    #[arg(long, env = "HISTORY_CAPACITY", default_value_t = DEFAULT_HISTORY_CAPACITY)]
    pub history_capacity: usize,

    /// Number of recent messages replayed to a newly joined client
    #[arg(long, env = "JOIN_REPLAY_LIMIT", default_value_t = DEFAULT_JOIN_REPLAY_LIMIT)]
    pub join_replay_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            max_message_length: DEFAULT_MAX_MESSAGE_LENGTH,
            max_display_name_length: DEFAULT_MAX_DISPLAY_NAME_LENGTH,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            join_replay_limit: DEFAULT_JOIN_REPLAY_LIMIT,
        }
    }
}
