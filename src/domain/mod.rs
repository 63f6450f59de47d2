//! Domain layer for the chat server.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod factory;
pub mod repository;
pub mod value_object;

pub use entity::{
    ChatMessage, DEFAULT_HISTORY_CAPACITY, DEFAULT_HISTORY_FETCH_LIMIT, DEFAULT_JOIN_REPLAY_LIMIT,
    DEFAULT_ROOM_ID, DEFAULT_ROOM_NAME, Room, Session,
};
pub use error::{RepositoryError, ValueObjectError};
pub use factory::{MessageIdFactory, SessionIdFactory};
pub use repository::{RoomRepository, SessionRegistry};
pub use value_object::{
    Color, DEFAULT_MAX_DISPLAY_NAME_LENGTH, DEFAULT_MAX_MESSAGE_LENGTH, DisplayName, MessageBody,
    MessageId, RoomId, SessionId, Timestamp,
};
