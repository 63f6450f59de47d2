//! UseCase layer.
//!
//! Business logic invoked by the UI layer; operates on the domain layer
//! through the repository traits.

pub mod broadcast;
pub mod disconnect;
pub mod error;
pub mod join_room;
pub mod send_message;

pub use broadcast::BroadcastUseCase;
pub use disconnect::DisconnectUseCase;
pub use error::{BroadcastError, JoinError, SendMessageError};
pub use join_room::{JoinOutcome, JoinRoomUseCase};
pub use send_message::SendMessageUseCase;
