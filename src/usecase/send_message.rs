//! UseCase: processing an inbound chat message (the message pipeline).
//!
//! Validation and enrichment are pure and happen before the store lock is
//! taken; the store only ever sees fully-formed immutable messages.

use std::sync::Arc;

use crate::{
    common::time::now_timestamp_millis,
    domain::{ChatMessage, MessageBody, MessageIdFactory, RoomRepository, Session, Timestamp},
};

use super::error::SendMessageError;

/// UseCase for validating, enriching and recording a chat message
pub struct SendMessageUseCase {
    rooms: Arc<dyn RoomRepository>,
    max_message_length: usize,
}

impl SendMessageUseCase {
    /// Create a new SendMessageUseCase
    pub fn new(rooms: Arc<dyn RoomRepository>, max_message_length: usize) -> Self {
        Self {
            rooms,
            max_message_length,
        }
    }

    /// Execute the pipeline: validate the raw body, enrich it with the
    /// sender's identity and server-assigned id/timestamp, and append it
    /// to the sender's room history.
    ///
    /// # Returns
    ///
    /// * `Ok(ChatMessage)` - the immutable message, ready for fan-out
    /// * `Err(SendMessageError::InvalidMessage)` - body empty or too long;
    ///   surfaced to the sender only
    pub async fn execute(
        &self,
        sender: &Session,
        raw_body: &str,
    ) -> Result<ChatMessage, SendMessageError> {
        let body = MessageBody::with_limit(raw_body, self.max_message_length)
            .map_err(SendMessageError::InvalidMessage)?;

        let message = ChatMessage::new(
            MessageIdFactory::generate(),
            sender,
            body,
            Timestamp::new(now_timestamp_millis()),
        );

        self.rooms.append_message(message.clone()).await?;

        Ok(message)
    }
}
