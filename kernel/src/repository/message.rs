use crate::model::{
    id::{BookingId, MessageId, UserId},
    message::{event::SendMessage, ChatMessage},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// The sender must be a party of a live (non-rejected) booking.
    async fn send(&self, event: SendMessage) -> AppResult<MessageId>;
    /// Oldest first. The requester must be a party of the booking.
    async fn find_by_booking_id(
        &self,
        booking_id: BookingId,
        requested_user: UserId,
    ) -> AppResult<Vec<ChatMessage>>;
}
