use crate::model::id::{BookingId, MessageId, UserId};
use chrono::{DateTime, Utc};

pub mod event;

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub message_id: MessageId,
    pub booking_id: BookingId,
    pub sender_id: UserId,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}
