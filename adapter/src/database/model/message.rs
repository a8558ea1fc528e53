use chrono::{DateTime, Utc};
use kernel::model::{
    id::{BookingId, MessageId, UserId},
    message::ChatMessage,
};
use sqlx::FromRow;

#[derive(FromRow)]
pub struct ChatMessageRow {
    pub message_id: MessageId,
    pub booking_id: BookingId,
    pub sender_id: UserId,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

impl From<ChatMessageRow> for ChatMessage {
    fn from(value: ChatMessageRow) -> Self {
        let ChatMessageRow {
            message_id,
            booking_id,
            sender_id,
            body,
            sent_at,
        } = value;
        ChatMessage {
            message_id,
            booking_id,
            sender_id,
            body,
            sent_at,
        }
    }
}
