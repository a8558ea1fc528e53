use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    id::{BookingId, MessageId, UserId},
    message::ChatMessage,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    #[garde(length(min = 1))]
    pub body: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageIdResponse {
    pub message_id: MessageId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageResponse {
    pub message_id: MessageId,
    pub booking_id: BookingId,
    pub sender_id: UserId,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

impl From<ChatMessage> for ChatMessageResponse {
    fn from(value: ChatMessage) -> Self {
        let ChatMessage {
            message_id,
            booking_id,
            sender_id,
            body,
            sent_at,
        } = value;
        Self {
            message_id,
            booking_id,
            sender_id,
            body,
            sent_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessagesResponse {
    pub items: Vec<ChatMessageResponse>,
}

impl From<Vec<ChatMessage>> for ChatMessagesResponse {
    fn from(value: Vec<ChatMessage>) -> Self {
        Self {
            items: value.into_iter().map(ChatMessageResponse::from).collect(),
        }
    }
}
