use crate::model::id::{BookingId, UserId};
use derive_new::new;

#[derive(new)]
pub struct SendMessage {
    pub booking_id: BookingId,
    pub sender_id: UserId,
    pub body: String,
}
