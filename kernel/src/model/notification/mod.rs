use crate::model::id::{BookingId, NotificationId, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Notification {
    pub notification_id: NotificationId,
    pub user_id: UserId,
    /// Set when the notification was emitted by a booking transition.
    pub booking_id: Option<BookingId>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
