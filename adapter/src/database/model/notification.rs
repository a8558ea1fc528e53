use chrono::{DateTime, Utc};
use kernel::model::{
    id::{BookingId, NotificationId, UserId},
    notification::Notification,
};
use sqlx::FromRow;

#[derive(FromRow)]
pub struct NotificationRow {
    pub notification_id: NotificationId,
    pub user_id: UserId,
    pub booking_id: Option<BookingId>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<NotificationRow> for Notification {
    fn from(value: NotificationRow) -> Self {
        let NotificationRow {
            notification_id,
            user_id,
            booking_id,
            message,
            created_at,
        } = value;
        Notification {
            notification_id,
            user_id,
            booking_id,
            message,
            created_at,
        }
    }
}
