use chrono::{DateTime, Utc};
use kernel::model::{
    id::{BookingId, NotificationId},
    notification::Notification,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub notification_id: NotificationId,
    pub booking_id: Option<BookingId>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<Notification> for NotificationResponse {
    fn from(value: Notification) -> Self {
        let Notification {
            notification_id,
            booking_id,
            message,
            created_at,
            ..
        } = value;
        Self {
            notification_id,
            booking_id,
            message,
            created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsResponse {
    pub items: Vec<NotificationResponse>,
}

impl From<Vec<Notification>> for NotificationsResponse {
    fn from(value: Vec<Notification>) -> Self {
        Self {
            items: value.into_iter().map(NotificationResponse::from).collect(),
        }
    }
}
