use crate::model::{
    id::{NotificationId, UserId},
    notification::Notification,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Newest first.
    async fn find_all_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Notification>>;
    /// Dismiss one of the user's own notifications.
    async fn delete(&self, notification_id: NotificationId, user_id: UserId) -> AppResult<()>;
}
