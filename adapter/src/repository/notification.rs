use crate::database::{model::notification::NotificationRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        id::{NotificationId, UserId},
        notification::Notification,
    },
    repository::notification::NotificationRepository,
};
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct NotificationRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl NotificationRepository for NotificationRepositoryImpl {
    async fn find_all_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Notification>> {
        let rows: Vec<NotificationRow> = sqlx::query_as(
            r#"
                SELECT notification_id, user_id, booking_id, message, created_at
                FROM notifications
                WHERE user_id = $1
                ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Notification::from).collect())
    }

    async fn delete(&self, notification_id: NotificationId, user_id: UserId) -> AppResult<()> {
        // Scoped to the owner so a user cannot dismiss someone else's
        // notifications.
        let res =
            sqlx::query("DELETE FROM notifications WHERE notification_id = $1 AND user_id = $2")
                .bind(notification_id)
                .bind(user_id)
                .execute(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(
                "specified notification not found".into(),
            ));
        }

        Ok(())
    }
}
