use crate::{extractor::AuthorizedUser, model::notification::NotificationsResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use kernel::model::id::NotificationId;
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn show_notification_list(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<NotificationsResponse>> {
    registry
        .notification_repository()
        .find_all_by_user_id(user.id())
        .await
        .map(NotificationsResponse::from)
        .map(Json)
}

pub async fn delete_notification(
    user: AuthorizedUser,
    Path(notification_id): Path<NotificationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .notification_repository()
        .delete(notification_id, user.id())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
