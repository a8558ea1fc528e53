use crate::handler::notification::{delete_notification, show_notification_list};
use axum::{
    routing::{delete, get},
    Router,
};
use registry::AppRegistry;

pub fn build_notification_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", get(show_notification_list))
        .route("/:notification_id", delete(delete_notification));

    Router::new().nest("/notifications", routers)
}
