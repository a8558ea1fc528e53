use crate::route::{booking, notification, photographer, user};
use axum::Router;
use registry::AppRegistry;

pub fn routes() -> Router<AppRegistry> {
    let routers = Router::new()
        .merge(user::build_user_routers())
        .merge(photographer::build_photographer_routers())
        .merge(booking::build_booking_routers())
        .merge(notification::build_notification_routers());

    Router::new().nest("/api/v1", routers)
}
