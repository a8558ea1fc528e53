use crate::handler::user::{
    get_current_user, register_user, update_user_name, upload_profile_image,
};
use axum::{
    routing::{get, post, put},
    Router,
};
use registry::AppRegistry;

pub fn build_user_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", post(register_user))
        .route("/me", get(get_current_user))
        .route("/me/user_name", put(update_user_name))
        .route("/me/profile_image", put(upload_profile_image));

    Router::new().nest("/users", routers)
}
