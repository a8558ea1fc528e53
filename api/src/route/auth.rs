use crate::handler::auth::{login, logout};
use axum::{routing::post, Router};
use registry::AppRegistry;

pub fn build_auth_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout));

    Router::new().nest("/auth", routers)
}
