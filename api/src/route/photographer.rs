use crate::handler::{
    booking::{cancel_contact, contact_photographer, hire_photographer},
    photographer::{
        remove_portfolio_image, show_photographer, show_photographer_list,
        update_photographer_profile, upload_portfolio_images,
    },
};
use axum::{
    routing::{get, post, put},
    Router,
};
use registry::AppRegistry;

pub fn build_photographer_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", get(show_photographer_list))
        .route("/me/profile", put(update_photographer_profile))
        .route(
            "/me/portfolio",
            post(upload_portfolio_images).delete(remove_portfolio_image),
        )
        .route("/:photographer_id", get(show_photographer))
        // The client-initiated booking steps hang off the photographer
        // being contacted.
        .route(
            "/:photographer_id/contact",
            post(contact_photographer).delete(cancel_contact),
        )
        .route("/:photographer_id/hire", post(hire_photographer));

    Router::new().nest("/photographers", routers)
}
