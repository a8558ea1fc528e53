use crate::handler::{
    booking::{
        confirm_booking, reject_booking, show_booked_clients, show_contacts,
        show_hired_photographers,
    },
    message::{send_message, show_messages},
};
use axum::{
    routing::{get, put},
    Router,
};
use registry::AppRegistry;

pub fn build_booking_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/booked_clients", get(show_booked_clients))
        .route("/hired_photographers", get(show_hired_photographers))
        .route("/contacts", get(show_contacts))
        .route("/:booking_id/confirm", put(confirm_booking))
        .route("/:booking_id/reject", put(reject_booking))
        .route("/:booking_id/messages", get(show_messages).post(send_message));

    Router::new().nest("/bookings", routers)
}
