use crate::model::id::{BookingId, UserId};
use derive_new::new;

#[derive(new)]
pub struct ContactPhotographer {
    pub client_id: UserId,
    pub photographer_id: UserId,
}

#[derive(new)]
pub struct CancelContact {
    pub client_id: UserId,
    pub photographer_id: UserId,
}

#[derive(new)]
pub struct RequestHire {
    pub client_id: UserId,
    pub photographer_id: UserId,
}

#[derive(new)]
pub struct ConfirmBooking {
    pub booking_id: BookingId,
    pub requested_user: UserId,
}

#[derive(new)]
pub struct RejectBooking {
    pub booking_id: BookingId,
    pub requested_user: UserId,
}
