use crate::model::{
    booking::{
        event::{CancelContact, ConfirmBooking, ContactPhotographer, RejectBooking, RequestHire},
        BookedClient, Booking, Contact, HiredPhotographer,
    },
    id::{BookingId, UserId},
};
use async_trait::async_trait;
use shared::error::AppResult;

/// The booking lifecycle. Every mutation validates the transition through
/// `BookingStatus::transition` and runs inside a single transaction, so a
/// pair can never end up half-updated.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn contact(&self, event: ContactPhotographer) -> AppResult<BookingId>;
    async fn cancel_contact(&self, event: CancelContact) -> AppResult<()>;
    async fn request_hire(&self, event: RequestHire) -> AppResult<BookingId>;
    /// Confirm a pending hire request. The client's notification is
    /// written in the same transaction.
    async fn confirm(&self, event: ConfirmBooking) -> AppResult<()>;
    /// Reject a pending hire request. Deletes the pair's chat messages
    /// and writes the client's notification in the same transaction.
    async fn reject(&self, event: RejectBooking) -> AppResult<()>;
    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>>;
    async fn find_booked_clients(&self, photographer_id: UserId) -> AppResult<Vec<BookedClient>>;
    async fn find_hired_photographers(&self, client_id: UserId)
        -> AppResult<Vec<HiredPhotographer>>;
    async fn find_contacts(&self, client_id: UserId) -> AppResult<Vec<Contact>>;
}
