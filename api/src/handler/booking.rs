use crate::{
    extractor::AuthorizedUser,
    model::booking::{
        BookedClientsResponse, BookingIdResponse, ContactsResponse, HiredPhotographersResponse,
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use kernel::model::{
    booking::event::{
        CancelContact, ConfirmBooking, ContactPhotographer, RejectBooking, RequestHire,
    },
    id::{BookingId, UserId},
};
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn contact_photographer(
    user: AuthorizedUser,
    Path(photographer_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<(StatusCode, Json<BookingIdResponse>)> {
    user.require_client()?;

    let booking_id = registry
        .booking_repository()
        .contact(ContactPhotographer::new(user.id(), photographer_id))
        .await?;
    Ok((StatusCode::CREATED, Json(BookingIdResponse { booking_id })))
}

pub async fn cancel_contact(
    user: AuthorizedUser,
    Path(photographer_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    user.require_client()?;

    registry
        .booking_repository()
        .cancel_contact(CancelContact::new(user.id(), photographer_id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn hire_photographer(
    user: AuthorizedUser,
    Path(photographer_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingIdResponse>> {
    user.require_client()?;

    let booking_id = registry
        .booking_repository()
        .request_hire(RequestHire::new(user.id(), photographer_id))
        .await?;
    Ok(Json(BookingIdResponse { booking_id }))
}

pub async fn confirm_booking(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    user.require_photographer()?;

    registry
        .booking_repository()
        .confirm(ConfirmBooking::new(booking_id, user.id()))
        .await?;
    Ok(StatusCode::OK)
}

pub async fn reject_booking(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    user.require_photographer()?;

    registry
        .booking_repository()
        .reject(RejectBooking::new(booking_id, user.id()))
        .await?;
    Ok(StatusCode::OK)
}

pub async fn show_booked_clients(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookedClientsResponse>> {
    user.require_photographer()?;

    registry
        .booking_repository()
        .find_booked_clients(user.id())
        .await
        .map(BookedClientsResponse::from)
        .map(Json)
}

pub async fn show_hired_photographers(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<HiredPhotographersResponse>> {
    user.require_client()?;

    registry
        .booking_repository()
        .find_hired_photographers(user.id())
        .await
        .map(HiredPhotographersResponse::from)
        .map(Json)
}

pub async fn show_contacts(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ContactsResponse>> {
    user.require_client()?;

    registry
        .booking_repository()
        .find_contacts(user.id())
        .await
        .map(ContactsResponse::from)
        .map(Json)
}
