use crate::{
    extractor::AuthorizedUser,
    model::message::{ChatMessagesResponse, MessageIdResponse, SendMessageRequest},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{id::BookingId, message::event::SendMessage};
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn send_message(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<SendMessageRequest>,
) -> AppResult<(StatusCode, Json<MessageIdResponse>)> {
    req.validate(&())?;

    let message_id = registry
        .message_repository()
        .send(SendMessage::new(booking_id, user.id(), req.body))
        .await?;
    Ok((StatusCode::CREATED, Json(MessageIdResponse { message_id })))
}

pub async fn show_messages(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ChatMessagesResponse>> {
    registry
        .message_repository()
        .find_by_booking_id(booking_id, user.id())
        .await
        .map(ChatMessagesResponse::from)
        .map(Json)
}
