use crate::{
    extractor::AuthorizedUser,
    model::user::{
        CreateUserRequest, ProfileImageResponse, UpdateUserNameRequest,
        UpdateUserNameRequestWithUserId, UserResponse,
    },
};
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::user::event::UpdateProfileImage;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_user(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    req.validate(&())?;

    let user_id = registry.user_repository().create(req.into()).await?;
    let user = registry
        .user_repository()
        .find_current_user(user_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("the registered user was not found".into()))?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

pub async fn get_current_user(user: AuthorizedUser) -> Json<UserResponse> {
    Json(user.user.into())
}

pub async fn update_user_name(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateUserNameRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    registry
        .user_repository()
        .update_user_name(UpdateUserNameRequestWithUserId::new(user.id(), req).into())
        .await?;
    Ok(StatusCode::OK)
}

pub async fn upload_profile_image(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    mut multipart: Multipart,
) -> AppResult<Json<ProfileImageResponse>> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| AppError::UnprocessableEntity(e.to_string()))?
        .ok_or_else(|| AppError::UnprocessableEntity("no image was uploaded".into()))?;
    let bytes = field
        .bytes()
        .await
        .map_err(|e| AppError::UnprocessableEntity(e.to_string()))?;

    // One blob per user; re-uploading replaces the previous image.
    let path = format!("profile_images/{}", user.id());
    let profile_image_url = registry
        .storage_repository()
        .upload(&path, bytes.to_vec())
        .await?;
    registry
        .user_repository()
        .update_profile_image(UpdateProfileImage::new(user.id(), profile_image_url.clone()))
        .await?;

    Ok(Json(ProfileImageResponse { profile_image_url }))
}
