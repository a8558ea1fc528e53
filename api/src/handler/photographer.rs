use crate::{
    extractor::AuthorizedUser,
    model::photographer::{
        PhotographerListQuery, PhotographerResponse, PhotographersResponse,
        RemovePortfolioImageRequest, RemovePortfolioImageRequestWithUserId,
        UpdatePhotographerProfileRequest, UpdatePhotographerProfileRequestWithUserId,
        UploadedImagesResponse,
    },
};
use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use futures::future;
use garde::Validate;
use kernel::model::{id::UserId, photographer::event::AddPortfolioImages};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn show_photographer_list(
    _user: AuthorizedUser,
    Query(query): Query<PhotographerListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PhotographersResponse>> {
    registry
        .photographer_repository()
        .find_all(query.into())
        .await
        .map(PhotographersResponse::from)
        .map(Json)
}

pub async fn show_photographer(
    _user: AuthorizedUser,
    Path(photographer_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PhotographerResponse>> {
    registry
        .photographer_repository()
        .find_by_id(photographer_id)
        .await?
        .map(PhotographerResponse::from)
        .map(Json)
        .ok_or_else(|| AppError::EntityNotFound(format!("photographer ({photographer_id}) not found")))
}

pub async fn update_photographer_profile(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdatePhotographerProfileRequest>,
) -> AppResult<StatusCode> {
    user.require_photographer()?;
    req.validate(&())?;

    registry
        .photographer_repository()
        .update_profile(UpdatePhotographerProfileRequestWithUserId::new(user.id(), req).into())
        .await?;
    Ok(StatusCode::OK)
}

pub async fn upload_portfolio_images(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<UploadedImagesResponse>)> {
    user.require_photographer()?;

    let mut files = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::UnprocessableEntity(e.to_string()))?
    {
        let Some(file_name) = field.file_name().map(ToString::to_string) else {
            continue;
        };
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::UnprocessableEntity(e.to_string()))?;
        files.push((file_name, bytes.to_vec()));
    }
    if files.is_empty() {
        return Err(AppError::UnprocessableEntity("no images were uploaded".into()));
    }

    // All blobs are stored before the portfolio record is touched, so a
    // failed upload never leaves a dangling URL in the record.
    let storage = registry.storage_repository();
    let uploads = files.into_iter().map(|(file_name, bytes)| {
        let storage = storage.clone();
        let path = format!("portfolio/{}/{}", user.id(), file_name);
        async move { storage.upload(&path, bytes).await }
    });
    let image_urls = future::try_join_all(uploads).await?;

    registry
        .photographer_repository()
        .add_portfolio_images(AddPortfolioImages::new(user.id(), image_urls.clone()))
        .await?;

    Ok((StatusCode::CREATED, Json(UploadedImagesResponse { image_urls })))
}

pub async fn remove_portfolio_image(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<RemovePortfolioImageRequest>,
) -> AppResult<StatusCode> {
    user.require_photographer()?;
    req.validate(&())?;

    let image_url = req.image_url.clone();
    registry
        .photographer_repository()
        .remove_portfolio_image(RemovePortfolioImageRequestWithUserId::new(user.id(), req).into())
        .await?;

    // The record is authoritative; losing the blob delete only leaks a
    // file, so it is logged and not surfaced to the caller.
    if let Some(path) = registry.storage_repository().object_path(&image_url) {
        if let Err(e) = registry.storage_repository().delete(&path).await {
            tracing::warn!(
                error.message = %e,
                %path,
                "failed to delete a removed portfolio image blob"
            );
        }
    }

    Ok(StatusCode::OK)
}
