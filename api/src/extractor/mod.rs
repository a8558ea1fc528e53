use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use kernel::model::{auth::AccessToken, id::UserId, role::Role, user::User};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub struct AuthorizedUser {
    pub access_token: AccessToken,
    pub user: User,
}

impl AuthorizedUser {
    pub fn id(&self) -> UserId {
        self.user.user_id
    }

    pub fn is_photographer(&self) -> bool {
        self.user.role == Role::Photographer
    }

    pub fn is_client(&self) -> bool {
        self.user.role == Role::Client
    }

    pub fn require_photographer(&self) -> AppResult<()> {
        if !self.is_photographer() {
            return Err(AppError::ForbiddenOperation);
        }
        Ok(())
    }

    pub fn require_client(&self) -> AppResult<()> {
        if !self.is_client() {
            return Err(AppError::ForbiddenOperation);
        }
        Ok(())
    }
}

#[axum::async_trait]
impl FromRequestParts<AppRegistry> for AuthorizedUser {
    type Rejection = AppError;

    // Resolves the bearer token to a user. Requests without a valid,
    // unexpired token never reach the handlers.
    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, registry)
                .await
                .map_err(|_| AppError::UnauthenticatedError)?;
        let access_token = AccessToken(bearer.token().to_string());

        let user_id = registry
            .auth_repository()
            .fetch_user_id_from_token(&access_token)
            .await?
            .ok_or(AppError::UnauthenticatedError)?;

        let user = registry
            .user_repository()
            .find_current_user(user_id)
            .await?
            .ok_or(AppError::UnauthenticatedError)?;

        Ok(Self { access_token, user })
    }
}
