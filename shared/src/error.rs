use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("failed to start the transaction")]
    TransactionError(#[source] sqlx::Error),
    #[error("failed to run the database operation")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("no rows affected: {0}")]
    NoRowsAffectedError(String),
    #[error("failed to operate the key-value store")]
    KeyValueStoreError(#[from] redis::RedisError),
    #[error("failed to operate the file storage")]
    StorageOperationError(#[source] std::io::Error),
    #[error(transparent)]
    BcryptError(#[from] bcrypt::BcryptError),
    #[error(transparent)]
    ConvertToUuidError(#[from] uuid::Error),
    #[error("authentication is required")]
    UnauthenticatedError,
    #[error("the credentials are invalid")]
    UnauthorizedError,
    #[error("the operation is not permitted")]
    ForbiddenOperation,
    #[error("{0}")]
    ConversionEntityError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match self {
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) | AppError::ConvertToUuidError(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::UnauthenticatedError | AppError::UnauthorizedError => {
                StatusCode::UNAUTHORIZED
            }
            AppError::ForbiddenOperation => StatusCode::FORBIDDEN,
            e @ (AppError::TransactionError(_)
            | AppError::SpecificOperationError(_)
            | AppError::NoRowsAffectedError(_)
            | AppError::KeyValueStoreError(_)
            | AppError::StorageOperationError(_)
            | AppError::BcryptError(_)
            | AppError::ConversionEntityError(_)) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Unexpected error happened"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        status_code.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_client_status_codes() {
        let res = AppError::EntityNotFound("missing".into()).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let res = AppError::UnprocessableEntity("conflict".into()).into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let res = AppError::UnauthenticatedError.into_response();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let res = AppError::ForbiddenOperation.into_response();
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn infrastructure_errors_are_masked_as_internal() {
        let res = AppError::NoRowsAffectedError("no update".into()).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
