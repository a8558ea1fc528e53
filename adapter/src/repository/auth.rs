use crate::{database::model::user::UserPasswordRow, database::ConnectionPool, redis::RedisClient};
use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        auth::{event::CreateToken, AccessToken},
        id::UserId,
    },
    repository::auth::AuthRepository,
};
use shared::error::{AppError, AppResult};
use std::str::FromStr;
use std::sync::Arc;

fn auth_key(token: &AccessToken) -> String {
    format!("auth:token:{}", token.0)
}

#[derive(new)]
pub struct AuthRepositoryImpl {
    db: ConnectionPool,
    kv: Arc<RedisClient>,
    ttl: u64,
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn fetch_user_id_from_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<UserId>> {
        let Some(value) = self.kv.get(&auth_key(access_token)).await? else {
            return Ok(None);
        };
        Ok(Some(UserId::from_str(&value)?))
    }

    async fn verify_user(&self, email: &str, password: &str) -> AppResult<UserId> {
        let row: Option<UserPasswordRow> =
            sqlx::query_as("SELECT user_id, password_hash FROM users WHERE email = $1")
                .bind(email)
                .fetch_optional(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;
        let Some(row) = row else {
            return Err(AppError::UnauthenticatedError);
        };

        let valid = bcrypt::verify(password, &row.password_hash)?;
        if !valid {
            return Err(AppError::UnauthenticatedError);
        }
        Ok(row.user_id)
    }

    async fn create_token(&self, event: CreateToken) -> AppResult<AccessToken> {
        let token = AccessToken(uuid::Uuid::new_v4().simple().to_string());
        self.kv
            .set_ex(&auth_key(&token), &event.user_id.to_string(), self.ttl)
            .await?;
        Ok(token)
    }

    async fn delete_token(&self, access_token: AccessToken) -> AppResult<()> {
        self.kv.delete(&auth_key(&access_token)).await
    }
}
