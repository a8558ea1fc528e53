use crate::model::{
    id::UserId,
    user::{
        event::{CreateUser, UpdateProfileImage, UpdateUserName},
        User,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Register a new user. For photographers this also creates the
    /// empty photographer profile in the same transaction.
    async fn create(&self, event: CreateUser) -> AppResult<UserId>;
    async fn find_current_user(&self, current_user_id: UserId) -> AppResult<Option<User>>;
    async fn update_user_name(&self, event: UpdateUserName) -> AppResult<()>;
    async fn update_profile_image(&self, event: UpdateProfileImage) -> AppResult<()>;
}
