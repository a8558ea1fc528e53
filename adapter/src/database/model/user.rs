use kernel::model::{id::UserId, role::Role, user::User};
use shared::error::AppError;
use sqlx::FromRow;
use std::str::FromStr;

#[derive(FromRow)]
pub struct UserRow {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub role: String,
    pub profile_image_url: Option<String>,
}

impl TryFrom<UserRow> for User {
    type Error = AppError;

    fn try_from(value: UserRow) -> Result<Self, Self::Error> {
        let UserRow {
            user_id,
            user_name,
            email,
            role,
            profile_image_url,
        } = value;
        let role = Role::from_str(&role)
            .map_err(|_| AppError::ConversionEntityError(format!("unknown role: {role}")))?;
        Ok(User {
            user_id,
            user_name,
            email,
            role,
            profile_image_url,
        })
    }
}

// Only used by the credential check at login.
#[derive(FromRow)]
pub struct UserPasswordRow {
    pub user_id: UserId,
    pub password_hash: String,
}
