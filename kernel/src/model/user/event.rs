use crate::model::{id::UserId, role::Role};
use derive_new::new;

pub struct CreateUser {
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(new)]
pub struct UpdateUserName {
    pub user_id: UserId,
    pub user_name: String,
}

#[derive(new)]
pub struct UpdateProfileImage {
    pub user_id: UserId,
    pub profile_image_url: String,
}
