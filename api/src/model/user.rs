use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::UserId,
    role::Role,
    user::{
        event::{CreateUser, UpdateUserName},
        User,
    },
};
use serde::{Deserialize, Serialize};
use strum::VariantNames;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, VariantNames)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum RoleName {
    Client,
    Photographer,
}

impl From<Role> for RoleName {
    fn from(value: Role) -> Self {
        match value {
            Role::Client => Self::Client,
            Role::Photographer => Self::Photographer,
        }
    }
}

impl From<RoleName> for Role {
    fn from(value: RoleName) -> Self {
        match value {
            RoleName::Client => Self::Client,
            RoleName::Photographer => Self::Photographer,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[garde(length(min = 1))]
    pub user_name: String,
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 8))]
    pub password: String,
    #[garde(skip)]
    pub role: RoleName,
}

impl From<CreateUserRequest> for CreateUser {
    fn from(value: CreateUserRequest) -> Self {
        let CreateUserRequest {
            user_name,
            email,
            password,
            role,
        } = value;
        Self {
            user_name,
            email,
            password,
            role: role.into(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserNameRequest {
    #[garde(length(min = 1))]
    pub user_name: String,
}

#[derive(new)]
pub struct UpdateUserNameRequestWithUserId(UserId, UpdateUserNameRequest);

impl From<UpdateUserNameRequestWithUserId> for UpdateUserName {
    fn from(value: UpdateUserNameRequestWithUserId) -> Self {
        let UpdateUserNameRequestWithUserId(user_id, request) = value;
        Self {
            user_id,
            user_name: request.user_name,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub role: RoleName,
    pub profile_image_url: Option<String>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            user_id,
            user_name,
            email,
            role,
            profile_image_url,
        } = value;
        Self {
            user_id,
            user_name,
            email,
            role: role.into(),
            profile_image_url,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileImageResponse {
    pub profile_image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_names_use_kebab_case_on_the_wire() {
        let json = serde_json::to_string(&RoleName::Photographer).unwrap();
        assert_eq!(json, r#""photographer""#);
        let role: RoleName = serde_json::from_str(r#""client""#).unwrap();
        assert_eq!(role, RoleName::Client);
    }

    #[test]
    fn signup_request_rejects_a_bad_email() {
        let req = CreateUserRequest {
            user_name: "anna".into(),
            email: "not-an-email".into(),
            password: "passw0rd!".into(),
            role: RoleName::Photographer,
        };
        assert!(req.validate(&()).is_err());
    }
}
