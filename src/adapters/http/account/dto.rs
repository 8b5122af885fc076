//! Request/response DTOs for account endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Permission, PermissionSet, Timestamp, UserId};
use crate::domain::user::User;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    #[serde(default)]
    pub name: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Deserialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RequestResetRequest {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub reset_token: Option<String>,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePermissionsRequest {
    pub user_id: UserId,
    pub permissions: Vec<Permission>,
}

/// Public view of an account. Never carries credential material.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub permissions: PermissionSet,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            permissions: user.permissions,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_request_deserializes_without_name() {
        let json = r#"{"email":"a@b.c","password":"p","confirm_password":"p"}"#;
        let req: SignupRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.name, "");
    }

    #[test]
    fn permissions_deserialize_from_labels() {
        let json = r#"{"user_id":"550e8400-e29b-41d4-a716-446655440000","permissions":["USER","ADMIN"]}"#;
        let req: UpdatePermissionsRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.permissions, vec![Permission::User, Permission::Admin]);
    }

    #[test]
    fn user_response_omits_password_hash() {
        let user = User {
            id: UserId::new(),
            email: "a@b.c".into(),
            name: "A".into(),
            password_hash: "$argon2id$hidden".into(),
            permissions: PermissionSet::standard(),
            reset_token: None,
            reset_token_expiry: None,
            created_at: Timestamp::now(),
        };
        let response: UserResponse = user.into();
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("hidden"));
        assert!(!json.contains("password"));
    }
}
