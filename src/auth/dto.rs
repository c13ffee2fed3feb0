use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::auth::repo::User;

/// Request body for signup. Name fields are optional and default to empty.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Request body for Google sign-in: the access token from the Google popup.
#[derive(Debug, Deserialize)]
pub struct GoogleAuthRequest {
    pub token: Option<String>,
}

/// Public part of a user returned to clients; never carries the hash.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            first_name: u.first_name,
            last_name: u.last_name,
            email: u.email,
            avatar: None,
        }
    }
}

/// Returned by login and google auth.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: PublicUser,
}

/// Returned by signup, with the created ack message.
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: String,
    pub token: String,
    pub user: PublicUser,
}

/// Row shape for the public users listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListItem {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_user_serializes_camel_case() {
        let user = PublicUser {
            id: 3,
            first_name: "Jane".into(),
            last_name: "Smith".into(),
            email: "jane@example.com".into(),
            avatar: None,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"firstName\":\"Jane\""));
        assert!(json.contains("\"lastName\":\"Smith\""));
        assert!(!json.contains("avatar"));
    }

    #[test]
    fn avatar_appears_when_present() {
        let user = PublicUser {
            id: 3,
            first_name: "".into(),
            last_name: "".into(),
            email: "g@x.com".into(),
            avatar: Some("https://lh3.googleusercontent.com/a/photo".into()),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"avatar\""));
    }

    #[test]
    fn signup_request_accepts_missing_names() {
        let req: SignupRequest =
            serde_json::from_str(r#"{"email":"a@x.com","password":"pw123456"}"#).unwrap();
        assert_eq!(req.email.as_deref(), Some("a@x.com"));
        assert!(req.first_name.is_none());
        assert!(req.last_name.is_none());
    }
}
