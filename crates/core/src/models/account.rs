//! The signed-in account: login, profile, password.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GoogleLoginRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Validate)]
pub struct RegisterAccountRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Token pair returned by the login endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResult {
    #[serde(alias = "token")]
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Validate)]
pub struct ProfileUpdate {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    pub full_name: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, Serialize, Validate)]
pub struct PasswordChange {
    #[validate(length(min = 1))]
    pub current_password: String,
    #[validate(length(min = 8))]
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_result_accepts_token_alias() {
        let result: LoginResult =
            serde_json::from_value(json!({ "token": "abc.def.ghi" })).unwrap();
        assert_eq!(result.access_token, "abc.def.ghi");
        assert!(result.refresh_token.is_none());
    }

    #[test]
    fn short_new_password_fails_validation() {
        let change = PasswordChange {
            current_password: "old-secret".into(),
            new_password: "short".into(),
        };
        assert!(change.validate().is_err());
    }
}
