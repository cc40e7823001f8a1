use serde::{Deserialize, Serialize};

use super::roles::UserRole;
use crate::domain::common::EntityId;

/// Credentials sent as an OAuth2 password-flow form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.username.trim().is_empty() {
            return Err("Username is required".into());
        }
        if self.password.is_empty() {
            return Err("Password is required".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// The signed-in user as returned by `/auth/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: EntityId,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: UserRole,
}

impl UserInfo {
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_type_defaults_to_bearer() {
        let token: TokenResponse = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();
        assert_eq!(token.token_type, "bearer");
    }

    #[test]
    fn test_display_name() {
        let mut user: UserInfo =
            serde_json::from_str(r#"{"id":1,"username":"kim","role":"staff"}"#).unwrap();
        assert_eq!(user.display_name(), "kim");
        user.full_name = Some("Kim Lee".into());
        assert_eq!(user.display_name(), "Kim Lee");
    }

    #[test]
    fn test_login_validate() {
        let req = LoginRequest { username: " ".into(), password: "x".into() };
        assert!(req.validate().is_err());
        let req = LoginRequest { username: "kim".into(), password: "".into() };
        assert_eq!(req.validate().unwrap_err(), "Password is required");
    }
}
