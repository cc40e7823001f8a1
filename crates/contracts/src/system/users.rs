use serde::{Deserialize, Serialize};

use super::roles::UserRole;
use crate::domain::common::validation::{validate_email, validate_optional_email};
use crate::domain::common::EntityId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub last_login_at: Option<String>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserDto {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
}

impl UpdateUserDto {
    pub fn from_user(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            role: user.role,
            is_active: user.is_active,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        validate_optional_email(&self.email)
    }
}

/// Invitation e-mail for a new staff member. The server creates the
/// account when the invitation is accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvitationRequest {
    pub email: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<EntityId>,
}

impl InvitationRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_email(&self.email)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvitationResponse {
    #[serde(default)]
    pub id: Option<EntityId>,
    pub email: String,
    #[serde(default)]
    pub expires_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_defaults() {
        let user: User = serde_json::from_str(r#"{"id":7,"username":"sam"}"#).unwrap();
        assert!(user.is_active);
        assert_eq!(user.role, UserRole::Staff);
        assert!(user.last_login_at.is_none());
    }

    #[test]
    fn test_invitation_skips_missing_location() {
        let req = InvitationRequest {
            email: "new@shop.example".into(),
            role: UserRole::Manager,
            location_id: None,
        };
        assert!(req.validate().is_ok());
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["role"], "manager");
        assert!(json.get("location_id").is_none());
    }

    #[test]
    fn test_update_user_validate() {
        let mut dto = UpdateUserDto {
            email: Some("bad".into()),
            full_name: None,
            role: UserRole::Staff,
            is_active: true,
        };
        assert!(dto.validate().is_err());
        dto.email = None;
        assert!(dto.validate().is_ok());
    }
}
