use serde::{Deserialize, Serialize};

/// Staff role. Variants are ordered by privilege: `Admin` is the highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Staff,
    Manager,
    Admin,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::Staff, UserRole::Manager, UserRole::Admin];

    /// True if a user holding `self` may do what `required` allows.
    pub fn satisfies(self, required: UserRole) -> bool {
        self >= required
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Staff => "staff",
            UserRole::Manager => "manager",
            UserRole::Admin => "admin",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UserRole::Staff => "Staff",
            UserRole::Manager => "Manager",
            UserRole::Admin => "Administrator",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "staff" => Some(UserRole::Staff),
            "manager" => Some(UserRole::Manager),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_privilege_ordering() {
        assert!(UserRole::Admin.satisfies(UserRole::Admin));
        assert!(UserRole::Admin.satisfies(UserRole::Manager));
        assert!(UserRole::Admin.satisfies(UserRole::Staff));
        assert!(UserRole::Manager.satisfies(UserRole::Staff));
        assert!(!UserRole::Manager.satisfies(UserRole::Admin));
        assert!(!UserRole::Staff.satisfies(UserRole::Manager));
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&UserRole::Manager).unwrap(), "\"manager\"");
        let role: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, UserRole::Admin);
    }

    #[test]
    fn test_parse() {
        assert_eq!(UserRole::parse(" Manager "), Some(UserRole::Manager));
        assert_eq!(UserRole::parse("owner"), None);
        for role in UserRole::ALL {
            assert_eq!(UserRole::parse(role.as_str()), Some(role));
        }
    }
}
