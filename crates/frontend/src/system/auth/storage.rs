use contracts::domain::a010_shift::aggregate::Shift;
use contracts::system::auth::UserInfo;
use serde::{Deserialize, Serialize};
use web_sys::window;

const SESSION_KEY: &str = "shopdesk_session";

/// Everything the app needs to resume after a reload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub access_token: String,
    #[serde(default)]
    pub user: Option<UserInfo>,
    #[serde(default)]
    pub shift: Option<Shift>,
}

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Parses the persisted JSON; blank tokens and corrupt data are rejected.
pub fn parse_session(raw: &str) -> Option<StoredSession> {
    serde_json::from_str::<StoredSession>(raw)
        .ok()
        .filter(|s| !s.access_token.trim().is_empty())
}

/// Save the whole session to localStorage
pub fn save_session(session: &StoredSession) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    match serde_json::to_string(session) {
        Ok(json) => {
            let _ = storage.set_item(SESSION_KEY, &json);
        }
        Err(e) => log::warn!("Failed to serialize session: {}", e),
    }
}

/// Load the session from localStorage, dropping unreadable data
pub fn load_session() -> Option<StoredSession> {
    let raw = get_local_storage()?.get_item(SESSION_KEY).ok()??;
    let parsed = parse_session(&raw);
    if parsed.is_none() {
        log::warn!("Discarding unreadable stored session");
        clear_session();
    }
    parsed
}

/// Bearer token of the stored session
pub fn get_access_token() -> Option<String> {
    load_session().map(|s| s.access_token)
}

pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_session_roundtrip_fields() {
        let raw = r#"{
            "access_token": "tok",
            "user": {"id": 1, "username": "kim", "role": "manager"},
            "shift": {"id": 9, "user_id": 1, "location_id": 2, "started_at": "2024-01-01T08:00:00Z"}
        }"#;
        let session = parse_session(raw).unwrap();
        assert_eq!(session.access_token, "tok");
        assert_eq!(session.user.unwrap().username, "kim");
        assert_eq!(session.shift.unwrap().location_id, 2);
    }

    #[test]
    fn test_parse_session_rejects_corrupt_data() {
        assert!(parse_session("not json").is_none());
        assert!(parse_session(r#"{"access_token": "  "}"#).is_none());
        assert!(parse_session(r#"{"user": null}"#).is_none());
    }

    #[test]
    fn test_parse_session_token_only() {
        let session = parse_session(r#"{"access_token":"abc"}"#).unwrap();
        assert!(session.user.is_none());
        assert!(session.shift.is_none());
    }
}
