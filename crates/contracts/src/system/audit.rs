use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub id: EntityId,
    pub occurred_at: String,
    #[serde(default)]
    pub user_id: Option<EntityId>,
    #[serde(default)]
    pub username: Option<String>,
    pub action: String,
    pub entity_type: String,
    #[serde(default)]
    pub entity_id: Option<EntityId>,
    #[serde(default)]
    pub details: serde_json::Value,
}

impl AuditLogEntry {
    /// Compact single line used in the table; the full JSON is shown on expand.
    pub fn details_preview(&self, max_chars: usize) -> String {
        let text = match &self.details {
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        };
        if text.chars().count() <= max_chars {
            return text;
        }
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}…", cut)
    }
}

/// Filters for `GET /audit-logs/`. `None` fields are left out of the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
    pub limit: usize,
    pub offset: usize,
}

impl Default for AuditQuery {
    fn default() -> Self {
        Self {
            entity_type: None,
            user_id: None,
            date_from: None,
            date_to: None,
            limit: 50,
            offset: 0,
        }
    }
}

impl AuditQuery {
    pub fn validate(&self) -> Result<(), String> {
        if let (Some(from), Some(to)) = (&self.date_from, &self.date_to) {
            // ISO dates compare correctly as strings
            if from > to {
                return Err("Start date must not be after end date".into());
            }
        }
        Ok(())
    }

    pub fn page(&self) -> usize {
        if self.limit == 0 {
            0
        } else {
            self.offset / self.limit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_preview_truncates() {
        let entry = AuditLogEntry {
            id: 1,
            occurred_at: "2024-01-01T00:00:00Z".into(),
            user_id: None,
            username: None,
            action: "update".into(),
            entity_type: "product".into(),
            entity_id: Some(3),
            details: serde_json::json!({"price": [10, 12]}),
        };
        assert_eq!(entry.details_preview(100), r#"{"price":[10,12]}"#);
        assert_eq!(entry.details_preview(5), "{\"pri…");
    }

    #[test]
    fn test_query_date_order() {
        let mut q = AuditQuery::default();
        q.date_from = Some("2024-02-01".into());
        q.date_to = Some("2024-01-01".into());
        assert!(q.validate().is_err());
        q.date_to = Some("2024-02-01".into());
        assert!(q.validate().is_ok());
    }

    #[test]
    fn test_query_page() {
        let q = AuditQuery { offset: 100, limit: 50, ..Default::default() };
        assert_eq!(q.page(), 2);
    }
}
