use contracts::system::audit::{AuditLogEntry, AuditQuery};

use crate::shared::api_utils::{get_json, with_query, ApiError};

/// One page of audit entries, newest first.
pub async fn fetch_audit_logs(query: &AuditQuery) -> Result<Vec<AuditLogEntry>, ApiError> {
    get_json(&with_query("/audit-logs/", query)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_query_string() {
        let query = AuditQuery {
            entity_type: Some("product".into()),
            date_from: Some("2024-05-01".into()),
            offset: 50,
            ..Default::default()
        };
        assert_eq!(
            with_query("/audit-logs/", &query),
            "/audit-logs/?entity_type=product&date_from=2024-05-01&limit=50&offset=50"
        );
        assert_eq!(
            with_query("/audit-logs/", &AuditQuery::default()),
            "/audit-logs/?limit=50&offset=0"
        );
    }
}
