use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the append-only PMM event ledger.
///
/// Owned and persisted by the backend; the client only holds read-only,
/// time-bounded query results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PmmEvent {
    pub id: i64,
    pub kind: String,
    pub ts: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_hash: Option<String>,
}

impl PmmEvent {
    /// Parse `ts` as an RFC 3339 timestamp.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.ts)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Look up a `meta` field as display text. Accepts strings, numbers
    /// and booleans; anything else is considered absent.
    pub fn meta_str(&self, key: &str) -> Option<String> {
        let value = self.meta.as_ref()?.get(key)?;
        match value {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            serde_json::Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub next_after_id: Option<i64>,
    #[serde(default)]
    pub has_more: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsResponse {
    pub version: String,
    pub events: Vec<PmmEvent>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_minimal_payload() {
        let event: PmmEvent = serde_json::from_str(
            r#"{"id": 7, "kind": "reflection", "ts": "2025-04-01T10:00:00+00:00"}"#,
        )
        .unwrap();
        assert_eq!(event.id, 7);
        assert!(event.content.is_none());
        assert!(event.meta.is_none());
        assert!(event.timestamp().is_some());
    }

    #[test]
    fn test_meta_str_scalar_types() {
        let event: PmmEvent = serde_json::from_str(
            r#"{"id": 1, "kind": "trait_update", "ts": "bad-ts",
                "meta": {"trait": "openness", "value": 0.62, "flag": true, "nested": {}}}"#,
        )
        .unwrap();
        assert_eq!(event.meta_str("trait").as_deref(), Some("openness"));
        assert_eq!(event.meta_str("value").as_deref(), Some("0.62"));
        assert_eq!(event.meta_str("flag").as_deref(), Some("true"));
        assert_eq!(event.meta_str("nested"), None);
        assert_eq!(event.meta_str("missing"), None);
        assert!(event.timestamp().is_none());
    }

    #[test]
    fn test_events_response_without_pagination() {
        let resp: EventsResponse =
            serde_json::from_str(r#"{"version": "1", "events": []}"#).unwrap();
        assert_eq!(resp.pagination.count, 0);
        assert!(resp.pagination.next_after_id.is_none());
    }
}
