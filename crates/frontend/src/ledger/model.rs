//! Ledger API functions.

use crate::shared::api_utils::{api_url, clamp_limit, QueryBuilder};
use crate::shared::http::{get_json, post_json};
use contracts::events::EventsResponse;
use contracts::sql::{SqlRequest, SqlResponse};

#[derive(Debug, Clone, Default)]
pub struct EventsQuery {
    pub db: Option<String>,
    pub kind: Option<String>,
    pub since_ts: Option<String>,
    pub until_ts: Option<String>,
    pub after_id: Option<i64>,
    pub limit: u32,
}

impl EventsQuery {
    pub fn query_string(&self) -> String {
        QueryBuilder::new()
            .push_opt("db", self.db.clone())
            .push_opt("kind", self.kind.clone())
            .push_opt("since_ts", self.since_ts.clone())
            .push_opt("until_ts", self.until_ts.clone())
            .push_opt("after_id", self.after_id)
            .push("limit", clamp_limit(self.limit))
            .build()
    }
}

pub async fn fetch_events(query: &EventsQuery) -> Result<EventsResponse, String> {
    get_json(&api_url(&format!("/events{}", query.query_string()))).await
}

pub async fn execute_sql(db: String, query: String) -> Result<SqlResponse, String> {
    post_json(&api_url("/events/sql"), &SqlRequest { db, query }).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_omits_unset_filters() {
        let query = EventsQuery {
            limit: 50,
            ..EventsQuery::default()
        };
        assert_eq!(query.query_string(), "?limit=50");
    }

    #[test]
    fn test_query_string_includes_filters_and_clamps_limit() {
        let query = EventsQuery {
            db: Some(".data/pmm.db".to_string()),
            kind: Some("commitment_open".to_string()),
            since_ts: Some("2025-04-01T00:00".to_string()),
            until_ts: None,
            after_id: Some(100),
            limit: 0,
        };
        let qs = query.query_string();
        assert!(qs.contains("db=.data%2Fpmm.db"));
        assert!(qs.contains("kind=commitment_open"));
        assert!(qs.contains("since_ts=2025-04-01T00%3A00"));
        assert!(!qs.contains("until_ts"));
        assert!(qs.contains("after_id=100"));
        assert!(qs.ends_with("limit=1"));
    }
}
