//! Trace explorer API functions.

use crate::shared::api_utils::{api_url, QueryBuilder};
use crate::shared::http::get_json;
use contracts::traces::{TraceDetailResponse, TraceResponse, TraceStatsResponse};

pub async fn fetch_traces(
    db: Option<String>,
    limit: u32,
    query_filter: Option<String>,
) -> Result<TraceResponse, String> {
    let qs = QueryBuilder::new()
        .push_opt("db", db)
        .push("limit", limit)
        .push_opt("query_filter", query_filter)
        .build();
    get_json(&api_url(&format!("/traces{}", qs))).await
}

pub async fn fetch_trace_stats(db: Option<String>) -> Result<TraceStatsResponse, String> {
    let qs = QueryBuilder::new().push_opt("db", db).build();
    get_json(&api_url(&format!("/traces/stats/overview{}", qs))).await
}

pub async fn fetch_trace_detail(
    session_id: &str,
    db: Option<String>,
) -> Result<TraceDetailResponse, String> {
    let qs = QueryBuilder::new().push_opt("db", db).build();
    get_json(&api_url(&format!(
        "/traces/{}{}",
        urlencoding::encode(session_id),
        qs
    )))
    .await
}
