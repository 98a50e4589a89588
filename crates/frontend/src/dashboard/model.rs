//! Dashboard API functions.

use crate::shared::api_utils::{api_url, QueryBuilder};
use crate::shared::http::get_json;
use contracts::commitments::CommitmentsResponse;
use contracts::consciousness::ConsciousnessResponse;
use contracts::metrics::MetricsResponse;
use contracts::reflections::ReflectionsResponse;

pub async fn fetch_metrics(db: Option<String>) -> Result<MetricsResponse, String> {
    let qs = QueryBuilder::new().push_opt("db", db).build();
    get_json(&api_url(&format!("/metrics{}", qs))).await
}

pub async fn fetch_consciousness(db: Option<String>) -> Result<ConsciousnessResponse, String> {
    let qs = QueryBuilder::new().push_opt("db", db).build();
    get_json(&api_url(&format!("/consciousness{}", qs))).await
}

pub async fn fetch_reflections(
    db: Option<String>,
    limit: u32,
) -> Result<ReflectionsResponse, String> {
    let qs = QueryBuilder::new()
        .push_opt("db", db)
        .push("limit", limit)
        .build();
    get_json(&api_url(&format!("/reflections{}", qs))).await
}

pub async fn fetch_commitments(
    db: Option<String>,
    status: Option<String>,
    limit: u32,
) -> Result<CommitmentsResponse, String> {
    let qs = QueryBuilder::new()
        .push_opt("db", db)
        .push_opt("status", status)
        .push("limit", limit)
        .build();
    get_json(&api_url(&format!("/commitments{}", qs))).await
}
