use serde::{Deserialize, Serialize};

/// Body of the constrained read-only SQL endpoint. Only `SELECT`
/// statements are permitted; the backend rejects everything else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqlRequest {
    pub db: String,
    pub query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqlResponse {
    pub version: String,
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub execution_time_ms: f64,
}
