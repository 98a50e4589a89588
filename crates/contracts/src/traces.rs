use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidencePath {
    pub node_type: String,
    pub confidence: f64,
    #[serde(default)]
    pub edge_label: Option<String>,
    #[serde(default)]
    pub reasoning: Option<String>,
}

/// Summary of one retrieval/reasoning trace session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceSummary {
    pub id: i64,
    pub timestamp: String,
    pub session_id: String,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub total_nodes_visited: u64,
    #[serde(default)]
    pub node_type_distribution: HashMap<String, u64>,
    #[serde(default)]
    pub high_confidence_count: u64,
    #[serde(default)]
    pub high_confidence_paths: Vec<ConfidencePath>,
    #[serde(default)]
    pub sampled_count: u64,
    #[serde(default)]
    pub reasoning_steps: Vec<String>,
    #[serde(default)]
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceResponse {
    pub version: String,
    pub traces: Vec<TraceSummary>,
    #[serde(default)]
    pub count: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraceStats {
    #[serde(default)]
    pub total_traces: u64,
    #[serde(default)]
    pub total_nodes_visited: u64,
    #[serde(default)]
    pub avg_nodes_per_trace: f64,
    #[serde(default)]
    pub avg_duration_ms: f64,
    #[serde(default)]
    pub node_type_distribution: HashMap<String, u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceStatsResponse {
    pub version: String,
    pub stats: TraceStats,
}

/// Detail payload for a single session; `summary` and `samples` are
/// backend-shaped records the UI renders as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceDetailResponse {
    pub version: String,
    #[serde(default)]
    pub summary: serde_json::Value,
    #[serde(default)]
    pub samples: Vec<serde_json::Value>,
    #[serde(default)]
    pub sample_count: u32,
}
