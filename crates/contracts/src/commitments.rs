use serde::{Deserialize, Serialize};

/// Goal-like ledger record. The lifecycle is encoded in `kind`
/// (`commitment_open` / `commitment_close` / `commitment_expire`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commitment {
    pub id: i64,
    pub ts: String,
    pub kind: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitmentStatus {
    Open,
    Closed,
    Expired,
}

impl CommitmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitmentStatus::Open => "open",
            CommitmentStatus::Closed => "closed",
            CommitmentStatus::Expired => "expired",
        }
    }
}

impl Commitment {
    pub fn status(&self) -> CommitmentStatus {
        match self.kind.as_str() {
            "commitment_open" => CommitmentStatus::Open,
            "commitment_close" => CommitmentStatus::Closed,
            _ => CommitmentStatus::Expired,
        }
    }

    /// Project grouping key; commitments without one land in "general".
    pub fn project(&self) -> String {
        self.meta_field("project_id")
            .or_else(|| self.meta_field("project"))
            .unwrap_or_else(|| "general".to_string())
    }

    pub fn priority(&self) -> String {
        self.meta_field("priority")
            .unwrap_or_else(|| "medium".to_string())
    }

    fn meta_field(&self, key: &str) -> Option<String> {
        self.meta
            .as_ref()?
            .get(key)?
            .as_str()
            .map(|s| s.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitmentsResponse {
    pub version: String,
    pub commitments: Vec<Commitment>,
    #[serde(default)]
    pub count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commitment(kind: &str, meta: serde_json::Value) -> Commitment {
        Commitment {
            id: 1,
            ts: "2025-04-01T00:00:00+00:00".to_string(),
            kind: kind.to_string(),
            content: "ship the report".to_string(),
            meta: Some(meta),
        }
    }

    #[test]
    fn test_status_from_kind() {
        assert_eq!(
            commitment("commitment_open", serde_json::json!({})).status(),
            CommitmentStatus::Open
        );
        assert_eq!(
            commitment("commitment_close", serde_json::json!({})).status(),
            CommitmentStatus::Closed
        );
        assert_eq!(
            commitment("commitment_expire", serde_json::json!({})).status(),
            CommitmentStatus::Expired
        );
    }

    #[test]
    fn test_project_and_priority_defaults() {
        let c = commitment("commitment_open", serde_json::json!({}));
        assert_eq!(c.project(), "general");
        assert_eq!(c.priority(), "medium");

        let c = commitment(
            "commitment_open",
            serde_json::json!({"project_id": "atlas", "priority": "high"}),
        );
        assert_eq!(c.project(), "atlas");
        assert_eq!(c.priority(), "high");
    }
}
