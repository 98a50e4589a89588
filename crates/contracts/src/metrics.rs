use serde::{Deserialize, Serialize};

/// The five OCEAN personality scalars, computed by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TraitSet {
    #[serde(default)]
    pub openness: f64,
    #[serde(default)]
    pub conscientiousness: f64,
    #[serde(default)]
    pub extraversion: f64,
    #[serde(default)]
    pub agreeableness: f64,
    #[serde(default)]
    pub neuroticism: f64,
}

impl TraitSet {
    /// Traits paired with their display labels, in canonical OCEAN order.
    pub fn as_pairs(&self) -> [(&'static str, f64); 5] {
        [
            ("openness", self.openness),
            ("conscientiousness", self.conscientiousness),
            ("extraversion", self.extraversion),
            ("agreeableness", self.agreeableness),
            ("neuroticism", self.neuroticism),
        ]
    }
}

/// Discrete progression ladder assigned by the backend.
pub const STAGES: [(&str, &str); 5] = [
    ("S0", "Initialization"),
    ("S1", "Basic"),
    ("S2", "Pattern"),
    ("S3", "Advanced"),
    ("S4", "Autonomous"),
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StageInfo {
    #[serde(default)]
    pub current: String,
}

impl StageInfo {
    /// The backend sometimes decorates the stage ("S2: pattern formation").
    /// Reduce it to the bare S0–S4 label, defaulting to S0.
    pub fn base_stage(&self) -> &'static str {
        STAGES
            .iter()
            .map(|(id, _)| *id)
            .find(|id| self.current.starts_with(id))
            .unwrap_or("S0")
    }

    /// Index of the current stage on the ladder (0–4).
    pub fn index(&self) -> usize {
        let base = self.base_stage();
        STAGES.iter().position(|(id, _)| *id == base).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    #[serde(default)]
    pub ias: f64,
    #[serde(default)]
    pub gas: f64,
    #[serde(default)]
    pub traits: TraitSet,
    #[serde(default)]
    pub stage: StageInfo,
    #[serde(default)]
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsResponse {
    pub version: String,
    pub metrics: MetricsSnapshot,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_stage_strips_decoration() {
        let stage = StageInfo {
            current: "S2: pattern formation".to_string(),
        };
        assert_eq!(stage.base_stage(), "S2");
        assert_eq!(stage.index(), 2);
    }

    #[test]
    fn test_base_stage_defaults_to_s0() {
        assert_eq!(StageInfo::default().base_stage(), "S0");
        let odd = StageInfo {
            current: "unknown".to_string(),
        };
        assert_eq!(odd.base_stage(), "S0");
        assert_eq!(odd.index(), 0);
    }

    #[test]
    fn test_trait_pairs_order() {
        let traits = TraitSet {
            openness: 0.9,
            ..TraitSet::default()
        };
        let pairs = traits.as_pairs();
        assert_eq!(pairs[0], ("openness", 0.9));
        assert_eq!(pairs[4].0, "neuroticism");
    }
}
