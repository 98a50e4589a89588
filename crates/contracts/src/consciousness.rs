use crate::metrics::TraitSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdentityInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub stage: String,
    #[serde(default)]
    pub stage_progress: f64,
    #[serde(default)]
    pub birth_timestamp: String,
    #[serde(default)]
    pub days_alive: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VitalSigns {
    #[serde(default)]
    pub ias: f64,
    #[serde(default)]
    pub gas: f64,
    #[serde(default)]
    pub autonomy_level: f64,
    #[serde(default)]
    pub self_awareness: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Personality {
    #[serde(default)]
    pub traits: TraitSet,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvolutionMetrics {
    #[serde(default)]
    pub total_events: u64,
    #[serde(default)]
    pub reflection_count: u64,
    #[serde(default)]
    pub commitment_count: u64,
    #[serde(default)]
    pub stage_reached: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    pub content: String,
    pub timestamp: String,
    #[serde(default)]
    pub kind: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsciousnessState {
    #[serde(default)]
    pub is_self_aware: bool,
    #[serde(default)]
    pub is_autonomous: bool,
    #[serde(default)]
    pub is_evolving: bool,
}

/// Aggregate self-model snapshot served by `/consciousness`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Consciousness {
    #[serde(default)]
    pub identity: IdentityInfo,
    #[serde(default)]
    pub vital_signs: VitalSigns,
    #[serde(default)]
    pub personality: Personality,
    #[serde(default)]
    pub evolution_metrics: EvolutionMetrics,
    #[serde(default)]
    pub latest_insight: Option<Insight>,
    #[serde(default)]
    pub consciousness_state: ConsciousnessState,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsciousnessResponse {
    pub version: String,
    pub consciousness: Consciousness,
}
