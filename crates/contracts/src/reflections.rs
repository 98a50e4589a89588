use crate::events::PmmEvent;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReflectionsResponse {
    pub version: String,
    pub reflections: Vec<PmmEvent>,
    #[serde(default)]
    pub count: u32,
}
