use serde::{Deserialize, Serialize};

/// Role of a chat turn sent to the completion endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "user" => Ok(ChatRole::User),
            "assistant" => Ok(ChatRole::Assistant),
            _ => Err(format!("Unknown chat role: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// Role/content pair as the completion endpoint expects it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatTurn>,
    pub stream: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub max_tokens: u32,
    #[serde(default)]
    pub temperature: f64,
    #[serde(default)]
    pub cost_per_1k_tokens: f64,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentModel {
    pub model: String,
    #[serde(default)]
    pub provider: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsResponse {
    pub version: String,
    #[serde(default)]
    pub models: Vec<ModelInfo>,
    #[serde(default)]
    pub current: Option<CurrentModel>,
    #[serde(default)]
    pub default: Option<String>,
}

impl ModelsResponse {
    /// Choose the model to preselect: a previously stored name, then the
    /// runtime's current model, then the advertised default, then the
    /// first listed model. A candidate that is no longer present in the
    /// list falls back to the first ollama-provided model when one exists.
    pub fn pick_default(&self, previous: Option<&str>) -> Option<String> {
        let candidate = previous
            .map(|s| s.to_string())
            .filter(|s| !s.is_empty())
            .or_else(|| self.current.as_ref().map(|c| c.model.clone()))
            .or_else(|| self.default.clone())
            .or_else(|| self.models.first().map(|m| m.name.clone()))?;

        if self.models.iter().any(|m| m.name == candidate) {
            return Some(candidate);
        }
        self.models
            .iter()
            .find(|m| m.provider == "ollama")
            .map(|m| m.name.clone())
            .or(Some(candidate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn models(names: &[(&str, &str)]) -> ModelsResponse {
        ModelsResponse {
            version: "1".to_string(),
            models: names
                .iter()
                .map(|(name, provider)| ModelInfo {
                    name: name.to_string(),
                    provider: provider.to_string(),
                    max_tokens: 4096,
                    temperature: 0.7,
                    cost_per_1k_tokens: 0.0,
                    description: None,
                })
                .collect(),
            current: None,
            default: None,
        }
    }

    #[test]
    fn test_role_round_trip() {
        assert_eq!(ChatRole::from_str("user").unwrap(), ChatRole::User);
        assert_eq!(ChatRole::Assistant.as_str(), "assistant");
        assert!(ChatRole::from_str("system").is_err());
        let json = serde_json::to_string(&ChatRole::User).unwrap();
        assert_eq!(json, r#""user""#);
    }

    #[test]
    fn test_pick_default_prefers_stored_selection() {
        let resp = models(&[("gemma", "ollama"), ("gpt-4o-mini", "openai")]);
        assert_eq!(
            resp.pick_default(Some("gpt-4o-mini")).as_deref(),
            Some("gpt-4o-mini")
        );
    }

    #[test]
    fn test_pick_default_falls_back_in_order() {
        let mut resp = models(&[("gemma", "ollama")]);
        resp.default = Some("gemma".to_string());
        assert_eq!(resp.pick_default(None).as_deref(), Some("gemma"));

        resp.current = Some(CurrentModel {
            model: "gemma".to_string(),
            provider: "ollama".to_string(),
        });
        assert_eq!(resp.pick_default(None).as_deref(), Some("gemma"));
    }

    #[test]
    fn test_pick_default_stale_candidate_prefers_ollama() {
        let resp = models(&[("gemma", "ollama"), ("mistral", "openai")]);
        assert_eq!(resp.pick_default(Some("retired")).as_deref(), Some("gemma"));
    }

    #[test]
    fn test_pick_default_empty_list() {
        let resp = models(&[]);
        assert_eq!(resp.pick_default(None), None);
        // A stored name survives even when the list is empty.
        assert_eq!(resp.pick_default(Some("gemma")).as_deref(), Some("gemma"));
    }
}
