use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiveMessageType {
    Event,
    Heartbeat,
}

/// Envelope delivered on the best-effort `/stream` WebSocket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveMessage {
    #[serde(rename = "type")]
    pub kind: LiveMessageType,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_message() {
        let msg: LiveMessage = serde_json::from_str(
            r#"{"type": "event", "data": {"kind": "reflection"}, "timestamp": "2025-04-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(msg.kind, LiveMessageType::Event);
        assert!(msg.data.is_some());
    }

    #[test]
    fn test_heartbeat_without_data() {
        let msg: LiveMessage =
            serde_json::from_str(r#"{"type": "heartbeat", "timestamp": "2025-04-01T00:00:00Z"}"#)
                .unwrap();
        assert_eq!(msg.kind, LiveMessageType::Heartbeat);
        assert!(msg.data.is_none());
    }
}
