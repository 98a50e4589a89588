//! The chat transcript and its localStorage snapshot.

use crate::shared::storage;
use contracts::chat::ChatRole;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    #[serde(default)]
    pub pending: bool,
    #[serde(default)]
    pub streaming: bool,
    #[serde(default)]
    pub model: Option<String>,
    /// Set for locally generated notes (the `--@metrics` snapshot);
    /// rendered preformatted and never sent to the model.
    #[serde(default)]
    pub system: bool,
}

impl ChatMessage {
    pub fn user(content: String) -> Self {
        Self {
            id: new_message_id(),
            role: ChatRole::User,
            content,
            pending: false,
            streaming: false,
            model: None,
            system: false,
        }
    }

    /// Empty assistant message appended together with the user prompt;
    /// filled in by the stream.
    pub fn assistant_placeholder(model: String) -> Self {
        Self {
            id: new_message_id(),
            role: ChatRole::Assistant,
            content: String::new(),
            pending: true,
            streaming: true,
            model: Some(model),
            system: false,
        }
    }

    pub fn system_note(content: String) -> Self {
        Self {
            id: new_message_id(),
            role: ChatRole::Assistant,
            content,
            pending: false,
            streaming: false,
            model: None,
            system: true,
        }
    }

    pub fn finalize(&mut self) {
        self.pending = false;
        self.streaming = false;
    }
}

pub fn new_message_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Restore the transcript from localStorage, or start empty.
pub fn load_messages() -> Vec<ChatMessage> {
    match storage::get(storage::CHAT_MESSAGES_KEY) {
        Some(raw) => decode_messages(&raw),
        None => Vec::new(),
    }
}

/// Decode a stored transcript. Anything that is not a sequence of
/// message-shaped records is discarded silently; a snapshot taken
/// mid-stream comes back finalized.
pub fn decode_messages(raw: &str) -> Vec<ChatMessage> {
    match serde_json::from_str::<Vec<ChatMessage>>(raw) {
        Ok(mut messages) => {
            for message in &mut messages {
                message.finalize();
            }
            messages
        }
        Err(err) => {
            log::warn!("discarding stored chat transcript: {}", err);
            Vec::new()
        }
    }
}

/// Persist the transcript; an empty transcript clears the key.
pub fn save_messages(messages: &[ChatMessage]) {
    if messages.is_empty() {
        storage::remove(storage::CHAT_MESSAGES_KEY);
        return;
    }
    match serde_json::to_string(messages) {
        Ok(json) => storage::set(storage::CHAT_MESSAGES_KEY, &json),
        Err(err) => log::warn!("failed to serialize chat transcript: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_round_trip() {
        let messages = vec![
            ChatMessage::user("hello".to_string()),
            ChatMessage::system_note("snapshot".to_string()),
        ];
        let json = serde_json::to_string(&messages).unwrap();
        assert_eq!(decode_messages(&json), messages);
    }

    #[test]
    fn test_decode_clears_streaming_flags() {
        let mut placeholder = ChatMessage::assistant_placeholder("gemma".to_string());
        placeholder.content = "partial".to_string();
        let json = serde_json::to_string(&[placeholder]).unwrap();
        let restored = decode_messages(&json);
        assert_eq!(restored.len(), 1);
        assert!(!restored[0].pending);
        assert!(!restored[0].streaming);
        assert_eq!(restored[0].content, "partial");
    }

    #[test]
    fn test_decode_rejects_invalid_payloads() {
        assert!(decode_messages("not json").is_empty());
        assert!(decode_messages("{\"id\": \"x\"}").is_empty());
        assert!(decode_messages("[1, 2, 3]").is_empty());
        assert!(decode_messages("[{\"id\": \"x\"}]").is_empty());
    }

    #[test]
    fn test_decode_tolerates_missing_optionals() {
        let raw = r#"[{"id": "a", "role": "assistant", "content": "hi"}]"#;
        let restored = decode_messages(raw);
        assert_eq!(restored.len(), 1);
        assert_eq!(restored[0].role, ChatRole::Assistant);
        assert!(restored[0].model.is_none());
        assert!(!restored[0].system);
    }

    #[test]
    fn test_message_ids_are_unique() {
        assert_ne!(new_message_id(), new_message_id());
    }
}
