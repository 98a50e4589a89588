//! Chat page view model.
//!
//! Invariant: at most one assistant message is streaming at a time.
//! `active_index` points at it; taking the index finalizes exactly once.

use crate::chat::transcript::{load_messages, ChatMessage};
use contracts::chat::{ChatTurn, ModelInfo};
use leptos::prelude::*;
use web_sys::AbortController;

#[derive(Clone, Copy)]
pub struct ChatVm {
    pub messages: RwSignal<Vec<ChatMessage>>,
    pub input: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub model_error: RwSignal<Option<String>>,
    pub is_streaming: RwSignal<bool>,
    pub active_index: RwSignal<Option<usize>>,
    pub models: RwSignal<Vec<ModelInfo>>,
    pub models_loading: RwSignal<bool>,
    pub selected_model: RwSignal<String>,
    abort: StoredValue<Option<AbortController>, LocalStorage>,
}

impl ChatVm {
    pub fn new() -> Self {
        Self::with_messages(load_messages())
    }

    fn with_messages(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages: RwSignal::new(messages),
            input: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            model_error: RwSignal::new(None),
            is_streaming: RwSignal::new(false),
            active_index: RwSignal::new(None),
            models: RwSignal::new(Vec::new()),
            models_loading: RwSignal::new(false),
            selected_model: RwSignal::new(String::new()),
            abort: StoredValue::new_local(None),
        }
    }

    pub fn can_send(&self) -> bool {
        !self.is_streaming.get()
            && !self.input.get().trim().is_empty()
            && !self.selected_model.get().is_empty()
            && !self.models_loading.get()
    }

    /// Cancel the in-flight request, if any. Starting a new send always
    /// goes through here first, so at most one request is outstanding.
    pub fn abort_in_flight(&self) {
        if let Some(controller) = self.abort.get_value() {
            controller.abort();
        }
        self.abort.set_value(None);
    }

    pub fn track_abort(&self, controller: AbortController) {
        self.abort.set_value(Some(controller));
    }

    pub fn clear_abort(&self) {
        self.abort.set_value(None);
    }

    pub fn push_message(&self, message: ChatMessage) {
        self.messages.update(|messages| messages.push(message));
    }

    /// Role/content pairs of the current transcript, for the request
    /// payload.
    pub fn history(&self) -> Vec<ChatTurn> {
        self.messages
            .get_untracked()
            .iter()
            .map(|m| ChatTurn {
                role: m.role,
                content: m.content.clone(),
            })
            .collect()
    }

    pub fn append_delta(&self, delta: &str) {
        let Some(idx) = self.active_index.get_untracked() else {
            return;
        };
        self.messages.update(|messages| {
            if let Some(message) = messages.get_mut(idx) {
                message.pending = false;
                message.content.push_str(delta);
            }
        });
    }

    /// Finalize the active assistant message. Detaching the index first
    /// makes a second call in the same turn a no-op.
    pub fn finalize_active(&self) {
        let Some(idx) = self.active_index.get_untracked() else {
            return;
        };
        self.active_index.set(None);
        self.messages.update(|messages| {
            if let Some(message) = messages.get_mut(idx) {
                message.finalize();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vm_with_stream() -> ChatVm {
        let vm = ChatVm::with_messages(vec![ChatMessage::user("hello".to_string())]);
        vm.push_message(ChatMessage::assistant_placeholder("gemma".to_string()));
        vm.active_index.set(Some(1));
        vm
    }

    #[test]
    fn test_deltas_accumulate_in_arrival_order() {
        let vm = vm_with_stream();
        vm.append_delta("Hi");
        vm.append_delta(" there");
        let messages = vm.messages.get_untracked();
        assert_eq!(messages[1].content, "Hi there");
        assert!(!messages[1].pending);
        assert!(messages[1].streaming);
    }

    #[test]
    fn test_finalize_is_idempotent_and_detaches_stream() {
        let vm = vm_with_stream();
        vm.append_delta("partial");
        vm.finalize_active();

        let messages = vm.messages.get_untracked();
        assert!(!messages[1].streaming);
        assert!(!messages[1].pending);
        assert!(vm.active_index.get_untracked().is_none());

        // Late deltas and a second finalize change nothing; content
        // appended before the stop is preserved.
        vm.append_delta("ignored");
        vm.finalize_active();
        assert_eq!(vm.messages.get_untracked()[1].content, "partial");
    }

    #[test]
    fn test_at_most_one_streaming_message() {
        let vm = vm_with_stream();
        vm.finalize_active();
        vm.push_message(ChatMessage::assistant_placeholder("gemma".to_string()));
        vm.active_index
            .set(Some(vm.messages.with_untracked(|m| m.len()) - 1));

        let streaming = vm
            .messages
            .with_untracked(|m| m.iter().filter(|msg| msg.streaming).count());
        assert_eq!(streaming, 1);
    }

    #[test]
    fn test_history_is_role_content_pairs() {
        let vm = vm_with_stream();
        let turns = vm.history();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].role.as_str(), "user");
        assert_eq!(turns[0].content, "hello");
    }
}
