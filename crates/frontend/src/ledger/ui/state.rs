use crate::ledger::labels::event_label;
use crate::shared::list_utils::{Searchable, Sortable};
use contracts::events::PmmEvent;
use leptos::prelude::*;
use std::cmp::Ordering;

/// Kinds offered by the filter dropdown; "all" disables the filter.
pub const EVENT_KINDS: [&str; 19] = [
    "all",
    "identity_adopt",
    "identity_change",
    "commitment_open",
    "commitment_close",
    "commitment_expire",
    "reflection",
    "meta_reflection",
    "autonomy_tick",
    "invariant_violation",
    "metrics_update",
    "evaluation_report",
    "stage_progress",
    "curriculum_update",
    "bandit_reward",
    "bandit_arm_chosen",
    "llm_latency",
    "name_attempt_user",
    "self_suggestion",
];

#[derive(Clone, Debug)]
pub struct EventRow {
    pub id: i64,
    pub ts: String,
    pub ts_short: String,
    pub kind: String,
    pub label: String,
    pub content: Option<String>,
    pub meta: Option<serde_json::Value>,
    pub hash: Option<String>,
    pub prev_hash: Option<String>,
}

impl EventRow {
    pub fn from_event(event: &PmmEvent) -> Self {
        let ts_short = event
            .timestamp()
            .map(|dt| dt.format("%b %d %H:%M:%S").to_string())
            .unwrap_or_else(|| event.ts.clone());
        Self {
            id: event.id,
            ts: event.ts.clone(),
            ts_short,
            kind: event.kind.clone(),
            label: event_label(event),
            content: event.content.clone(),
            meta: event.meta.clone(),
            hash: event.hash.clone(),
            prev_hash: event.prev_hash.clone(),
        }
    }

    pub fn label_truncated(&self) -> String {
        truncate_label(&self.label, 80)
    }
}

impl Searchable for EventRow {
    fn matches_filter(&self, filter: &str) -> bool {
        let f = filter.to_lowercase();
        self.kind.to_lowercase().contains(&f) || self.label.to_lowercase().contains(&f)
    }
}

impl Sortable for EventRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "ts" => self.ts.cmp(&other.ts),
            "kind" => self.kind.cmp(&other.kind),
            "content" => self.label.to_lowercase().cmp(&other.label.to_lowercase()),
            "hash" => self.hash.cmp(&other.hash),
            _ => Ordering::Equal,
        }
    }
}

pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_string();
    }
    let truncated: String = label.chars().take(max_chars).collect();
    format!("{}...", truncated)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnVisibility {
    pub id: bool,
    pub ts: bool,
    pub kind: bool,
    pub content: bool,
    pub hash: bool,
    pub prev_hash: bool,
}

impl Default for ColumnVisibility {
    fn default() -> Self {
        Self {
            id: true,
            ts: true,
            kind: true,
            content: true,
            hash: true,
            prev_hash: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct EventsState {
    pub rows: Vec<EventRow>,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub columns: ColumnVisibility,
    pub show_hash_chain: bool,
    pub expanded: Option<i64>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for EventsState {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            sort_field: "id".to_string(),
            sort_ascending: false,
            columns: ColumnVisibility::default(),
            show_hash_chain: true,
            expanded: None,
            is_loading: false,
            error: None,
        }
    }
}

pub fn create_state() -> RwSignal<EventsState> {
    RwSignal::new(EventsState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::sort_list;

    fn row(id: i64, kind: &str) -> EventRow {
        EventRow {
            id,
            ts: format!("2025-04-0{}T00:00:00+00:00", id),
            ts_short: String::new(),
            kind: kind.to_string(),
            label: kind.to_string(),
            content: None,
            meta: None,
            hash: None,
            prev_hash: None,
        }
    }

    #[test]
    fn test_sort_rows_by_id_descending() {
        let mut rows = vec![row(1, "reflection"), row(3, "response"), row(2, "user")];
        sort_list(&mut rows, "id", false);
        assert_eq!(rows[0].id, 3);
        assert_eq!(rows[2].id, 1);
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("short", 80), "short");
        let long = "x".repeat(100);
        let truncated = truncate_label(&long, 80);
        assert_eq!(truncated.chars().count(), 83);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_row_from_event_formats_timestamp() {
        let event: PmmEvent = serde_json::from_str(
            r#"{"id": 5, "kind": "reflection", "ts": "2025-04-01T10:30:00+00:00"}"#,
        )
        .unwrap();
        let row = EventRow::from_event(&event);
        assert_eq!(row.ts_short, "Apr 01 10:30:00");
        assert_eq!(row.label, "Reflection \u{2013} reason: Unknown");
    }
}
