//! Human-readable labels for ledger rows, derived from `kind` + `meta`
//! when the event carries no usable content.

use contracts::events::PmmEvent;

fn meta_or_unknown(event: &PmmEvent, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| event.meta_str(key))
        .unwrap_or_else(|| "Unknown".to_string())
}

pub fn event_label(event: &PmmEvent) -> String {
    // Meaningful content wins over generated labels.
    if let Some(content) = &event.content {
        let trimmed = content.trim();
        if !trimmed.is_empty() && trimmed != "\u{2014}" {
            return content.clone();
        }
    }

    match event.kind.as_str() {
        // Identity events
        "identity_adopt" => format!("Identity Adopt \u{2013} {}", meta_or_unknown(event, &["name"])),
        "identity_checkpoint" => format!(
            "Identity Checkpoint \u{2013} {}, stage={}",
            meta_or_unknown(event, &["name"]),
            event.meta_str("stage").unwrap_or_else(|| "S0".to_string())
        ),
        "name_updated" => format!(
            "Name Updated \u{2013} {}",
            meta_or_unknown(event, &["new_name", "name"])
        ),
        "name_attempt_user" => format!(
            "Name Attempt (user) \u{2013} {}",
            meta_or_unknown(event, &["suggestion"])
        ),
        "name_attempt_system" => format!(
            "Name Attempt (system) \u{2013} {}",
            meta_or_unknown(event, &["suggestion"])
        ),
        "naming_intent_classified" => format!(
            "Naming Intent \u{2013} {}",
            meta_or_unknown(event, &["intent"])
        ),

        // Reflection events
        "reflection" => format!(
            "Reflection \u{2013} reason: {}",
            meta_or_unknown(event, &["reason"])
        ),
        "meta_reflection" => format!(
            "Meta Reflection \u{2013} {}",
            meta_or_unknown(event, &["summary", "reason"])
        ),
        "reflection_action" => format!(
            "Reflection Action \u{2013} {}",
            meta_or_unknown(event, &["action"])
        ),
        "reflection_check" => format!(
            "Reflection Check \u{2013} {}",
            meta_or_unknown(event, &["result"])
        ),
        "reflection_discarded" => format!(
            "Reflection Discarded \u{2013} {}",
            meta_or_unknown(event, &["reason"])
        ),
        "reflection_forced" => format!(
            "Forced Reflection \u{2013} {}",
            meta_or_unknown(event, &["trigger"])
        ),
        "reflection_quality" => format!(
            "Reflection Quality \u{2013} {}",
            meta_or_unknown(event, &["quality"])
        ),
        "reflection_rejected" => format!(
            "Reflection Rejected \u{2013} {}",
            meta_or_unknown(event, &["reason"])
        ),
        "reflection_skipped" => "Reflection Skipped".to_string(),

        // Commitment events
        "commitment_open" => format!(
            "Commitment (open) \u{2013} {}",
            meta_or_unknown(event, &["intent", "project", "text"])
        ),
        "commitment_close" => format!(
            "Commitment (closed) \u{2013} {}",
            meta_or_unknown(event, &["intent", "project", "text"])
        ),
        "commitment_expire" => format!(
            "Commitment (expired) \u{2013} {}",
            meta_or_unknown(event, &["intent", "project", "text"])
        ),
        "commitment_priority" => format!(
            "Commitment Priority \u{2013} {}",
            meta_or_unknown(event, &["priority"])
        ),

        // Stage events
        "stage_progress" => format!(
            "Stage Progress \u{2013} {}",
            meta_or_unknown(event, &["stage"])
        ),
        "stage_reflection" => format!(
            "Stage Reflection \u{2013} {}",
            meta_or_unknown(event, &["summary"])
        ),
        "stage_transition" => format!(
            "Stage Transition \u{2013} {} \u{2192} {}",
            event.meta_str("from").unwrap_or_else(|| "S0".to_string()),
            meta_or_unknown(event, &["to"])
        ),
        "stage_update" => format!(
            "Stage Update \u{2013} now {}",
            meta_or_unknown(event, &["stage"])
        ),

        // Metrics events
        "metrics_update" => format!(
            "Metrics Update \u{2013} IAS={}, GAS={}",
            event
                .meta_str("IAS")
                .or_else(|| event.meta_str("ias"))
                .unwrap_or_else(|| "?.??".to_string()),
            event
                .meta_str("GAS")
                .or_else(|| event.meta_str("gas"))
                .unwrap_or_else(|| "?.??".to_string())
        ),
        "metrics" => format!(
            "Metrics \u{2013} {}",
            event
                .meta_str("snapshot_summary")
                .unwrap_or_else(|| "snapshot".to_string())
        ),
        "trait_update" => format!(
            "Trait Update \u{2013} {}={}",
            meta_or_unknown(event, &["trait"]),
            meta_or_unknown(event, &["value"])
        ),

        // Curriculum and policy
        "curriculum_update" => format!(
            "Curriculum Update \u{2013} {}",
            meta_or_unknown(event, &["summary"])
        ),
        "policy_update" => format!(
            "Policy Update \u{2013} {}",
            meta_or_unknown(event, &["summary"])
        ),

        // Evaluation
        "evaluation_report" => format!(
            "Evaluation Report \u{2013} {}",
            meta_or_unknown(event, &["score"])
        ),
        "evaluation_summary" => format!(
            "Evaluation Summary \u{2013} {}",
            meta_or_unknown(event, &["headline"])
        ),

        // Bandit
        "bandit_arm_chosen" => format!(
            "Bandit Arm Chosen \u{2013} {}",
            meta_or_unknown(event, &["arm"])
        ),
        "bandit_guidance_bias" => format!(
            "Bandit Guidance Bias \u{2013} {}",
            meta_or_unknown(event, &["bias"])
        ),
        "bandit_reward" => format!(
            "Bandit Reward \u{2013} {}",
            meta_or_unknown(event, &["value"])
        ),

        // Introspection
        "introspection_query" => format!(
            "Introspection Query \u{2013} {}",
            meta_or_unknown(event, &["query"])
        ),
        "insight_ready" => format!(
            "Insight Ready \u{2013} {}",
            meta_or_unknown(event, &["topic"])
        ),
        "self_suggestion" => format!(
            "Self Suggestion \u{2013} {}",
            meta_or_unknown(event, &["suggestion"])
        ),
        "knowledge_assert" => format!(
            "Knowledge Assert \u{2013} {}",
            meta_or_unknown(event, &["claim"])
        ),
        "semantic_growth_report" => format!(
            "Semantic Growth Report \u{2013} {}",
            meta_or_unknown(event, &["summary"])
        ),
        "embedding_indexed" => format!(
            "Embedding Indexed \u{2013} {}",
            meta_or_unknown(event, &["digest", "keywords"])
        ),

        // Autonomy
        "autonomy_tick" => format!("Autonomy Tick \u{2013} {}", meta_or_unknown(event, &["tick"])),
        "audit_report" => format!(
            "Audit Report \u{2013} {}",
            meta_or_unknown(event, &["result"])
        ),
        "invariant_violation" => format!(
            "Invariant Violation \u{2013} {}",
            meta_or_unknown(event, &["message"])
        ),
        "llm_latency" => format!("LLM Latency \u{2013} {}", meta_or_unknown(event, &["ms"])),

        "evolution" => {
            let changes = event
                .meta
                .as_ref()
                .and_then(|meta| meta.get("changes"))
                .and_then(|v| v.as_object());
            match changes {
                Some(map) if !map.is_empty() => format!(
                    "Evolution \u{2013} {}",
                    map.keys().cloned().collect::<Vec<_>>().join(", ")
                ),
                _ => "Evolution \u{2013} changes".to_string(),
            }
        }

        "response" => format!(
            "Response \u{2013} {}",
            meta_or_unknown(event, &["excerpt"])
        ),
        "scene_compact" => format!(
            "Scene Compact \u{2013} {}",
            meta_or_unknown(event, &["scene_id"])
        ),
        "recall_suggest" => format!(
            "Recall Suggest \u{2013} {}",
            meta_or_unknown(event, &["suggestion"])
        ),
        "user" => "User Event \u{2013} Unknown".to_string(),

        // Fall back to the first scalar meta field, if any.
        kind => {
            if let Some(serde_json::Value::Object(map)) = &event.meta {
                if let Some((_, value)) = map.iter().next() {
                    match value {
                        serde_json::Value::String(s) if !s.is_empty() => {
                            return format!("{} \u{2013} {}", kind, s);
                        }
                        serde_json::Value::Number(n) => {
                            return format!("{} \u{2013} {}", kind, n);
                        }
                        _ => {}
                    }
                }
            }
            "Structured Data".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(kind: &str, content: Option<&str>, meta: serde_json::Value) -> PmmEvent {
        PmmEvent {
            id: 1,
            kind: kind.to_string(),
            ts: "2025-04-01T00:00:00+00:00".to_string(),
            content: content.map(|s| s.to_string()),
            meta: Some(meta),
            payload: None,
            hash: None,
            prev_hash: None,
        }
    }

    #[test]
    fn test_content_wins() {
        let e = event("reflection", Some("today I noticed"), serde_json::json!({}));
        assert_eq!(event_label(&e), "today I noticed");
    }

    #[test]
    fn test_placeholder_content_is_ignored() {
        let e = event(
            "reflection",
            Some("\u{2014}"),
            serde_json::json!({"reason": "cadence"}),
        );
        assert_eq!(event_label(&e), "Reflection \u{2013} reason: cadence");
    }

    #[test]
    fn test_commitment_label_prefers_intent() {
        let e = event(
            "commitment_open",
            None,
            serde_json::json!({"project": "atlas", "intent": "write summary"}),
        );
        assert_eq!(event_label(&e), "Commitment (open) \u{2013} write summary");
    }

    #[test]
    fn test_metrics_update_accepts_both_casings() {
        let e = event(
            "metrics_update",
            None,
            serde_json::json!({"ias": 0.7, "gas": 0.6}),
        );
        assert_eq!(event_label(&e), "Metrics Update \u{2013} IAS=0.7, GAS=0.6");
    }

    #[test]
    fn test_stage_transition_label() {
        let e = event(
            "stage_transition",
            None,
            serde_json::json!({"from": "S1", "to": "S2"}),
        );
        assert_eq!(event_label(&e), "Stage Transition \u{2013} S1 \u{2192} S2");
    }

    #[test]
    fn test_unknown_kind_uses_first_scalar_meta() {
        let e = event("weird_kind", None, serde_json::json!({"note": "hello"}));
        assert_eq!(event_label(&e), "weird_kind \u{2013} hello");

        let e = event("weird_kind", None, serde_json::json!({"note": {"deep": 1}}));
        assert_eq!(event_label(&e), "Structured Data");
    }
}
