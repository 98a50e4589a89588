//! Grouping of raw event kinds into the timeline's display categories.

pub const CATEGORIES: [(&str, &str); 5] = [
    ("Identity & Learning", "#3b82f6"),
    ("Commitments", "#10b981"),
    ("Reflections", "#8b5cf6"),
    ("System Progress", "#f59e0b"),
    ("Other Activity", "#6b7280"),
];

pub fn categorize_event(kind: &str) -> &'static str {
    match kind {
        "identity_adopt" | "identity_checkpoint" | "name_updated" | "name_attempt_user"
        | "name_attempt_system" | "curriculum_update" | "policy_update" | "evaluation_report"
        | "evaluation_summary" => "Identity & Learning",
        "commitment_open" | "commitment_close" | "commitment_expire" | "commitment_priority"
        | "priority_update" => "Commitments",
        "reflection" | "meta_reflection" | "reflection_action" | "reflection_check"
        | "reflection_skipped" | "reflection_forced" | "reflection_rejected"
        | "reflection_quality" | "reflection_discarded" => "Reflections",
        "metrics_update" | "trait_update" | "stage_progress" | "stage_transition"
        | "stage_update" | "stage_reflection" => "System Progress",
        _ => "Other Activity",
    }
}

pub fn category_color(category: &str) -> &'static str {
    CATEGORIES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, color)| *color)
        .unwrap_or("#6b7280")
}

pub fn category_index(category: &str) -> usize {
    CATEGORIES
        .iter()
        .position(|(name, _)| *name == category)
        .unwrap_or(CATEGORIES.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_kinds() {
        assert_eq!(categorize_event("identity_adopt"), "Identity & Learning");
        assert_eq!(categorize_event("commitment_open"), "Commitments");
        assert_eq!(categorize_event("meta_reflection"), "Reflections");
        assert_eq!(categorize_event("stage_transition"), "System Progress");
    }

    #[test]
    fn test_unknown_kind_falls_back() {
        assert_eq!(categorize_event("bandit_reward"), "Other Activity");
        assert_eq!(categorize_event("???"), "Other Activity");
        assert_eq!(category_index("Other Activity"), 4);
    }

    #[test]
    fn test_colors_resolve() {
        assert_eq!(category_color("Commitments"), "#10b981");
        assert_eq!(category_color("nope"), "#6b7280");
    }
}
