//! Live IAS/GAS/trait gauges next to the chat transcript.

use crate::chat::model::fetch_metrics_snapshot;
use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::shared::poll::use_poll;
use contracts::metrics::{MetricsSnapshot, STAGES};
use leptos::prelude::*;

const TRAIT_COLORS: [(&str, &str); 5] = [
    ("openness", "#3b82f6"),
    ("conscientiousness", "#10b981"),
    ("extraversion", "#f59e0b"),
    ("agreeableness", "#8b5cf6"),
    ("neuroticism", "#ef4444"),
];

fn trait_color(name: &str) -> &'static str {
    TRAIT_COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, c)| *c)
        .unwrap_or("#6b7280")
}

#[component]
pub fn MetricsSidebar() -> impl IntoView {
    let ctx = use_app_context();
    let metrics = RwSignal::new(None::<MetricsSnapshot>);

    use_poll(5_000, move || {
        let db = ctx.db_param();
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_metrics_snapshot(db).await {
                Ok(snapshot) => metrics.set(Some(snapshot)),
                // Gauges keep their last value; the chat view surfaces
                // its own errors.
                Err(err) => log::warn!("metrics poll failed: {}", err),
            }
        });
    });

    view! {
        <aside style="width: 280px; display: flex; flex-direction: column; gap: 12px;">
            {move || match metrics.get() {
                None => view! {
                    <div style="padding: 24px; text-align: center; font-size: 12px; color: var(--colorNeutralForeground3); border: 1px solid var(--colorNeutralStroke2); border-radius: 8px;">
                        "Loading metrics\u{2026}"
                    </div>
                }
                .into_any(),
                Some(snapshot) => {
                    let stage_index = snapshot.stage.index();
                    view! {
                        // IAS / GAS
                        <div style="display: flex; justify-content: space-around; padding: 12px; border: 1px solid var(--colorNeutralStroke2); border-radius: 8px;">
                            <div style="text-align: center;">
                                <div style="display: flex; align-items: center; gap: 4px; font-size: 11px; color: var(--colorNeutralForeground3);">
                                    {icon("activity")}
                                    "IAS"
                                </div>
                                <div style="font-size: 22px; font-weight: bold; color: #3b82f6;">
                                    {format!("{:.1}%", snapshot.ias * 100.0)}
                                </div>
                            </div>
                            <div style="text-align: center;">
                                <div style="display: flex; align-items: center; gap: 4px; font-size: 11px; color: var(--colorNeutralForeground3);">
                                    {icon("trending-up")}
                                    "GAS"
                                </div>
                                <div style="font-size: 22px; font-weight: bold; color: #10b981;">
                                    {format!("{:.1}%", snapshot.gas * 100.0)}
                                </div>
                            </div>
                        </div>

                        // OCEAN traits
                        <div style="padding: 12px; border: 1px solid var(--colorNeutralStroke2); border-radius: 8px;">
                            <div style="font-size: 12px; font-weight: 600; margin-bottom: 8px;">"Personality"</div>
                            {snapshot
                                .traits
                                .as_pairs()
                                .into_iter()
                                .map(|(name, value)| {
                                    let pct = (value * 100.0).clamp(0.0, 100.0);
                                    view! {
                                        <div style="margin-bottom: 6px;">
                                            <div style="display: flex; justify-content: space-between; font-size: 11px; color: var(--colorNeutralForeground3);">
                                                <span>{name}</span>
                                                <span>{format!("{:.0}%", pct)}</span>
                                            </div>
                                            <div style="height: 4px; background: var(--colorNeutralBackground4); border-radius: 2px;">
                                                <div style=format!(
                                                    "height: 4px; width: {:.0}%; background: {}; border-radius: 2px;",
                                                    pct,
                                                    trait_color(name),
                                                )></div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>

                        // Stage ladder
                        <div style="padding: 12px; border: 1px solid var(--colorNeutralStroke2); border-radius: 8px;">
                            <div style="font-size: 12px; font-weight: 600; margin-bottom: 8px;">"Stage"</div>
                            {STAGES
                                .into_iter()
                                .enumerate()
                                .map(|(i, (id, name))| {
                                    let reached = i <= stage_index;
                                    let current = i == stage_index;
                                    view! {
                                        <div style=format!(
                                            "display: flex; align-items: center; gap: 8px; padding: 3px 0; font-size: 12px;{}",
                                            if current { " font-weight: bold;" } else { "" },
                                        )>
                                            <span style=format!(
                                                "width: 8px; height: 8px; border-radius: 50%; background: {};",
                                                if reached { "#10b981" } else { "var(--colorNeutralBackground4)" },
                                            )></span>
                                            {id}
                                            " "
                                            <span style="color: var(--colorNeutralForeground3);">{name}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </aside>
    }
}
