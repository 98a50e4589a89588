//! OCEAN trait bars with IAS/GAS context, refreshed on a slow poll.

use crate::dashboard::model::fetch_metrics;
use crate::layout::global_context::use_app_context;
use crate::shared::poll::use_poll;
use contracts::metrics::MetricsSnapshot;
use leptos::prelude::*;

const TRAIT_COLORS: [&str; 5] = ["#3b82f6", "#10b981", "#f59e0b", "#8b5cf6", "#ef4444"];

const WIDTH: f64 = 420.0;
const BAR_HEIGHT: f64 = 22.0;
const BAR_GAP: f64 = 10.0;
const LABEL_WIDTH: f64 = 130.0;

#[component]
pub fn TraitDriftChart() -> impl IntoView {
    let ctx = use_app_context();
    let metrics = RwSignal::new(None::<MetricsSnapshot>);

    use_poll(30_000, move || {
        let db = ctx.db_param();
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_metrics(db).await {
                Ok(resp) => metrics.set(Some(resp.metrics)),
                Err(err) => log::warn!("trait metrics unavailable: {}", err),
            }
        });
    });

    view! {
        <div style="border: 1px solid var(--colorNeutralStroke2); border-radius: 8px; padding: 12px;">
            <h3 style="margin: 0 0 8px 0; font-size: 14px;">"Trait Drift"</h3>
            {move || match metrics.get() {
                None => view! {
                    <div style="color: var(--colorNeutralForeground3); font-size: 12px;">
                        "Loading traits\u{2026}"
                    </div>
                }
                .into_any(),
                Some(snapshot) => {
                    let height = 5.0 * (BAR_HEIGHT + BAR_GAP);
                    view! {
                        <svg width=WIDTH height=height style="display: block; max-width: 100%;">
                            {snapshot
                                .traits
                                .as_pairs()
                                .into_iter()
                                .enumerate()
                                .map(|(i, (name, value))| {
                                    let y = i as f64 * (BAR_HEIGHT + BAR_GAP);
                                    let fraction = value.clamp(0.0, 1.0);
                                    let bar = fraction * (WIDTH - LABEL_WIDTH - 60.0);
                                    view! {
                                        <text x="0" y={y + 15.0} font-size="12" fill="currentColor">
                                            {name}
                                        </text>
                                        <rect
                                            x=LABEL_WIDTH
                                            y=y
                                            width={bar.max(1.0)}
                                            height=BAR_HEIGHT
                                            rx="3"
                                            fill=TRAIT_COLORS[i]
                                            fill-opacity="0.85"
                                        ></rect>
                                        <text
                                            x={LABEL_WIDTH + bar + 6.0}
                                            y={y + 15.0}
                                            font-size="11"
                                            fill="currentColor"
                                        >
                                            {format!("{:.1}%", value * 100.0)}
                                        </text>
                                    }
                                })
                                .collect_view()}
                        </svg>
                        <div style="margin-top: 8px; font-size: 11px; color: var(--colorNeutralForeground3);">
                            {format!(
                                "IAS {:.1}% \u{00b7} GAS {:.1}%",
                                snapshot.ias * 100.0,
                                snapshot.gas * 100.0,
                            )}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
