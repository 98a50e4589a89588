//! S0–S4 progression ladder with the current stage highlighted.

use crate::dashboard::model::fetch_metrics;
use crate::layout::global_context::use_app_context;
use crate::shared::poll::use_poll;
use contracts::metrics::{StageInfo, STAGES};
use leptos::prelude::*;

#[component]
pub fn StageLadder() -> impl IntoView {
    let ctx = use_app_context();
    let stage = RwSignal::new(None::<StageInfo>);

    use_poll(30_000, move || {
        let db = ctx.db_param();
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_metrics(db).await {
                Ok(resp) => stage.set(Some(resp.metrics.stage)),
                Err(err) => log::warn!("stage unavailable: {}", err),
            }
        });
    });

    view! {
        <div style="border: 1px solid var(--colorNeutralStroke2); border-radius: 8px; padding: 12px;">
            <h3 style="margin: 0 0 8px 0; font-size: 14px;">"Stage Ladder"</h3>
            {move || {
                let current = stage.get().map(|s| s.index()).unwrap_or(0);
                let progress = ((current + 1) as f64 / STAGES.len() as f64) * 100.0;
                view! {
                    <div style="display: flex; gap: 8px; align-items: stretch;">
                        {STAGES
                            .into_iter()
                            .enumerate()
                            .map(|(i, (id, name))| {
                                let reached = i <= current;
                                let is_current = i == current;
                                view! {
                                    <div style=format!(
                                        "flex: 1; text-align: center; padding: 10px 4px; border-radius: 6px; border: 1px solid {}; {}",
                                        if is_current {
                                            "var(--colorBrandBackground)"
                                        } else {
                                            "var(--colorNeutralStroke2)"
                                        },
                                        if reached { "" } else { "opacity: 0.45;" },
                                    )>
                                        <div style="font-weight: bold;">{id}</div>
                                        <div style="font-size: 11px; color: var(--colorNeutralForeground3);">
                                            {name}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div style="margin-top: 8px; height: 6px; background: var(--colorNeutralBackground4); border-radius: 3px;">
                        <div style=format!(
                            "height: 6px; width: {:.0}%; background: var(--colorBrandBackground); border-radius: 3px;",
                            progress,
                        )></div>
                    </div>
                }
            }}
        </div>
    }
}
