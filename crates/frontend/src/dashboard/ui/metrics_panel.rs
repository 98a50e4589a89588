use crate::dashboard::model::fetch_metrics;
use crate::layout::global_context::use_app_context;
use crate::shared::components::stat_card::{StatCard, ValueFormat};
use crate::shared::poll::use_poll;
use contracts::metrics::MetricsSnapshot;
use leptos::prelude::*;

#[component]
pub fn MetricsPanel() -> impl IntoView {
    let ctx = use_app_context();
    let metrics = RwSignal::new(None::<MetricsSnapshot>);
    let error = RwSignal::new(None::<String>);

    use_poll(30_000, move || {
        let db = ctx.db_param();
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_metrics(db).await {
                Ok(resp) => {
                    metrics.set(Some(resp.metrics));
                    error.set(None);
                }
                Err(err) => error.set(Some(err)),
            }
        });
    });

    view! {
        <div style="display: flex; flex-direction: column; gap: 12px;">
            {move || {
                error
                    .get()
                    .map(|err| {
                        view! {
                            <div style="padding: 8px 12px; border: 1px solid var(--colorPaletteRedBorder1); border-radius: 6px; color: var(--colorPaletteRedForeground1); font-size: 12px;">
                                {err}
                            </div>
                        }
                    })
            }}
            <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 12px;">
                <StatCard
                    label="Identity Stability".to_string()
                    icon_name="activity".to_string()
                    value=Signal::derive(move || metrics.get().map(|m| m.ias))
                    format=ValueFormat::Percent(1)
                    subtitle=Signal::derive(move || {
                        metrics.get().and_then(|m| m.last_updated.clone())
                    })
                />
                <StatCard
                    label="Goal Alignment".to_string()
                    icon_name="trending-up".to_string()
                    value=Signal::derive(move || metrics.get().map(|m| m.gas))
                    format=ValueFormat::Percent(1)
                    subtitle=Signal::derive(move || {
                        metrics.get().map(|m| format!("Stage {}", m.stage.base_stage()))
                    })
                />
            </div>
            {move || {
                metrics.get().map(|m| {
                    view! {
                        <div style="padding: 12px; border: 1px solid var(--colorNeutralStroke2); border-radius: 8px;">
                            <div style="font-size: 12px; font-weight: 600; margin-bottom: 8px;">
                                "OCEAN Traits"
                            </div>
                            {m.traits
                                .as_pairs()
                                .into_iter()
                                .map(|(name, value)| {
                                    let pct = (value * 100.0).clamp(0.0, 100.0);
                                    view! {
                                        <div style="display: flex; align-items: center; gap: 8px; margin-bottom: 4px; font-size: 12px;">
                                            <span style="width: 130px; color: var(--colorNeutralForeground3);">{name}</span>
                                            <div style="flex: 1; height: 6px; background: var(--colorNeutralBackground4); border-radius: 3px;">
                                                <div style=format!(
                                                    "height: 6px; width: {:.0}%; background: var(--colorBrandBackground); border-radius: 3px;",
                                                    pct,
                                                )></div>
                                            </div>
                                            <span style="width: 42px; text-align: right;">{format!("{:.0}%", pct)}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
            }}
        </div>
    }
}
