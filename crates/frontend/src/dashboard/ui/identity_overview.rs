use crate::dashboard::model::fetch_consciousness;
use crate::layout::global_context::use_app_context;
use crate::shared::poll::use_poll;
use contracts::consciousness::Consciousness;
use leptos::prelude::*;

#[component]
pub fn IdentityOverview() -> impl IntoView {
    let ctx = use_app_context();
    let snapshot = RwSignal::new(None::<Consciousness>);
    let error = RwSignal::new(None::<String>);

    use_poll(30_000, move || {
        let db = ctx.db_param();
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_consciousness(db).await {
                Ok(resp) => {
                    snapshot.set(Some(resp.consciousness));
                    error.set(None);
                }
                Err(err) => error.set(Some(err)),
            }
        });
    });

    view! {
        <div style="padding: 12px; border: 1px solid var(--colorNeutralStroke2); border-radius: 8px;">
            <h3 style="margin: 0 0 8px 0; font-size: 14px;">"Identity"</h3>
            {move || {
                error
                    .get()
                    .map(|err| {
                        view! {
                            <div style="font-size: 12px; color: var(--colorPaletteRedForeground1);">{err}</div>
                        }
                    })
            }}
            {move || match snapshot.get() {
                None => view! {
                    <div style="color: var(--colorNeutralForeground3); font-size: 12px;">
                        "Loading identity snapshot\u{2026}"
                    </div>
                }
                .into_any(),
                Some(c) => {
                    let flags = [
                        ("self-aware", c.consciousness_state.is_self_aware),
                        ("autonomous", c.consciousness_state.is_autonomous),
                        ("evolving", c.consciousness_state.is_evolving),
                    ];
                    view! {
                        <div style="display: flex; flex-direction: column; gap: 8px; font-size: 12px;">
                            <div style="display: flex; align-items: baseline; gap: 8px;">
                                <span style="font-size: 20px; font-weight: bold;">
                                    {c.identity.name.clone()}
                                </span>
                                <span class="badge badge--brand">{c.identity.stage.clone()}</span>
                                <span style="color: var(--colorNeutralForeground3);">
                                    {format!("{:.0} days alive", c.identity.days_alive)}
                                </span>
                            </div>

                            <div style="display: grid; grid-template-columns: repeat(4, 1fr); gap: 8px;">
                                <div>
                                    <div style="color: var(--colorNeutralForeground3);">"IAS"</div>
                                    <div style="font-weight: 600;">{format!("{:.1}%", c.vital_signs.ias * 100.0)}</div>
                                </div>
                                <div>
                                    <div style="color: var(--colorNeutralForeground3);">"GAS"</div>
                                    <div style="font-weight: 600;">{format!("{:.1}%", c.vital_signs.gas * 100.0)}</div>
                                </div>
                                <div>
                                    <div style="color: var(--colorNeutralForeground3);">"Autonomy"</div>
                                    <div style="font-weight: 600;">{format!("{:.1}%", c.vital_signs.autonomy_level * 100.0)}</div>
                                </div>
                                <div>
                                    <div style="color: var(--colorNeutralForeground3);">"Self-awareness"</div>
                                    <div style="font-weight: 600;">{format!("{:.1}%", c.vital_signs.self_awareness * 100.0)}</div>
                                </div>
                            </div>

                            <div style="color: var(--colorNeutralForeground3);">
                                {format!(
                                    "{} events \u{00b7} {} reflections \u{00b7} {} commitments \u{00b7} reached {}",
                                    c.evolution_metrics.total_events,
                                    c.evolution_metrics.reflection_count,
                                    c.evolution_metrics.commitment_count,
                                    c.evolution_metrics.stage_reached,
                                )}
                            </div>

                            <div style="display: flex; gap: 6px;">
                                {flags
                                    .into_iter()
                                    .map(|(label, active)| {
                                        view! {
                                            <span
                                                class=if active { "badge badge--brand" } else { "badge badge--secondary" }
                                                style=if active { "" } else { "opacity: 0.5;" }
                                            >
                                                {label}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>

                            {c.latest_insight.map(|insight| {
                                view! {
                                    <blockquote style="margin: 4px 0 0 0; padding: 8px 12px; border-left: 3px solid var(--colorBrandBackground); color: var(--colorNeutralForeground2);">
                                        {insight.content}
                                        <div style="margin-top: 4px; font-size: 11px; color: var(--colorNeutralForeground3); font-family: monospace;">
                                            {insight.timestamp}
                                        </div>
                                    </blockquote>
                                }
                            })}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
