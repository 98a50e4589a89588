use crate::dashboard::model::fetch_reflections;
use crate::layout::global_context::use_app_context;
use crate::ledger::labels::event_label;
use crate::shared::poll::use_poll;
use contracts::events::PmmEvent;
use leptos::prelude::*;

#[component]
pub fn ReflectionsFeed() -> impl IntoView {
    let ctx = use_app_context();
    let reflections = RwSignal::new(Vec::<PmmEvent>::new());
    let error = RwSignal::new(None::<String>);
    let type_filter = RwSignal::new("all".to_string());

    use_poll(60_000, move || {
        let db = ctx.db_param();
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_reflections(db, 10).await {
                Ok(resp) => {
                    reflections.set(resp.reflections);
                    error.set(None);
                }
                Err(err) => error.set(Some(err)),
            }
        });
    });

    let filtered = move || {
        let filter = type_filter.get();
        reflections
            .get()
            .into_iter()
            .filter(|r| filter == "all" || r.kind == filter)
            .collect::<Vec<_>>()
    };

    view! {
        <div style="padding: 12px; border: 1px solid var(--colorNeutralStroke2); border-radius: 8px; display: flex; flex-direction: column; gap: 8px;">
            <div style="display: flex; justify-content: space-between; align-items: center;">
                <h3 style="margin: 0; font-size: 14px;">"Reflections"</h3>
                <div style="display: flex; gap: 4px; font-size: 11px;">
                    {["all", "reflection", "meta_reflection"]
                        .into_iter()
                        .map(|kind| {
                            view! {
                                <button
                                    class=move || {
                                        if type_filter.get() == kind {
                                            "chip chip--active"
                                        } else {
                                            "chip"
                                        }
                                    }
                                    style="padding: 2px 8px; border-radius: 10px; border: 1px solid var(--colorNeutralStroke2); background: none; cursor: pointer;"
                                    on:click=move |_| type_filter.set(kind.to_string())
                                >
                                    {kind}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            {move || {
                error
                    .get()
                    .map(|err| {
                        view! {
                            <div style="font-size: 12px; color: var(--colorPaletteRedForeground1);">{err}</div>
                        }
                    })
            }}

            {move || {
                let items = filtered();
                if items.is_empty() {
                    view! {
                        <div style="color: var(--colorNeutralForeground3); font-size: 12px; padding: 12px 0;">
                            "No reflections yet."
                        </div>
                    }
                    .into_any()
                } else {
                    items
                        .into_iter()
                        .map(|reflection| {
                            let is_meta = reflection.kind == "meta_reflection";
                            view! {
                                <div style="padding: 8px 0; border-bottom: 1px dashed var(--colorNeutralStroke2); font-size: 12px;">
                                    <div style="display: flex; justify-content: space-between; gap: 8px;">
                                        <span class=if is_meta {
                                            "badge badge--brand"
                                        } else {
                                            "badge badge--secondary"
                                        }>{reflection.kind.clone()}</span>
                                        <span style="color: var(--colorNeutralForeground3); font-family: monospace;">
                                            {reflection.ts.clone()}
                                        </span>
                                    </div>
                                    <div style="margin-top: 4px; white-space: pre-wrap;">
                                        {event_label(&reflection)}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}
