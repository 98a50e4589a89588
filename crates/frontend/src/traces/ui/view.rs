//! Reasoning-trace explorer: stats strip, filterable list, per-session
//! detail expansion.

use crate::layout::global_context::use_app_context;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{StatCard, ValueFormat};
use crate::shared::icons::icon;
use crate::shared::json_viewer::{pretty_json, JsonViewer};
use crate::shared::poll::use_interval;
use crate::traces::model::{fetch_trace_detail, fetch_trace_stats, fetch_traces};
use contracts::traces::{TraceDetailResponse, TraceStats, TraceSummary};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

#[component]
pub fn TracesPage() -> impl IntoView {
    let ctx = use_app_context();
    let traces = RwSignal::new(Vec::<TraceSummary>::new());
    let stats = RwSignal::new(None::<TraceStats>);
    let error = RwSignal::new(None::<String>);
    let is_loading = RwSignal::new(false);
    let query_filter = RwSignal::new(String::new());
    let expanded = RwSignal::new(None::<String>);
    let detail = RwSignal::new(None::<TraceDetailResponse>);
    let refresh = RwSignal::new(0u64);

    let load = move || {
        is_loading.set(true);
        let db = ctx.db_param();
        let filter = Some(query_filter.get_untracked()).filter(|f| !f.trim().is_empty());
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_traces(db.clone(), 50, filter).await {
                Ok(resp) => {
                    traces.set(resp.traces);
                    error.set(None);
                }
                Err(err) => error.set(Some(err)),
            }
            match fetch_trace_stats(db).await {
                Ok(resp) => stats.set(Some(resp.stats)),
                Err(err) => log::warn!("trace stats unavailable: {}", err),
            }
            is_loading.set(false);
        });
    };

    Effect::new(move |_| {
        let _ = (
            query_filter.get(),
            ctx.selected_db.get(),
            refresh.get(),
        );
        load();
    });
    use_interval(30_000, move || refresh.update(|n| *n += 1));

    let toggle_detail = move |session_id: String| {
        if expanded.get_untracked().as_deref() == Some(session_id.as_str()) {
            expanded.set(None);
            detail.set(None);
            return;
        }
        expanded.set(Some(session_id.clone()));
        detail.set(None);
        let db = ctx.db_param();
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_trace_detail(&session_id, db).await {
                Ok(resp) => detail.set(Some(resp)),
                Err(err) => log::warn!("trace detail failed: {}", err),
            }
        });
    };

    view! {
        <PageHeader
            title="Traces".to_string()
            subtitle="Retrieval and reasoning sessions recorded by the runtime".to_string()
        />
        <div style="display: flex; flex-direction: column; gap: 16px;">
            // Stats strip
            <div style="display: grid; grid-template-columns: repeat(4, 1fr); gap: 12px;">
                <StatCard
                    label="Total Traces".to_string()
                    icon_name="traces".to_string()
                    value=Signal::derive(move || stats.get().map(|s| s.total_traces as f64))
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="Nodes Visited".to_string()
                    icon_name="visualize".to_string()
                    value=Signal::derive(move || stats.get().map(|s| s.total_nodes_visited as f64))
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="Avg Nodes / Trace".to_string()
                    icon_name="activity".to_string()
                    value=Signal::derive(move || stats.get().map(|s| s.avg_nodes_per_trace))
                    format=ValueFormat::Number(1)
                />
                <StatCard
                    label="Avg Duration".to_string()
                    icon_name="trending-up".to_string()
                    value=Signal::derive(move || stats.get().map(|s| s.avg_duration_ms))
                    format=ValueFormat::DurationMs
                />
            </div>

            // Filter
            <div style="display: flex; gap: 8px; align-items: center;">
                <input
                    type="search"
                    placeholder="Filter by query text..."
                    style="flex: 1; padding: 6px 10px;"
                    prop:value=move || query_filter.get()
                    on:change=move |ev| {
                        let target: web_sys::HtmlInputElement =
                            ev.target().unwrap().unchecked_into();
                        query_filter.set(target.value());
                    }
                />
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| refresh.update(|n| *n += 1)
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </div>

            {move || {
                error
                    .get()
                    .map(|err| {
                        view! {
                            <div style="display: flex; align-items: center; gap: 8px; padding: 12px; border: 1px solid var(--colorPaletteRedBorder1); border-radius: 8px; color: var(--colorPaletteRedForeground1);">
                                {icon("alert")}
                                <span>"Failed to load traces: " {err}</span>
                            </div>
                        }
                    })
            }}

            // Trace list
            <div style="display: flex; flex-direction: column; gap: 8px;">
                {move || {
                    let list = traces.get();
                    if list.is_empty() && !is_loading.get() {
                        view! {
                            <div style="padding: 24px; text-align: center; color: var(--colorNeutralForeground3);">
                                "No traces recorded yet."
                            </div>
                        }
                        .into_any()
                    } else {
                        list.into_iter()
                            .map(|trace| {
                                render_trace_card(trace, expanded, detail, toggle_detail)
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}

fn render_trace_card(
    trace: TraceSummary,
    expanded: RwSignal<Option<String>>,
    detail: RwSignal<Option<TraceDetailResponse>>,
    toggle_detail: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    let session_id = trace.session_id.clone();
    let session_for_click = trace.session_id.clone();
    let is_expanded = move || expanded.get().as_deref() == Some(session_id.as_str());
    let is_expanded_icon = is_expanded.clone();

    let distribution: Vec<(String, u64)> = {
        let mut pairs: Vec<_> = trace.node_type_distribution.clone().into_iter().collect();
        pairs.sort_by(|a, b| b.1.cmp(&a.1));
        pairs
    };

    view! {
        <div style="border: 1px solid var(--colorNeutralStroke2); border-radius: 8px; padding: 12px;">
            <div
                style="display: flex; justify-content: space-between; align-items: center; cursor: pointer;"
                on:click=move |_| toggle_detail(session_for_click.clone())
            >
                <div style="min-width: 0;">
                    <div style="font-size: 13px; font-weight: 500; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;">
                        {trace.query.clone()}
                    </div>
                    <div style="font-size: 11px; color: var(--colorNeutralForeground3); font-family: monospace;">
                        {trace.session_id.clone()}
                        " \u{00b7} "
                        {trace.timestamp.clone()}
                    </div>
                </div>
                <div style="display: flex; gap: 12px; font-size: 12px; color: var(--colorNeutralForeground3); white-space: nowrap;">
                    <span>{format!("{} nodes", trace.total_nodes_visited)}</span>
                    <span>{format!("{} high-conf", trace.high_confidence_count)}</span>
                    <span>{format!("{:.0}ms", trace.duration_ms)}</span>
                    {move || if is_expanded_icon() { icon("chevron-up") } else { icon("chevron-down") }}
                </div>
            </div>

            {move || {
                is_expanded().then(|| {
                    view! {
                        <div style="margin-top: 12px; display: flex; flex-direction: column; gap: 12px; font-size: 12px;">
                            // Node type distribution
                            <div>
                                <div style="font-weight: 600; margin-bottom: 4px;">"Node Types"</div>
                                <div style="display: flex; flex-wrap: wrap; gap: 6px;">
                                    {distribution
                                        .iter()
                                        .map(|(node_type, count)| {
                                            view! {
                                                <span class="badge badge--secondary">
                                                    {format!("{}: {}", node_type, count)}
                                                </span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>

                            // High-confidence paths
                            {(!trace.high_confidence_paths.is_empty()).then(|| {
                                view! {
                                    <div>
                                        <div style="font-weight: 600; margin-bottom: 4px;">"High-Confidence Paths"</div>
                                        {trace
                                            .high_confidence_paths
                                            .iter()
                                            .map(|path| {
                                                view! {
                                                    <div style="padding: 4px 0; border-bottom: 1px dashed var(--colorNeutralStroke2);">
                                                        <span style="font-family: monospace;">{path.node_type.clone()}</span>
                                                        {format!(" ({:.2})", path.confidence)}
                                                        {path
                                                            .edge_label
                                                            .clone()
                                                            .map(|l| format!(" via {}", l))}
                                                        {path
                                                            .reasoning
                                                            .clone()
                                                            .map(|r| {
                                                                view! {
                                                                    <div style="color: var(--colorNeutralForeground3);">{r}</div>
                                                                }
                                                            })}
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                }
                            })}

                            // Reasoning steps
                            {(!trace.reasoning_steps.is_empty()).then(|| {
                                view! {
                                    <div>
                                        <div style="font-weight: 600; margin-bottom: 4px;">"Reasoning Steps"</div>
                                        <ol style="margin: 0; padding-left: 20px;">
                                            {trace
                                                .reasoning_steps
                                                .iter()
                                                .map(|step| view! { <li>{step.clone()}</li> })
                                                .collect_view()}
                                        </ol>
                                    </div>
                                }
                            })}

                            // Raw samples from the detail endpoint
                            {move || {
                                detail.get().map(|d| {
                                    view! {
                                        <JsonViewer
                                            json_content=pretty_json(&serde_json::json!({
                                                "summary": d.summary,
                                                "sample_count": d.sample_count,
                                                "samples": d.samples,
                                            }))
                                            title="Session Detail".to_string()
                                        />
                                    }
                                })
                            }}
                        </div>
                    }
                })
            }}
        </div>
    }
}
