//! Events table with filters, sortable columns and an expandable detail
//! panel. Data refreshes on filter change, on live-feed events and on a
//! slow fallback interval.

use super::sql_console::SqlConsole;
use super::state::{create_state, ColumnVisibility, EventRow, EVENT_KINDS};
use crate::ledger::model::{fetch_events, EventsQuery};
use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::shared::json_viewer::{pretty_json, JsonViewer};
use crate::shared::list_utils::{filter_list, get_sort_indicator, sort_list};
use crate::shared::poll::use_interval;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

type ColumnAccessor = fn(&mut ColumnVisibility) -> &mut bool;

const COLUMN_TOGGLES: [(&str, ColumnAccessor); 6] = [
    ("ID", |c| &mut c.id),
    ("Timestamp", |c| &mut c.ts),
    ("Kind", |c| &mut c.kind),
    ("Content", |c| &mut c.content),
    ("Hash", |c| &mut c.hash),
    ("Prev Hash", |c| &mut c.prev_hash),
];

fn abbreviate(hash: &str, chars: usize) -> String {
    if hash.chars().count() <= chars {
        hash.to_string()
    } else {
        format!("{}...", hash.chars().take(chars).collect::<String>())
    }
}

#[component]
pub fn LedgerPage() -> impl IntoView {
    let ctx = use_app_context();
    let state = create_state();

    // Query inputs live outside the row state so that sorting or
    // expanding a row never triggers a refetch.
    let kind_filter = RwSignal::new("all".to_string());
    let since = RwSignal::new(String::new());
    let until = RwSignal::new(String::new());
    let limit = RwSignal::new(50u32);
    let refresh = RwSignal::new(0u64);
    // Client-side text filter over the loaded page.
    let search = RwSignal::new(String::new());

    let load = move || {
        let query = EventsQuery {
            db: ctx.db_param(),
            kind: Some(kind_filter.get_untracked())
                .filter(|k| k != "all"),
            since_ts: Some(since.get_untracked()).filter(|s| !s.is_empty()),
            until_ts: Some(until.get_untracked()).filter(|s| !s.is_empty()),
            after_id: None,
            limit: limit.get_untracked(),
        };
        state.update(|s| s.is_loading = true);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_events(&query).await {
                Ok(resp) => state.update(|s| {
                    s.rows = resp.events.iter().map(EventRow::from_event).collect();
                    s.is_loading = false;
                    s.error = None;
                }),
                Err(err) => state.update(|s| {
                    s.is_loading = false;
                    s.error = Some(err);
                }),
            }
        });
    };

    Effect::new(move |_| {
        // Refetch whenever a query input, the database, the live feed or
        // the fallback timer changes.
        let _ = (
            kind_filter.get(),
            since.get(),
            until.get(),
            limit.get(),
            ctx.selected_db.get(),
            ctx.live_events.get(),
            refresh.get(),
        );
        load();
    });
    use_interval(60_000, move || refresh.update(|n| *n += 1));

    let reset_filters = move || {
        kind_filter.set("all".to_string());
        since.set(String::new());
        until.set(String::new());
        limit.set(50);
        search.set(String::new());
    };

    let toggle_sort = move |field: &'static str| {
        state.update(|s| {
            if s.sort_field == field {
                s.sort_ascending = !s.sort_ascending;
            } else {
                s.sort_field = field.to_string();
                s.sort_ascending = true;
            }
        });
    };

    let header_cell = move |field: &'static str, title: &'static str| {
        view! {
            <th
                style="text-align: left; padding: 6px 8px; cursor: pointer; white-space: nowrap;"
                on:click=move |_| toggle_sort(field)
            >
                {title}
                {move || {
                    state.with(|s| get_sort_indicator(&s.sort_field, field, s.sort_ascending))
                }}
            </th>
        }
    };

    let sorted_rows = move || {
        state.with(|s| {
            let mut rows = filter_list(s.rows.clone(), &search.get());
            sort_list(&mut rows, &s.sort_field, s.sort_ascending);
            rows
        })
    };

    view! {
        <div style="display: flex; flex-direction: column; gap: 16px;">
            // Filter controls
            <div style="display: flex; flex-wrap: wrap; gap: 12px; align-items: flex-end; padding: 12px; border: 1px solid var(--colorNeutralStroke2); border-radius: 8px;">
                <label style="display: flex; flex-direction: column; gap: 4px; font-size: 12px;">
                    "Event Kind"
                    <select
                        style="padding: 4px 8px;"
                        on:change=move |ev| {
                            let target: web_sys::HtmlSelectElement =
                                ev.target().unwrap().unchecked_into();
                            kind_filter.set(target.value());
                        }
                    >
                        {EVENT_KINDS
                            .into_iter()
                            .map(|kind| {
                                view! {
                                    <option
                                        value=kind
                                        selected=move || kind_filter.get() == kind
                                    >
                                        {if kind == "all" { "All Events" } else { kind }}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <label style="display: flex; flex-direction: column; gap: 4px; font-size: 12px;">
                    "Since"
                    <input
                        type="datetime-local"
                        prop:value=move || since.get()
                        on:change=move |ev| {
                            let target: web_sys::HtmlInputElement =
                                ev.target().unwrap().unchecked_into();
                            since.set(target.value());
                        }
                    />
                </label>
                <label style="display: flex; flex-direction: column; gap: 4px; font-size: 12px;">
                    "Until"
                    <input
                        type="datetime-local"
                        prop:value=move || until.get()
                        on:change=move |ev| {
                            let target: web_sys::HtmlInputElement =
                                ev.target().unwrap().unchecked_into();
                            until.set(target.value());
                        }
                    />
                </label>
                <label style="display: flex; flex-direction: column; gap: 4px; font-size: 12px; width: 80px;">
                    "Limit"
                    <input
                        type="number"
                        min="1"
                        max="1000"
                        prop:value=move || limit.get().to_string()
                        on:change=move |ev| {
                            let target: web_sys::HtmlInputElement =
                                ev.target().unwrap().unchecked_into();
                            // Limit 0 causes API errors; hold the minimum.
                            let value = target.value().parse::<u32>().unwrap_or(1).clamp(1, 1000);
                            limit.set(value);
                        }
                    />
                </label>
                <label style="display: flex; flex-direction: column; gap: 4px; font-size: 12px; min-width: 160px;">
                    "Search"
                    <input
                        type="search"
                        placeholder="Filter loaded rows..."
                        prop:value=move || search.get()
                        on:input=move |ev| {
                            let target: web_sys::HtmlInputElement =
                                ev.target().unwrap().unchecked_into();
                            search.set(target.value());
                        }
                    />
                </label>
                <div style="display: flex; gap: 8px;">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| refresh.update(|n| *n += 1)
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| reset_filters()>
                        {icon("filter")}
                        " Reset"
                    </Button>
                </div>
            </div>

            // Column visibility
            <div style="display: flex; flex-wrap: wrap; gap: 16px; padding: 8px 12px; border: 1px solid var(--colorNeutralStroke2); border-radius: 8px; font-size: 12px;">
                {COLUMN_TOGGLES
                    .into_iter()
                    .map(|(title, accessor)| {
                        view! {
                            <label style="display: flex; align-items: center; gap: 4px; cursor: pointer;">
                                <input
                                    type="checkbox"
                                    prop:checked=move || {
                                        state.with(|s| {
                                            let mut cols = s.columns;
                                            *accessor(&mut cols)
                                        })
                                    }
                                    on:change=move |_| {
                                        state.update(|s| {
                                            let flag = accessor(&mut s.columns);
                                            *flag = !*flag;
                                        })
                                    }
                                />
                                {title}
                            </label>
                        }
                    })
                    .collect_view()}
                <label style="display: flex; align-items: center; gap: 4px; cursor: pointer; margin-left: 16px;">
                    <input
                        type="checkbox"
                        prop:checked=move || state.with(|s| s.show_hash_chain)
                        on:change=move |_| {
                            state.update(|s| s.show_hash_chain = !s.show_hash_chain)
                        }
                    />
                    "Hash Chain"
                </label>
            </div>

            // Error banner
            {move || {
                state
                    .with(|s| s.error.clone())
                    .map(|err| {
                        view! {
                            <div style="display: flex; align-items: center; gap: 8px; padding: 12px; border: 1px solid var(--colorPaletteRedBorder1); border-radius: 8px; color: var(--colorPaletteRedForeground1);">
                                {icon("alert")}
                                <span>"Failed to load events: " {err}</span>
                            </div>
                        }
                    })
            }}

            // Events table
            <div style="border: 1px solid var(--colorNeutralStroke2); border-radius: 8px; overflow: auto;">
                <div style="padding: 8px 12px; font-size: 12px; color: var(--colorNeutralForeground3);">
                    {move || {
                        state.with(|s| {
                            if s.is_loading {
                                "Loading events...".to_string()
                            } else {
                                format!("{} events displayed", s.rows.len())
                            }
                        })
                    }}
                </div>
                <table style="width: 100%; border-collapse: collapse; font-size: 13px;">
                    <thead>
                        <tr style="border-bottom: 1px solid var(--colorNeutralStroke2);">
                            {move || state.with(|s| s.columns.id).then(|| header_cell("id", "ID"))}
                            {move || state.with(|s| s.columns.ts).then(|| header_cell("ts", "Timestamp"))}
                            {move || state.with(|s| s.columns.kind).then(|| header_cell("kind", "Kind"))}
                            {move || state.with(|s| s.columns.content).then(|| header_cell("content", "Content"))}
                            {move || state.with(|s| s.columns.hash).then(|| header_cell("hash", "Hash"))}
                            {move || {
                                state
                                    .with(|s| s.columns.prev_hash)
                                    .then(|| view! { <th style="text-align: left; padding: 6px 8px;">"Prev Hash"</th> })
                            }}
                            <th style="width: 32px;"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = sorted_rows();
                            if rows.is_empty() && !state.with(|s| s.is_loading) {
                                view! {
                                    <tr>
                                        <td colspan="7" style="padding: 24px; text-align: center; color: var(--colorNeutralForeground3);">
                                            "No events found."
                                        </td>
                                    </tr>
                                }
                                .into_any()
                            } else {
                                let columns = state.with(|s| s.columns);
                                let show_chain = state.with(|s| s.show_hash_chain);
                                rows.into_iter()
                                    .map(|row| render_row(row, columns, show_chain, state))
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            // Expanded event detail
            {move || {
                let expanded = state.with(|s| s.expanded);
                expanded.and_then(|id| {
                    state.with(|s| s.rows.iter().find(|r| r.id == id).cloned()).map(|row| {
                        view! {
                            <div style="padding: 12px; border: 1px solid var(--colorNeutralStroke2); border-radius: 8px; display: flex; flex-direction: column; gap: 8px;">
                                <div style="display: flex; justify-content: space-between; align-items: center;">
                                    <h3 style="margin: 0; font-size: 14px;">
                                        {format!("Event {} \u{2013} {}", row.id, row.kind)}
                                    </h3>
                                    <Button
                                        appearance=ButtonAppearance::Secondary
                                        on_click=move |_| state.update(|s| s.expanded = None)
                                    >
                                        {icon("close")}
                                    </Button>
                                </div>
                                <div style="font-size: 12px;">
                                    <strong>"Timestamp: "</strong>
                                    <span style="font-family: monospace;">{row.ts.clone()}</span>
                                </div>
                                <div style="font-size: 12px;">
                                    <strong>"Summary: "</strong>
                                    {row.label.clone()}
                                </div>
                                <div style="font-size: 12px; white-space: pre-wrap;">
                                    <strong>"Full Content: "</strong>
                                    {row.content.clone().unwrap_or_else(|| "No raw content".to_string())}
                                </div>
                                <JsonViewer
                                    json_content=pretty_json(
                                        row.meta.as_ref().unwrap_or(&serde_json::Value::Null),
                                    )
                                    title="Meta Data".to_string()
                                />
                            </div>
                        }
                    })
                })
            }}

            // SQL console, developer mode only
            {move || ctx.developer_mode.get().then(|| view! { <SqlConsole /> })}
        </div>
    }
}

fn render_row(
    row: EventRow,
    columns: ColumnVisibility,
    show_chain: bool,
    state: RwSignal<super::state::EventsState>,
) -> impl IntoView {
    let row_id = row.id;
    view! {
        <tr style="border-bottom: 1px solid var(--colorNeutralStroke2);">
            {columns.id.then(|| view! {
                <td style="padding: 6px 8px;">
                    <span class="badge badge--outline">{row.id}</span>
                </td>
            })}
            {columns.ts.then(|| view! {
                <td style="padding: 6px 8px; font-family: monospace;" title=row.ts.clone()>
                    {row.ts_short.clone()}
                </td>
            })}
            {columns.kind.then(|| view! {
                <td style="padding: 6px 8px;">
                    <span class="badge badge--secondary">{row.kind.clone()}</span>
                </td>
            })}
            {columns.content.then(|| view! {
                <td style="padding: 6px 8px;" title=row.label.clone()>
                    {row.label_truncated()}
                </td>
            })}
            {columns.hash.then(|| view! {
                <td style="padding: 6px 8px; font-family: monospace; font-size: 11px;">
                    {row
                        .hash
                        .clone()
                        .map(|h| abbreviate(&h, 8))
                        .unwrap_or_else(|| "\u{2014}".to_string())}
                </td>
            })}
            {columns.prev_hash.then(|| {
                let cell = match (&row.prev_hash, &row.hash) {
                    (Some(prev), Some(hash)) if show_chain => {
                        format!("{} \u{2192} {}", abbreviate(prev, 6), abbreviate(hash, 6))
                    }
                    (Some(prev), _) => abbreviate(prev, 8),
                    (None, _) => "\u{2014}".to_string(),
                };
                view! {
                    <td style="padding: 6px 8px; font-family: monospace; font-size: 11px;">{cell}</td>
                }
            })}
            <td style="padding: 6px 8px;">
                <button
                    style="border: none; background: none; cursor: pointer; padding: 2px;"
                    title="Full event details"
                    on:click=move |_| {
                        state.update(|s| {
                            s.expanded = if s.expanded == Some(row_id) {
                                None
                            } else {
                                Some(row_id)
                            };
                        })
                    }
                >
                    {icon("eye")}
                </button>
            </td>
        </tr>
    }
}
