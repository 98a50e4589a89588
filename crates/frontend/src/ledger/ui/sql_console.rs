//! Ad-hoc SQL console over the read-only `/events/sql` endpoint.
//! Only SELECT statements are permitted; the backend rejects the rest
//! and the raw error text is shown in place.

use crate::layout::global_context::use_app_context;
use crate::ledger::model::execute_sql;
use crate::shared::icons::icon;
use crate::shared::json_viewer::{pretty_json, JsonViewer};
use contracts::sql::SqlResponse;
use leptos::prelude::*;
use thaw::*;

const SAMPLE_QUERY: &str = "SELECT id, kind, ts, content\nFROM events\nWHERE kind = 'reflection'\nORDER BY id DESC\nLIMIT 10;";

#[component]
pub fn SqlConsole() -> impl IntoView {
    let ctx = use_app_context();
    let query = RwSignal::new(SAMPLE_QUERY.to_string());
    let is_executing = RwSignal::new(false);
    let result = RwSignal::new(None::<SqlResponse>);
    let error = RwSignal::new(None::<String>);
    let expanded_row = RwSignal::new(None::<usize>);

    let run_query = move || {
        let sql = query.get_untracked();
        if sql.trim().is_empty() || is_executing.get_untracked() {
            return;
        }
        is_executing.set(true);
        error.set(None);
        result.set(None);
        expanded_row.set(None);
        let db = ctx.selected_db.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            match execute_sql(db, sql).await {
                Ok(resp) => result.set(Some(resp)),
                Err(err) => error.set(Some(err)),
            }
            is_executing.set(false);
        });
    };

    view! {
        <div style="display: flex; flex-direction: column; gap: 12px; padding: 12px; border: 1px solid var(--colorNeutralStroke2); border-radius: 8px;">
            <h3 style="margin: 0; display: flex; align-items: center; gap: 8px; font-size: 14px;">
                {icon("database")}
                "SQL Console"
            </h3>

            <Textarea
                value=query
                placeholder="Enter SQL query..."
                attr:style="width: 100%; min-height: 140px; font-family: monospace; font-size: 13px;"
            />

            <div style="display: flex; align-items: center; gap: 16px;">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || {
                        is_executing.get() || query.with(|q| q.trim().is_empty())
                    })
                    on_click=move |_| run_query()
                >
                    {icon("play")}
                    {move || if is_executing.get() { " Executing..." } else { " Execute Query" }}
                </Button>
                <span style="font-size: 12px; color: var(--colorNeutralForeground3); display: flex; align-items: center; gap: 4px;">
                    {icon("database")}
                    "Database: "
                    {move || ctx.selected_db.get()}
                </span>
            </div>

            <div style="font-size: 11px; color: var(--colorNeutralForeground3);">
                <p style="margin: 2px 0;"><strong>"Allowed: "</strong>"SELECT queries only"</p>
                <p style="margin: 2px 0;"><strong>"Blocked: "</strong>"DROP, DELETE, INSERT, UPDATE, ALTER, CREATE, TRUNCATE"</p>
                <p style="margin: 2px 0;"><strong>"Tables: "</strong>"events (id, kind, ts, content, meta, hash, prev_hash)"</p>
            </div>

            {move || {
                error
                    .get()
                    .map(|err| {
                        view! {
                            <div style="display: flex; align-items: center; gap: 8px; padding: 12px; border: 1px solid var(--colorPaletteRedBorder1); border-radius: 8px; color: var(--colorPaletteRedForeground1); font-size: 13px;">
                                {icon("alert")}
                                <span>"Query Error: " {err}</span>
                            </div>
                        }
                    })
            }}

            {move || {
                result
                    .get()
                    .map(|resp| {
                        view! {
                            <div style="display: flex; flex-direction: column; gap: 8px;">
                                <div style="display: flex; align-items: center; gap: 12px; font-size: 12px; color: var(--colorNeutralForeground3);">
                                    {icon("check")}
                                    <span>{format!("{} rows", resp.count)}</span>
                                    <span>{format!("{:.0}ms", resp.execution_time_ms)}</span>
                                </div>
                                {render_results(resp, expanded_row)}
                            </div>
                        }
                    })
            }}
        </div>
    }
}

fn render_results(resp: SqlResponse, expanded_row: RwSignal<Option<usize>>) -> AnyView {
    if resp.results.is_empty() {
        return view! {
            <p style="text-align: center; color: var(--colorNeutralForeground3); padding: 24px;">
                "No results found"
            </p>
        }
        .into_any();
    }

    // Column order comes from the first row's object keys.
    let columns: Vec<String> = resp
        .results
        .first()
        .and_then(|row| row.as_object())
        .map(|obj| obj.keys().cloned().collect())
        .unwrap_or_default();

    let rows = resp.results.clone();
    let expanded_json = move || {
        expanded_row.get().and_then(|idx| {
            rows.get(idx).map(|row| {
                view! {
                    <JsonViewer
                        json_content=pretty_json(row)
                        title=format!("Row {}", idx + 1)
                    />
                }
            })
        })
    };

    let header: Vec<_> = columns
        .iter()
        .map(|c| {
            view! {
                <th style="text-align: left; padding: 6px 8px; white-space: nowrap;">{c.clone()}</th>
            }
        })
        .collect();

    let body: Vec<_> = resp
        .results
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let cells: Vec<_> = columns
                .iter()
                .map(|column| {
                    let value = row.get(column).cloned().unwrap_or(serde_json::Value::Null);
                    let text = match &value {
                        serde_json::Value::Null => "NULL".to_string(),
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    let dim = value.is_null();
                    view! {
                        <td style=format!(
                            "padding: 6px 8px; font-family: monospace; font-size: 12px;{}",
                            if dim { " color: var(--colorNeutralForeground3);" } else { "" },
                        )>
                            {super::state::truncate_label(&text, 120)}
                        </td>
                    }
                })
                .collect();
            view! {
                <tr style="border-bottom: 1px solid var(--colorNeutralStroke2);">
                    {cells}
                    <td style="padding: 6px 8px;">
                        <button
                            style="border: none; background: none; cursor: pointer; padding: 2px;"
                            title="View row as JSON"
                            on:click=move |_| {
                                expanded_row.update(|e| {
                                    *e = if *e == Some(idx) { None } else { Some(idx) };
                                })
                            }
                        >
                            {icon("eye")}
                        </button>
                    </td>
                </tr>
            }
        })
        .collect();

    view! {
        <div>
            <div style="max-height: 400px; overflow: auto; border: 1px solid var(--colorNeutralStroke2); border-radius: 6px;">
                <table style="width: 100%; border-collapse: collapse;">
                    <thead>
                        <tr style="border-bottom: 1px solid var(--colorNeutralStroke2);">
                            {header}
                            <th style="width: 32px;"></th>
                        </tr>
                    </thead>
                    <tbody>{body}</tbody>
                </table>
            </div>
            {expanded_json}
        </div>
    }
    .into_any()
}
