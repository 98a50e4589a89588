//! Recent ledger events on a horizontal time axis, one lane per
//! category.

use crate::ledger::labels::event_label;
use crate::ledger::model::{fetch_events, EventsQuery};
use crate::layout::global_context::use_app_context;
use crate::shared::poll::use_interval;
use crate::visualize::categories::{categorize_event, category_color, category_index, CATEGORIES};
use contracts::events::PmmEvent;
use leptos::prelude::*;

const WIDTH: f64 = 820.0;
const HEIGHT: f64 = 260.0;
const LANE_TOP: f64 = 24.0;
const LANE_STEP: f64 = 44.0;
const PLOT_LEFT: f64 = 150.0;
const PLOT_RIGHT: f64 = 20.0;

/// Horizontal position for an event timestamp within [min, max].
fn x_for(ts_millis: i64, min: i64, max: i64) -> f64 {
    let span = (max - min).max(1) as f64;
    let fraction = (ts_millis - min) as f64 / span;
    PLOT_LEFT + fraction * (WIDTH - PLOT_LEFT - PLOT_RIGHT)
}

#[component]
pub fn EventTimeline() -> impl IntoView {
    let ctx = use_app_context();
    let events = RwSignal::new(Vec::<PmmEvent>::new());
    let selected = RwSignal::new(None::<i64>);
    let refresh = RwSignal::new(0u64);

    let load = move || {
        let query = EventsQuery {
            db: ctx.db_param(),
            limit: 500,
            ..EventsQuery::default()
        };
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_events(&query).await {
                Ok(resp) => events.set(resp.events),
                Err(err) => log::warn!("timeline events unavailable: {}", err),
            }
        });
    };

    Effect::new(move |_| {
        let _ = (ctx.selected_db.get(), ctx.live_events.get(), refresh.get());
        load();
    });
    use_interval(30_000, move || refresh.update(|n| *n += 1));

    view! {
        <div style="border: 1px solid var(--colorNeutralStroke2); border-radius: 8px; padding: 12px;">
            <h3 style="margin: 0 0 8px 0; font-size: 14px;">"Event Timeline"</h3>
            <svg
                width=WIDTH
                height=HEIGHT
                style="display: block; background: var(--colorNeutralBackground2); border-radius: 6px; max-width: 100%;"
            >
                // Lane labels and guides
                {CATEGORIES
                    .into_iter()
                    .enumerate()
                    .map(|(i, (name, color))| {
                        let y = LANE_TOP + i as f64 * LANE_STEP;
                        view! {
                            <text
                                x="8"
                                y={y + 4.0}
                                font-size="11"
                                fill=color
                            >
                                {name}
                            </text>
                            <line
                                x1=PLOT_LEFT
                                y1=y
                                x2={WIDTH - PLOT_RIGHT}
                                y2=y
                                stroke="currentColor"
                                stroke-opacity="0.08"
                            ></line>
                        }
                    })
                    .collect_view()}

                // Event dots
                {move || {
                    let all = events.get();
                    let timestamps: Vec<(i64, &PmmEvent)> = all
                        .iter()
                        .filter_map(|e| e.timestamp().map(|t| (t.timestamp_millis(), e)))
                        .collect();
                    let min = timestamps.iter().map(|(t, _)| *t).min().unwrap_or(0);
                    let max = timestamps.iter().map(|(t, _)| *t).max().unwrap_or(1);
                    timestamps
                        .into_iter()
                        .map(|(ts, event)| {
                            let category = categorize_event(&event.kind);
                            let y = LANE_TOP + category_index(category) as f64 * LANE_STEP;
                            let x = x_for(ts, min, max);
                            let id = event.id;
                            view! {
                                <circle
                                    cx=x
                                    cy=y
                                    r="5"
                                    fill=category_color(category)
                                    fill-opacity="0.85"
                                    style="cursor: pointer;"
                                    on:click=move |_| selected.set(Some(id))
                                ></circle>
                            }
                        })
                        .collect_view()
                }}
            </svg>

            {move || {
                let event = selected
                    .get()
                    .and_then(|id| events.get().into_iter().find(|e| e.id == id));
                event.map(|event| {
                    let category = categorize_event(&event.kind);
                    view! {
                        <div style="margin-top: 8px; padding: 8px; border: 1px solid var(--colorNeutralStroke2); border-radius: 6px; font-size: 12px;">
                            <div style="display: flex; gap: 8px; align-items: center;">
                                <span style=format!(
                                    "width: 10px; height: 10px; border-radius: 50%; background: {};",
                                    category_color(category),
                                )></span>
                                <span class="badge badge--secondary">{event.kind.clone()}</span>
                                <span style="font-family: monospace; color: var(--colorNeutralForeground3);">
                                    {event.ts.clone()}
                                </span>
                            </div>
                            <div style="margin-top: 4px; white-space: pre-wrap;">{event_label(&event)}</div>
                        </div>
                    }
                })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_for_spans_plot_area() {
        assert_eq!(x_for(0, 0, 100), PLOT_LEFT);
        assert_eq!(x_for(100, 0, 100), WIDTH - PLOT_RIGHT);
        let mid = x_for(50, 0, 100);
        assert!(mid > PLOT_LEFT && mid < WIDTH - PLOT_RIGHT);
    }

    #[test]
    fn test_x_for_degenerate_range() {
        // A single event must not divide by zero.
        let x = x_for(42, 42, 42);
        assert!(x.is_finite());
        assert_eq!(x, PLOT_LEFT);
    }
}
