use crate::dashboard::model::fetch_commitments;
use crate::layout::global_context::use_app_context;
use crate::shared::poll::use_poll;
use contracts::commitments::{Commitment, CommitmentStatus};
use leptos::prelude::*;

fn status_color(status: CommitmentStatus) -> &'static str {
    match status {
        CommitmentStatus::Open => "#10b981",
        CommitmentStatus::Closed => "#6b7280",
        CommitmentStatus::Expired => "#ef4444",
    }
}

#[component]
pub fn CommitmentsTracker() -> impl IntoView {
    let ctx = use_app_context();
    let commitments = RwSignal::new(Vec::<Commitment>::new());
    let error = RwSignal::new(None::<String>);
    let status_filter = RwSignal::new(None::<CommitmentStatus>);

    use_poll(30_000, move || {
        let db = ctx.db_param();
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_commitments(db, None, 20).await {
                Ok(resp) => {
                    commitments.set(resp.commitments);
                    error.set(None);
                }
                Err(err) => error.set(Some(err)),
            }
        });
    });

    let counts = move || {
        let all = commitments.get();
        (
            all.iter()
                .filter(|c| c.status() == CommitmentStatus::Open)
                .count(),
            all.iter()
                .filter(|c| c.status() == CommitmentStatus::Closed)
                .count(),
            all.iter()
                .filter(|c| c.status() == CommitmentStatus::Expired)
                .count(),
        )
    };

    let filtered = move || {
        let filter = status_filter.get();
        commitments
            .get()
            .into_iter()
            .filter(|c| filter.map(|f| c.status() == f).unwrap_or(true))
            .collect::<Vec<_>>()
    };

    view! {
        <div style="padding: 12px; border: 1px solid var(--colorNeutralStroke2); border-radius: 8px; display: flex; flex-direction: column; gap: 8px;">
            <div style="display: flex; justify-content: space-between; align-items: center;">
                <h3 style="margin: 0; font-size: 14px;">"Commitments"</h3>
                <div style="display: flex; gap: 8px; font-size: 11px; color: var(--colorNeutralForeground3);">
                    {move || {
                        let (open, closed, expired) = counts();
                        format!("{} open \u{00b7} {} closed \u{00b7} {} expired", open, closed, expired)
                    }}
                </div>
            </div>

            <div style="display: flex; gap: 4px; font-size: 11px;">
                {[
                    ("all", None),
                    ("open", Some(CommitmentStatus::Open)),
                    ("closed", Some(CommitmentStatus::Closed)),
                    ("expired", Some(CommitmentStatus::Expired)),
                ]
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <button
                                class=move || {
                                    if status_filter.get() == value { "chip chip--active" } else { "chip" }
                                }
                                style="padding: 2px 8px; border-radius: 10px; border: 1px solid var(--colorNeutralStroke2); background: none; cursor: pointer;"
                                on:click=move |_| status_filter.set(value)
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
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
                            "No commitments to show."
                        </div>
                    }
                    .into_any()
                } else {
                    items
                        .into_iter()
                        .map(|commitment| {
                            let status = commitment.status();
                            view! {
                                <div style="display: flex; align-items: baseline; gap: 8px; padding: 6px 0; border-bottom: 1px dashed var(--colorNeutralStroke2); font-size: 12px;">
                                    <span style=format!(
                                        "width: 8px; height: 8px; border-radius: 50%; flex-shrink: 0; background: {};",
                                        status_color(status),
                                    )></span>
                                    <div style="min-width: 0; flex: 1;">
                                        <div style="overflow: hidden; text-overflow: ellipsis; white-space: nowrap;">
                                            {commitment.content.clone()}
                                        </div>
                                        <div style="color: var(--colorNeutralForeground3); font-size: 11px;">
                                            {format!(
                                                "{} \u{00b7} {} \u{00b7} {}",
                                                status.as_str(),
                                                commitment.project(),
                                                commitment.priority(),
                                            )}
                                        </div>
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
