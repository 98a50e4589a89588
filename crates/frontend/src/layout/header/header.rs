use crate::layout::global_context::{use_app_context, Page};
use crate::shared::icons::icon;
use crate::shared::live::LiveStatus;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header style="display: flex; align-items: center; justify-content: space-between; padding: 8px 20px; border-bottom: 1px solid var(--colorNeutralStroke2);">
            <div style="display: flex; align-items: center; gap: 16px;">
                <span style="font-weight: bold; font-size: 16px;">"PMM Companion"</span>
                <nav style="display: flex; gap: 4px;">
                    {Page::ALL
                        .into_iter()
                        .map(|page| {
                            let is_active = move || ctx.active.get() == page;
                            view! {
                                <button
                                    class=move || {
                                        if is_active() { "nav-button nav-button--active" } else { "nav-button" }
                                    }
                                    style="display: flex; align-items: center; gap: 6px; padding: 6px 12px; border: none; background: none; cursor: pointer; border-radius: 6px;"
                                    on:click=move |_| ctx.activate(page)
                                >
                                    {icon(page.icon_name())}
                                    {page.title()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>

            <div style="display: flex; align-items: center; gap: 12px; font-size: 12px; color: var(--colorNeutralForeground3);">
                <span style="display: flex; align-items: center; gap: 4px;" title="Refresh source">
                    {move || {
                        if ctx.live.get() == LiveStatus::Connected {
                            icon("wifi")
                        } else {
                            icon("wifi-off")
                        }
                    }}
                    {move || ctx.live.get().label()}
                </span>
                <span style="display: flex; align-items: center; gap: 4px;" title="Selected database">
                    {icon("database")}
                    {move || ctx.selected_db.get()}
                </span>
            </div>
        </header>
    }
}
