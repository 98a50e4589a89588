use crate::chat::ui::ChatPage;
use crate::dashboard::ui::DashboardPage;
use crate::layout::global_context::{use_app_context, Page};
use crate::layout::Shell;
use crate::ledger::ui::LedgerPage;
use crate::shared::live;
use crate::system::settings::SettingsPage;
use crate::traces::ui::TracesPage;
use crate::visualize::ui::VisualizePage;
use leptos::prelude::*;

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_app_context();

    // Runs once when the shell is created.
    ctx.init_router_integration();
    ctx.init_persistence();

    // Best-effort live feed; polling remains the fallback.
    live::connect(
        Some(ctx.selected_db.get_untracked()),
        ctx.live,
        ctx.live_events,
    );

    view! {
        <Shell>
            {move || match ctx.active.get() {
                Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                Page::Chat => view! { <ChatPage /> }.into_any(),
                Page::Ledger => view! { <LedgerPage /> }.into_any(),
                Page::Traces => view! { <TracesPage /> }.into_any(),
                Page::Visualize => view! { <VisualizePage /> }.into_any(),
                Page::Settings => view! { <SettingsPage /> }.into_any(),
            }}
        </Shell>
    }
}
