mod commitments_tracker;
mod identity_overview;
mod metrics_panel;
mod reflections_feed;

use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 16px; align-items: start;">
            <div style="grid-column: span 2;">
                <identity_overview::IdentityOverview />
            </div>
            <metrics_panel::MetricsPanel />
            <commitments_tracker::CommitmentsTracker />
            <div style="grid-column: span 2;">
                <reflections_feed::ReflectionsFeed />
            </div>
        </div>
    }
}
