mod commitment_cluster;
mod event_timeline;
mod stage_ladder;
mod trait_drift;

use leptos::prelude::*;

#[component]
pub fn VisualizePage() -> impl IntoView {
    view! {
        <div style="display: flex; flex-direction: column; gap: 16px;">
            <commitment_cluster::CommitmentCluster />
            <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 16px; align-items: start;">
                <trait_drift::TraitDriftChart />
                <stage_ladder::StageLadder />
            </div>
            <event_timeline::EventTimeline />
        </div>
    }
}
