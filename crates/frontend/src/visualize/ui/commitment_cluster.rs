//! Force-directed cluster of commitments grouped around per-project hub
//! nodes. Layout runs in `visualize::force`; this view owns the tick
//! loop, drag, zoom and the selection panel.

use crate::dashboard::model::fetch_commitments;
use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::shared::poll::{use_interval, use_poll};
use crate::visualize::force::{ForceLink, ForceSimulation};
use contracts::commitments::{Commitment, CommitmentStatus};
use leptos::prelude::*;
use thaw::*;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 420.0;

fn status_color(status: CommitmentStatus) -> &'static str {
    match status {
        CommitmentStatus::Open => "#10b981",
        CommitmentStatus::Closed => "#6b7280",
        CommitmentStatus::Expired => "#ef4444",
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClusterNode {
    pub label: String,
    /// None marks a project hub.
    pub status: Option<CommitmentStatus>,
    pub project: String,
    pub priority: String,
    pub ts: String,
    pub radius: f64,
    pub color: &'static str,
}

fn commitment_label(c: &Commitment) -> String {
    let content = c.content.trim();
    if !content.is_empty() {
        return content.to_string();
    }
    c.meta
        .as_ref()
        .and_then(|m| m.get("intent"))
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .unwrap_or_else(|| c.kind.clone())
}

/// Project hubs first, then one node per commitment linked to its hub.
pub fn build_cluster(commitments: &[Commitment]) -> (Vec<ClusterNode>, Vec<ForceLink>) {
    let mut projects: Vec<String> = Vec::new();
    for c in commitments {
        let project = c.project();
        if !projects.contains(&project) {
            projects.push(project);
        }
    }

    let mut nodes: Vec<ClusterNode> = projects
        .iter()
        .map(|project| ClusterNode {
            label: project.clone(),
            status: None,
            project: project.clone(),
            priority: "high".to_string(),
            ts: String::new(),
            radius: 10.0,
            color: "#3b82f6",
        })
        .collect();

    let mut links = Vec::new();
    for c in commitments {
        let hub = projects
            .iter()
            .position(|p| *p == c.project())
            .unwrap_or(0);
        links.push(ForceLink {
            source: nodes.len(),
            target: hub,
        });
        let status = c.status();
        nodes.push(ClusterNode {
            label: commitment_label(c),
            status: Some(status),
            project: c.project(),
            priority: c.priority(),
            ts: c.ts.clone(),
            radius: 6.0,
            color: status_color(status),
        });
    }
    (nodes, links)
}

#[component]
pub fn CommitmentCluster() -> impl IntoView {
    let ctx = use_app_context();
    let meta = RwSignal::new(Vec::<ClusterNode>::new());
    let links = RwSignal::new(Vec::<ForceLink>::new());
    let positions = RwSignal::new(Vec::<(f64, f64)>::new());
    let selected = RwSignal::new(None::<usize>);
    let dragging = RwSignal::new(None::<usize>);
    let zoom = RwSignal::new(1.0f64);
    let sim = StoredValue::new(None::<ForceSimulation>);
    let svg_ref = NodeRef::<leptos::svg::Svg>::new();

    use_poll(30_000, move || {
        let db = ctx.db_param();
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_commitments(db, None, 100).await {
                Ok(resp) => {
                    let (nodes, cluster_links) = build_cluster(&resp.commitments);
                    let simulation =
                        ForceSimulation::new(nodes.len(), cluster_links.clone(), WIDTH, HEIGHT);
                    positions.set(simulation.nodes.iter().map(|n| (n.x, n.y)).collect());
                    meta.set(nodes);
                    links.set(cluster_links);
                    selected.set(None);
                    sim.set_value(Some(simulation));
                }
                Err(err) => log::warn!("commitments unavailable: {}", err),
            }
        });
    });

    // ~30fps layout loop while the simulation is hot.
    use_interval(33, move || {
        sim.update_value(|maybe| {
            if let Some(simulation) = maybe {
                if simulation.tick() {
                    positions.set(simulation.nodes.iter().map(|n| (n.x, n.y)).collect());
                }
            }
        });
    });

    let svg_coords = move |ev: &web_sys::MouseEvent| -> Option<(f64, f64)> {
        let svg = svg_ref.get_untracked()?;
        let rect = svg.get_bounding_client_rect();
        let z = zoom.get_untracked();
        Some((
            (ev.client_x() as f64 - rect.left()) / z,
            (ev.client_y() as f64 - rect.top()) / z,
        ))
    };

    let on_mouse_move = move |ev: web_sys::MouseEvent| {
        let Some(index) = dragging.get_untracked() else {
            return;
        };
        if let Some((x, y)) = svg_coords(&ev) {
            sim.update_value(|maybe| {
                if let Some(simulation) = maybe {
                    simulation.pin(index, x, y);
                    simulation.reheat();
                }
            });
        }
    };

    let release_drag = move || {
        if let Some(index) = dragging.get_untracked() {
            dragging.set(None);
            sim.update_value(|maybe| {
                if let Some(simulation) = maybe {
                    simulation.unpin(index);
                }
            });
        }
    };

    view! {
        <div style="display: flex; gap: 16px; align-items: flex-start;">
            <div style="border: 1px solid var(--colorNeutralStroke2); border-radius: 8px; padding: 12px;">
                <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 8px;">
                    <h3 style="margin: 0; font-size: 14px;">"Commitment Cluster"</h3>
                    <div style="display: flex; gap: 4px;">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| zoom.update(|z| *z = (*z * 1.2).min(4.0))
                        >
                            {icon("zoom-in")}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| zoom.update(|z| *z = (*z / 1.2).max(0.4))
                        >
                            {icon("zoom-out")}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| zoom.set(1.0)
                        >
                            {icon("rotate-ccw")}
                        </Button>
                    </div>
                </div>

                <svg
                    node_ref=svg_ref
                    width=WIDTH
                    height=HEIGHT
                    style="display: block; border-radius: 6px; background: var(--colorNeutralBackground2); cursor: grab;"
                    on:mousemove=on_mouse_move
                    on:mouseup=move |_| release_drag()
                    on:mouseleave=move |_| release_drag()
                >
                    <g transform=move || format!("scale({})", zoom.get())>
                        // Links
                        {move || {
                            let pos = positions.get();
                            links
                                .get()
                                .into_iter()
                                .filter_map(|link| {
                                    let (x1, y1) = *pos.get(link.source)?;
                                    let (x2, y2) = *pos.get(link.target)?;
                                    Some(view! {
                                        <line
                                            x1=x1
                                            y1=y1
                                            x2=x2
                                            y2=y2
                                            stroke="#999"
                                            stroke-opacity="0.3"
                                            stroke-width="1"
                                        ></line>
                                    })
                                })
                                .collect_view()
                        }}
                        // Nodes
                        {move || {
                            let pos = positions.get();
                            meta.get()
                                .into_iter()
                                .enumerate()
                                .filter_map(|(index, node)| {
                                    let (x, y) = *pos.get(index)?;
                                    Some(view! {
                                        <circle
                                            cx=x
                                            cy=y
                                            r=node.radius
                                            fill=node.color
                                            stroke="#fff"
                                            stroke-width="2"
                                            style="cursor: pointer;"
                                            on:mousedown=move |_| {
                                                dragging.set(Some(index));
                                                sim.update_value(|maybe| {
                                                    if let Some(simulation) = maybe {
                                                        simulation.pin(index, x, y);
                                                        simulation.reheat();
                                                    }
                                                });
                                            }
                                            on:click=move |_| selected.set(Some(index))
                                        ></circle>
                                    })
                                })
                                .collect_view()
                        }}
                    </g>
                </svg>

                <div style="display: flex; gap: 12px; margin-top: 8px; font-size: 11px; color: var(--colorNeutralForeground3);">
                    <span><span style="color: #3b82f6;">"\u{25cf}"</span>" project"</span>
                    <span><span style="color: #10b981;">"\u{25cf}"</span>" open"</span>
                    <span><span style="color: #6b7280;">"\u{25cf}"</span>" closed"</span>
                    <span><span style="color: #ef4444;">"\u{25cf}"</span>" expired"</span>
                </div>
            </div>

            // Selection details
            <div style="flex: 1; min-width: 220px; border: 1px solid var(--colorNeutralStroke2); border-radius: 8px; padding: 12px; font-size: 12px;">
                <h3 style="margin: 0 0 8px 0; font-size: 14px;">"Details"</h3>
                {move || {
                    let node = selected.get().and_then(|i| meta.get().get(i).cloned());
                    match node {
                        None => view! {
                            <div style="color: var(--colorNeutralForeground3);">
                                "Click a node to inspect it."
                            </div>
                        }
                        .into_any(),
                        Some(node) => view! {
                            <div style="display: flex; flex-direction: column; gap: 6px;">
                                <div style="white-space: pre-wrap;">{node.label.clone()}</div>
                                {node
                                    .status
                                    .map(|status| {
                                        view! {
                                            <div>
                                                <strong>"Status: "</strong>
                                                <span style=format!("color: {};", status_color(status))>
                                                    {status.as_str()}
                                                </span>
                                            </div>
                                        }
                                    })}
                                <div><strong>"Project: "</strong>{node.project.clone()}</div>
                                {node.status.is_some().then(|| view! {
                                    <div><strong>"Priority: "</strong>{node.priority.clone()}</div>
                                })}
                                {(!node.ts.is_empty()).then(|| view! {
                                    <div style="font-family: monospace; color: var(--colorNeutralForeground3);">
                                        {node.ts.clone()}
                                    </div>
                                })}
                            </div>
                        }
                        .into_any(),
                    }
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commitment(id: i64, kind: &str, project: Option<&str>) -> Commitment {
        Commitment {
            id,
            ts: "2025-04-01T00:00:00+00:00".to_string(),
            kind: kind.to_string(),
            content: format!("commitment {}", id),
            meta: project.map(|p| serde_json::json!({ "project_id": p })),
        }
    }

    #[test]
    fn test_build_cluster_groups_by_project() {
        let commitments = vec![
            commitment(1, "commitment_open", Some("atlas")),
            commitment(2, "commitment_close", Some("atlas")),
            commitment(3, "commitment_expire", None),
        ];
        let (nodes, links) = build_cluster(&commitments);

        // Two hubs (atlas, general) + three commitments.
        assert_eq!(nodes.len(), 5);
        assert_eq!(links.len(), 3);
        assert!(nodes[0].status.is_none());
        assert_eq!(nodes[0].label, "atlas");
        assert_eq!(nodes[1].label, "general");

        // Both atlas commitments link to the atlas hub.
        assert_eq!(links[0].target, 0);
        assert_eq!(links[1].target, 0);
        assert_eq!(links[2].target, 1);
        assert_eq!(links[0].source, 2);
    }

    #[test]
    fn test_commitment_label_fallbacks() {
        let mut c = commitment(1, "commitment_open", None);
        c.content = String::new();
        c.meta = Some(serde_json::json!({"intent": "ship the report"}));
        assert_eq!(commitment_label(&c), "ship the report");

        c.meta = None;
        assert_eq!(commitment_label(&c), "commitment_open");
    }
}
