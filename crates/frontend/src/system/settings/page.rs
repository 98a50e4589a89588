//! Settings: backend info, database selection, developer mode.

use crate::layout::global_context::{use_app_context, DATABASES};
use crate::shared::api_utils::api_base;
use crate::shared::components::page_header::PageHeader;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <PageHeader
            title="Settings".to_string()
            subtitle="Configuration and preferences".to_string()
        />
        <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 16px; align-items: start; max-width: 900px;">
            // API configuration
            <div style="padding: 12px; border: 1px solid var(--colorNeutralStroke2); border-radius: 8px;">
                <h3 style="margin: 0 0 4px 0; font-size: 14px;">"API Configuration"</h3>
                <p style="margin: 0 0 12px 0; font-size: 12px; color: var(--colorNeutralForeground3);">
                    "Backend API connection settings"
                </p>
                <div style="font-size: 12px;">
                    <div style="margin-bottom: 8px;">
                        <strong>"Base URL: "</strong>
                        <span class="badge badge--outline" style="font-family: monospace;">
                            {api_base()}
                        </span>
                    </div>
                    <div>
                        <strong>"App Version: "</strong>
                        <span class="badge badge--secondary">{env!("CARGO_PKG_VERSION")}</span>
                    </div>
                </div>
            </div>

            // Database selection
            <div style="padding: 12px; border: 1px solid var(--colorNeutralStroke2); border-radius: 8px;">
                <h3 style="margin: 0 0 4px 0; font-size: 14px;">"Database Selection"</h3>
                <p style="margin: 0 0 12px 0; font-size: 12px; color: var(--colorNeutralForeground3);">
                    "Choose which seeded database to use"
                </p>
                <select
                    style="width: 100%; padding: 6px 8px;"
                    on:change=move |ev| {
                        let target: web_sys::HtmlSelectElement =
                            ev.target().unwrap().unchecked_into();
                        ctx.selected_db.set(target.value());
                    }
                >
                    {DATABASES
                        .into_iter()
                        .map(|(value, label)| {
                            view! {
                                <option
                                    value=value
                                    selected=move || ctx.selected_db.get() == value
                                >
                                    {label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <label style="display: block; margin-top: 12px; font-size: 12px;">
                    "Custom database path"
                    <input
                        type="text"
                        style="width: 100%; margin-top: 4px; padding: 6px 8px; font-family: monospace;"
                        prop:value=move || ctx.selected_db.get()
                        on:change=move |ev| {
                            let target: web_sys::HtmlInputElement =
                                ev.target().unwrap().unchecked_into();
                            let value = target.value();
                            if !value.trim().is_empty() {
                                ctx.selected_db.set(value.trim().to_string());
                            }
                        }
                    />
                </label>
                <p style="margin: 8px 0 0 0; font-size: 11px; color: var(--colorNeutralForeground3);">
                    "The selected database is used across all views."
                </p>
            </div>

            // Developer mode
            <div style="grid-column: span 2; padding: 12px; border: 1px solid var(--colorNeutralStroke2); border-radius: 8px;">
                <h3 style="margin: 0 0 4px 0; font-size: 14px;">"Developer Mode"</h3>
                <p style="margin: 0 0 12px 0; font-size: 12px; color: var(--colorNeutralForeground3);">
                    "Enable advanced developer features including the SQL console"
                </p>
                <label style="display: flex; align-items: center; gap: 8px; font-size: 13px; cursor: pointer;">
                    <input
                        type="checkbox"
                        prop:checked=move || ctx.developer_mode.get()
                        on:change=move |_| ctx.developer_mode.update(|v| *v = !*v)
                    />
                    "Enable Developer Mode"
                </label>
                {move || {
                    ctx.developer_mode.get().then(|| {
                        view! {
                            <p style="margin: 12px 0 0 0; padding: 8px 12px; border-radius: 6px; background: var(--colorNeutralBackground2); font-size: 12px; color: var(--colorNeutralForeground3);">
                                "Developer mode is enabled. The SQL console is available in the Ledger tab."
                            </p>
                        }
                    })
                }}
            </div>
        </div>
    }
}
