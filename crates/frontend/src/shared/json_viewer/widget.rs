use crate::shared::icons::icon;
use leptos::prelude::*;

/// Pretty-printed JSON panel with copy-to-clipboard and file download.
#[component]
pub fn JsonViewer(
    /// JSON string to display
    json_content: String,
    /// Panel title
    #[prop(optional, into)]
    title: Option<String>,
) -> impl IntoView {
    let (copied, set_copied) = signal(false);

    let json_content_for_copy = json_content.clone();
    let json_content_for_download = json_content.clone();
    let json_content_for_display = json_content.clone();
    let json_content_for_stats = json_content;

    let handle_copy = move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let clipboard = window.navigator().clipboard();
        let content = json_content_for_copy.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let promise = clipboard.write_text(&content);
            let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
        });
        set_copied.set(true);

        // Reset after 2 seconds
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(2000).await;
            set_copied.set(false);
        });
    };

    let handle_download = move |_| {
        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                let blob_parts = js_sys::Array::new();
                blob_parts.push(&wasm_bindgen::JsValue::from_str(&json_content_for_download));

                let blob_property_bag = web_sys::BlobPropertyBag::new();
                blob_property_bag.set_type("application/json");

                if let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(
                    &blob_parts,
                    &blob_property_bag,
                ) {
                    if let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) {
                        if let Ok(a) = document.create_element("a") {
                            use wasm_bindgen::JsCast;
                            if let Ok(link) = a.dyn_into::<web_sys::HtmlAnchorElement>() {
                                link.set_href(&url);
                                link.set_download("pmm_event.json");
                                link.click();
                                web_sys::Url::revoke_object_url(&url).ok();
                            }
                        }
                    }
                }
            }
        }
    };

    view! {
        <div class="json-viewer">
            <div class="json-viewer__header" style="display: flex; justify-content: space-between; align-items: center;">
                <h3 style="margin: 0; font-size: 14px; font-weight: 600;">
                    {title.unwrap_or_else(|| "JSON".to_string())}
                </h3>
                <div style="display: flex; gap: 8px;">
                    <button class="button button--secondary" on:click=handle_copy title="Copy to clipboard">
                        {move || if copied.get() {
                            view! { <>{icon("check")}" Copied"</> }.into_any()
                        } else {
                            view! { <>{icon("copy")}" Copy"</> }.into_any()
                        }}
                    </button>
                    <button class="button button--secondary" on:click=handle_download title="Download as file">
                        {icon("download")}
                        " Download"
                    </button>
                </div>
            </div>

            <div class="json-viewer__body" style="max-height: 400px; overflow: auto;">
                <pre class="json-viewer__content" style="margin: 0; font-size: 12px; white-space: pre-wrap;">
                    {json_content_for_display}
                </pre>
            </div>

            <div class="json-viewer__footer" style="font-size: 11px; color: var(--colorNeutralForeground3);">
                {format!("{} chars", json_content_for_stats.len())}
            </div>
        </div>
    }
}

/// Render an arbitrary JSON value pretty-printed for the viewer.
pub fn pretty_json(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
