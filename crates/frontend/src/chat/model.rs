//! Chat page API functions.

use crate::chat::stream::{StreamAssembler, StreamUpdate};
use crate::shared::api_utils::{api_url, QueryBuilder};
use crate::shared::http::get_json;
use contracts::chat::{ChatRequest, ModelsResponse};
use contracts::metrics::{MetricsResponse, MetricsSnapshot, STAGES};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortSignal, Request, RequestInit, RequestMode, Response};

pub async fn fetch_models() -> Result<ModelsResponse, String> {
    get_json(&api_url("/models")).await
}

pub async fn fetch_metrics_snapshot(db: Option<String>) -> Result<MetricsSnapshot, String> {
    let qs = QueryBuilder::new().push_opt("db", db).build();
    let resp: MetricsResponse = get_json(&api_url(&format!("/metrics{}", qs))).await?;
    Ok(resp.metrics)
}

/// Text body of the `--@metrics` system note.
pub fn format_metrics_snapshot(metrics: &MetricsSnapshot) -> String {
    let stage_id = metrics.stage.base_stage();
    let stage_name = STAGES
        .iter()
        .find(|(id, _)| *id == stage_id)
        .map(|(_, name)| *name)
        .unwrap_or("Unknown");

    let mut out = String::new();
    out.push_str("PMM metrics snapshot\n");
    out.push_str(&format!("IAS:   {:>5.1}%\n", metrics.ias * 100.0));
    out.push_str(&format!("GAS:   {:>5.1}%\n", metrics.gas * 100.0));
    out.push_str(&format!("Stage: {} ({})\n", stage_id, stage_name));
    out.push_str("Traits:\n");
    for (name, value) in metrics.traits.as_pairs() {
        out.push_str(&format!("  {:<18} {:>5.1}%\n", name, value * 100.0));
    }
    if let Some(updated) = &metrics.last_updated {
        out.push_str(&format!("Last updated: {}\n", updated));
    }
    out
}

/// POST the completion request and feed every decoded frame to
/// `on_update` as it arrives. Resolves when the stream closes. Errors
/// cover transport failures, non-success statuses and user aborts (an
/// abort rejects the pending read; the caller distinguishes it through
/// the abort signal).
pub async fn stream_chat(
    request: &ChatRequest,
    signal: &AbortSignal,
    mut on_update: impl FnMut(StreamUpdate),
) -> Result<(), String> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_signal(Some(signal));
    let body = serde_json::to_string(request).map_err(|e| e.to_string())?;
    opts.set_body(&JsValue::from_str(&body));

    let req = Request::new_with_str_and_init(&api_url("/chat"), &opts)
        .map_err(|e| format!("{e:?}"))?;
    req.headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(|e| js_error_message(&e))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        return Err(format!("Chat request failed ({})", resp.status()));
    }

    let body = resp
        .body()
        .ok_or_else(|| "chat response has no body".to_string())?;
    let reader: web_sys::ReadableStreamDefaultReader =
        body.get_reader().dyn_into().map_err(|e| format!("{e:?}"))?;

    let mut assembler = StreamAssembler::new();
    loop {
        let chunk = JsFuture::from(reader.read())
            .await
            .map_err(|e| js_error_message(&e))?;
        let done = js_sys::Reflect::get(&chunk, &JsValue::from_str("done"))
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(true);
        if done {
            break;
        }
        let value = js_sys::Reflect::get(&chunk, &JsValue::from_str("value"))
            .map_err(|e| format!("{e:?}"))?;
        let bytes = js_sys::Uint8Array::new(&value).to_vec();
        for update in assembler.push(&bytes) {
            on_update(update);
        }
    }
    for update in assembler.finish() {
        on_update(update);
    }
    Ok(())
}

fn js_error_message(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            js_sys::Reflect::get(err, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{err:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::metrics::{StageInfo, TraitSet};

    #[test]
    fn test_format_metrics_snapshot() {
        let metrics = MetricsSnapshot {
            ias: 0.731,
            gas: 0.642,
            traits: TraitSet {
                openness: 0.8,
                ..TraitSet::default()
            },
            stage: StageInfo {
                current: "S2: pattern".to_string(),
            },
            last_updated: Some("2025-04-01T00:00:00Z".to_string()),
        };
        let text = format_metrics_snapshot(&metrics);
        assert!(text.contains("IAS:    73.1%"));
        assert!(text.contains("Stage: S2 (Pattern)"));
        assert!(text.contains("openness"));
        assert!(text.contains("Last updated: 2025-04-01T00:00:00Z"));
    }
}
