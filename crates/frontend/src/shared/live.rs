//! Best-effort WebSocket feed. The backend may not expose `/stream` at
//! all; in that case the views keep their polling intervals and the
//! status indicator shows "polling". A closed socket is never retried.

use crate::shared::api_utils::ws_base;
use contracts::live::{LiveMessage, LiveMessageType};
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveStatus {
    Connecting,
    Connected,
    Polling,
}

impl LiveStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LiveStatus::Connecting => "connecting",
            LiveStatus::Connected => "live",
            LiveStatus::Polling => "polling",
        }
    }
}

/// Open the feed for the given database. Each delivered `event` message
/// bumps `events_seen`, which data views treat as a refresh hint.
pub fn connect(db: Option<String>, status: RwSignal<LiveStatus>, events_seen: RwSignal<u64>) {
    let url = match db.as_deref() {
        Some(db) if !db.is_empty() => {
            format!("{}/stream?db={}", ws_base(), urlencoding::encode(db))
        }
        _ => format!("{}/stream", ws_base()),
    };

    let ws = match web_sys::WebSocket::new(&url) {
        Ok(ws) => ws,
        Err(_) => {
            status.set(LiveStatus::Polling);
            return;
        }
    };
    status.set(LiveStatus::Connecting);

    let onopen = Closure::<dyn FnMut()>::new(move || {
        log::info!("live feed connected");
        status.set(LiveStatus::Connected);
    });
    ws.set_onopen(Some(onopen.as_ref().unchecked_ref()));
    onopen.forget();

    let onmessage = Closure::<dyn FnMut(web_sys::MessageEvent)>::new(move |ev: web_sys::MessageEvent| {
        let Some(text) = ev.data().as_string() else {
            return;
        };
        match serde_json::from_str::<LiveMessage>(&text) {
            Ok(msg) if msg.kind == LiveMessageType::Event => {
                events_seen.update(|n| *n += 1);
            }
            Ok(_) => {}
            Err(err) => log::warn!("unparseable live message: {}", err),
        }
    });
    ws.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
    onmessage.forget();

    let onclose = Closure::<dyn FnMut(web_sys::CloseEvent)>::new(move |_: web_sys::CloseEvent| {
        log::info!("live feed closed - falling back to polling");
        status.set(LiveStatus::Polling);
    });
    ws.set_onclose(Some(onclose.as_ref().unchecked_ref()));
    onclose.forget();

    let onerror = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
        // Expected when the endpoint does not exist; polling covers it.
        status.set(LiveStatus::Polling);
    });
    ws.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();
}
