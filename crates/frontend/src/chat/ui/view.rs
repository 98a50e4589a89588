//! Chat page.

use super::metrics_sidebar::MetricsSidebar;
use super::view_model::ChatVm;
use crate::chat::markdown::MarkdownMessage;
use crate::chat::model::{fetch_metrics_snapshot, fetch_models, format_metrics_snapshot, stream_chat};
use crate::chat::stream::StreamUpdate;
use crate::chat::transcript::{save_messages, ChatMessage};
use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::shared::storage;
use contracts::chat::{ChatRequest, ChatRole, ChatTurn};
use leptos::prelude::*;
use thaw::*;
use web_sys::AbortController;

/// Exact-match shortcut that renders a metrics snapshot instead of
/// talking to the model.
const METRICS_COMMAND: &str = "--@metrics";
const METRICS_APOLOGY: &str = "Sorry, the metrics snapshot is unavailable right now.";

#[component]
pub fn ChatPage() -> impl IntoView {
    let ctx = use_app_context();
    let vm = ChatVm::new();
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    // Persist the transcript after every change.
    Effect::new(move |_| {
        save_messages(&vm.messages.get());
    });

    // Persist the model selection.
    Effect::new(move |_| {
        let model = vm.selected_model.get();
        if !model.is_empty() {
            storage::set(storage::CHAT_MODEL_KEY, &model);
        }
    });

    let scroll_to_bottom = move || {
        if let Some(container) = messages_container_ref.get_untracked() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    };

    Effect::new(move |_| {
        // Track message count so new messages scroll into view.
        let _ = vm.messages.with(|m| m.len());
        scroll_to_bottom();
    });

    // Load the model list once per session.
    Effect::new(move |_| {
        vm.models_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_models().await {
                Ok(resp) => {
                    let stored = storage::get(storage::CHAT_MODEL_KEY);
                    if let Some(model) = resp.pick_default(stored.as_deref()) {
                        vm.selected_model.set(model);
                    }
                    vm.models.set(resp.models);
                    vm.model_error.set(None);
                }
                Err(err) => vm.model_error.set(Some(format!("Failed to load models: {}", err))),
            }
            vm.models_loading.set(false);
        });
    });

    let run_metrics_command = move || {
        vm.input.set(String::new());
        let db = ctx.db_param();
        wasm_bindgen_futures::spawn_local(async move {
            let content = match fetch_metrics_snapshot(db).await {
                Ok(metrics) => format_metrics_snapshot(&metrics),
                Err(err) => {
                    log::warn!("metrics snapshot failed: {}", err);
                    METRICS_APOLOGY.to_string()
                }
            };
            vm.push_message(ChatMessage::system_note(content));
        });
    };

    let handle_send = move || {
        let prompt = vm.input.get_untracked().trim().to_string();
        if prompt.is_empty() || vm.is_streaming.get_untracked() {
            return;
        }
        if prompt == METRICS_COMMAND {
            run_metrics_command();
            return;
        }
        let model = vm.selected_model.get_untracked();
        if model.is_empty() {
            return;
        }

        vm.abort_in_flight();
        vm.input.set(String::new());
        vm.error.set(None);

        let mut turns = vm.history();
        turns.push(ChatTurn {
            role: ChatRole::User,
            content: prompt.clone(),
        });

        // One user message and one placeholder appended atomically.
        vm.messages.update(|messages| {
            messages.push(ChatMessage::user(prompt));
            messages.push(ChatMessage::assistant_placeholder(model.clone()));
        });
        vm.active_index
            .set(Some(vm.messages.with_untracked(|m| m.len()) - 1));
        vm.is_streaming.set(true);

        let request = ChatRequest {
            model,
            messages: turns,
            stream: true,
        };

        wasm_bindgen_futures::spawn_local(async move {
            let Ok(controller) = AbortController::new() else {
                vm.error.set(Some("AbortController unavailable".to_string()));
                vm.finalize_active();
                vm.is_streaming.set(false);
                return;
            };
            let signal = controller.signal();
            vm.track_abort(controller.clone());

            let result = stream_chat(&request, &signal, |update| match update {
                StreamUpdate::Delta(delta) => vm.append_delta(&delta),
                StreamUpdate::Done => vm.finalize_active(),
            })
            .await;

            if let Err(err) = result {
                if !signal.aborted() {
                    vm.error.set(Some(err.clone()));
                    vm.append_delta(&format!("\n\u{26a0}\u{fe0f} {}", err));
                }
            }
            // Connection close without the sentinel still finalizes;
            // after a Done frame this is a no-op.
            vm.finalize_active();
            vm.is_streaming.set(false);
            vm.clear_abort();
        });
    };

    let handle_stop = move || {
        if vm.is_streaming.get_untracked() {
            vm.abort_in_flight();
            vm.finalize_active();
            vm.is_streaming.set(false);
        }
    };

    view! {
        <style>
            "@keyframes chat-caret-blink { 50% { opacity: 0; } } \
             .chat-caret { animation: chat-caret-blink 1s step-end infinite; }"
        </style>
        <div style="height: 100%; display: flex; gap: 16px;">
            // Transcript and input
            <div style="flex: 1; display: flex; flex-direction: column; min-width: 0;">
                {move || {
                    vm.model_error
                        .get()
                        .map(|e| {
                            view! {
                                <div style="padding: 8px 12px; margin-bottom: 12px; border: 1px solid var(--colorPaletteRedBorder1); border-radius: 6px; color: var(--colorPaletteRedForeground1);">
                                    {e}
                                </div>
                            }
                        })
                }}

                <div
                    node_ref=messages_container_ref
                    style="flex: 1; overflow-y: auto; display: flex; flex-direction: column; gap: 12px; padding: 12px; border: 1px solid var(--colorNeutralStroke2); border-radius: 8px;"
                >
                    {move || {
                        let messages = vm.messages.get();
                        if messages.is_empty() {
                            view! {
                                <div style="color: var(--colorNeutralForeground3); padding: 24px;">
                                    "Start a conversation with PMM."
                                </div>
                            }
                            .into_any()
                        } else {
                            messages
                                .into_iter()
                                .map(|message| render_message(message))
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>

                {move || {
                    vm.error
                        .get()
                        .map(|e| {
                            view! {
                                <div style="padding: 8px 12px; margin-top: 12px; border: 1px solid var(--colorPaletteRedBorder1); border-radius: 6px; color: var(--colorPaletteRedForeground1);">
                                    {e}
                                </div>
                            }
                        })
                }}

                <div style="margin-top: 12px; display: flex; gap: 8px; align-items: flex-end;">
                    <div style="flex: 1;">
                        <Textarea
                            value=vm.input
                            placeholder="Message PMM... (Enter to send, Shift+Enter for newline)"
                            attr:style="width: 100%; min-height: 60px; resize: vertical;"
                            disabled=vm.is_streaming
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" && !ev.shift_key() {
                                    ev.prevent_default();
                                    handle_send();
                                }
                            }
                        />
                    </div>
                    {move || {
                        vm.is_streaming
                            .get()
                            .then(|| {
                                view! {
                                    <Button
                                        appearance=ButtonAppearance::Secondary
                                        on_click=move |_| handle_stop()
                                    >
                                        {icon("stop")}
                                        " Stop"
                                    </Button>
                                }
                            })
                    }}
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || !vm.can_send())
                        on_click=move |_| handle_send()
                    >
                        {icon("send")}
                        " Send"
                    </Button>
                </div>
                <div style="margin-top: 4px; font-size: 12px; color: var(--colorNeutralForeground3);">
                    {move || {
                        if vm.is_streaming.get() {
                            "Streaming response\u{2026}"
                        } else {
                            "Powered by PMM Runtime"
                        }
                    }}
                </div>
            </div>

            // Model list
            <aside style="width: 260px; display: flex; flex-direction: column; border: 1px solid var(--colorNeutralStroke2); border-radius: 8px;">
                <div style="padding: 12px; border-bottom: 1px solid var(--colorNeutralStroke2);">
                    <h3 style="margin: 0; font-size: 14px; font-weight: 600;">"Available Models"</h3>
                    <p style="margin: 4px 0 0 0; font-size: 12px; color: var(--colorNeutralForeground3);">
                        "Select a runtime model"
                    </p>
                </div>
                <div style="flex: 1; overflow-y: auto; padding: 8px;">
                    {move || {
                        if vm.models_loading.get() {
                            view! {
                                <div style="padding: 16px; text-align: center; font-size: 12px; color: var(--colorNeutralForeground3);">
                                    "Loading models\u{2026}"
                                </div>
                            }
                            .into_any()
                        } else if vm.models.with(|m| m.is_empty()) {
                            view! {
                                <div style="padding: 16px; text-align: center; font-size: 12px; color: var(--colorNeutralForeground3);">
                                    "No models available"
                                </div>
                            }
                            .into_any()
                        } else {
                            vm.models
                                .get()
                                .into_iter()
                                .map(|model| {
                                    let name = model.name.clone();
                                    let select_name = model.name.clone();
                                    let is_selected =
                                        move || vm.selected_model.get() == name;
                                    view! {
                                        <button
                                            style="display: block; width: 100%; text-align: left; padding: 8px 10px; border: none; background: none; cursor: pointer; border-radius: 6px;"
                                            class=move || {
                                                if is_selected() {
                                                    "model-item model-item--selected"
                                                } else {
                                                    "model-item"
                                                }
                                            }
                                            disabled=move || vm.is_streaming.get()
                                            on:click=move |_| {
                                                vm.selected_model.set(select_name.clone())
                                            }
                                        >
                                            <div style="font-size: 13px; font-weight: 500;">
                                                {model.name.clone()}
                                            </div>
                                            <div style="font-size: 11px; color: var(--colorNeutralForeground3);">
                                                {model.provider.clone()}
                                            </div>
                                            {model
                                                .description
                                                .clone()
                                                .map(|d| {
                                                    view! {
                                                        <div style="font-size: 11px; color: var(--colorNeutralForeground3); margin-top: 2px;">
                                                            {d}
                                                        </div>
                                                    }
                                                })}
                                        </button>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
            </aside>

            <MetricsSidebar />
        </div>
    }
}

fn render_message(message: ChatMessage) -> impl IntoView {
    let is_user = message.role == ChatRole::User;
    let align = if is_user {
        "align-self: flex-end; max-width: 70%;"
    } else {
        "align-self: flex-start; max-width: 70%;"
    };
    let bubble = if is_user {
        "background: var(--colorBrandBackground2); padding: 10px 14px; border-radius: 12px;"
    } else {
        "background: var(--colorNeutralBackground2); padding: 10px 14px; border-radius: 12px;"
    };

    let model_tag = (!is_user)
        .then(|| message.model.clone())
        .flatten()
        .map(|model| {
            view! {
                <div style="font-size: 11px; color: var(--colorNeutralForeground3); padding: 0 4px 2px;">
                    {model}
                </div>
            }
        });

    let placeholder_dots = message.pending && message.content.is_empty();

    view! {
        <div class=format!("chat-message chat-message--{}", message.role.as_str()) style=align>
            {model_tag}
            <div style=bubble>
                {if message.system {
                    view! { <pre style="margin: 0; white-space: pre-wrap; font-size: 13px;">{message.content}</pre> }
                        .into_any()
                } else if is_user {
                    view! { <div style="white-space: pre-wrap;">{message.content}</div> }.into_any()
                } else if placeholder_dots {
                    view! { <div style="color: var(--colorNeutralForeground3);">"\u{2026}"</div> }
                        .into_any()
                } else {
                    view! { <MarkdownMessage text=message.content streaming=message.streaming /> }
                        .into_any()
                }}
            </div>
        </div>
    }
}
