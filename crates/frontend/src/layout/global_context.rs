use crate::shared::live::LiveStatus;
use crate::shared::storage;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Seeded databases the backend knows how to open. The first entry is
/// the runtime default; anything else can be typed into the settings
/// page directly.
pub const DATABASES: [(&str, &str); 2] = [
    (".data/pmm.db", "Primary (.data/pmm.db)"),
    (".data/pmm_baseline.db", "Baseline snapshot"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Chat,
    Ledger,
    Traces,
    Visualize,
    Settings,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Dashboard,
        Page::Chat,
        Page::Ledger,
        Page::Traces,
        Page::Visualize,
        Page::Settings,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Chat => "chat",
            Page::Ledger => "ledger",
            Page::Traces => "traces",
            Page::Visualize => "visualize",
            Page::Settings => "settings",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Chat => "Chat",
            Page::Ledger => "Ledger",
            Page::Traces => "Traces",
            Page::Visualize => "Visualize",
            Page::Settings => "Settings",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Chat => "chat",
            Page::Ledger => "ledger",
            Page::Traces => "traces",
            Page::Visualize => "visualize",
            Page::Settings => "settings",
        }
    }

    pub fn from_key(key: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.key() == key)
    }
}

/// Process-wide UI state. Exactly two pieces of it are persistent
/// (selected database and developer mode); the rest lives and dies with
/// the tab.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    pub selected_db: RwSignal<String>,
    pub developer_mode: RwSignal<bool>,
    pub live: RwSignal<LiveStatus>,
    pub live_events: RwSignal<u64>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        let selected_db = storage::get(storage::DATABASE_KEY)
            .filter(|db| !db.is_empty())
            .unwrap_or_else(|| DATABASES[0].0.to_string());
        let developer_mode = storage::get(storage::DEVELOPER_MODE_KEY).as_deref() == Some("true");

        Self {
            active: RwSignal::new(Page::Dashboard),
            selected_db: RwSignal::new(selected_db),
            developer_mode: RwSignal::new(developer_mode),
            live: RwSignal::new(LiveStatus::Polling),
            live_events: RwSignal::new(0),
        }
    }

    /// Restore the active page from `?page=...` and keep the URL in sync
    /// with it afterwards. Runs once when the shell is created.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(page) = params.get("page").and_then(|key| Page::from_key(key)) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let query_string = serde_qs::to_string(&HashMap::from([(
                "page".to_string(),
                this.active.get().key().to_string(),
            )]))
            .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only touch the URL when it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    /// Mirror the two persistent settings into localStorage on change.
    pub fn init_persistence(&self) {
        let this = *self;
        Effect::new(move |_| {
            storage::set(storage::DATABASE_KEY, &this.selected_db.get());
        });
        Effect::new(move |_| {
            let enabled = this.developer_mode.get();
            storage::set(
                storage::DEVELOPER_MODE_KEY,
                if enabled { "true" } else { "false" },
            );
        });
    }

    pub fn activate(&self, page: Page) {
        self.active.set(page);
    }

    /// Current database when it differs from the backend default, for
    /// use as an optional query parameter.
    pub fn db_param(&self) -> Option<String> {
        let db = self.selected_db.get();
        if db.is_empty() {
            None
        } else {
            Some(db)
        }
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
