//! Thin localStorage wrapper. Read/write failures (private browsing,
//! quota) are swallowed; persistence is best-effort by design of the
//! surrounding views.

use web_sys::window;

pub const CHAT_MESSAGES_KEY: &str = "pmm.chat.messages";
pub const CHAT_MODEL_KEY: &str = "pmm.chat.model";
pub const DATABASE_KEY: &str = "pmm.db";
pub const DEVELOPER_MODE_KEY: &str = "pmm.devmode";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn get(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

pub fn set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(key, value).is_err() {
            log::warn!("failed to persist {}", key);
        }
    }
}

pub fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}
