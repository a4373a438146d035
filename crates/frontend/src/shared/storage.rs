//! localStorage helpers shared by favorites and the session.
//!
//! Reads never fail: a missing window, disabled storage or an absent key all
//! come back as `None`. Writes report the browser error as a string.

use web_sys::window;

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn load_raw(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

pub fn save_raw(key: &str, value: &str) -> Result<(), String> {
    let storage = local_storage().ok_or_else(|| "localStorage is not available".to_string())?;
    storage
        .set_item(key, value)
        .map_err(|e| format!("Failed to write '{}': {:?}", key, e))
}

pub fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}
