use crate::shared::storage;
use contracts::system::auth::UserProfile;

/// Restore the signed-in user. A value that does not parse counts as
/// signed out and is removed.
pub fn load_user(key: &str) -> Option<UserProfile> {
    let raw = storage::load_raw(key)?;
    match UserProfile::from_json(&raw) {
        Ok(profile) => Some(profile),
        Err(e) => {
            log::warn!("Discarding stored user: {:#}", e);
            storage::remove(key);
            None
        }
    }
}

pub fn save_user(key: &str, profile: &UserProfile) -> Result<(), String> {
    let raw = profile.to_json().map_err(|e| format!("{:#}", e))?;
    storage::save_raw(key, &raw)
}

pub fn clear_user(key: &str) {
    storage::remove(key);
}
