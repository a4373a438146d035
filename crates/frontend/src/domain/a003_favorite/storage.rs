use crate::shared::storage;
use contracts::domain::a003_favorite::FavoriteList;

/// Read the stored favorites.
///
/// Entries that cannot be read are skipped and logged; the rest are kept so
/// the next write does not lose them. A value that is not a JSON array at all
/// counts as an empty list.
pub fn load_favorites(key: &str) -> FavoriteList {
    let Some(raw) = storage::load_raw(key) else {
        return FavoriteList::new();
    };
    match FavoriteList::load_json(&raw) {
        Ok(loaded) => {
            for reason in &loaded.rejected {
                log::warn!("Skipping unreadable favorite ({})", reason);
            }
            loaded.list
        }
        Err(e) => {
            log::warn!("Discarding unreadable favorites: {:#}", e);
            FavoriteList::new()
        }
    }
}

pub fn save_favorites(key: &str, favorites: &FavoriteList) -> Result<(), String> {
    let raw = favorites.to_json().map_err(|e| format!("{:#}", e))?;
    storage::save_raw(key, &raw)
}
