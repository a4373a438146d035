//! Favorites store shared by product cards, the navbar counter and the
//! favorites page.
//!
//! Every write goes to localStorage first and is then announced with a
//! window `CustomEvent` (name from [`ShopConfig::favorites_event`]). Every
//! `FavoritesContext` reloads from storage when that event or the browser
//! `storage` event (another tab) fires, so all views converge on what is
//! stored.

use super::storage::{load_favorites, save_favorites};
use crate::shared::events;
use contracts::domain::a001_product::{Product, ProductKey};
use contracts::domain::a003_favorite::FavoriteList;
use contracts::shared::config::ShopConfig;
use leptos::prelude::*;
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::StorageEvent;

/// Detail payload of the favorites event
#[derive(Debug, Clone, Serialize)]
pub struct FavoritesUpdated {
    pub count: usize,
}

#[derive(Clone, Copy)]
pub struct FavoritesContext {
    pub favorites: RwSignal<FavoriteList>,
    storage_key: StoredValue<String>,
    event_name: StoredValue<String>,
}

impl FavoritesContext {
    pub fn new(config: &ShopConfig) -> Self {
        let storage_key = config.favorites_storage_key.clone();
        Self {
            favorites: RwSignal::new(load_favorites(&storage_key)),
            storage_key: StoredValue::new(storage_key),
            event_name: StoredValue::new(config.favorites_event.clone()),
        }
    }

    /// Pull the stored list into the signal if it differs.
    pub fn reload(&self) {
        let fresh = self.storage_key.with_value(|key| load_favorites(key));
        if self.favorites.with_untracked(|current| current != &fresh) {
            self.favorites.set(fresh);
        }
    }

    /// Flip the liked state of `product`. Returns the new state.
    pub fn toggle(&self, product: &Product) -> bool {
        // Re-read so a write from another component is not overwritten
        let mut list = self.storage_key.with_value(|key| load_favorites(key));
        let liked = list.toggle(product);
        log::debug!(
            "toggle favorite {} -> {} ({} total)",
            product.key(),
            liked,
            list.len()
        );
        self.commit(list);
        liked
    }

    pub fn remove(&self, key: ProductKey) {
        let mut list = self.storage_key.with_value(|k| load_favorites(k));
        if list.remove(key) {
            log::debug!("removed favorite {}", key);
            self.commit(list);
        }
    }

    fn commit(&self, list: FavoriteList) {
        if let Err(e) = self.storage_key.with_value(|key| save_favorites(key, &list)) {
            log::warn!("Favorites not saved: {}", e);
        }
        let detail = FavoritesUpdated {
            count: list.liked_count(),
        };
        self.favorites.set(list);
        if let Err(e) = self.event_name.with_value(|name| events::dispatch(name, &detail)) {
            log::warn!("Favorites update not broadcast: {}", e);
        }
    }

    /// Reactive liked state of one product
    pub fn is_liked(&self, key: ProductKey) -> bool {
        self.favorites.with(|f| f.contains(key))
    }

    /// Reactive number of liked products, as listed on the favorites page
    pub fn count(&self) -> usize {
        self.favorites.with(FavoriteList::liked_count)
    }

    fn subscribe(&self) {
        let ctx = *self;
        let event_name = self.event_name.get_value();
        events::listen(&event_name, move |_| ctx.reload());

        let storage_key = self.storage_key.get_value();
        events::listen("storage", move |event| {
            let Some(event) = event.dyn_ref::<StorageEvent>() else {
                return;
            };
            // `key` is null when another tab cleared the whole storage
            match event.key() {
                Some(changed) if changed != storage_key => {}
                _ => ctx.reload(),
            }
        });
    }
}

pub fn provide_favorites(config: &ShopConfig) -> FavoritesContext {
    let ctx = FavoritesContext::new(config);
    ctx.subscribe();
    provide_context(ctx);
    ctx
}

pub fn use_favorites() -> FavoritesContext {
    use_context::<FavoritesContext>().expect("FavoritesContext not found")
}
