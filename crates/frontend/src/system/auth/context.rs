use contracts::shared::config::ShopConfig;
use contracts::system::auth::UserProfile;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::StorageEvent;

use super::storage;
use crate::shared::config::use_config;
use crate::shared::events;

/// Signed-in customer, if any. There is no server: signing in only
/// stores the profile in the browser.
#[derive(Clone, Copy)]
pub struct Session {
    pub user: RwSignal<Option<UserProfile>>,
    /// Profile signed out of in this tab, so signing back in keeps the name
    last_user: StoredValue<Option<UserProfile>>,
    storage_key: StoredValue<String>,
}

impl Session {
    fn restore(config: &ShopConfig) -> Self {
        let key = config.user_storage_key.clone();
        let user = storage::load_user(&key);
        if let Some(profile) = &user {
            log::debug!("restored session for {}", profile.email);
        }
        Self {
            user: RwSignal::new(user),
            last_user: StoredValue::new(None),
            storage_key: StoredValue::new(key),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.with(Option::is_some)
    }

    pub fn sign_in(&self, profile: UserProfile) -> Result<(), String> {
        self.storage_key
            .with_value(|key| storage::save_user(key, &profile))?;
        log::debug!("signed in as {}", profile.email);
        self.user.set(Some(profile));
        Ok(())
    }

    /// Current profile, or the one last signed out of
    pub fn known_profile(&self) -> Option<UserProfile> {
        self.user
            .get_untracked()
            .or_else(|| self.last_user.get_value())
    }

    pub fn sign_out(&self) {
        self.storage_key.with_value(|key| storage::clear_user(key));
        if let Some(profile) = self.user.get_untracked() {
            self.last_user.set_value(Some(profile));
        }
        log::debug!("signed out");
        self.user.set(None);
    }

    /// Follow sign-in and sign-out from other tabs
    fn subscribe(&self) {
        let session = *self;
        let key = self.storage_key.get_value();
        events::listen("storage", move |event| {
            let Some(event) = event.dyn_ref::<StorageEvent>() else {
                return;
            };
            match event.key() {
                Some(changed) if changed != key => {}
                _ => session.user.set(storage::load_user(&key)),
            }
        });
    }
}

/// Session context provider component
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = use_config().with_value(Session::restore);
    session.subscribe();
    provide_context(session);

    children()
}

/// Hook to access the session
pub fn use_session() -> Session {
    use_context::<Session>().expect("SessionProvider not found in component tree")
}
