use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

type NavigateFn = Box<dyn Fn(&str, NavigateOptions)>;

/// Copyable handle to the router's navigate function, usable from
/// event handlers that have to be `Send + Sync`.
#[derive(Clone, Copy)]
pub struct Navigator(StoredValue<NavigateFn, LocalStorage>);

impl Navigator {
    pub fn go(&self, path: &str) {
        self.0.with_value(|navigate| navigate(path, NavigateOptions::default()));
    }

    /// Navigate without adding a history entry
    pub fn replace(&self, path: &str) {
        self.0.with_value(|navigate| {
            navigate(
                path,
                NavigateOptions {
                    replace: true,
                    scroll: false,
                    ..Default::default()
                },
            )
        });
    }
}

/// Must be called inside the `Router`.
pub fn use_navigator() -> Navigator {
    let navigate: NavigateFn = Box::new(use_navigate());
    Navigator(StoredValue::new_local(navigate))
}
