//! Window-level custom events used for cross-component notification.

use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, CustomEvent, CustomEventInit, Event};

/// Fire `name` on `window` with `detail` serialized into the event.
pub fn dispatch<T: Serialize>(name: &str, detail: &T) -> Result<(), String> {
    let window = window().ok_or_else(|| "window is not available".to_string())?;
    let detail = serde_wasm_bindgen::to_value(detail).map_err(|e| e.to_string())?;

    let init = CustomEventInit::new();
    init.set_detail(&detail);
    let event = CustomEvent::new_with_event_init_dict(name, &init)
        .map_err(|e| format!("Failed to create '{}' event: {:?}", name, e))?;

    window
        .dispatch_event(&event)
        .map(|_| ())
        .map_err(|e| format!("Failed to dispatch '{}': {:?}", name, e))
}

/// Call `handler` whenever `name` fires on `window`.
///
/// The listener stays registered for the lifetime of the page.
pub fn listen(name: &str, handler: impl FnMut(Event) + 'static) {
    let Some(window) = window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if window
        .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
        .is_ok()
    {
        closure.forget();
    } else {
        log::warn!("Could not subscribe to '{}'", name);
    }
}
