//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, HtmlInputElement, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL query string (including the '?' prefix).
pub fn location_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Push a new history entry with `state` and `url`.
pub fn push_state(state: &JsValue, url: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
        && let Err(err) = history.push_state_with_url(state, "", Some(url))
    {
        log::warn!("pushState failed: {:?}", err);
    }
}

/// Replace the current history entry without adding to browser history.
pub fn replace_state(state: &JsValue, url: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
        && let Err(err) = history.replace_state_with_url(state, "", Some(url))
    {
        log::warn!("replaceState failed: {:?}", err);
    }
}

/// Send the browser to `url`.
pub fn set_href(url: &str) {
    if let Some(window) = window()
        && let Err(err) = window.location().set_href(url)
    {
        log::error!("Navigation to {} failed: {:?}", url, err);
    }
}

/// Blocking confirmation dialog. `false` when no window is available.
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

// =============================================================================
// File inputs
// =============================================================================

/// The `<input type="file">` that fired `event`.
pub fn event_input(event: &Event) -> Option<HtmlInputElement> {
    event.target()?.dyn_into::<HtmlInputElement>().ok()
}

/// `webkitRelativePath` of a picked file; empty for plain file picks.
pub fn relative_path(file: &web_sys::File) -> Option<String> {
    js_sys::Reflect::get(file, &JsValue::from_str("webkitRelativePath"))
        .ok()?
        .as_string()
        .filter(|path| !path.is_empty())
}
