//! Browser-side effects the workflows need besides the backend.

use crate::models::NavigationHistoryEntry;
use crate::utils::dom;

/// Page-level effects: history, redirects and confirmation prompts.
pub trait Host {
    /// Add a history entry for a user-initiated navigation.
    fn push_history(&self, entry: &NavigationHistoryEntry);

    /// Overwrite the current history entry (initial load).
    fn replace_history(&self, entry: &NavigationHistoryEntry);

    /// Leave the app for `url` (login, downloads).
    fn redirect(&self, url: &str);

    /// Ask the user to confirm `message`.
    fn confirm(&self, message: &str) -> bool;
}

/// [`Host`] backed by the real `window`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebHost;

impl WebHost {
    fn state(entry: &NavigationHistoryEntry) -> wasm_bindgen::JsValue {
        serde_wasm_bindgen::to_value(entry).unwrap_or(wasm_bindgen::JsValue::NULL)
    }
}

impl Host for WebHost {
    fn push_history(&self, entry: &NavigationHistoryEntry) {
        dom::push_state(&Self::state(entry), &entry.to_url());
    }

    fn replace_history(&self, entry: &NavigationHistoryEntry) {
        dom::replace_state(&Self::state(entry), &entry.to_url());
    }

    fn redirect(&self, url: &str) {
        dom::set_href(url);
    }

    fn confirm(&self, message: &str) -> bool {
        dom::confirm(message)
    }
}
