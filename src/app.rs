//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::spawn_local;

use crate::components::{Explorer, FolderModal, NotificationToast, UploadModal};
use crate::config::API_BASE_URL;
use crate::core::workflow::{self, HistoryMode};
use crate::core::{BrowserStore, FileBrowser, HttpBackend, WebHost};
use crate::models::{ContextTarget, DirectoryPath, NavigationHistoryEntry};
use crate::utils::dom;

/// Browser state as held by the UI. Picked files are `!Send`, so the
/// signal lives in local storage.
pub type BrowserSignal = RwSignal<FileBrowser<web_sys::File>, LocalStorage>;

impl BrowserStore<web_sys::File> for BrowserSignal {
    fn with_state<R>(&self, f: impl FnOnce(&mut FileBrowser<web_sys::File>) -> R) -> Option<R> {
        self.try_update(f)
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Global application context shared via Leptos context API.
///
/// Components read `browser` reactively and start actions through the
/// methods below, which run the matching workflow on the local executor.
///
/// # Note
///
/// This struct is `Copy`: the signal is a handle and the backend and host
/// are plain values.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// File browser state.
    pub browser: BrowserSignal,

    /// Remote file service.
    pub backend: HttpBackend,

    /// Page-level effects (history, redirects, prompts).
    pub host: WebHost,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            browser: RwSignal::new_local(FileBrowser::new()),
            backend: HttpBackend::new(API_BASE_URL),
            host: WebHost,
        }
    }

    /// Open `path` as a user navigation (pushes history on success).
    pub fn open(self, path: DirectoryPath) {
        self.navigate(path, HistoryMode::Push);
    }

    pub fn navigate(self, path: DirectoryPath, mode: HistoryMode) {
        spawn_local(async move {
            workflow::navigate(&self.browser, &self.backend, &self.host, path, mode).await;
        });
    }

    pub fn refresh_storage(self) {
        spawn_local(async move {
            workflow::refresh_storage(&self.browser, &self.backend, &self.host).await;
        });
    }

    pub fn submit_upload(self) {
        spawn_local(async move {
            workflow::submit_upload(&self.browser, &self.backend, &self.host).await;
        });
    }

    pub fn create_folder(self, name: String) {
        spawn_local(async move {
            workflow::create_folder(&self.browser, &self.backend, &self.host, &name).await;
        });
    }

    pub fn delete(self, target: ContextTarget) {
        spawn_local(async move {
            workflow::delete_item(&self.browser, &self.backend, &self.host, target).await;
        });
    }

    pub fn download(self, target: &ContextTarget) {
        workflow::download_item(&self.browser, &self.backend, &self.host, target);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Window listeners
// ============================================================================

/// Re-list the directory stored in a history entry on back/forward.
#[cfg(target_arch = "wasm32")]
fn listen_popstate(ctx: AppContext) {
    use wasm_bindgen::JsCast;

    let closure = Closure::wrap(Box::new(move |event: web_sys::PopStateEvent| {
        let entry = serde_wasm_bindgen::from_value::<NavigationHistoryEntry>(event.state())
            .unwrap_or_else(|_| NavigationHistoryEntry::from_query(&dom::location_search()));
        log::debug!("popstate -> /{}", entry.path);
        ctx.navigate(entry.path, HistoryMode::Skip);
    }) as Box<dyn Fn(web_sys::PopStateEvent)>);

    if let Some(window) = dom::window() {
        let _ = window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
    }

    // Keep the closure alive for the lifetime of the app
    closure.forget();
}

/// Close the context menu on any click that reaches the window.
#[cfg(target_arch = "wasm32")]
fn listen_outside_click(ctx: AppContext) {
    use wasm_bindgen::JsCast;

    let closure = Closure::wrap(Box::new(move || {
        if ctx.browser.with_untracked(|b| b.context_menu().is_some()) {
            ctx.browser.update(|b| b.close_context_menu());
        }
    }) as Box<dyn Fn()>);

    if let Some(window) = dom::window() {
        let _ = window.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

// ============================================================================
// App
// ============================================================================

/// Root application component.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wires browser history and outside-click handling
/// - Loads the directory named in `?path=` and the storage summary
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    #[cfg(target_arch = "wasm32")]
    {
        listen_popstate(ctx);
        listen_outside_click(ctx);
    }

    let initial = NavigationHistoryEntry::from_query(&dom::location_search());
    ctx.navigate(initial.path, HistoryMode::Replace);
    ctx.refresh_storage();

    view! {
        <Explorer />
        <Show when=move || ctx.browser.with(|b| b.is_upload_open())>
            <UploadModal />
        </Show>
        <Show when=move || ctx.browser.with(|b| b.is_folder_modal_open())>
            <FolderModal />
        </Show>
        <NotificationToast />
    }
}
