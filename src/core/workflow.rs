//! User-action workflows.
//!
//! Each function runs one action end to end: validate and update the state,
//! call the backend, apply the response and perform follow-ups (refresh,
//! history, login redirect). They are generic over the state store, backend
//! and host so the same code runs in the browser and in native tests.

use super::api::Backend;
use super::browser::{BrowserStore, Outcome};
use super::host::Host;
use crate::config::LOGIN_ROUTE;
use crate::core::error::BrowserError;
use crate::models::{ContextTarget, DirectoryPath, NavigationHistoryEntry};

/// How a successful navigation is recorded in browser history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryMode {
    /// User-initiated navigation.
    Push,
    /// Initial page load.
    Replace,
    /// Back/forward or refresh.
    Skip,
}

/// Show `path` and record it in history once its listing succeeds.
///
/// When a back/forward or initial listing fails, the browser already shows
/// the failed path in its address bar, so the entry is replaced with the
/// path the view rolled back to.
pub async fn navigate<S, B, H>(
    store: &S,
    backend: &B,
    host: &H,
    path: DirectoryPath,
    mode: HistoryMode,
) -> Outcome
where
    S: BrowserStore<B::File>,
    B: Backend,
    H: Host,
{
    let Some(ticket) = store.with_state(|browser| browser.begin_navigation(path)) else {
        return Outcome::Stale;
    };
    log::debug!("Listing /{}", ticket.path);

    let result = backend.list(&ticket.path).await;
    let entry = NavigationHistoryEntry::new(ticket.path.clone());
    let outcome = store
        .with_state(|browser| browser.finish_navigation(ticket, result))
        .unwrap_or(Outcome::Stale);

    match outcome {
        Outcome::Done => match mode {
            HistoryMode::Push => host.push_history(&entry),
            HistoryMode::Replace => host.replace_history(&entry),
            HistoryMode::Skip => {}
        },
        Outcome::Failed if mode != HistoryMode::Push => {
            if let Some(path) = store.with_state(|browser| browser.current_path().clone()) {
                host.replace_history(&NavigationHistoryEntry::new(path));
            }
        }
        Outcome::AuthRequired => host.redirect(LOGIN_ROUTE),
        _ => {}
    }
    outcome
}

/// Re-list the current directory without touching history.
pub async fn refresh<S, B, H>(store: &S, backend: &B, host: &H) -> Outcome
where
    S: BrowserStore<B::File>,
    B: Backend,
    H: Host,
{
    let Some(path) = store.with_state(|browser| browser.current_path().clone()) else {
        return Outcome::Stale;
    };
    navigate(store, backend, host, path, HistoryMode::Skip).await
}

/// Fetch the storage summary. Failures keep the previous value.
pub async fn refresh_storage<S, B, H>(store: &S, backend: &B, host: &H)
where
    S: BrowserStore<B::File>,
    B: Backend,
    H: Host,
{
    match backend.storage_info().await {
        Ok(summary) => {
            store.with_state(|browser| browser.set_storage(summary));
        }
        Err(BrowserError::AuthRequired) => host.redirect(LOGIN_ROUTE),
        Err(err) => log::warn!("Storage info unavailable: {}", err),
    }
}

/// Upload the selection into the current directory.
pub async fn submit_upload<S, B, H>(store: &S, backend: &B, host: &H) -> Outcome
where
    S: BrowserStore<B::File>,
    B: Backend,
    H: Host,
{
    let batch = match store.with_state(|browser| browser.begin_upload()) {
        Some(Ok(batch)) => batch,
        Some(Err(err)) => {
            store.with_state(|browser| browser.reject(err));
            return Outcome::Failed;
        }
        None => return Outcome::Stale,
    };
    log::info!("Uploading {} file(s) to /{}", batch.files.len(), batch.path);

    let result = backend.upload(&batch.path, &batch.files).await;
    let outcome = store
        .with_state(|browser| browser.finish_upload(&batch, result))
        .unwrap_or(Outcome::Stale);
    after_mutation(store, backend, host, outcome).await;
    outcome
}

/// Create folder `name` in the current directory.
pub async fn create_folder<S, B, H>(store: &S, backend: &B, host: &H, name: &str) -> Outcome
where
    S: BrowserStore<B::File>,
    B: Backend,
    H: Host,
{
    let (path, name) = match store.with_state(|browser| browser.begin_create_folder(name)) {
        Some(Ok(request)) => request,
        Some(Err(err)) => {
            store.with_state(|browser| browser.reject(err));
            return Outcome::Failed;
        }
        None => return Outcome::Stale,
    };

    let result = backend.create_folder(&path, &name).await;
    let outcome = store
        .with_state(|browser| browser.finish_create_folder(result))
        .unwrap_or(Outcome::Stale);
    after_mutation(store, backend, host, outcome).await;
    outcome
}

/// Delete `target` after the user confirms.
pub async fn delete_item<S, B, H>(store: &S, backend: &B, host: &H, target: ContextTarget) -> Outcome
where
    S: BrowserStore<B::File>,
    B: Backend,
    H: Host,
{
    store.with_state(|browser| browser.close_context_menu());
    if !host.confirm(&target.delete_prompt()) {
        return Outcome::Cancelled;
    }
    log::info!("Deleting {} /{}", target.kind.label(), target.path);

    let result = backend.delete(&target.path).await;
    let outcome = store
        .with_state(|browser| browser.finish_delete(&target, result))
        .unwrap_or(Outcome::Stale);
    after_mutation(store, backend, host, outcome).await;
    outcome
}

/// Send the browser to the download URL of `target` (files only).
pub fn download_item<S, B, H>(store: &S, backend: &B, host: &H, target: &ContextTarget)
where
    S: BrowserStore<B::File>,
    B: Backend,
    H: Host,
{
    if let Some(path) = store.with_state(|browser| browser.begin_download(target)).flatten() {
        host.redirect(&backend.download_url(&path));
    }
}

async fn after_mutation<S, B, H>(store: &S, backend: &B, host: &H, outcome: Outcome)
where
    S: BrowserStore<B::File>,
    B: Backend,
    H: Host,
{
    match outcome {
        Outcome::Done => {
            refresh(store, backend, host).await;
            refresh_storage(store, backend, host).await;
        }
        Outcome::AuthRequired => host.redirect(LOGIN_ROUTE),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::core::browser::FileBrowser;
    use crate::core::listing::ListingState;
    use crate::core::mock::{Call, MockBackend, RecordingHost};
    use crate::models::{Entry, ItemKind, PendingFile, Severity};

    type Store = RefCell<FileBrowser<()>>;

    fn store() -> Store {
        RefCell::new(FileBrowser::new())
    }

    fn pending(name: &str) -> PendingFile<()> {
        PendingFile {
            name: name.to_string(),
            relative_path: None,
            size: 4,
            handle: (),
        }
    }

    fn backend() -> MockBackend {
        let backend = MockBackend::default();
        backend.add_dir("", vec![Entry::folder("Documents", "m"), Entry::file("a.txt", 1536, "m")]);
        backend.add_dir("Documents", vec![Entry::file("cv.pdf", 10, "m")]);
        backend.add_dir("Empty", vec![]);
        backend
    }

    fn path(raw: &str) -> DirectoryPath {
        DirectoryPath::new(raw)
    }

    #[tokio::test]
    async fn test_navigate_pushes_history_on_success() {
        let (store, backend, host) = (store(), backend(), RecordingHost::default());

        let outcome = navigate(&store, &backend, &host, path("Documents"), HistoryMode::Push).await;
        assert_eq!(outcome, Outcome::Done);
        assert_eq!(host.pushed(), vec!["Documents".to_string()]);
        assert_eq!(store.borrow().rows()[0].path.as_str(), "Documents/cv.pdf");
    }

    #[tokio::test]
    async fn test_initial_navigation_replaces_history() {
        let (store, backend, host) = (store(), backend(), RecordingHost::default());
        navigate(&store, &backend, &host, path(""), HistoryMode::Replace).await;
        assert!(host.pushed().is_empty());
        assert_eq!(host.replaced(), vec![String::new()]);
    }

    #[tokio::test]
    async fn test_failed_navigation_rolls_back_without_history() {
        let (store, backend, host) = (store(), backend(), RecordingHost::default());
        navigate(&store, &backend, &host, path("Documents"), HistoryMode::Push).await;

        let outcome = navigate(&store, &backend, &host, path("missing"), HistoryMode::Push).await;
        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(host.pushed(), vec!["Documents".to_string()]);
        assert!(host.replaced().is_empty());

        let browser = store.borrow();
        assert_eq!(browser.current_path().as_str(), "Documents");
        assert!(matches!(browser.listing(), ListingState::Failed(_)));
    }

    #[tokio::test]
    async fn test_failed_popstate_navigation_restores_url() {
        let (store, backend, host) = (store(), backend(), RecordingHost::default());
        navigate(&store, &backend, &host, path("Documents"), HistoryMode::Push).await;

        let outcome = navigate(&store, &backend, &host, path("missing"), HistoryMode::Skip).await;
        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(host.pushed(), vec!["Documents".to_string()]);
        assert_eq!(host.replaced(), vec!["Documents".to_string()]);
        assert_eq!(store.borrow().current_path().as_str(), "Documents");
    }

    #[tokio::test]
    async fn test_failed_initial_navigation_restores_root_url() {
        let (store, backend, host) = (store(), backend(), RecordingHost::default());

        let outcome = navigate(&store, &backend, &host, path("gone/away"), HistoryMode::Replace).await;
        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(host.replaced(), vec![String::new()]);
        assert!(store.borrow().current_path().is_root());
    }

    #[tokio::test]
    async fn test_empty_listing_renders_placeholder_only() {
        let (store, backend, host) = (store(), backend(), RecordingHost::default());
        navigate(&store, &backend, &host, path("Empty"), HistoryMode::Push).await;
        assert_eq!(store.borrow().listing(), &ListingState::Empty);
        assert!(store.borrow().rows().is_empty());
    }

    #[tokio::test]
    async fn test_popstate_navigation_skips_history() {
        let (store, backend, host) = (store(), backend(), RecordingHost::default());
        navigate(&store, &backend, &host, path("Documents"), HistoryMode::Skip).await;
        assert!(host.pushed().is_empty());
        assert_eq!(store.borrow().current_path().as_str(), "Documents");
    }

    #[tokio::test]
    async fn test_empty_upload_sends_nothing() {
        let (store, backend, host) = (store(), backend(), RecordingHost::default());
        store.borrow_mut().open_upload_modal();

        let outcome = submit_upload(&store, &backend, &host).await;
        assert_eq!(outcome, Outcome::Failed);
        assert!(backend.calls().is_empty());

        let browser = store.borrow();
        let notification = browser.notification().unwrap();
        assert_eq!(notification.message, "Please select files to upload");
        assert_eq!(notification.severity, Severity::Error);
    }

    #[tokio::test]
    async fn test_upload_sends_batch_and_refreshes() {
        let (store, backend, host) = (store(), backend(), RecordingHost::default());
        navigate(&store, &backend, &host, path("Documents"), HistoryMode::Push).await;
        {
            let mut browser = store.borrow_mut();
            browser.open_upload_modal();
            browser.select_files(vec![pending("x.txt"), pending("y.txt")]);
        }

        let outcome = submit_upload(&store, &backend, &host).await;
        assert_eq!(outcome, Outcome::Done);
        assert!(backend.calls().contains(&Call::Upload {
            path: "Documents".into(),
            names: vec!["x.txt".into(), "y.txt".into()],
        }));

        let browser = store.borrow();
        assert!(!browser.is_upload_open());
        let names: Vec<String> = browser.rows().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["cv.pdf", "x.txt", "y.txt"]);
        assert!(browser.storage().is_some());
    }

    #[tokio::test]
    async fn test_upload_failure_keeps_modal() {
        let (store, backend, host) = (store(), backend(), RecordingHost::default());
        backend.fail_next(BrowserError::Backend {
            status: 500,
            message: Some("No space left".into()),
        });
        {
            let mut browser = store.borrow_mut();
            browser.open_upload_modal();
            browser.select_files(vec![pending("x.txt")]);
        }

        assert_eq!(submit_upload(&store, &backend, &host).await, Outcome::Failed);
        let browser = store.borrow();
        assert!(browser.is_upload_open());
        assert_eq!(browser.selection().len(), 1);
        assert_eq!(browser.notification().unwrap().message, "No space left");
    }

    #[tokio::test]
    async fn test_blank_folder_name_sends_nothing() {
        let (store, backend, host) = (store(), backend(), RecordingHost::default());
        store.borrow_mut().open_folder_modal();

        assert_eq!(create_folder(&store, &backend, &host, "   ").await, Outcome::Failed);
        assert!(backend.calls().is_empty());
        assert!(store.borrow().is_folder_modal_open());
        assert_eq!(
            store.borrow().notification().unwrap().message,
            "Please enter a folder name"
        );
    }

    #[tokio::test]
    async fn test_create_folder_sends_trimmed_name() {
        let (store, backend, host) = (store(), backend(), RecordingHost::default());
        navigate(&store, &backend, &host, path("Documents"), HistoryMode::Push).await;
        store.borrow_mut().open_folder_modal();

        let outcome = create_folder(&store, &backend, &host, "  Taxes ").await;
        assert_eq!(outcome, Outcome::Done);
        assert!(backend.calls().contains(&Call::CreateFolder {
            path: "Documents".into(),
            name: "Taxes".into(),
        }));
        assert!(!store.borrow().is_folder_modal_open());
        assert!(store.borrow().rows().iter().any(|r| r.name == "Taxes" && r.is_folder()));
    }

    #[tokio::test]
    async fn test_delete_removes_row_on_refetch() {
        let (store, backend, host) = (store(), backend(), RecordingHost::default());
        navigate(&store, &backend, &host, path(""), HistoryMode::Push).await;
        let target = ContextTarget {
            path: path("a.txt"),
            kind: ItemKind::File,
        };
        store.borrow_mut().open_context_menu(target.clone(), 5, 5);

        let outcome = delete_item(&store, &backend, &host, target).await;
        assert_eq!(outcome, Outcome::Done);
        assert_eq!(
            host.confirmations(),
            vec!["Are you sure you want to delete this file: a.txt?".to_string()]
        );

        let browser = store.borrow();
        assert!(browser.context_menu().is_none());
        assert!(browser.rows().iter().all(|r| r.name != "a.txt"));
        assert_eq!(browser.notification().unwrap().message, "File deleted successfully");
    }

    #[tokio::test]
    async fn test_declined_delete_sends_nothing() {
        let (store, backend, host) = (store(), backend(), RecordingHost::declining());
        let target = ContextTarget {
            path: path("Documents"),
            kind: ItemKind::Folder,
        };
        store.borrow_mut().open_context_menu(target.clone(), 5, 5);

        assert_eq!(delete_item(&store, &backend, &host, target).await, Outcome::Cancelled);
        assert!(backend.calls().is_empty());
        assert!(store.borrow().context_menu().is_none());
    }

    #[tokio::test]
    async fn test_unauthorized_mutation_redirects_silently() {
        let (store, backend, host) = (store(), backend(), RecordingHost::default());
        backend.fail_next(BrowserError::AuthRequired);
        let target = ContextTarget {
            path: path("a.txt"),
            kind: ItemKind::File,
        };

        let outcome = delete_item(&store, &backend, &host, target).await;
        assert_eq!(outcome, Outcome::AuthRequired);
        assert_eq!(host.redirects(), vec![LOGIN_ROUTE.to_string()]);
        assert!(store.borrow().notification().is_none());
    }

    #[tokio::test]
    async fn test_unauthorized_upload_redirects_silently() {
        let (store, backend, host) = (store(), backend(), RecordingHost::default());
        {
            let mut browser = store.borrow_mut();
            browser.open_upload_modal();
            browser.select_files(vec![pending("x.txt")]);
        }
        backend.fail_next(BrowserError::AuthRequired);

        assert_eq!(submit_upload(&store, &backend, &host).await, Outcome::AuthRequired);
        assert_eq!(host.redirects(), vec![LOGIN_ROUTE.to_string()]);

        let browser = store.borrow();
        assert!(browser.notification().is_none());
        assert!(!browser.is_uploading());
    }

    #[tokio::test]
    async fn test_unauthorized_create_folder_redirects_silently() {
        let (store, backend, host) = (store(), backend(), RecordingHost::default());
        store.borrow_mut().open_folder_modal();
        backend.fail_next(BrowserError::AuthRequired);

        let outcome = create_folder(&store, &backend, &host, "Taxes").await;
        assert_eq!(outcome, Outcome::AuthRequired);
        assert_eq!(host.redirects(), vec![LOGIN_ROUTE.to_string()]);
        assert!(store.borrow().notification().is_none());
        assert!(!backend.calls().iter().any(|call| matches!(call, Call::List(_))));
    }

    #[tokio::test]
    async fn test_unauthorized_listing_redirects() {
        let (store, backend, host) = (store(), backend(), RecordingHost::default());
        backend.fail_next(BrowserError::AuthRequired);
        navigate(&store, &backend, &host, path("Documents"), HistoryMode::Push).await;
        assert_eq!(host.redirects(), vec![LOGIN_ROUTE.to_string()]);
        assert!(host.pushed().is_empty());
    }

    #[tokio::test]
    async fn test_download_redirects_for_files_only() {
        let (store, backend, host) = (store(), backend(), RecordingHost::default());
        let folder = ContextTarget {
            path: path("Documents"),
            kind: ItemKind::Folder,
        };
        download_item(&store, &backend, &host, &folder);
        assert!(host.redirects().is_empty());

        let file = ContextTarget {
            path: path("Documents/cv 1.pdf"),
            kind: ItemKind::File,
        };
        download_item(&store, &backend, &host, &file);
        assert_eq!(host.redirects(), vec!["/download/Documents/cv%201.pdf".to_string()]);
    }

    #[tokio::test]
    async fn test_storage_failure_keeps_previous_summary() {
        let (store, backend, host) = (store(), backend(), RecordingHost::default());
        refresh_storage(&store, &backend, &host).await;
        let before = store.borrow().storage().cloned();
        assert!(before.is_some());

        backend.fail_next(BrowserError::Network("offline".into()));
        refresh_storage(&store, &backend, &host).await;
        assert_eq!(store.borrow().storage().cloned(), before);
    }
}
