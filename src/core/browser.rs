//! File browser state controller.
//!
//! [`FileBrowser`] owns everything the UI shows: the current directory, the
//! listing, the upload selection, the open modal or context menu and the
//! notification. It has no DOM or network access. The async workflows in
//! [`crate::core::workflow`] drive it in two steps (begin a request, then apply
//! its result), so the UI and the tests share the same transitions.

use std::cell::RefCell;

use super::api::Ack;
use super::breadcrumb::{Crumb, breadcrumb};
use super::error::{BrowserError, ValidationError};
use super::listing::{ListingRow, ListingState};
use crate::models::{
    ContextMenu, ContextTarget, DirectoryPath, Entry, ItemKind, Notification, Notifier,
    PendingFile, SelectionBuffer, Severity, StorageSummary, UploadKind,
};
use crate::utils::format::format_file_count;

/// Identifies one listing request; only the newest may update the view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingTicket {
    seq: u64,
    pub path: DirectoryPath,
}

/// Result of applying a response to the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The request succeeded and the state was updated.
    Done,
    /// The failure was shown to the user.
    Failed,
    /// The session expired; the caller must redirect to login.
    AuthRequired,
    /// A newer request superseded this one; nothing changed.
    Stale,
    /// The user declined the confirmation; nothing was sent.
    Cancelled,
}

/// Everything needed to send one upload request.
///
/// `session` ties the batch to the modal it was submitted from.
#[derive(Clone, Debug)]
pub struct UploadBatch<F> {
    session: u64,
    pub path: DirectoryPath,
    pub files: Vec<PendingFile<F>>,
}

/// Upload modal state.
#[derive(Clone, Copy, Debug, Default)]
struct UploadModal {
    open: bool,
    in_flight: bool,
}

#[derive(Clone, Debug)]
pub struct FileBrowser<F> {
    current_path: DirectoryPath,
    /// Last path whose listing succeeded; navigation failures roll back here.
    listed_path: DirectoryPath,
    listing: ListingState,
    latest_ticket: u64,
    selection: SelectionBuffer<F>,
    upload: UploadModal,
    /// Bumped each time the upload modal opens.
    upload_session: u64,
    folder_modal_open: bool,
    context_menu: Option<ContextMenu>,
    notifier: Notifier,
    storage: Option<StorageSummary>,
}

impl<F> Default for FileBrowser<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> FileBrowser<F> {
    pub fn new() -> Self {
        Self {
            current_path: DirectoryPath::root(),
            listed_path: DirectoryPath::root(),
            listing: ListingState::Loading,
            latest_ticket: 0,
            selection: SelectionBuffer::default(),
            upload: UploadModal::default(),
            upload_session: 0,
            folder_modal_open: false,
            context_menu: None,
            notifier: Notifier::default(),
            storage: None,
        }
    }

    // ------------------------------------------------------------------
    // Navigation & listing
    // ------------------------------------------------------------------

    pub fn current_path(&self) -> &DirectoryPath {
        &self.current_path
    }

    pub fn listing(&self) -> &ListingState {
        &self.listing
    }

    pub fn breadcrumb(&self) -> Vec<Crumb> {
        breadcrumb(&self.current_path)
    }

    pub fn rows(&self) -> Vec<ListingRow> {
        self.listing.rows(&self.current_path)
    }

    /// Move to `path` and show the loading placeholder.
    pub fn begin_navigation(&mut self, path: DirectoryPath) -> ListingTicket {
        self.latest_ticket += 1;
        self.current_path = path.clone();
        self.listing = ListingState::Loading;
        ListingTicket {
            seq: self.latest_ticket,
            path,
        }
    }

    /// Apply a listing response.
    ///
    /// On failure the current path rolls back to the last listed one and the
    /// listing area shows the error.
    pub fn finish_navigation(
        &mut self,
        ticket: ListingTicket,
        result: Result<Vec<Entry>, BrowserError>,
    ) -> Outcome {
        if ticket.seq != self.latest_ticket {
            log::debug!("Dropping stale listing for /{}", ticket.path);
            return Outcome::Stale;
        }

        match result {
            Ok(entries) => {
                self.listing = ListingState::from_entries(entries);
                self.listed_path = ticket.path;
                Outcome::Done
            }
            Err(BrowserError::AuthRequired) => {
                self.current_path = self.listed_path.clone();
                Outcome::AuthRequired
            }
            Err(err) => {
                log::warn!("Listing /{} failed: {}", ticket.path, err);
                self.current_path = self.listed_path.clone();
                self.listing = ListingState::Failed(listing_error(&err));
                Outcome::Failed
            }
        }
    }

    // ------------------------------------------------------------------
    // Upload workflow
    // ------------------------------------------------------------------

    pub fn is_upload_open(&self) -> bool {
        self.upload.open
    }

    pub fn is_uploading(&self) -> bool {
        self.upload.in_flight
    }

    pub fn selection(&self) -> &SelectionBuffer<F> {
        &self.selection
    }

    /// Open the upload modal with an empty selection.
    pub fn open_upload_modal(&mut self) {
        self.upload_session += 1;
        self.selection.clear();
        self.upload = UploadModal {
            open: true,
            in_flight: false,
        };
    }

    /// Close the upload modal and drop the selection.
    pub fn close_upload_modal(&mut self) {
        self.selection.clear();
        self.upload = UploadModal::default();
    }

    /// Replace the selection with a new picker result.
    pub fn select_files(&mut self, files: Vec<PendingFile<F>>) {
        log::debug!("Selected {} file(s)", files.len());
        self.selection.replace(files);
    }

    pub fn remove_selected(&mut self, index: usize) {
        self.selection.remove(index);
    }

    pub fn can_submit_upload(&self) -> bool {
        !self.selection.is_empty() && !self.upload.in_flight
    }

    pub fn upload_kind(&self) -> UploadKind {
        self.selection.kind()
    }

    /// Text of the submit button.
    pub fn submit_label(&self) -> String {
        let count = self.selection.len();
        if self.upload.in_flight {
            format!("Uploading {}...", format_file_count(count))
        } else if count == 0 {
            "Upload".to_string()
        } else {
            format!("Upload {} File(s)", count)
        }
    }

    /// Finish an upload request.
    ///
    /// Success closes the modal; failure keeps the modal and the selection
    /// so the user can retry. A batch from an earlier modal session is still
    /// reported but leaves the current modal and selection alone.
    pub fn finish_upload(
        &mut self,
        batch: &UploadBatch<F>,
        result: Result<Ack, BrowserError>,
    ) -> Outcome {
        let success = format!("Successfully uploaded {}", format_file_count(batch.files.len()));
        let outcome = self.settle(result, &success, "Upload failed");
        if batch.session != self.upload_session {
            log::debug!("Upload to /{} finished after its modal was closed", batch.path);
            return outcome;
        }
        self.upload.in_flight = false;
        if outcome == Outcome::Done {
            self.close_upload_modal();
        }
        outcome
    }

    // ------------------------------------------------------------------
    // Folder creation
    // ------------------------------------------------------------------

    pub fn is_folder_modal_open(&self) -> bool {
        self.folder_modal_open
    }

    pub fn open_folder_modal(&mut self) {
        self.folder_modal_open = true;
    }

    pub fn close_folder_modal(&mut self) {
        self.folder_modal_open = false;
    }

    /// Validate a folder name; returns the trimmed name and target directory.
    pub fn begin_create_folder(
        &self,
        name: &str,
    ) -> Result<(DirectoryPath, String), ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyFolderName);
        }
        Ok((self.current_path.clone(), name.to_string()))
    }

    pub fn finish_create_folder(&mut self, result: Result<Ack, BrowserError>) -> Outcome {
        let outcome = self.settle(result, "Folder created successfully", "Failed to create folder");
        if outcome == Outcome::Done {
            self.close_folder_modal();
        }
        outcome
    }

    // ------------------------------------------------------------------
    // Context menu & item actions
    // ------------------------------------------------------------------

    pub fn context_menu(&self) -> Option<&ContextMenu> {
        self.context_menu.as_ref()
    }

    pub fn context_target(&self) -> Option<&ContextTarget> {
        self.context_menu.as_ref().map(|menu| &menu.target)
    }

    /// Open the menu at `(x, y)` for `target`, replacing any open menu.
    pub fn open_context_menu(&mut self, target: ContextTarget, x: i32, y: i32) {
        self.context_menu = Some(ContextMenu { target, x, y });
    }

    pub fn close_context_menu(&mut self) {
        self.context_menu = None;
    }

    /// Close the menu and return the path to download, if `target` is a file.
    pub fn begin_download(&mut self, target: &ContextTarget) -> Option<DirectoryPath> {
        self.close_context_menu();
        match target.kind {
            ItemKind::File => {
                self.notify("Downloading file...", Severity::Success);
                Some(target.path.clone())
            }
            ItemKind::Folder => None,
        }
    }

    pub fn finish_delete(
        &mut self,
        target: &ContextTarget,
        result: Result<Ack, BrowserError>,
    ) -> Outcome {
        self.close_context_menu();
        let success = format!("{} deleted successfully", capitalize(target.kind.label()));
        self.settle(result, &success, "Delete failed")
    }

    // ------------------------------------------------------------------
    // Notifications & storage
    // ------------------------------------------------------------------

    pub fn notification(&self) -> Option<&Notification> {
        self.notifier.current()
    }

    /// Show a notification; returns its generation for the hide timer.
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.notifier.show(message, severity)
    }

    /// Report input rejected before any request was sent.
    pub fn reject(&mut self, err: ValidationError) {
        let err = BrowserError::from(err);
        log::debug!("Rejected: {}", err);
        self.notify(err.user_message("Invalid input"), Severity::Error);
    }

    pub fn expire_notification(&mut self, generation: u64) {
        self.notifier.expire(generation);
    }

    pub fn storage(&self) -> Option<&StorageSummary> {
        self.storage.as_ref()
    }

    pub fn set_storage(&mut self, summary: StorageSummary) {
        self.storage = Some(summary);
    }

    /// Notify the outcome of a mutation. Auth failures stay silent.
    fn settle(&mut self, result: Result<Ack, BrowserError>, success: &str, failure: &str) -> Outcome {
        match result {
            Ok(ack) => {
                let message = ack.message.unwrap_or_else(|| success.to_string());
                self.notify(message, Severity::Success);
                Outcome::Done
            }
            Err(BrowserError::AuthRequired) => Outcome::AuthRequired,
            Err(err) => {
                log::warn!("{}: {}", failure, err);
                self.notify(err.user_message(failure), Severity::Error);
                Outcome::Failed
            }
        }
    }
}

impl<F: Clone> FileBrowser<F> {
    /// Validate the selection and mark the upload as in flight.
    pub fn begin_upload(&mut self) -> Result<UploadBatch<F>, ValidationError> {
        if self.selection.is_empty() {
            return Err(ValidationError::EmptySelection);
        }
        self.upload.in_flight = true;
        Ok(UploadBatch {
            session: self.upload_session,
            path: self.current_path.clone(),
            files: self.selection.files().to_vec(),
        })
    }
}

fn listing_error(err: &BrowserError) -> String {
    match err {
        BrowserError::Network(msg) => format!("Error: {}", msg),
        other => format!("Failed to load files: {}", other.user_message("Unknown error")),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Shared handle to a [`FileBrowser`].
///
/// Workflows mutate the state through this trait so the same code runs on a
/// reactive signal in the app and on a plain `RefCell` in tests. Returns
/// `None` when the state is gone (e.g. the owning scope was disposed).
pub trait BrowserStore<F> {
    fn with_state<R>(&self, f: impl FnOnce(&mut FileBrowser<F>) -> R) -> Option<R>;
}

impl<F> BrowserStore<F> for RefCell<FileBrowser<F>> {
    fn with_state<R>(&self, f: impl FnOnce(&mut FileBrowser<F>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
