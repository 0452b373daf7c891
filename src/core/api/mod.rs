//! Backend API binding.
//!
//! [`Backend`] is the seam between the browsing workflow and the remote
//! file service. [`HttpBackend`] talks to the real server; tests supply a
//! scripted implementation.

mod http;
mod wire;

pub use http::HttpBackend;

use crate::core::error::BrowserError;
use crate::models::{DirectoryPath, Entry, PendingFile, StorageSummary};

/// Successful mutation response.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ack {
    /// Human-readable confirmation, when the server sent one.
    pub message: Option<String>,
}

/// Remote file service operations.
///
/// Every call resolves to a single result; there are no retries and no
/// client-side timeouts.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// Platform handle of a file picked for upload.
    type File: Clone;

    /// Entries of the directory at `path`.
    async fn list(&self, path: &DirectoryPath) -> Result<Vec<Entry>, BrowserError>;

    /// Upload `files` into `path` as one multipart batch.
    async fn upload(
        &self,
        path: &DirectoryPath,
        files: &[PendingFile<Self::File>],
    ) -> Result<Ack, BrowserError>;

    /// Create folder `name` inside `path`.
    async fn create_folder(&self, path: &DirectoryPath, name: &str) -> Result<Ack, BrowserError>;

    /// Delete the file or folder at `path`.
    async fn delete(&self, path: &DirectoryPath) -> Result<Ack, BrowserError>;

    async fn storage_info(&self) -> Result<StorageSummary, BrowserError>;

    /// URL the browser is sent to for downloading the file at `path`.
    fn download_url(&self, path: &DirectoryPath) -> String;
}
