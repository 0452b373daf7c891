//! In-memory backend and host for workflow tests.

use std::cell::RefCell;
use std::collections::BTreeMap;

use super::api::{Ack, Backend};
use super::error::BrowserError;
use super::host::Host;
use crate::config::endpoints;
use crate::models::{
    DirectoryPath, Entry, EntrySize, NavigationHistoryEntry, PendingFile, StorageSummary,
};

/// A request the mock received.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    List(String),
    Upload { path: String, names: Vec<String> },
    CreateFolder { path: String, name: String },
    Delete(String),
    StorageInfo,
}

/// Directory tree held in memory. Mutations change what later listings see.
#[derive(Default)]
pub struct MockBackend {
    dirs: RefCell<BTreeMap<String, Vec<Entry>>>,
    calls: RefCell<Vec<Call>>,
    failure: RefCell<Option<BrowserError>>,
}

impl MockBackend {
    pub fn add_dir(&self, path: &str, entries: Vec<Entry>) {
        self.dirs.borrow_mut().insert(path.to_string(), entries);
    }

    /// Make the next call fail with `err`.
    pub fn fail_next(&self, err: BrowserError) {
        *self.failure.borrow_mut() = Some(err);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) -> Result<(), BrowserError> {
        self.calls.borrow_mut().push(call);
        match self.failure.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn parent_and_name(path: &DirectoryPath) -> (String, String) {
        let mut segments: Vec<&str> = path.segments().collect();
        let name = segments.pop().unwrap_or_default().to_string();
        (segments.join("/"), name)
    }
}

impl Backend for MockBackend {
    type File = ();

    async fn list(&self, path: &DirectoryPath) -> Result<Vec<Entry>, BrowserError> {
        self.record(Call::List(path.to_string()))?;
        self.dirs
            .borrow()
            .get(path.as_str())
            .cloned()
            .ok_or_else(|| BrowserError::Backend {
                status: 404,
                message: Some("Path not found".into()),
            })
    }

    async fn upload(&self, path: &DirectoryPath, files: &[PendingFile<()>]) -> Result<Ack, BrowserError> {
        let names: Vec<String> = files.iter().map(|f| f.upload_name().to_string()).collect();
        self.record(Call::Upload {
            path: path.to_string(),
            names,
        })?;
        let mut dirs = self.dirs.borrow_mut();
        let dir = dirs.entry(path.to_string()).or_default();
        dir.extend(files.iter().map(|f| Entry::file(f.upload_name(), f.size, "")));
        Ok(Ack::default())
    }

    async fn create_folder(&self, path: &DirectoryPath, name: &str) -> Result<Ack, BrowserError> {
        self.record(Call::CreateFolder {
            path: path.to_string(),
            name: name.to_string(),
        })?;
        let mut dirs = self.dirs.borrow_mut();
        dirs.entry(path.to_string())
            .or_default()
            .push(Entry::folder(name, ""));
        dirs.insert(path.join(name).to_string(), Vec::new());
        Ok(Ack {
            message: Some("Folder created successfully".into()),
        })
    }

    async fn delete(&self, path: &DirectoryPath) -> Result<Ack, BrowserError> {
        self.record(Call::Delete(path.to_string()))?;
        let (parent, name) = Self::parent_and_name(path);
        let mut dirs = self.dirs.borrow_mut();
        if let Some(entries) = dirs.get_mut(&parent) {
            entries.retain(|e| e.name != name);
        }
        dirs.remove(path.as_str());
        Ok(Ack::default())
    }

    async fn storage_info(&self) -> Result<StorageSummary, BrowserError> {
        self.record(Call::StorageInfo)?;
        let dirs = self.dirs.borrow();
        let files = dirs.values().flatten().filter(|e| !e.is_directory);
        let (count, bytes) = files.fold((0u64, 0u64), |(count, bytes), entry| {
            let size = match &entry.size {
                Some(EntrySize::Bytes(b)) => *b,
                _ => 0,
            };
            (count + 1, bytes + size)
        });
        Ok(StorageSummary {
            total_size_mb: bytes as f64 / (1024.0 * 1024.0),
            file_count: count,
        })
    }

    fn download_url(&self, path: &DirectoryPath) -> String {
        format!("{}/{}", endpoints::DOWNLOAD, path.url_escaped())
    }
}

/// Records every page-level effect.
pub struct RecordingHost {
    accept: bool,
    pushed: RefCell<Vec<String>>,
    replaced: RefCell<Vec<String>>,
    redirects: RefCell<Vec<String>>,
    confirmations: RefCell<Vec<String>>,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self {
            accept: true,
            pushed: RefCell::default(),
            replaced: RefCell::default(),
            redirects: RefCell::default(),
            confirmations: RefCell::default(),
        }
    }
}

impl RecordingHost {
    /// A host whose user answers "no" to every prompt.
    pub fn declining() -> Self {
        Self {
            accept: false,
            ..Self::default()
        }
    }

    pub fn pushed(&self) -> Vec<String> {
        self.pushed.borrow().clone()
    }

    pub fn replaced(&self) -> Vec<String> {
        self.replaced.borrow().clone()
    }

    pub fn redirects(&self) -> Vec<String> {
        self.redirects.borrow().clone()
    }

    pub fn confirmations(&self) -> Vec<String> {
        self.confirmations.borrow().clone()
    }
}

impl Host for RecordingHost {
    fn push_history(&self, entry: &NavigationHistoryEntry) {
        self.pushed.borrow_mut().push(entry.path.to_string());
    }

    fn replace_history(&self, entry: &NavigationHistoryEntry) {
        self.replaced.borrow_mut().push(entry.path.to_string());
    }

    fn redirect(&self, url: &str) {
        self.redirects.borrow_mut().push(url.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirmations.borrow_mut().push(message.to_string());
        self.accept
    }
}
