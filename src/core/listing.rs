//! Listing view model.
//!
//! Turns backend entries into rows the file list renders, so the rendering
//! rules (paths, icons, size text) are testable without a DOM.

use crate::models::{DirectoryPath, Entry, ItemKind};

/// What the listing area currently shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListingState {
    /// Request in flight.
    Loading,
    /// At least one entry.
    Rows(Vec<Entry>),
    /// The folder has no entries.
    Empty,
    /// The request failed; message for the inline error placeholder.
    Failed(String),
}

impl ListingState {
    /// Build the state for a successful response.
    ///
    /// Never yields `Rows` with an empty vector.
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        if entries.is_empty() {
            Self::Empty
        } else {
            Self::Rows(entries)
        }
    }

    /// Rows for the entries listed under `dir` (empty unless `Rows`).
    pub fn rows(&self, dir: &DirectoryPath) -> Vec<ListingRow> {
        match self {
            Self::Rows(entries) => entries.iter().map(|e| ListingRow::new(dir, e)).collect(),
            _ => Vec::new(),
        }
    }
}

/// One rendered row of the file list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingRow {
    pub name: String,
    /// Full path of the item (`dir/name`).
    pub path: DirectoryPath,
    pub kind: ItemKind,
    pub size: String,
    pub modified: String,
}

impl ListingRow {
    fn new(dir: &DirectoryPath, entry: &Entry) -> Self {
        Self {
            name: entry.name.clone(),
            path: dir.join(&entry.name),
            kind: ItemKind::from_is_dir(entry.is_directory),
            size: entry.size_label(),
            modified: entry.modified_at.clone(),
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind == ItemKind::Folder
    }
}
