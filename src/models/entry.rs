//! Directory listing entries.

use crate::utils::format::format_file_size;

/// Size reported for a file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntrySize {
    /// Raw byte count, formatted client-side.
    Bytes(u64),
    /// Label already formatted by the backend (e.g. "1.5 KB").
    Label(String),
}

impl EntrySize {
    pub fn display(&self) -> String {
        match self {
            Self::Bytes(bytes) => format_file_size(*bytes),
            Self::Label(label) => label.clone(),
        }
    }
}

/// One row of a directory listing.
///
/// Rebuilt from every listing response; never edited in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub is_directory: bool,
    /// `None` for directories and for files the backend did not size.
    pub size: Option<EntrySize>,
    /// Modification time exactly as the backend formatted it.
    pub modified_at: String,
}

#[cfg(test)]
impl Entry {
    pub fn file(name: impl Into<String>, bytes: u64, modified_at: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_directory: false,
            size: Some(EntrySize::Bytes(bytes)),
            modified_at: modified_at.into(),
        }
    }

    pub fn folder(name: impl Into<String>, modified_at: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_directory: true,
            size: None,
            modified_at: modified_at.into(),
        }
    }
}

impl Entry {
    /// Size column text: `—` for folders and unsized files.
    pub fn size_label(&self) -> String {
        match (&self.size, self.is_directory) {
            (Some(size), false) => size.display(),
            _ => "—".to_string(),
        }
    }
}
