//! Files queued in the upload modal.

/// A file picked for upload, generic over the platform file handle.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingFile<F> {
    pub name: String,
    /// Path relative to the picked folder (folder uploads only).
    pub relative_path: Option<String>,
    pub size: u64,
    pub handle: F,
}

impl<F> PendingFile<F> {
    /// Name sent as the multipart filename; keeps the folder structure.
    pub fn upload_name(&self) -> &str {
        self.relative_path.as_deref().unwrap_or(&self.name)
    }
}

/// Whether the selection came from the file or the folder picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadKind {
    Files,
    Folder,
}

impl UploadKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Files => "Multiple Files",
            Self::Folder => "Folder Upload",
        }
    }
}

/// Ordered buffer of files awaiting upload.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionBuffer<F> {
    files: Vec<PendingFile<F>>,
}

impl<F> Default for SelectionBuffer<F> {
    fn default() -> Self {
        Self { files: Vec::new() }
    }
}

impl<F> SelectionBuffer<F> {
    /// Replace the whole buffer with a fresh picker result.
    pub fn replace(&mut self, files: Vec<PendingFile<F>>) {
        self.files = files;
    }

    /// Remove the item at `index`, keeping the others in order.
    pub fn remove(&mut self, index: usize) -> Option<PendingFile<F>> {
        (index < self.files.len()).then(|| self.files.remove(index))
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn files(&self) -> &[PendingFile<F>] {
        &self.files
    }

    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }

    pub fn kind(&self) -> UploadKind {
        if self.files.iter().any(|f| f.relative_path.is_some()) {
            UploadKind::Folder
        } else {
            UploadKind::Files
        }
    }
}
