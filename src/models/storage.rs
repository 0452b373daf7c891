//! Aggregate storage usage reported by the backend.

use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StorageSummary {
    pub total_size_mb: f64,
    pub file_count: u64,
}

impl StorageSummary {
    /// Sidebar footer text, e.g. `"12 files · 3.5 MB"`.
    pub fn label(&self) -> String {
        let noun = if self.file_count == 1 { "file" } else { "files" };
        format!("{} {} · {} MB", self.file_count, noun, self.total_size_mb)
    }
}
