//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`DirectoryPath`] - Relative paths into the remote tree
//! - [`Entry`], [`EntrySize`] - Directory listing rows
//! - [`SelectionBuffer`], [`PendingFile`] - Files queued for upload
//! - [`ContextTarget`], [`ContextMenu`] - Per-item action menu
//! - [`NavigationHistoryEntry`] - Browser history state
//! - [`Notifier`] - Toast notification state

mod entry;
mod explorer;
mod notification;
mod path;
mod route;
mod selection;
mod storage;

pub use entry::{Entry, EntrySize};
pub use explorer::{ContextMenu, ContextTarget, ItemKind};
pub use notification::{Notification, Notifier, Severity};
pub use path::DirectoryPath;
pub use route::NavigationHistoryEntry;
pub use selection::{PendingFile, SelectionBuffer, UploadKind};
pub use storage::StorageSummary;
