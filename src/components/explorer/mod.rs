//! File explorer UI components.
//!
//! Components:
//! - [`Explorer`] - Main explorer view
//! - [`Sidebar`] - Quick-access folders and storage summary
//! - [`Breadcrumb`] - Clickable path segments
//! - [`FileList`] - List view of files and directories
//! - [`ContextMenu`] - Download/delete actions for one item

mod breadcrumb;
mod context_menu;
#[allow(clippy::module_inception)]
mod explorer;
mod file_list;
mod sidebar;

pub use breadcrumb::Breadcrumb;
pub use context_menu::ContextMenu;
pub use explorer::Explorer;
pub use file_list::FileList;
pub use sidebar::Sidebar;
