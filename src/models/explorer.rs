//! Explorer-related data types for the file browser UI.

use super::DirectoryPath;

/// Kind of a listed item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    File,
    Folder,
}

impl ItemKind {
    pub fn from_is_dir(is_dir: bool) -> Self {
        if is_dir { Self::Folder } else { Self::File }
    }

    /// Lowercase noun used in prompts and messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Folder => "folder",
        }
    }
}

/// The item an open context menu acts on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContextTarget {
    pub path: DirectoryPath,
    pub kind: ItemKind,
}

impl ContextTarget {
    /// Confirmation prompt shown before deleting this item.
    pub fn delete_prompt(&self) -> String {
        format!(
            "Are you sure you want to delete this {}: {}?",
            self.kind.label(),
            self.path.name()
        )
    }
}

/// Open context menu: its target and the pointer position (page pixels).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContextMenu {
    pub target: ContextTarget,
    pub x: i32,
    pub y: i32,
}
