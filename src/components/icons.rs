//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuCheck as Success, LuChevronRight as ChevronRight, LuDownload as Download,
        LuEllipsisVertical as More, LuFile as File, LuFileText as Documents, LuFilm as Videos,
        LuFolder as Folder, LuFolderPlus as FolderPlus, LuHardDrive as Storage,
        LuHouse as Home, LuImage as Pictures, LuInfo as Error, LuTrash2 as Trash,
        LuUpload as Upload, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsCheckLg as Success, BsChevronRight as ChevronRight, BsDownload as Download,
        BsFileEarmark as File, BsFileEarmarkText as Documents, BsFilm as Videos,
        BsFolderFill as Folder, BsFolderPlus as FolderPlus, BsHddFill as Storage,
        BsHouseFill as Home, BsImage as Pictures, BsInfoCircle as Error,
        BsThreeDotsVertical as More, BsTrash as Trash, BsUpload as Upload, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(HOME, Home);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(DOCUMENTS, Documents);
themed_icon!(PICTURES, Pictures);
themed_icon!(VIDEOS, Videos);
themed_icon!(UPLOAD, Upload);
themed_icon!(FOLDER_PLUS, FolderPlus);
themed_icon!(DOWNLOAD, Download);
themed_icon!(TRASH, Trash);
themed_icon!(MORE, More);
themed_icon!(CLOSE, Close);
themed_icon!(STORAGE, Storage);
themed_icon!(SUCCESS, Success);
themed_icon!(ERROR, Error);

/// Sidebar icon for a quick-access folder.
pub fn quick_folder(name: &str) -> Icon {
    match name {
        "Documents" => DOCUMENTS,
        "Pictures" => PICTURES,
        "Videos" => VIDEOS,
        "Downloads" => DOWNLOAD,
        _ => FOLDER,
    }
}
