//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the sidebar header.
pub const APP_NAME: &str = "FileDeck";

/// Label of the root breadcrumb segment and the root sidebar entry.
pub const ROOT_LABEL: &str = "My Files";

// =============================================================================
// Backend API
// =============================================================================

/// Base URL prepended to every endpoint. Empty means same origin.
pub const API_BASE_URL: &str = "";

/// Backend endpoint paths (relative to [`API_BASE_URL`]).
pub mod endpoints {
    /// Directory listing, followed by `/{path}`.
    pub const BROWSE: &str = "/browse";
    /// Multipart upload.
    pub const UPLOAD: &str = "/upload";
    /// JSON folder creation.
    pub const CREATE_FOLDER: &str = "/create-folder";
    /// Item deletion, followed by `/{path}`.
    pub const DELETE: &str = "/delete";
    /// File download, followed by `/{path}`.
    pub const DOWNLOAD: &str = "/download";
    /// Aggregate storage usage.
    pub const STORAGE_INFO: &str = "/storage-info";
}

/// Route the browser is sent to when the backend answers `401`.
pub const LOGIN_ROUTE: &str = "/login";

/// Multipart field carrying each uploaded file.
pub const UPLOAD_FILES_FIELD: &str = "files";

/// Multipart field carrying the target directory.
pub const UPLOAD_PATH_FIELD: &str = "path";

// =============================================================================
// Navigation
// =============================================================================

/// Query parameter holding the current directory in the page URL.
pub const PATH_QUERY_PARAM: &str = "path";

/// Quick-access folders shown in the sidebar below the root entry.
pub const QUICK_FOLDERS: &[&str] = &["Documents", "Pictures", "Videos", "Downloads"];

// =============================================================================
// Notifications
// =============================================================================

/// How long a notification stays visible, in milliseconds.
pub const NOTIFICATION_DURATION_MS: u32 = 3000;

// =============================================================================
// Logging
// =============================================================================

/// Maximum level forwarded to the browser console. Release builds drop debug output.
pub const LOG_LEVEL: log::LevelFilter = if cfg!(debug_assertions) {
    log::LevelFilter::Debug
} else {
    log::LevelFilter::Info
};

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
