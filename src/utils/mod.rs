//! Utility modules for formatting, DOM access and logging.
//!
//! Provides:
//! - [`format`] - Human-readable sizes and counts
//! - [`dom`] - Window, history and file-input helpers
//! - [`logger`] - Console backend for the `log` facade

pub mod dom;
pub mod format;
pub mod logger;
