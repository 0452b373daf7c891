//! Core browsing logic, independent of the DOM.
//!
//! This module provides:
//! - [`FileBrowser`] state controller and the [`BrowserStore`] seam
//! - [`api::Backend`] trait with the [`HttpBackend`] binding
//! - [`workflow`] functions driving each user action end to end
//! - [`breadcrumb`] and [`listing`] view models

pub mod api;
pub mod breadcrumb;
mod browser;
pub mod error;
mod host;
pub mod listing;
#[cfg(test)]
mod mock;
pub mod workflow;

pub use api::HttpBackend;
pub use browser::{BrowserStore, FileBrowser};
pub use host::WebHost;
