//! Query-string routing for browser history integration.

use serde::{Deserialize, Serialize};

use super::DirectoryPath;
use crate::config::PATH_QUERY_PARAM;

/// State stored in `history.state` for each navigation.
/// URL format: `/` for the root, `/?path=a%2Fb` otherwise.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationHistoryEntry {
    pub path: DirectoryPath,
}

impl NavigationHistoryEntry {
    pub fn new(path: DirectoryPath) -> Self {
        Self { path }
    }

    /// Page URL that reopens this directory.
    pub fn to_url(&self) -> String {
        if self.path.is_root() {
            "/".to_string()
        } else {
            format!(
                "/?{}={}",
                PATH_QUERY_PARAM,
                urlencoding::encode(self.path.as_str())
            )
        }
    }

    /// Parse a `location.search` string (with or without the leading `?`).
    ///
    /// Missing or undecodable values fall back to the root.
    pub fn from_query(search: &str) -> Self {
        let path = search
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == PATH_QUERY_PARAM)
            .and_then(|(_, value)| {
                urlencoding::decode(&value.replace('+', " "))
                    .map(|decoded| decoded.into_owned())
                    .ok()
            })
            .map(|value| DirectoryPath::new(&value))
            .unwrap_or_default();
        Self { path }
    }
}
