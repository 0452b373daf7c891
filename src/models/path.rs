//! Slash-delimited relative paths into the remote file tree.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Relative path of a folder (or item) on the backend.
///
/// The empty string is the root. A non-root path never starts or ends with
/// `/` and never contains empty segments; segment names are otherwise opaque.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct DirectoryPath(String);

impl DirectoryPath {
    /// The root directory.
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Build a path from raw input, dropping empty segments.
    ///
    /// `"/a//b/"` becomes `"a/b"`; `""` and `"/"` become the root.
    pub fn new(raw: &str) -> Self {
        let joined = raw
            .split('/')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("/");
        Self(joined)
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path components from the root down.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    /// First component, or `None` at the root.
    pub fn first_segment(&self) -> Option<&str> {
        self.segments().next()
    }

    /// Final component (the item's own name), empty at the root.
    pub fn name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or_default()
    }

    /// Child path `self/name`.
    pub fn join(&self, name: &str) -> Self {
        if self.is_root() {
            Self::new(name)
        } else {
            Self::new(&format!("{}/{}", self.0, name))
        }
    }

    /// The path made of the first `depth` components.
    pub fn prefix(&self, depth: usize) -> Self {
        Self(self.segments().take(depth).collect::<Vec<_>>().join("/"))
    }

    /// Percent-escape each segment for embedding in a URL path.
    pub fn url_escaped(&self) -> String {
        self.segments()
            .map(|s| urlencoding::encode(s).into_owned())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl From<String> for DirectoryPath {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<DirectoryPath> for String {
    fn from(path: DirectoryPath) -> Self {
        path.0
    }
}

impl fmt::Display for DirectoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
