//! Breadcrumb trail for the current directory.

use crate::config::ROOT_LABEL;
use crate::models::DirectoryPath;

/// One breadcrumb segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    /// Navigation target; `None` for the last (current) segment.
    pub target: Option<DirectoryPath>,
}

/// Root label followed by one segment per path component.
///
/// Every segment except the last links to its own prefix of `path`.
pub fn breadcrumb(path: &DirectoryPath) -> Vec<Crumb> {
    let segments: Vec<&str> = path.segments().collect();
    let last = segments.len();

    std::iter::once(ROOT_LABEL)
        .chain(segments.iter().copied())
        .enumerate()
        .map(|(depth, label)| Crumb {
            label: label.to_string(),
            target: (depth < last).then(|| path.prefix(depth)),
        })
        .collect()
}
