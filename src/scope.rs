//! Search scope filtering.

use std::collections::HashSet;

use crate::types::FileId;

/// An opaque filter restricting which files a search visits.
///
/// The searcher passes the scope through to the host's override queries
/// unchanged; inheritor search for classes is always project-wide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchScope {
    /// Every file in the project.
    Project,
    /// Only the given files.
    Files(HashSet<FileId>),
}

impl SearchScope {
    /// Build a file-restricted scope from any collection of file ids.
    pub fn files(ids: impl IntoIterator<Item = FileId>) -> Self {
        SearchScope::Files(ids.into_iter().collect())
    }

    /// Whether declarations in `file` are visible to this scope.
    pub fn contains(&self, file: FileId) -> bool {
        match self {
            SearchScope::Project => true,
            SearchScope::Files(files) => files.contains(&file),
        }
    }
}
