//! Shared file-record contract between listing sources and picker consumers.

use serde::{Deserialize, Serialize};

/// One normalized file or folder returned by a listing source.
///
/// Records are constructed fresh per query and never mutated afterwards;
/// there is no caching or deduplication across calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileItem {
    /// Leaf display name of the file or folder.
    pub name: String,
    /// Document-type icon identifier.
    pub icon: String,
    /// Server-relative locator of the item within its container.
    pub path: String,
    /// Fully-qualified locator: container root origin + `path`.
    pub absolute_path: String,
    /// Display-ready modification timestamp.
    pub modified: String,
    /// Display name of the last modifying principal.
    pub modified_by: String,
    /// Raw size value as returned by the source, in bytes.
    pub size: String,
    /// File extension string as returned by the source.
    #[serde(rename = "type")]
    pub file_type: String,
    /// True iff the row-level object-type discriminator marks a container.
    pub is_folder: bool,
}
