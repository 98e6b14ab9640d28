//! Source abstraction for picker tabs.

use async_trait::async_trait;
use shelfpick_api_types::FileItem;

/// A place the picker can list files from.
///
/// Implementations hide where the files live (site library, cloud
/// drive, ...) behind one listing operation. Callers must keep the two
/// result shapes apart: `None` means the listing failed, `Some(vec![])`
/// means the source genuinely has no matching items.
#[async_trait]
pub trait FileSource: Send + Sync {
    /// Returns the source name, used for logs and diagnostics.
    fn name(&self) -> &str;

    /// Lists the items of `library`, optionally scoped to a folder and
    /// filtered by a comma-separated accepted-extensions string.
    async fn list_files(
        &self,
        library: &str,
        folder_path: Option<&str>,
        accepts: Option<&str>,
    ) -> Option<Vec<FileItem>>;
}
