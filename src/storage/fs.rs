//! Filesystem storage backend.

use std::path::PathBuf;

use crate::error::{PageMirrorError, Result};
use crate::storage::Storage;

/// Storage backend that writes mirrored resources to the local filesystem.
///
/// The workspace-relative `key` is joined with the base directory to form
/// the final path; workspace directories materialize on the first write.
/// Point the base directory at whatever the HTTP shell serves as static
/// content.
///
/// # Example
///
/// ```rust,no_run
/// use page_mirror::FsStorage;
///
/// let storage = FsStorage::new("static/resources");
/// ```
pub struct FsStorage {
    base_dir: PathBuf,
}

impl FsStorage {
    /// Create a new `FsStorage` rooted at the given directory.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

impl Storage for FsStorage {
    async fn put(&self, key: &str, content: &[u8], _content_type: &str) -> Result<()> {
        let path = self.base_dir.join(key);

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| PageMirrorError::StorageUpload(Box::new(e)))?;
        }

        tokio::fs::write(&path, content)
            .await
            .map_err(|e| PageMirrorError::StorageUpload(Box::new(e)))?;

        tracing::debug!("Wrote {} bytes to {}", content.len(), path.display());
        Ok(())
    }
}
