//! File-based storage operations for the profile record

use std::path::{Path, PathBuf};
use tokio::fs as async_fs;
use tracing::debug;

use crate::error::StoreError;

/// Extension appended to the data file name for the temporary write target
const TEMP_EXTENSION: &str = "tmp";

/// File-based storage; every write goes through a sibling temp file
#[derive(Debug, Default)]
pub struct FileStorage;

impl FileStorage {
    /// Create the directory that will hold `path`, if any
    pub async fn ensure_parent_dir(&self, path: &Path) -> Result<(), StoreError> {
        let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
            return Ok(());
        };

        async_fs::create_dir_all(parent)
            .await
            .map_err(|source| StoreError::DirectoryCreationFailed {
                path: parent.to_path_buf(),
                source,
            })
    }

    /// Write content to a file atomically
    ///
    /// # Error Recovery
    ///
    /// Uses atomic write pattern:
    /// 1. Write to temporary file next to the target
    /// 2. Rename temp file to target
    /// 3. Original file is preserved if either step fails
    pub async fn write_atomic(&self, path: &Path, content: &str) -> Result<(), StoreError> {
        debug!(path = ?path, "Writing file atomically");

        let temp_path = Self::temp_path(path);

        async_fs::write(&temp_path, content)
            .await
            .map_err(|e| StoreError::write_failed(&temp_path, e))?;

        if let Err(e) = async_fs::rename(&temp_path, path).await {
            // Best effort: the stale temp file must not linger next to the record.
            if let Err(cleanup) = async_fs::remove_file(&temp_path).await {
                debug!(path = ?temp_path, error = %cleanup, "Failed to remove temp file");
            }
            return Err(StoreError::atomic_write_failed(&temp_path, path, e));
        }

        debug!(path = ?path, "File written successfully");
        Ok(())
    }

    /// Read file content as string
    pub async fn read_to_string(&self, path: &Path) -> Result<String, StoreError> {
        debug!(path = ?path, "Reading file");

        async_fs::read_to_string(path)
            .await
            .map_err(|e| StoreError::read_failed(path, e))
    }

    /// Check if a file exists
    pub async fn exists(&self, path: &Path) -> Result<bool, StoreError> {
        async_fs::try_exists(path)
            .await
            .map_err(|e| StoreError::read_failed(path, e))
    }

    fn temp_path(path: &Path) -> PathBuf {
        let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".");
        name.push(TEMP_EXTENSION);
        path.with_file_name(name)
    }
}
