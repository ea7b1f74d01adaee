//! Profile store core implementation

use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use crate::error::StoreError;
use crate::model::Profile;
use crate::storage::FileStorage;

/// Profile store configuration
#[derive(Debug, Clone)]
pub struct ProfileStoreConfig {
    /// Location of the JSON data file
    pub data_file: PathBuf,
}

impl Default for ProfileStoreConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("profileData.json"),
        }
    }
}

impl ProfileStoreConfig {
    /// Create a new configuration for the given data file
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }
}

/// Store for the one profile record of the one user
///
/// The data file is the single source of truth: nothing is cached in memory,
/// every `read` goes to disk. Writers are not serialized; concurrent writes
/// race and the last completed rename wins.
#[derive(Debug)]
pub struct ProfileStore {
    config: ProfileStoreConfig,
    storage: FileStorage,
}

impl ProfileStore {
    /// Create a store over the configured data file
    ///
    /// Nothing touches the disk until [`ProfileStore::initialize`] or another
    /// operation is called.
    pub fn new(config: ProfileStoreConfig) -> Self {
        Self {
            config,
            storage: FileStorage,
        }
    }

    /// Location of the data file
    pub fn path(&self) -> &Path {
        &self.config.data_file
    }

    /// Write the seed record if no record exists yet
    ///
    /// Returns `true` when the seed was written. Calling this again is a no-op.
    pub async fn initialize(&self) -> Result<bool, StoreError> {
        let path = self.path();

        if self.storage.exists(path).await? {
            debug!(path = ?path, "Profile data file already present");
            return Ok(false);
        }

        self.storage.ensure_parent_dir(path).await?;
        self.persist(&Profile::seed()).await?;

        info!(path = ?path, "Created profile data file with default record");
        Ok(true)
    }

    /// Load the current record
    pub async fn read(&self) -> Result<Profile, StoreError> {
        let path = self.path();
        debug!(path = ?path, "Loading profile");

        let json = self.storage.read_to_string(path).await.inspect_err(|e| {
            error!(error = %e, "Failed to read profile data file");
        })?;

        serde_json::from_str(&json)
            .map_err(|e| StoreError::parse_failed(path, e))
            .inspect_err(|e| error!(error = %e, "Failed to parse profile data file"))
    }

    /// Replace the stored record wholesale
    ///
    /// The caller is responsible for validating `profile` first.
    pub async fn write(&self, profile: &Profile) -> Result<(), StoreError> {
        info!(name = %profile.name, "Saving profile");
        self.persist(profile).await
    }

    /// Replace the stored record with the empty placeholder and return it
    pub async fn reset(&self) -> Result<Profile, StoreError> {
        info!("Resetting profile to empty record");
        let empty = Profile::empty();
        self.persist(&empty).await?;
        Ok(empty)
    }

    async fn persist(&self, profile: &Profile) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(profile)?;

        self.storage
            .write_atomic(self.path(), &json)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to write profile data file"))?;

        debug!(path = ?self.path(), "Profile saved successfully");
        Ok(())
    }
}
