//! Error types for profile store and validation

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing the profile record
///
/// These are never client-correctable; callers report them as server failures.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read the data file
    #[error("Failed to read file {path}: {source}")]
    ReadFailed {
        /// Path to the file
        path: PathBuf,
        /// Source error
        source: std::io::Error,
    },

    /// Failed to write the temporary file
    #[error("Failed to write file {path}: {source}")]
    WriteFailed {
        /// Path to the file
        path: PathBuf,
        /// Source error
        source: std::io::Error,
    },

    /// Failed to move the temporary file over the target
    #[error("Atomic write failed: temp file at {temp_path}, target at {target_path}: {source}")]
    AtomicWriteFailed {
        /// Path to the temporary file
        temp_path: PathBuf,
        /// Path to the target file
        target_path: PathBuf,
        /// Source error
        source: std::io::Error,
    },

    /// Failed to create the directory holding the data file
    #[error("Failed to create directory {path}: {source}")]
    DirectoryCreationFailed {
        /// Path to the directory
        path: PathBuf,
        /// Source error
        source: std::io::Error,
    },

    /// Stored content is not a valid profile document
    #[error("Failed to parse profile at {path}: {source}")]
    ParseFailed {
        /// Path to the file
        path: PathBuf,
        /// Source error
        source: serde_json::Error,
    },

    /// Profile could not be serialized
    #[error("Failed to serialize profile: {0}")]
    SerializeFailed(#[from] serde_json::Error),
}

impl StoreError {
    /// Create a read error
    pub fn read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a write error
    pub fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create an atomic write error
    pub fn atomic_write_failed(
        temp: impl Into<PathBuf>,
        target: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::AtomicWriteFailed {
            temp_path: temp.into(),
            target_path: target.into(),
            source,
        }
    }

    /// Create a parse error
    pub fn parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ParseFailed {
            path: path.into(),
            source,
        }
    }
}

/// Field-level validation failures, keyed by field name
///
/// Serializes as a plain JSON object (`{"name": "..."}`), ordered by field
/// name. An empty set means the candidate is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    /// Create an empty error set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `field`, replacing any earlier message
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    /// True when no field failed
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether `field` failed
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Message recorded for `field`
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Failing field names in order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Profile validation failed:")?;
        for (field, message) in &self.0 {
            write!(f, " {field}: {message};")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
