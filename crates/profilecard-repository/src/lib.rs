//! Profile storage and validation for Profile Card
//!
//! This crate holds the two components behind the profile API:
//! - A validator mapping a candidate profile to field-level errors
//! - A file-backed store for the single persisted profile record
//!
//! # Architecture
//!
//! - [`model`]: `Profile`, the lenient `ProfileDraft` and the fixed seed/empty records
//! - [`validation`]: pure field rules and the URL predicate
//! - [`storage`]: file operations with atomic writes
//! - [`repository`]: `ProfileStore` with initialize/read/write/reset
//! - [`error`]: `StoreError` and `ValidationErrors`
//!
//! The store manages exactly one record for exactly one user. There is no
//! locking: two concurrent writers race and the last rename wins.
//!
//! # Example
//!
//! ```ignore
//! use profilecard_repository::prelude::*;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let store = ProfileStore::new(ProfileStoreConfig::new("profileData.json"));
//! store.initialize().await?;
//!
//! let draft = ProfileDraft::from_json(&serde_json::json!({ "name": "Al" }));
//! let errors = validate_profile(&draft);
//! assert!(errors.contains("name"));
//!
//! let current = store.read().await?;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod model;
pub mod prelude;
pub mod repository;
pub mod storage;
pub mod validation;

pub use error::{StoreError, ValidationErrors};
pub use model::{PhotoInput, Profile, ProfileDraft};
pub use repository::{ProfileStore, ProfileStoreConfig};
pub use storage::FileStorage;
pub use validation::{is_valid_url, validate_profile};

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
