//! Convenience re-exports for common types

pub use crate::error::{StoreError, ValidationErrors};
pub use crate::model::{PhotoInput, Profile, ProfileDraft};
pub use crate::repository::{ProfileStore, ProfileStoreConfig};
pub use crate::storage::FileStorage;
pub use crate::validation::{is_valid_url, validate_profile};
