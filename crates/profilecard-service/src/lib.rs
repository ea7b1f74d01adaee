//! Profile Card service
//!
//! REST surface over the single profile record:
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | GET | `/api/profile` | 200 + profile |
//! | POST | `/api/profile` | 201 + `{message, profile}` |
//! | PUT | `/api/profile` | 200 + `{message, profile}` |
//! | DELETE | `/api/profile` | 200 + `{message, profile}` with the empty record |
//!
//! Anything else answers 404. The service assumes a single user and a single
//! writer; it performs no authentication and no write serialization.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod observability;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use profilecard_repository::ProfileStore;

pub use config::{ConfigOverrides, ServiceConfig};
pub use error::ApiError;

/// Request handler state
///
/// The store is the only source of truth; handlers hold no copy of the record.
#[derive(Clone)]
pub struct AppState {
    store: Arc<ProfileStore>,
}

impl AppState {
    /// Wrap a store for sharing across requests
    pub fn new(store: ProfileStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Underlying store
    pub fn store(&self) -> &ProfileStore {
        &self.store
    }
}

/// Build the HTTP router with request logging and panic recovery
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/profile",
            get(handlers::get_profile)
                .post(handlers::create_profile)
                .put(handlers::update_profile)
                .delete(handlers::delete_profile)
                .fallback(handlers::not_found),
        )
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(axum::middleware::from_fn(middleware::catch_panic))
        .layer(axum::middleware::from_fn(middleware::log_requests))
}
