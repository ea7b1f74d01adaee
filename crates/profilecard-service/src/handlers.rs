//! Profile endpoint handlers
//!
//! Writes follow validate → persist → respond and stop at the first failing
//! stage. A rejected candidate never reaches the store.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use profilecard_repository::{Profile, ProfileDraft};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::AppState;
use crate::error::ApiError;

const READ_FAILED: &str = "Не удалось прочитать данные профиля";
const CREATE_FAILED: &str = "Не удалось сохранить профиль";
const UPDATE_FAILED: &str = "Не удалось обновить профиль";
const RESET_FAILED: &str = "Не удалось сбросить профиль";

const CREATED: &str = "Профиль создан";
const UPDATED: &str = "Профиль обновлен";
const RESET: &str = "Профиль сброшен";

/// Body of successful write responses
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    /// Human-readable outcome
    pub message: &'static str,
    /// Record now held by the store
    pub profile: Profile,
}

/// `GET /api/profile`
pub async fn get_profile(State(state): State<AppState>) -> Result<Json<Profile>, ApiError> {
    let profile = state
        .store()
        .read()
        .await
        .map_err(|e| ApiError::storage(READ_FAILED, e))?;
    Ok(Json(profile))
}

/// `POST /api/profile`
pub async fn create_profile(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ProfileResponse>), ApiError> {
    let profile = save_candidate(&state, body, CREATE_FAILED).await?;
    info!("Profile created");
    Ok((
        StatusCode::CREATED,
        Json(ProfileResponse {
            message: CREATED,
            profile,
        }),
    ))
}

/// `PUT /api/profile`
pub async fn update_profile(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let profile = save_candidate(&state, body, UPDATE_FAILED).await?;
    info!("Profile updated");
    Ok(Json(ProfileResponse {
        message: UPDATED,
        profile,
    }))
}

/// `DELETE /api/profile`
pub async fn delete_profile(
    State(state): State<AppState>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let profile = state
        .store()
        .reset()
        .await
        .map_err(|e| ApiError::storage(RESET_FAILED, e))?;
    Ok(Json(ProfileResponse {
        message: RESET,
        profile,
    }))
}

/// Fallback for unmatched routes and methods
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

async fn save_candidate(
    state: &AppState,
    body: Result<Json<Value>, JsonRejection>,
    failure_message: &'static str,
) -> Result<Profile, ApiError> {
    let Json(value) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let draft = ProfileDraft::from_json(&value);
    let profile = Profile::try_from(draft).inspect_err(|errors| {
        debug!(fields = ?errors.fields().collect::<Vec<_>>(), "Profile rejected by validation");
    })?;

    state
        .store()
        .write(&profile)
        .await
        .map_err(|e| ApiError::storage(failure_message, e))?;

    Ok(profile)
}
