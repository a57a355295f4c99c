//! Progress route handlers: per-user 21-day snapshot get/put.

use axum::extract::State;
use axum::Json;
use axum_extra::extract::CookieJar;
use serde_json::{json, Value};
use wfh_core::{validate_progress, ProgressMap};

use crate::auth::authenticate;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn get_progress(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<ProgressMap>, ApiError> {
    let claims = authenticate(&jar, &state.auth)?;
    Ok(Json(state.progress.get(&claims.id)?))
}

/// Full-replacement snapshot save, last-write-wins.
pub async fn save_progress(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(map): Json<ProgressMap>,
) -> Result<Json<Value>, ApiError> {
    let claims = authenticate(&jar, &state.auth)?;
    validate_progress(&map)?;
    state.progress.put(&claims.id, map)?;
    Ok(Json(json!({ "status": "ok" })))
}
