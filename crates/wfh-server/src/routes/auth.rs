//! Auth route handlers: signup, login, logout, current-user.

use axum::extract::State;
use axum::Json;
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;
use wfh_core::User;

use crate::auth::{auth_cookie, hash_password, removal_cookie, verify_password, TOKEN_COOKIE};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: UserInfo,
}

fn logged_in(
    jar: CookieJar,
    state: &AppState,
    user: User,
) -> Result<(CookieJar, Json<UserResponse>), ApiError> {
    let token = state.auth.sign(&user)?;
    Ok((
        jar.add(auth_cookie(token)),
        Json(UserResponse {
            user: UserInfo {
                id: user.id,
                email: user.email,
            },
        }),
    ))
}

pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<CredentialsRequest>,
) -> Result<(CookieJar, Json<UserResponse>), ApiError> {
    if req.email.is_empty() || req.password.is_empty() {
        return Err(ApiError::BadRequest("Missing fields".to_string()));
    }
    let user = User {
        id: Uuid::new_v4().to_string(),
        email: req.email,
        password_hash: hash_password(&req.password).map_err(ApiError::internal)?,
    };
    state.users.insert(user.clone())?;
    tracing::info!(email = %user.email, "user signed up");
    logged_in(jar, &state, user)
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<CredentialsRequest>,
) -> Result<(CookieJar, Json<UserResponse>), ApiError> {
    let user = state
        .users
        .find_by_email(&req.email)?
        .filter(|u| verify_password(&req.password, &u.password_hash))
        .ok_or_else(|| ApiError::BadRequest("Invalid credentials".to_string()))?;
    tracing::info!(email = %user.email, "user logged in");
    logged_in(jar, &state, user)
}

pub async fn logout(jar: CookieJar) -> (CookieJar, Json<Value>) {
    (
        jar.remove(removal_cookie()),
        Json(json!({ "message": "Logged out" })),
    )
}

/// Cookie is optional here: absent or invalid tokens yield a null user,
/// never an error.
pub async fn me(State(state): State<AppState>, jar: CookieJar) -> Json<Value> {
    let user = jar
        .get(TOKEN_COOKIE)
        .and_then(|c| state.auth.verify(c.value()).ok())
        .map(|claims| json!({ "id": claims.id, "email": claims.email }));
    Json(json!({ "user": user }))
}
