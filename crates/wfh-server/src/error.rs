//! HTTP error mapping.
//!
//! One error enum terminates every failure at the REST boundary; handlers
//! return `Result<_, ApiError>` and the `IntoResponse` impl picks the
//! status code and the `{error}` body the client expects.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use wfh_core::{StoreError, ValidationError};

#[derive(Debug, Error)]
pub enum ApiError {
    /// 400 with the message as the `error` field.
    #[error("{0}")]
    BadRequest(String),

    /// 401: protected route without a token cookie.
    #[error("Unauthorized")]
    Unauthorized,

    /// 403: token present but its signature is invalid or expired.
    #[error("Forbidden")]
    Forbidden,

    /// 500: logged server-side, message not leaked to the client.
    #[error("Internal server error")]
    Internal(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
    pub fn internal(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Internal(Box::new(err))
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail(_) => Self::BadRequest("User already exists".to_string()),
            other => Self::internal(other),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal(source) => {
                tracing::error!(error = %source, "internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
