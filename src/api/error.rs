use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_derive::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::datastore::DataStoreError;
use crate::model::ModelError;

/// Client-facing failure taxonomy for the HTTP surface.
///
/// Validation failures are detected before the store is reached. Store
/// failures keep only a generic message here; the full detail is logged at
/// the point of conversion and never leaks to the client.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("task not found")]
    NotFound,
    #[error("{0}")]
    Store(&'static str),
}

impl ApiError {
    /// Logs the store-level detail and keeps a generic message for the
    /// response body.
    pub fn store(public: &'static str, err: DataStoreError) -> Self {
        error!(reason = %err, "Unable to execute store request.");
        ApiError::Store(public)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<ModelError> for ApiError {
    fn from(err: ModelError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

// Malformed JSON bodies (including wrongly-typed fields) keep the same
// response shape as every other validation failure.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

/// Health is the one place that reports the store-level detail, for
/// operability.
#[derive(Debug, Serialize)]
pub struct HealthCheckFailed {
    pub error: String,
    pub details: String,
}

impl IntoResponse for HealthCheckFailed {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::Validation("bad".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Store("failed").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_hides_detail() {
        // GIVEN
        let err = DataStoreError::Storage("access denied for user 'root'".to_string());

        // WHEN
        let api_err = ApiError::store("unable to fetch tasks", err);

        // THEN
        assert_eq!(api_err.to_string(), "unable to fetch tasks");
    }

    #[test]
    fn test_validation_from_model_error() {
        let api_err: ApiError = ModelError::TitleTooShort(3).into();
        assert_eq!(api_err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            api_err.to_string(),
            "task title must be at least 3 characters"
        );
    }
}
