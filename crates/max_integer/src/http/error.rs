// Rust guideline compliant 2026-10-15

//! Transport-level error type and its HTTP rendering.
//!
//! Every variant renders as `{"success": false, "code", "message"}` with a
//! fixed message from `domain::ErrorCode`. Underlying causes are logged
//! here and never serialized. Handler panics render the same way through
//! [`handle_panic`].

use std::any::Any;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::ErrorCode;
use serde::Serialize;
use usecase::UseCaseError;
use validation::ValidationErrors;

/// Failure body shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// Stable numeric code from [`ErrorCode::code`].
    pub code: u16,
    /// Fixed message from [`ErrorCode::message`].
    pub message: &'static str,
    /// Per-field messages; only present for validation failures.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl ErrorResponse {
    fn new(code: ErrorCode, errors: Vec<String>) -> Self {
        Self { success: false, code: code.code(), message: code.message(), errors }
    }
}

/// Errors returned by the HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The body is missing, not JSON, has non-integer fields, or could not
    /// be read at all.
    #[error("malformed request: {0}")]
    MalformedRequest(#[from] JsonRejection),
    /// One or more fields violate their constraints.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    /// A use case failed; its cause has already been logged.
    #[error(transparent)]
    UseCase(#[from] UseCaseError),
}

impl ApiError {
    /// HTTP status and stable code for this error.
    #[must_use]
    pub fn status_and_code(&self) -> (StatusCode, ErrorCode) {
        match self {
            Self::MalformedRequest(JsonRejection::BytesRejection(rejection)) => {
                (rejection.status(), ErrorCode::Transport)
            }
            Self::MalformedRequest(_) => (StatusCode::BAD_REQUEST, ErrorCode::InvalidRequest),
            Self::Validation(e) => (StatusCode::BAD_REQUEST, e.code()),
            Self::UseCase(e @ UseCaseError::Calculation) => (StatusCode::BAD_REQUEST, e.code()),
            Self::UseCase(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.code()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let errors = match &self {
            Self::Validation(e) => {
                tracing::warn!(errors = ?e.messages(), "http.validation_failed");
                e.messages()
            }
            Self::MalformedRequest(rejection @ JsonRejection::BytesRejection(_)) => {
                tracing::error!(
                    error = %rejection.body_text(),
                    cause_code = code.code(),
                    "http.body_unreadable"
                );
                Vec::new()
            }
            Self::MalformedRequest(rejection) => {
                tracing::warn!(error = %rejection.body_text(), "http.malformed_request");
                Vec::new()
            }
            Self::UseCase(e) => {
                tracing::warn!(code = e.code().code(), "http.use_case_failed");
                Vec::new()
            }
        };
        (status, Json(ErrorResponse::new(code, errors))).into_response()
    }
}

/// Render a handler panic as `500` with [`ErrorCode::Generic`].
///
/// Passed to `tower_http::catch_panic::CatchPanicLayer::custom`. The panic
/// payload is logged and never serialized.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = match payload.downcast::<String>() {
        Ok(message) => *message,
        Err(payload) => payload
            .downcast_ref::<&str>()
            .map_or_else(|| "non-string panic payload".to_owned(), |s| (*s).to_owned()),
    };
    let code = ErrorCode::Generic;
    tracing::error!(panic = %detail, cause_code = code.code(), "http.handler_panicked");
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::new(code, Vec::new()))).into_response()
}
