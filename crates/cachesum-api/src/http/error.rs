//! Application error type mapping to HTTP status codes and envelope format.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use cachesum_core::service::digest::DigestServiceError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Invalid caller-supplied arguments, rejected before the orchestrator.
    Validation(String),
    /// Generic internal error. The underlying cause is logged, never echoed
    /// to the caller.
    Internal,
}

impl From<DigestServiceError> for AppError {
    fn from(e: DigestServiceError) -> Self {
        // Everything surfacing from the orchestrator is internal by the time
        // it gets here: caller-supplied arguments were already validated at
        // the handler, so a validation error means a corrupted cache entry or
        // a misconfigured provider.
        tracing::error!(error = %e, "digest request failed");
        AppError::Internal
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "internal error".to_string(),
            ),
        };

        let body = json!({
            "data": null,
            "meta": {
                "request_id": "",
                "timestamp": chrono::Utc::now().to_rfc3339(),
                "response_time_ms": 0
            },
            "errors": [{
                "code": code,
                "message": message,
            }]
        });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}
