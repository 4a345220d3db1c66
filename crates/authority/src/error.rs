use axum::Json;
use axum::http::StatusCode;
use axum_core::response::{IntoResponse as AxumCoreIntoResponse, Response};
use serde_json::json;

/// Failure taxonomy of the signing authority, one variant per rejection
/// class. Messages never carry key material or source-chain internals.
#[derive(Debug, thiserror::Error)]
pub enum AuthorityError {
    #[error("signing key not configured")]
    Misconfigured,
    #[error("method not allowed: {0}")]
    MethodNotAllowed(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("signing failed")]
    Signing(#[source] anyhow::Error),
}

/// Trait implementation to convert this error into an axum http response
impl AxumCoreIntoResponse for AuthorityError {
    fn into_response(self) -> Response {
        match self {
            method_error @ AuthorityError::MethodNotAllowed(_) => (
                StatusCode::METHOD_NOT_ALLOWED,
                Json(json!({ "error": method_error.to_string() })),
            )
                .into_response(),
            invalid_request_error @ AuthorityError::InvalidRequest(_) => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": invalid_request_error.to_string() })),
            )
                .into_response(),
            // Server-side faults share one generic body; detail stays in logs.
            AuthorityError::Misconfigured | AuthorityError::Signing(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "signing service unavailable" })),
            )
                .into_response(),
        }
    }
}
