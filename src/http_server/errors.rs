//! HTTP route errors

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::generator::GeneratorError;

/// Result type for route handlers.
pub type RouteResult<T> = Result<T, RouteError>;

/// Route-level errors, serialized as `{code, message}`.
#[derive(Debug, Error)]
pub enum RouteError {
    /// Generation requested with a blank prompt.
    #[error("prompt must not be empty")]
    EmptyPrompt,

    /// No generator configured (missing API key).
    #[error("form generation is not configured")]
    GeneratorUnavailable,

    /// Unknown form id.
    #[error("form not found: {0}")]
    FormNotFound(Uuid),

    /// Upstream generation failure.
    #[error("{0}")]
    Generator(#[from] GeneratorError),
}

impl RouteError {
    /// Stable machine-readable code for API clients.
    pub fn code(&self) -> &'static str {
        match self {
            RouteError::EmptyPrompt => "EMPTY_PROMPT",
            RouteError::GeneratorUnavailable => "GENERATOR_UNAVAILABLE",
            RouteError::FormNotFound(_) => "FORM_NOT_FOUND",
            RouteError::Generator(_) => "GENERATION_FAILED",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            RouteError::EmptyPrompt => StatusCode::BAD_REQUEST,
            RouteError::GeneratorUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            RouteError::FormNotFound(_) => StatusCode::NOT_FOUND,
            RouteError::Generator(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

/// Error body shape shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: String,
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            code: self.code(),
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(RouteError::EmptyPrompt.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            RouteError::FormNotFound(Uuid::nil()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            RouteError::GeneratorUnavailable.status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(RouteError::EmptyPrompt.code(), "EMPTY_PROMPT");
        assert_eq!(RouteError::FormNotFound(Uuid::nil()).code(), "FORM_NOT_FOUND");
    }
}
