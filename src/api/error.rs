//! Unified API error handling
//!
//! This module provides a consistent error response format across all API
//! endpoints. Responses carry a stable error code and a generic message;
//! backend reply text and internal detail go to the log only.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::service::triage::TriageError;

/// Standard error response format
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error type/code
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Unique request ID for tracing
    pub request_id: String,
}

/// Unified API error type
///
/// All API endpoints should return `Result<T, ApiError>` for consistent
/// error handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Bad request / validation error (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Service started without a backend credential (500)
    #[error("Service is not configured: {0}")]
    NotConfigured(String),

    /// Generative backend failed or timed out (502)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Generative backend broke its output contract (502)
    #[error("External service returned an unusable response: {0}")]
    MalformedUpstream(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotConfigured(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ExternalService(_) | ApiError::MalformedUpstream(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let (error_type, message) = match self {
            ApiError::BadRequest(_) => ("invalid_input", "Finding text must not be empty."),
            ApiError::NotConfigured(_) => {
                ("not_configured", "Service is not configured for analysis.")
            }
            ApiError::ExternalService(_) => {
                ("backend_unavailable", "Failed to analyze vulnerability.")
            }
            ApiError::MalformedUpstream(_) => {
                ("malformed_response", "Failed to analyze vulnerability.")
            }
        };

        tracing::error!(
            error_type = error_type,
            status = status.as_u16(),
            detail = %self,
            "API error"
        );

        HttpResponse::build(status).json(ErrorResponse {
            error: error_type.to_string(),
            message: message.to_string(),
            request_id: Uuid::new_v4().to_string(),
        })
    }
}

impl From<TriageError> for ApiError {
    fn from(err: TriageError) -> Self {
        match err {
            TriageError::InvalidInput => ApiError::BadRequest(err.to_string()),
            TriageError::Configuration => ApiError::NotConfigured(err.to_string()),
            TriageError::BackendUnavailable(msg) => ApiError::ExternalService(msg),
            TriageError::MalformedResponse(msg) => ApiError::MalformedUpstream(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triage_errors_map_to_expected_status_codes() {
        let cases = [
            (TriageError::InvalidInput, StatusCode::BAD_REQUEST),
            (TriageError::Configuration, StatusCode::INTERNAL_SERVER_ERROR),
            (
                TriageError::BackendUnavailable("timeout".to_string()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                TriageError::MalformedResponse("not json".to_string()),
                StatusCode::BAD_GATEWAY,
            ),
        ];

        for (err, expected) in cases {
            let api_err = ApiError::from(err);
            assert_eq!(api_err.status_code(), expected, "{api_err:?}");
        }
    }

    #[test]
    fn test_backend_and_contract_failures_stay_distinct() {
        let transport = ApiError::from(TriageError::BackendUnavailable("timeout".to_string()));
        let contract = ApiError::from(TriageError::MalformedResponse("not json".to_string()));

        assert!(matches!(transport, ApiError::ExternalService(_)));
        assert!(matches!(contract, ApiError::MalformedUpstream(_)));
    }
}
