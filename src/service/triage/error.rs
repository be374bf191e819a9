//! Error types for vulnerability triage

use thiserror::Error;

/// Error type for the triage pipeline
///
/// Backend contract violations surface as [`TriageError::MalformedResponse`]
/// rather than [`TriageError::BackendUnavailable`] so callers can tell a
/// transport failure apart from a reply that could not be parsed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TriageError {
    /// The submitted finding was empty or whitespace-only
    #[error("finding text is empty")]
    InvalidInput,

    /// The service was started without a backend credential
    #[error("backend credential is not configured")]
    Configuration,

    /// Network failure, timeout or API error from the generative backend
    #[error("generative backend unavailable: {0}")]
    BackendUnavailable(String),

    /// The backend reply was not valid JSON or did not satisfy the report
    /// schema
    #[error("malformed backend response: {0}")]
    MalformedResponse(String),
}
