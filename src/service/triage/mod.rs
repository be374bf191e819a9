//! Vulnerability triage service using LLM
//!
//! Turns a raw finding description into a structured triage report by
//! sending one completion request and strictly parsing the reply.

use std::sync::Arc;

use rig::providers::openai;

use crate::model::{Config, VulnerabilityReport};
use crate::service::llm::{GenerativeBackend, LlmClient};
use crate::service::triage::prompts::{build_triage_prompt, triage_system_prompt};
use crate::service::triage::sanitize::strip_code_fences;
use crate::service::triage::validation::validate_report;

pub mod error;
pub mod prompts;
pub mod sanitize;
pub mod validation;

pub use error::TriageError;

/// Environment variable for the triage model (defaults to gpt-4o-mini if not set)
const ENV_TRIAGE_MODEL: &str = "TRIAGE_MODEL";

/// Default model for triage
const DEFAULT_MODEL: &str = openai::GPT_4O_MINI;

/// Service for triaging raw vulnerability findings into structured reports
///
/// Stateless between requests. Each invocation performs exactly one backend
/// call and either returns a fully populated report or a classified error,
/// never a partial report. Retry policy belongs to the caller.
pub struct TriageService {
    backend: Option<Arc<dyn GenerativeBackend>>,
    system_prompt: String,
}

impl TriageService {
    /// Create a triage service with an injected backend
    pub fn new(backend: Arc<dyn GenerativeBackend>) -> Self {
        Self {
            backend: Some(backend),
            system_prompt: triage_system_prompt(),
        }
    }

    /// Create a triage service from startup configuration
    ///
    /// When the backend credential is missing the service still starts and
    /// rejects every request with a configuration error, so probes can
    /// report the condition instead of the process dying on boot.
    /// Optionally uses the TRIAGE_MODEL env var (defaults to gpt-4o-mini).
    pub fn from_config(config: &Config) -> Self {
        let model =
            std::env::var(ENV_TRIAGE_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let backend: Option<Arc<dyn GenerativeBackend>> = match config.api_key.as_deref() {
            Some(api_key) => match LlmClient::new(api_key, &model) {
                Ok(client) => {
                    tracing::info!(
                        model = %model,
                        "Triage service initialized"
                    );
                    Some(Arc::new(client))
                }
                Err(e) => {
                    tracing::error!(
                        error = %e,
                        "Failed to create LLM client, triage requests will be rejected"
                    );
                    None
                }
            },
            None => {
                tracing::warn!("OPENAI_API_KEY not set, triage requests will be rejected");
                None
            }
        };

        Self {
            backend,
            system_prompt: triage_system_prompt(),
        }
    }

    /// Whether a backend credential was configured at startup
    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }

    /// Triage a raw finding into a structured vulnerability report
    pub async fn triage(&self, raw_finding: &str) -> Result<VulnerabilityReport, TriageError> {
        if raw_finding.trim().is_empty() {
            return Err(TriageError::InvalidInput);
        }

        let backend = self.backend.as_ref().ok_or(TriageError::Configuration)?;

        let prompt = build_triage_prompt(raw_finding);
        let prompt_length = prompt.len();

        tracing::debug!(
            finding_length = raw_finding.len(),
            prompt_length = prompt_length,
            "Initiating LLM call for vulnerability triage"
        );

        let start_time = std::time::Instant::now();

        let text = match backend.generate(&self.system_prompt, &prompt).await {
            Ok(text) => {
                let elapsed = start_time.elapsed();
                tracing::info!(
                    elapsed_ms = elapsed.as_millis(),
                    prompt_length = prompt_length,
                    response_length = text.len(),
                    "LLM call for vulnerability triage completed successfully"
                );
                text
            }
            Err(e) => {
                let elapsed = start_time.elapsed();
                tracing::error!(
                    elapsed_ms = elapsed.as_millis(),
                    prompt_length = prompt_length,
                    error = %e,
                    "LLM call for vulnerability triage failed"
                );
                return Err(TriageError::BackendUnavailable(e.to_string()));
            }
        };

        parse_report(&text)
    }
}

/// Parse raw backend text into a validated vulnerability report
///
/// Strips surrounding Markdown code fences, parses the remainder as JSON
/// and rejects anything that does not satisfy the report schema. Given the
/// same text this always produces the same result.
fn parse_report(text: &str) -> Result<VulnerabilityReport, TriageError> {
    let cleaned = strip_code_fences(text);

    let value: serde_json::Value = serde_json::from_str(cleaned).map_err(|e| {
        TriageError::MalformedResponse(format!("response is not valid JSON: {e}"))
    })?;

    let report: VulnerabilityReport = serde_json::from_value(value).map_err(|e| {
        TriageError::MalformedResponse(format!("response does not match the report schema: {e}"))
    })?;

    let validation_result = validate_report(&report);
    if !validation_result.is_valid {
        tracing::error!(
            errors = ?validation_result.errors,
            "Triage response failed report validation"
        );
        return Err(TriageError::MalformedResponse(format!(
            "validation failed: {}",
            validation_result.errors.join("; ")
        )));
    }

    if !validation_result.warnings.is_empty() {
        tracing::warn!(
            warnings = ?validation_result.warnings,
            "Triage response produced quality warnings"
        );
    }

    Ok(report)
}
