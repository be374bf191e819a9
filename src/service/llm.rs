//! Shared LLM client and backend abstraction
//!
//! Provides the completion interface used by the triage service and its
//! OpenAI-backed production implementation.

use async_trait::async_trait;
use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers::openai;
use thiserror::Error;

/// Error type for LLM interactions
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LlmError {
    #[error("failed to create OpenAI client: {0}")]
    ClientInit(String),
    #[error("completion request failed: {0}")]
    Completion(String),
}

/// Completion backend for the triage service
///
/// Implemented by [`LlmClient`] in production and by a scripted stub in
/// tests.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Send one completion request and return the raw response text
    async fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String, LlmError>;
}

/// Shared LLM client wrapper
#[derive(Clone)]
pub struct LlmClient {
    client: openai::Client,
    model: String,
}

impl LlmClient {
    /// Create a new LLM client with the provided API key and model
    pub fn new(api_key: &str, model: &str) -> Result<Self, LlmError> {
        let client = openai::Client::new(api_key);

        Ok(Self {
            client,
            model: model.to_string(),
        })
    }
}

#[async_trait]
impl GenerativeBackend for LlmClient {
    async fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String, LlmError> {
        // Use temperature=0.0 and a fixed seed for deterministic,
        // reproducible outputs
        let agent = self
            .client
            .agent(&self.model)
            .preamble(system_prompt)
            .temperature(0.0)
            .additional_params(serde_json::json!({ "seed": 42 }))
            .build();

        agent.prompt(user_prompt).await.map_err(|e| {
            tracing::error!(
                model = %self.model,
                error = %e,
                "OpenAI completion request failed"
            );
            LlmError::Completion(e.to_string())
        })
    }
}
