use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Severity band of a triaged vulnerability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

/// Structured triage report for a single submitted finding
///
/// Built transiently from the model's reply and handed to the caller. The
/// service keeps no copy of it and submitted findings are never stored.
///
/// The doc comments on the fields double as the field descriptions in the
/// JSON schema sent to the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, ToSchema)]
pub struct VulnerabilityReport {
    /// A concise, formal title of the vulnerability
    pub title: String,
    /// The determined impact based on the CVSS score
    pub severity: Severity,
    /// The calculated CVSS v3.1 base score (e.g. "9.1")
    pub cvss_score: String,
    /// The full CVSS v3.1 vector string
    pub cvss_vector: String,
    /// A formalized, technical summary of the vulnerability, scope and impact
    pub description: String,
    /// Clean, numbered steps to reproduce the bug
    pub proof_of_concept: String,
    /// Detailed, actionable steps for the development team to fix the issue
    pub mitigation: String,
}
