//! Prompts for vulnerability triage

use schemars::schema_for;

use crate::model::VulnerabilityReport;

/// System prompt for vulnerability triage, minus the trailing report schema
const TRIAGE_PROMPT_PREAMBLE: &str = r#"You are a certified security researcher and analyst. Your sole function is to accept raw, unstructured vulnerability data (bug description, PoC steps) and perform immediate, accurate triage suitable for a senior developer audience.

## Requirements

- Calculate the CVSS v3.1 base score and compose the full CVSS v3.1 vector string
- Determine the severity from the score: CRITICAL, HIGH, MEDIUM or LOW
- Formalize the finding into a concise, technical summary of the vulnerability, scope and impact
- Rewrite the reproduction steps as clean, numbered steps
- Compose a concise, actionable mitigation plan

## Output Requirements

- Your entire output MUST be a single, valid JSON object conforming to the schema below
- Do not include any conversational text, headers or markdown formatting outside of the JSON structure itself
- All seven schema fields are required"#;

/// Build the full system prompt including the report JSON schema
///
/// The schema is generated from the report type itself, so the instruction
/// sent to the model and the parser accepting its reply cannot drift apart.
/// The result is the same for every request.
pub fn triage_system_prompt() -> String {
    let schema = schema_for!(VulnerabilityReport);
    let schema_json =
        serde_json::to_string_pretty(&schema).expect("report schema serializes to JSON");

    format!("{TRIAGE_PROMPT_PREAMBLE}\n\n## Required JSON Schema\n\n{schema_json}\n")
}

/// Wrap a submitted finding in the per-request analysis instruction
///
/// The finding is forwarded verbatim; empty input is rejected by the
/// service before this is ever called.
pub fn build_triage_prompt(raw_finding: &str) -> String {
    format!("Analyze this raw finding: \"{raw_finding}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_describes_all_report_fields() {
        let prompt = triage_system_prompt();

        for field in [
            "title",
            "severity",
            "cvss_score",
            "cvss_vector",
            "description",
            "proof_of_concept",
            "mitigation",
        ] {
            assert!(prompt.contains(field), "schema field {field} missing");
        }

        for severity in ["CRITICAL", "HIGH", "MEDIUM", "LOW"] {
            assert!(prompt.contains(severity), "severity {severity} missing");
        }
    }

    #[test]
    fn test_system_prompt_is_deterministic() {
        assert_eq!(triage_system_prompt(), triage_system_prompt());
    }

    #[test]
    fn test_triage_prompt_forwards_finding_verbatim() {
        let finding = "Login endpoint accepts SQL in username field";
        let prompt = build_triage_prompt(finding);

        assert!(prompt.contains(finding));
        assert!(prompt.starts_with("Analyze this raw finding:"));
    }
}
