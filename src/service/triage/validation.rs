//! Validation logic for LLM-produced triage reports
//!
//! Schema violations reject the report outright. CVSS quality checks only
//! produce warnings, matching the published banding without failing
//! requests over backend scoring quirks.

use regex::Regex;

use crate::model::{Severity, VulnerabilityReport};

/// Result of report validation
#[derive(Debug)]
pub struct ReportValidationResult {
    /// Whether the report passed validation
    pub is_valid: bool,
    /// Critical errors that indicate invalid output
    pub errors: Vec<String>,
    /// Warnings that indicate potential quality issues
    pub warnings: Vec<String>,
}

impl ReportValidationResult {
    /// Create a new validation result with no issues
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add an error to the validation result
    pub fn add_error(&mut self, error: String) {
        self.is_valid = false;
        self.errors.push(error);
    }

    /// Add a warning to the validation result
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }
}

/// CVSS v3.1 base vector with all eight metrics in canonical order
const CVSS_VECTOR_PATTERN: &str =
    r"^CVSS:3\.1/AV:[NALP]/AC:[LH]/PR:[NLH]/UI:[NR]/S:[UC]/C:[NLH]/I:[NLH]/A:[NLH]$";

/// One decimal place, as CVSS base scores are published
const CVSS_SCORE_PATTERN: &str = r"^(?:10|\d)\.\d$";

/// Validate a parsed triage report
///
/// Checks:
/// 1. Required text fields are non-blank (error)
/// 2. The CVSS score is a one-decimal value in [0.0, 10.0] (warning)
/// 3. The CVSS vector matches the v3.1 base vector grammar (warning)
/// 4. Severity is consistent with standard CVSS banding (warning)
pub fn validate_report(report: &VulnerabilityReport) -> ReportValidationResult {
    let mut result = ReportValidationResult::valid();

    let required = [
        ("title", &report.title),
        ("cvss_score", &report.cvss_score),
        ("cvss_vector", &report.cvss_vector),
        ("description", &report.description),
        ("proof_of_concept", &report.proof_of_concept),
        ("mitigation", &report.mitigation),
    ];
    for (name, value) in required {
        if value.trim().is_empty() {
            result.add_error(format!("required field '{name}' is blank"));
        }
    }

    let score = report.cvss_score.trim();
    let score_pattern = Regex::new(CVSS_SCORE_PATTERN).unwrap();
    if !score.is_empty() && !score_pattern.is_match(score) {
        result.add_warning(format!(
            "cvss_score '{}' is not a one-decimal CVSS value",
            report.cvss_score
        ));
    }

    match score.parse::<f64>() {
        Ok(value) if (0.0..=10.0).contains(&value) => {
            let expected = severity_band(value);
            if expected != report.severity {
                result.add_warning(format!(
                    "severity {:?} does not match CVSS banding for score {value} (expected {expected:?})",
                    report.severity
                ));
            }
        }
        Ok(value) => {
            result.add_warning(format!(
                "cvss_score {value} is outside the range 0.0 to 10.0"
            ));
        }
        // Non-numeric scores are already covered by the format warning
        Err(_) => {}
    }

    let vector = report.cvss_vector.trim();
    let vector_pattern = Regex::new(CVSS_VECTOR_PATTERN).unwrap();
    if !vector.is_empty() && !vector_pattern.is_match(vector) {
        result.add_warning(format!(
            "cvss_vector '{}' does not match the CVSS v3.1 vector grammar",
            report.cvss_vector
        ));
    }

    result
}

/// Standard CVSS v3.1 severity banding for a base score
fn severity_band(score: f64) -> Severity {
    if score >= 9.0 {
        Severity::Critical
    } else if score >= 7.0 {
        Severity::High
    } else if score >= 4.0 {
        Severity::Medium
    } else {
        Severity::Low
    }
}
