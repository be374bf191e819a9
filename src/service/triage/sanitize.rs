//! Markdown fence stripping for backend replies
//!
//! The backend is asked for bare JSON but routinely wraps it in a fenced
//! code block anyway. This removes exactly that wrapper and nothing else.

/// Strip a surrounding Markdown code fence, with optional language tag,
/// from a backend reply
///
/// Text without a fence is only trimmed, so applying this twice gives the
/// same result as applying it once.
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop a language tag such as "json" on the opening fence line
    let rest = match rest.find('\n') {
        Some(newline)
            if rest[..newline]
                .trim()
                .chars()
                .all(|c| c.is_ascii_alphanumeric()) =>
        {
            &rest[newline + 1..]
        }
        _ => rest,
    };

    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{"title":"SQL Injection in Login","severity":"CRITICAL"}"#;

    #[test]
    fn test_strips_fence_with_language_tag() {
        let fenced = format!("```json\n{PAYLOAD}\n```");
        assert_eq!(strip_code_fences(&fenced), PAYLOAD);
    }

    #[test]
    fn test_strips_fence_without_language_tag() {
        let fenced = format!("```\n{PAYLOAD}\n```");
        assert_eq!(strip_code_fences(&fenced), PAYLOAD);
    }

    #[test]
    fn test_strips_single_line_fence() {
        let fenced = format!("```{PAYLOAD}```");
        assert_eq!(strip_code_fences(&fenced), PAYLOAD);
    }

    #[test]
    fn test_leaves_unfenced_text_untouched() {
        assert_eq!(strip_code_fences(PAYLOAD), PAYLOAD);
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let padded = format!("\n\n  ```json\n{PAYLOAD}\n```  \n");
        assert_eq!(strip_code_fences(&padded), PAYLOAD);
    }

    #[test]
    fn test_stripping_is_idempotent() {
        let fenced = format!("```json\n{PAYLOAD}\n```");
        let once = strip_code_fences(&fenced);
        assert_eq!(strip_code_fences(once), once);
    }

    #[test]
    fn test_preserves_backticks_inside_payload() {
        let inner = r#"{"mitigation":"Run `npm audit` and patch."}"#;
        let fenced = format!("```json\n{inner}\n```");
        assert_eq!(strip_code_fences(&fenced), inner);
    }

    #[test]
    fn test_non_json_prose_is_returned_trimmed() {
        assert_eq!(
            strip_code_fences("  I cannot analyze this.  "),
            "I cannot analyze this."
        );
    }
}
