//! Best-effort normalization of free-text model output. The model is asked
//! for bare JSON but routinely wraps it in markdown fences or chatter.

/// Strip surrounding markdown code fences from a model response.
pub fn strip_code_fences(response: &str) -> &str {
    response
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}

/// Slice out the first `{` through the last `}`, dropping surrounding prose.
/// Returns `None` when the text has no opening brace. A missing or
/// misplaced closing brace is left for the JSON parser to reject.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = match text.rfind('}') {
        Some(i) if i >= start => i + 1,
        _ => text.len(),
    };
    Some(&text[start..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("```json\n{}\n```"), "{}");
        assert_eq!(strip_code_fences("```\n{}\n```"), "{}");
        assert_eq!(strip_code_fences("{}"), "{}");
        assert_eq!(strip_code_fences("  {}  "), "{}");
    }

    #[test]
    fn test_extract_json_object_plain() {
        assert_eq!(extract_json_object(r#"{"a": 1}"#), Some(r#"{"a": 1}"#));
    }

    #[test]
    fn test_extract_json_object_with_prose() {
        let text = r#"Sure! {"brand":"Nike"} Hope that helps."#;
        assert_eq!(extract_json_object(text), Some(r#"{"brand":"Nike"}"#));
    }

    #[test]
    fn test_extract_json_object_without_brace() {
        assert_eq!(extract_json_object("no object here"), None);
    }

    #[test]
    fn test_extract_json_object_unclosed() {
        // Left to the parser: the slice runs to the end of the text.
        assert_eq!(extract_json_object(r#"{"a": 1"#), Some(r#"{"a": 1"#));
    }

    #[test]
    fn test_extract_json_object_brace_before_open() {
        // A stray closing brace ahead of the object must not panic the slice.
        assert_eq!(extract_json_object(r#"} junk {"a": 1"#), Some(r#"{"a": 1"#));
    }
}
