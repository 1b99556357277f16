//! Removal of markdown code fences that models sometimes wrap around JSON.

const FENCE: &str = "```";

/// Strips a leading ```` ``` ```` fence (with or without a language tag such
/// as `json`) and a trailing fence, returning the trimmed payload.
///
/// Text without fences is returned trimmed and otherwise untouched. This is
/// plain trimming: fences inside the payload are left alone.
pub fn strip_code_fence(text: &str) -> &str {
    let mut cleaned = text.trim();

    if let Some(rest) = cleaned.strip_prefix(FENCE) {
        // Everything up to the first newline is the language tag, if any.
        cleaned = match rest.find('\n') {
            Some(newline) if is_language_tag(&rest[..newline]) => &rest[newline + 1..],
            _ => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
        };
    }

    if let Some(rest) = cleaned.trim_end().strip_suffix(FENCE) {
        cleaned = rest;
    }

    cleaned.trim()
}

fn is_language_tag(candidate: &str) -> bool {
    candidate
        .trim()
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[case::bare("{\"a\": 1}")]
    #[case::json_tag("```json\n{\"a\": 1}\n```")]
    #[case::upper_tag("```JSON\n{\"a\": 1}\n```")]
    #[case::no_tag("```\n{\"a\": 1}\n```")]
    #[case::trailing_whitespace("```json\n{\"a\": 1}\n```  \n\n")]
    #[case::leading_whitespace("\n\n  ```json\n{\"a\": 1}\n```")]
    #[case::tag_on_same_line("```json{\"a\": 1}```")]
    #[case::crlf("```json\r\n{\"a\": 1}\r\n```\r\n")]
    #[case::only_trailing_fence("{\"a\": 1}\n```")]
    fn test_fenced_variants_parse_to_same_object(#[case] input: &str) {
        let parsed: Value = serde_json::from_str(strip_code_fence(input)).unwrap();
        assert_eq!(parsed, json!({"a": 1}));
    }

    #[test]
    fn test_unfenced_text_is_only_trimmed() {
        assert_eq!(strip_code_fence("  not json at all \n"), "not json at all");
    }

    #[test]
    fn test_inner_backticks_are_preserved() {
        let input = "```json\n{\"code\": \"use ``` here\"}\n```";
        assert_eq!(strip_code_fence(input), "{\"code\": \"use ``` here\"}");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(strip_code_fence(""), "");
        assert_eq!(strip_code_fence("``````"), "");
    }
}
