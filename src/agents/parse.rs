//! Agent Response Parsing
//!
//! Two-stage extraction for LLM analysis output:
//!
//! 1. Strip known wrapper patterns (markdown code fences, BOM)
//! 2. Attempt a structured JSON parse
//!
//! There is no repair ladder beyond this: if the stripped text does not parse,
//! the calling agent falls back to its role-specific placeholder report. A
//! parse failure is a data-quality issue, not a system failure, and must not
//! abort the pipeline.

use serde_json::Value;
use tracing::debug;

use crate::constants::agents::PARSE_FALLBACK_CONFIDENCE;

/// Strip markdown code fences (```json ... ``` or ``` ... ```) and a BOM.
/// Idempotent: unfenced input passes through unchanged.
pub fn strip_code_fences(raw: &str) -> String {
    let mut s = raw.trim_start_matches('\u{feff}').trim().to_string();

    if s.starts_with("```") {
        match s.find('\n') {
            Some(first_newline) => s = s[first_newline + 1..].to_string(),
            // Fence with no body
            None => s = String::new(),
        }
    }

    if s.ends_with("```") {
        s = s[..s.len() - 3].trim_end().to_string();
    }

    s.trim().to_string()
}

/// Parse an LLM response into a JSON object after fence stripping.
/// Returns None on any parse failure or non-object payload.
pub fn parse_response(raw: &str) -> Option<Value> {
    let cleaned = strip_code_fences(raw);

    match serde_json::from_str::<Value>(&cleaned) {
        Ok(value) if value.is_object() => Some(value),
        Ok(_) => {
            debug!("LLM response parsed but was not a JSON object");
            None
        }
        Err(e) => {
            debug!("LLM response parse failed: {}", e);
            None
        }
    }
}

// =============================================================================
// Field Extraction
// =============================================================================

/// String field with a placeholder default for absent/non-string values
pub fn str_field(value: &Value, key: &str, default: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| default.to_string())
}

/// String-list field; non-string entries are skipped, absence yields empty
pub fn string_list(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Confidence score clamped to [0, 100]. A missing or malformed value gets
/// the parse-fallback confidence rather than an optimistic default.
pub fn confidence_score(value: &Value) -> u8 {
    value
        .get("confidence_score")
        .and_then(Value::as_f64)
        .map(|c| c.clamp(0.0, 100.0).round() as u8)
        .unwrap_or(PARSE_FALLBACK_CONFIDENCE)
}

/// Raw metadata value with a placeholder default, so downstream agents can
/// read role metadata keys without checking for key existence
pub fn metadata_value(value: &Value, key: &str, default: Value) -> Value {
    value.get(key).cloned().unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strip_json_fence() {
        let fenced = "```json\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(fenced), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_bare_fence() {
        let fenced = "```\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(fenced), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_is_idempotent_on_plain_json() {
        let plain = "{\"a\": 1}";
        assert_eq!(strip_code_fences(plain), plain);
        assert_eq!(strip_code_fences(&strip_code_fences(plain)), plain);
    }

    #[test]
    fn test_fenced_and_unfenced_parse_identically() {
        let plain = parse_response("{\"summary\": \"ok\"}").unwrap();
        let fenced = parse_response("```json\n{\"summary\": \"ok\"}\n```").unwrap();
        assert_eq!(plain, fenced);
    }

    #[test]
    fn test_parse_failure_returns_none() {
        assert!(parse_response("not json").is_none());
        assert!(parse_response("{\"truncated\": ").is_none());
        assert!(parse_response("[1, 2, 3]").is_none());
    }

    #[test]
    fn test_str_field_default() {
        let value = json!({"summary": "fine"});
        assert_eq!(str_field(&value, "summary", "n/a"), "fine");
        assert_eq!(str_field(&value, "missing", "n/a"), "n/a");
    }

    #[test]
    fn test_string_list_skips_non_strings() {
        let value = json!({"items": ["a", 2, "b"]});
        assert_eq!(string_list(&value, "items"), vec!["a", "b"]);
        assert!(string_list(&value, "missing").is_empty());
    }

    #[test]
    fn test_confidence_clamped() {
        assert_eq!(confidence_score(&json!({"confidence_score": 75})), 75);
        assert_eq!(confidence_score(&json!({"confidence_score": 140})), 100);
        assert_eq!(confidence_score(&json!({"confidence_score": -5})), 0);
        assert_eq!(
            confidence_score(&json!({})),
            PARSE_FALLBACK_CONFIDENCE
        );
    }
}
