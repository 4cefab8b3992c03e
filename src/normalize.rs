use serde_json::Value;

/// Re-serializes arbitrary JSON text with 2-space indentation.
///
/// Parsing is strict: no comments, no trailing commas, no unquoted keys.
/// Object keys keep the order they had in the source text, recursively.
///
/// Returns an empty string if the input is not valid JSON. Callers that need
/// to distinguish failure from formatting a trivially small document should
/// use [`try_normalize`] instead.
///
/// # Example
///
/// ```rust
/// let out = devsnips::normalize(r#"{"a":1,"b":"x"}"#);
/// assert_eq!(out, "{\n  \"a\": 1,\n  \"b\": \"x\"\n}");
///
/// assert_eq!(devsnips::normalize("not json"), "");
/// ```
pub fn normalize(raw: &str) -> String {
    try_normalize(raw).unwrap_or_default()
}

/// Like [`normalize`], but surfaces the parse error instead of collapsing it
/// to an empty string.
pub fn try_normalize(raw: &str) -> Result<String, serde_json::Error> {
    let parsed: Value = serde_json::from_str(raw)?;
    serde_json::to_string_pretty(&parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_object_with_two_space_indent() {
        let out = normalize(r#"{"a":1,"b":"x"}"#);
        assert_eq!(out, "{\n  \"a\": 1,\n  \"b\": \"x\"\n}");
    }

    #[test]
    fn preserves_source_key_order() {
        let out = normalize(r#"{"zulu":1,"alpha":2,"mike":3}"#);
        let keys: Vec<usize> = ["zulu", "alpha", "mike"]
            .iter()
            .map(|k| out.find(k).unwrap())
            .collect();
        assert!(keys[0] < keys[1] && keys[1] < keys[2]);
    }

    #[test]
    fn idempotent_once_normalized() {
        let input = r#"{"user":{"id":1,"name":"Farhaan","active":true},"tags":["a","b"]}"#;
        let once = normalize(input);
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn invalid_input_yields_empty_string() {
        assert_eq!(normalize("not json"), "");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(r#"{"a":1,}"#), "");
    }

    #[test]
    fn scalars_and_arrays_are_valid_documents() {
        assert_eq!(normalize("42"), "42");
        assert_eq!(normalize("\"\""), "\"\"");
        assert_eq!(normalize("[1,2]"), "[\n  1,\n  2\n]");
    }

    #[test]
    fn try_normalize_reports_the_failure() {
        assert!(try_normalize("{nope").is_err());
        assert!(try_normalize("{}").is_ok());
    }
}
