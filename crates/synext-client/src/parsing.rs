//! Response body parsing.
//!
//! Sync functions that turn a raw body into an [`Annotation`] according to
//! the configured [`ResponseFormat`].

use serde_json::Value;
use synext_core::Annotation;

use crate::config::ResponseFormat;
use crate::error::{ClientError, ClientResult};

/// Parse a response body into an annotation.
pub fn parse_annotation(body: &str, format: ResponseFormat) -> ClientResult<Annotation> {
    match format {
        ResponseFormat::Structured => parse_structured(body),
        ResponseFormat::CharPair => parse_char_pair(body),
    }
}

// ============================================================================
// Structured bodies
// ============================================================================

/// Parse `{"syntax": .., "baseline": ..}` or `[syntax, baseline, ..]`.
///
/// A blank body (the service's answer to blank text) is a short body with
/// no usable characters.
pub fn parse_structured(body: &str) -> ClientResult<Annotation> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(ClientError::ShortBody { length: 0 });
    }

    let json: Value = serde_json::from_str(trimmed)?;
    match &json {
        Value::Object(map) => {
            let syntax = string_field(&json, "syntax")?;
            let baseline = string_field(&json, "baseline")?;
            if map.len() > 2 {
                tracing::debug!(fields = map.len(), "Ignoring extra fields in annotation body");
            }
            Ok(Annotation::new(syntax, baseline))
        }
        Value::Array(items) => {
            let [syntax, baseline, ..] = items.as_slice() else {
                return Err(ClientError::InvalidResponse {
                    message: format!("Expected at least 2 array items, got {}", items.len()),
                });
            };
            match (syntax.as_str(), baseline.as_str()) {
                (Some(syntax), Some(baseline)) => Ok(Annotation::new(syntax, baseline)),
                _ => Err(ClientError::InvalidResponse {
                    message: "Array items must be strings".to_string(),
                }),
            }
        }
        other => Err(ClientError::InvalidResponse {
            message: format!("Expected object or array, got {}", json_kind(other)),
        }),
    }
}

fn string_field<'a>(json: &'a Value, field: &str) -> ClientResult<&'a str> {
    json.get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| ClientError::InvalidResponse {
            message: format!("Missing or non-string field '{field}'"),
        })
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// Character pairs
// ============================================================================

/// First character to syntax, second to baseline; the rest is ignored.
pub fn parse_char_pair(body: &str) -> ClientResult<Annotation> {
    let mut chars = body.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some(second)) => Ok(Annotation::new(first, second)),
        _ => Err(ClientError::ShortBody {
            length: body.chars().count(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_object() {
        let body = r#"{"syntax": "He *eats* bread<br/>She *sees* it", "baseline": "John *likes* cheese"}"#;
        let annotation = parse_annotation(body, ResponseFormat::Structured).unwrap();

        assert_eq!(annotation.syntax_lines().len(), 2);
        assert_eq!(annotation.baseline, "John *likes* cheese");
    }

    #[test]
    fn test_structured_array() {
        let annotation = parse_structured(r#"["syn", "base", "ignored"]"#).unwrap();
        assert_eq!(annotation, Annotation::new("syn", "base"));
    }

    #[test]
    fn test_structured_blank_body_is_short() {
        assert!(matches!(
            parse_structured(""),
            Err(ClientError::ShortBody { length: 0 })
        ));
        assert!(matches!(
            parse_structured("  \n"),
            Err(ClientError::ShortBody { length: 0 })
        ));
    }

    #[test]
    fn test_structured_rejects_wrong_shapes() {
        assert!(matches!(
            parse_structured(r#"{"syntax": "only one"}"#),
            Err(ClientError::InvalidResponse { .. })
        ));
        assert!(matches!(
            parse_structured(r#"{"syntax": 1, "baseline": "b"}"#),
            Err(ClientError::InvalidResponse { .. })
        ));
        assert!(matches!(
            parse_structured(r#"["one"]"#),
            Err(ClientError::InvalidResponse { .. })
        ));
        assert!(matches!(
            parse_structured(r"[1, 2]"),
            Err(ClientError::InvalidResponse { .. })
        ));
        assert!(matches!(
            parse_structured("42"),
            Err(ClientError::InvalidResponse { .. })
        ));
    }

    #[test]
    fn test_structured_rejects_non_json() {
        assert!(matches!(
            parse_structured("<html>oops</html>"),
            Err(ClientError::JsonParse(_))
        ));
    }

    #[test]
    fn test_char_pair_takes_first_two_characters() {
        let annotation = parse_annotation("XY", ResponseFormat::CharPair).unwrap();
        assert_eq!(annotation.syntax, "X");
        assert_eq!(annotation.baseline, "Y");

        let annotation = parse_char_pair(r#"{"syntax": "a"}"#).unwrap();
        assert_eq!(annotation, Annotation::new("{", "\""));
    }

    #[test]
    fn test_char_pair_counts_characters_not_bytes() {
        let annotation = parse_char_pair("éü!").unwrap();
        assert_eq!(annotation, Annotation::new("é", "ü"));

        assert!(matches!(
            parse_char_pair("é"),
            Err(ClientError::ShortBody { length: 1 })
        ));
    }

    #[test]
    fn test_char_pair_short_bodies() {
        assert!(matches!(
            parse_char_pair(""),
            Err(ClientError::ShortBody { length: 0 })
        ));
        assert!(matches!(
            parse_char_pair("X"),
            Err(ClientError::ShortBody { length: 1 })
        ));
    }
}
