//! Validation of the text model's JSON reply.

use serde_json::{Map, Value};
use tracing::error;
use viralpost_core::PostText;
use viralpost_error::{GenerationError, GenerationErrorKind, GenerationResult};

/// Parse and validate a text-step payload into [`PostText`].
///
/// A reply wrapped in a markdown ```` ```json ```` block is unwrapped first.
///
/// # Errors
///
/// - [`GenerationErrorKind::Failed`] if the payload is not JSON at all.
/// - [`GenerationErrorKind::MalformedResponse`] if it is JSON without the post
///   shape: not an object, a field missing or mistyped, or a blank headline,
///   body or call-to-action.
///
/// # Examples
///
/// ```
/// use viralpost_generation::parse_post_text;
///
/// let text = parse_post_text(r#"{"headline":"H","body":"B","cta":"C","hashtags":["x"]}"#).unwrap();
/// assert_eq!(text.headline, "H");
///
/// assert!(parse_post_text("not json").is_err());
/// ```
pub fn parse_post_text(payload: &str) -> GenerationResult<PostText> {
    let json = strip_code_fence(payload);
    let value: Value = serde_json::from_str(json).map_err(|e| {
        error!(
            error = %e,
            payload_length = payload.len(),
            "Text reply is not valid JSON"
        );
        GenerationError::new(GenerationErrorKind::Failed)
    })?;

    let Value::Object(object) = value else {
        return Err(malformed("reply is not a JSON object"));
    };

    Ok(PostText::new(
        required_text(&object, "headline")?,
        required_text(&object, "body")?,
        required_text(&object, "cta")?,
        hashtags(&object)?,
    ))
}

#[track_caller]
fn malformed(reason: impl Into<String>) -> GenerationError {
    let reason = reason.into();
    error!(reason = %reason, "Text reply does not match the post schema");
    GenerationError::new(GenerationErrorKind::MalformedResponse(reason))
}

fn required_text(object: &Map<String, Value>, field: &str) -> GenerationResult<String> {
    match object.get(field) {
        None | Some(Value::Null) => Err(malformed(format!("missing field `{}`", field))),
        Some(Value::String(text)) if text.trim().is_empty() => {
            Err(malformed(format!("field `{}` is blank", field)))
        }
        Some(Value::String(text)) => Ok(text.clone()),
        Some(_) => Err(malformed(format!("field `{}` is not a string", field))),
    }
}

fn hashtags(object: &Map<String, Value>) -> GenerationResult<Vec<String>> {
    let items = match object.get("hashtags") {
        None | Some(Value::Null) => return Err(malformed("missing field `hashtags`")),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(malformed("field `hashtags` is not an array")),
    };

    items
        .iter()
        .map(|item| match item {
            Value::String(tag) => Ok(tag.clone()),
            _ => Err(malformed("field `hashtags` contains a non-string item")),
        })
        .collect()
}

/// Unwrap a ```` ```json ```` (or bare ```` ``` ````) fenced block if present.
fn strip_code_fence(payload: &str) -> &str {
    let trimmed = payload.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(payload: &str) -> GenerationErrorKind {
        parse_post_text(payload).unwrap_err().kind
    }

    #[test]
    fn accepts_well_formed_reply() {
        let text = parse_post_text(
            r##"{"headline":"H","body":"line 1\n\nline 2","cta":"C","hashtags":["#x","y"]}"##,
        )
        .unwrap();
        assert_eq!(text.body, "line 1\n\nline 2");
        assert_eq!(text.hashtags, vec!["#x".to_string(), "y".to_string()]);
    }

    #[test]
    fn unwraps_markdown_fence() {
        let payload = "```json\n{\"headline\":\"H\",\"body\":\"B\",\"cta\":\"C\",\"hashtags\":[]}\n```";
        assert_eq!(parse_post_text(payload).unwrap().cta, "C");
    }

    #[test]
    fn non_json_is_generic_failure() {
        assert_eq!(kind("Sure! Here is your post:"), GenerationErrorKind::Failed);
        assert_eq!(kind(""), GenerationErrorKind::Failed);
    }

    #[test]
    fn wrong_shape_is_malformed() {
        assert!(matches!(
            kind("[1, 2]"),
            GenerationErrorKind::MalformedResponse(reason) if reason.contains("object")
        ));
        assert!(matches!(
            kind(r#"{"headline":"H","body":"B","hashtags":[]}"#),
            GenerationErrorKind::MalformedResponse(reason) if reason.contains("`cta`")
        ));
        assert!(matches!(
            kind(r#"{"headline":"  ","body":"B","cta":"C","hashtags":[]}"#),
            GenerationErrorKind::MalformedResponse(reason) if reason.contains("blank")
        ));
        assert!(matches!(
            kind(r#"{"headline":"H","body":"B","cta":"C","hashtags":"x"}"#),
            GenerationErrorKind::MalformedResponse(reason) if reason.contains("not an array")
        ));
        assert!(matches!(
            kind(r#"{"headline":"H","body":"B","cta":"C","hashtags":["x", 3]}"#),
            GenerationErrorKind::MalformedResponse(_)
        ));
        assert!(matches!(
            kind(r#"{"headline":7,"body":"B","cta":"C","hashtags":[]}"#),
            GenerationErrorKind::MalformedResponse(reason) if reason.contains("not a string")
        ));
    }
}
