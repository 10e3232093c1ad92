//! Prompt templates and the post response schema.

use serde_json::{Value, json};
use viralpost_config::PostConfig;
use viralpost_core::SourceText;

/// Instructional prompt for the text step.
///
/// The caller's text is embedded verbatim after the instructions.
///
/// # Examples
///
/// ```
/// use viralpost_config::PostConfig;
/// use viralpost_core::SourceText;
/// use viralpost_generation::text_prompt;
///
/// let source = SourceText::new("coffee shop opening").unwrap();
/// let prompt = text_prompt(&source, &PostConfig::default());
///
/// assert!(prompt.ends_with("coffee shop opening"));
/// assert!(prompt.contains("3-5"));
/// assert!(prompt.contains("Traditional Chinese (Taiwan)"));
/// ```
pub fn text_prompt(source: &SourceText, config: &PostConfig) -> String {
    format!(
        "Rewrite the following content as a highly engaging social media post \
(Facebook, Instagram, Threads).

Role: you are a top online marketer and social media editor, skilled at viral \
writing and the psychology of click-worthy hooks.

Requirements:
1. Headline: sensational, with suspense or strong emotional pull that makes \
people want to click. Use pain points, secrets, surprises or numbers.
2. Body: conversational, friendly but professional tone. Clear paragraph \
breaks, with suitable emoji for readability.
3. CTA: end with a strong call to action that gets readers to like, comment, \
share or click a link.
4. Hashtags: {min}-{max} high-traffic relevant hashtags.
5. Language: {language}.

Original content:
{text}",
        min = config.min_hashtags,
        max = config.max_hashtags,
        language = config.language,
        text = source.as_str(),
    )
}

/// Prompt for the image step, seeded by the generated headline.
///
/// # Examples
///
/// ```
/// use viralpost_generation::image_prompt;
///
/// let prompt = image_prompt("Grand opening!", "1:1");
/// assert!(prompt.contains("\"Grand opening!\""));
/// assert!(prompt.contains("no text in the image"));
/// ```
pub fn image_prompt(headline: &str, aspect_ratio: &str) -> String {
    format!(
        "Create a high-quality, eye-catching social media illustration for a post about: \"{headline}\".
Style: Modern, colorful, professional digital art.
Requirements: {aspect_ratio} aspect ratio, high resolution, no text in the image."
    )
}

/// Response schema the text model must follow.
///
/// Uses the Gemini schema dialect (upper-case type names). All four fields
/// are required.
pub fn post_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "headline": {
                "type": "STRING",
                "description": "The sensational headline designed to get clicks."
            },
            "body": {
                "type": "STRING",
                "description": "The main content of the post, formatted with line breaks."
            },
            "cta": {
                "type": "STRING",
                "description": "Call to action phrase."
            },
            "hashtags": {
                "type": "ARRAY",
                "items": {"type": "STRING"},
                "description": "List of relevant hashtags."
            }
        },
        "required": ["headline", "body", "cta", "hashtags"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_requires_every_field() {
        let schema = post_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(required, ["headline", "body", "cta", "hashtags"]);
        assert_eq!(schema["properties"]["hashtags"]["items"]["type"], "STRING");
    }

    #[test]
    fn text_prompt_uses_configured_language_and_range() {
        let config = PostConfig {
            language: "English (US)".to_string(),
            min_hashtags: 2,
            max_hashtags: 4,
            ..Default::default()
        };
        let source = SourceText::new("  line one\nline two  ").unwrap();
        let prompt = text_prompt(&source, &config);

        assert!(prompt.contains("Language: English (US)."));
        assert!(prompt.contains("2-4 high-traffic"));
        assert!(prompt.ends_with("  line one\nline two  "));
    }

    #[test]
    fn image_prompt_carries_aspect_ratio() {
        assert!(image_prompt("H", "16:9").contains("16:9 aspect ratio"));
    }
}
