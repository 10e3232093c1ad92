//! Conversions between ViralPost requests and Gemini wire types.

use viralpost_core::MediaSource;
use viralpost_interface::{ImageRequest, ResponsePart, StructuredTextRequest};

use super::dto::{GenerateContentRequest, GenerateContentResponse, GenerationConfig, ImageConfig};

/// Body for a schema-constrained text request.
pub fn to_structured_request(req: &StructuredTextRequest) -> GenerateContentRequest {
    let config = GenerationConfig::builder()
        .response_mime_type(req.response_mime_type().clone())
        .response_schema(req.response_schema().clone())
        .build()
        .unwrap_or_default();
    GenerateContentRequest::new(req.prompt().clone(), Some(config))
}

/// Body for an image request.
pub fn to_image_request(req: &ImageRequest) -> GenerateContentRequest {
    let config = GenerationConfig::builder()
        .image_config(ImageConfig::new(req.aspect_ratio().clone()))
        .build()
        .unwrap_or_default();
    GenerateContentRequest::new(req.prompt().clone(), Some(config))
}

/// Answer text of the first candidate, thought parts excluded.
///
/// Returns `None` when there is no candidate or the text is empty.
pub fn response_text(response: &GenerateContentResponse) -> Option<String> {
    let content = response.candidates().first()?.content().as_ref()?;
    let text: String = content
        .parts()
        .iter()
        .filter(|part| !part.is_thought())
        .filter_map(|part| part.text().as_deref())
        .collect();
    (!text.is_empty()).then_some(text)
}

/// Parts of the first candidate in order, thought parts excluded.
pub fn response_parts(response: &GenerateContentResponse) -> Vec<ResponsePart> {
    let Some(content) = response
        .candidates()
        .first()
        .and_then(|candidate| candidate.content().as_ref())
    else {
        return Vec::new();
    };

    content
        .parts()
        .iter()
        .filter(|part| !part.is_thought())
        .filter_map(|part| {
            if let Some(blob) = part.inline_data() {
                let mime_type = (!blob.mime_type().is_empty()).then(|| blob.mime_type().clone());
                Some(ResponsePart::InlineData {
                    mime_type,
                    data: MediaSource::Base64(blob.data().clone()),
                })
            } else {
                part.text().clone().map(ResponsePart::Text)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(value).expect("valid response fixture")
    }

    #[test]
    fn structured_request_serializes_schema_config() {
        let req = StructuredTextRequest::builder()
            .prompt("rewrite")
            .response_schema(json!({"type": "OBJECT"}))
            .build()
            .unwrap();
        let body = serde_json::to_value(to_structured_request(&req)).unwrap();

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "rewrite");
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(body["generationConfig"]["responseSchema"]["type"], "OBJECT");
        assert!(body["generationConfig"].get("imageConfig").is_none());
    }

    #[test]
    fn image_request_serializes_aspect_ratio() {
        let req = ImageRequest::builder().prompt("draw").build().unwrap();
        let body = serde_json::to_value(to_image_request(&req)).unwrap();

        assert_eq!(body["generationConfig"]["imageConfig"]["aspectRatio"], "1:1");
        assert!(body["generationConfig"].get("responseSchema").is_none());
    }

    #[test]
    fn text_skips_thoughts_and_joins_parts() {
        let resp = response(json!({
            "candidates": [{"content": {"role": "model", "parts": [
                {"text": "thinking...", "thought": true},
                {"text": "{\"headline\":"},
                {"text": "\"H\"}"}
            ]}}]
        }));
        assert_eq!(response_text(&resp).as_deref(), Some("{\"headline\":\"H\"}"));
    }

    #[test]
    fn text_is_none_without_candidates() {
        assert!(response_text(&response(json!({}))).is_none());
        assert!(response_text(&response(json!({"candidates": [{}]}))).is_none());
        assert!(
            response_text(&response(
                json!({"candidates": [{"content": {"parts": [{"text": ""}]}}]})
            ))
            .is_none()
        );
    }

    #[test]
    fn parts_keep_order_and_kinds() {
        let resp = response(json!({
            "candidates": [{"content": {"parts": [
                {"text": "Here is your image"},
                {"inlineData": {"mimeType": "image/png", "data": "AAAA"}}
            ]}}]
        }));
        assert_eq!(
            response_parts(&resp),
            vec![
                ResponsePart::Text("Here is your image".to_string()),
                ResponsePart::InlineData {
                    mime_type: Some("image/png".to_string()),
                    data: MediaSource::Base64("AAAA".to_string()),
                },
            ]
        );
    }

    #[test]
    fn parts_empty_when_blocked() {
        let resp = response(json!({
            "candidates": [{"finishReason": "IMAGE_SAFETY"}]
        }));
        assert!(response_parts(&resp).is_empty());
    }
}
