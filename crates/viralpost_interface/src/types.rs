//! Request and response types shared by drivers and the orchestrator.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use viralpost_core::MediaSource;

/// A text generation request whose reply must match `response_schema`.
///
/// # Examples
///
/// ```
/// use viralpost_interface::StructuredTextRequest;
/// use serde_json::json;
///
/// let request = StructuredTextRequest::builder()
///     .prompt("Rewrite this as a post")
///     .response_schema(json!({"type": "OBJECT"}))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.response_mime_type(), "application/json");
/// assert!(request.model().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct StructuredTextRequest {
    /// Full instructional prompt
    prompt: String,
    /// Schema the reply must follow, in the provider's schema dialect
    response_schema: serde_json::Value,
    /// MIME type requested for the reply
    #[builder(default = "\"application/json\".to_string()")]
    response_mime_type: String,
    /// Model override; the driver's default is used when absent
    #[builder(default)]
    model: Option<String>,
}

impl StructuredTextRequest {
    /// Creates a new builder for `StructuredTextRequest`.
    pub fn builder() -> StructuredTextRequestBuilder {
        StructuredTextRequestBuilder::default()
    }
}

/// An image generation request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ImageRequest {
    /// Description of the image to draw
    prompt: String,
    /// Aspect ratio such as `"1:1"`
    #[builder(default = "\"1:1\".to_string()")]
    aspect_ratio: String,
    /// Model override; the driver's default is used when absent
    #[builder(default)]
    model: Option<String>,
}

impl ImageRequest {
    /// Creates a new builder for `ImageRequest`.
    pub fn builder() -> ImageRequestBuilder {
        ImageRequestBuilder::default()
    }
}

/// One piece of an image generation reply.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResponsePart {
    /// Inline binary data, normally the generated image
    InlineData {
        /// MIME type reported by the model
        mime_type: Option<String>,
        /// Image payload
        data: MediaSource,
    },
    /// Explanatory text, typically a refusal
    Text(String),
}

/// Reply to an [`ImageRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ImageResponse {
    /// Reply parts in model order
    parts: Vec<ResponsePart>,
}

impl ImageResponse {
    /// Wrap reply parts.
    pub fn new(parts: Vec<ResponsePart>) -> Self {
        Self { parts }
    }

    /// Consume the response, yielding its parts.
    pub fn into_parts(self) -> Vec<ResponsePart> {
        self.parts
    }
}
