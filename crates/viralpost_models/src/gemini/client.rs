//! Google Gemini REST client.
//!
//! # Example
//!
//! ```no_run
//! use viralpost_models::GeminiClient;
//! use viralpost_interface::{ImageGeneration, ImageRequest};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new()?;
//! let request = ImageRequest::builder()
//!     .prompt("A lighthouse at dawn, flat illustration")
//!     .build()?;
//! let response = client.generate_image(&request).await?;
//! println!("{} parts", response.parts().len());
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use reqwest::Client;
use std::env;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use viralpost_config::{GeminiConfig, ViralpostConfig};
use viralpost_error::{GeminiError, GeminiErrorKind, ViralpostResult};
use viralpost_interface::{
    ImageGeneration, ImageRequest, ImageResponse, StructuredText, StructuredTextRequest,
    ViralpostDriver,
};

use super::GeminiResult;
use super::conversion;
use super::dto::{ApiErrorBody, GenerateContentRequest, GenerateContentResponse};

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Client for the Gemini `generateContent` REST endpoint.
///
/// One client serves both the text model and the image model; requests may
/// override either through their `model` field.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    text_model: String,
    image_model: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("text_model", &self.text_model)
            .field("image_model", &self.image_model)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client from the layered ViralPost configuration.
    ///
    /// Reads the API key from the first configured environment variable that
    /// is set (`GEMINI_API_KEY`, then `API_KEY` by default).
    ///
    /// # Errors
    ///
    /// Fails if configuration cannot be loaded, no API key is set, or the
    /// HTTP client cannot be built.
    #[instrument(name = "gemini_client_new")]
    pub fn new() -> ViralpostResult<Self> {
        let config = ViralpostConfig::load()?;
        Self::from_config(&config.gemini).map_err(Into::into)
    }

    /// Create a client from explicit Gemini settings, reading the key from the environment.
    #[instrument(name = "gemini_client_from_config", skip(config), fields(base_url = %config.base_url))]
    pub fn from_config(config: &GeminiConfig) -> GeminiResult<Self> {
        let api_key = config
            .api_key_env
            .iter()
            .find_map(|name| env::var(name).ok().filter(|key| !key.trim().is_empty()))
            .ok_or_else(|| {
                GeminiError::new(GeminiErrorKind::MissingApiKey(config.api_key_env.join(" or ")))
            })?;

        Self::with_api_key(api_key, config)
    }

    /// Create a client with a specific API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    #[instrument(name = "gemini_client_with_api_key", skip_all)]
    pub fn with_api_key(api_key: impl Into<String>, config: &GeminiConfig) -> GeminiResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            text_model: config.text_model.clone(),
            image_model: config.image_model.clone(),
        })
    }

    /// Default model for structured text.
    pub fn text_model(&self) -> &str {
        &self.text_model
    }

    /// Default model for images.
    pub fn image_model(&self) -> &str {
        &self.image_model
    }

    /// URL of the `generateContent` method for `model`.
    ///
    /// Accepts both bare names and the API's `models/` resource form.
    fn endpoint(&self, model: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    /// Send one `generateContent` call and decode the reply.
    async fn generate_content(
        &self,
        model: &str,
        body: &GenerateContentRequest,
    ) -> GeminiResult<GenerateContentResponse> {
        let url = self.endpoint(model);
        debug!(url = %url, "Sending Gemini generateContent request");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = Self::error_message(&error_text);
            warn!(status = status.as_u16(), message = %message, "Gemini request rejected");
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            }));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;

        serde_json::from_slice(&bytes)
            .map_err(|e| GeminiError::new(GeminiErrorKind::ResponseDecode(e.to_string())))
    }

    /// Extract the human-readable message from an error body, falling back to the raw text.
    fn error_message(body: &str) -> String {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(envelope) => match envelope.error.status {
                Some(status) => format!("{}: {}", status, envelope.error.message),
                None => envelope.error.message,
            },
            Err(_) => body.trim().to_string(),
        }
    }
}

impl ViralpostDriver for GeminiClient {
    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}

#[async_trait]
impl StructuredText for GeminiClient {
    #[instrument(skip(self, req), fields(model))]
    async fn generate_json(&self, req: &StructuredTextRequest) -> ViralpostResult<Option<String>> {
        let model = req.model().as_deref().unwrap_or(&self.text_model);
        tracing::Span::current().record("model", model);

        let body = conversion::to_structured_request(req);
        let response = self.generate_content(model, &body).await?;

        if let Some(reason) = response
            .prompt_feedback()
            .as_ref()
            .and_then(|feedback| feedback.block_reason().as_deref())
        {
            warn!(reason, "Text prompt was blocked");
        }

        Ok(conversion::response_text(&response))
    }
}

#[async_trait]
impl ImageGeneration for GeminiClient {
    #[instrument(skip(self, req), fields(model, aspect_ratio = %req.aspect_ratio()))]
    async fn generate_image(&self, req: &ImageRequest) -> ViralpostResult<ImageResponse> {
        let model = req.model().as_deref().unwrap_or(&self.image_model);
        tracing::Span::current().record("model", model);

        let body = conversion::to_image_request(req);
        let response = self.generate_content(model, &body).await?;

        if let Some(reason) = response
            .candidates()
            .first()
            .and_then(|candidate| candidate.finish_reason().as_deref())
        {
            debug!(reason, "Image generation finished");
        }

        Ok(ImageResponse::new(conversion::response_parts(&response)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> GeminiClient {
        let config = GeminiConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        };
        GeminiClient::with_api_key("test-key", &config).unwrap()
    }

    #[test]
    fn endpoint_accepts_bare_and_prefixed_models() {
        let client = client("https://example.test/v1beta/");
        assert_eq!(
            client.endpoint("gemini-2.5-flash-image"),
            "https://example.test/v1beta/models/gemini-2.5-flash-image:generateContent"
        );
        assert_eq!(
            client.endpoint("models/gemini-3-flash-preview"),
            "https://example.test/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn error_message_reads_api_envelope() {
        let body = r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(
            GeminiClient::error_message(body),
            "INVALID_ARGUMENT: API key not valid."
        );
        assert_eq!(GeminiClient::error_message(" upstream timeout \n"), "upstream timeout");
    }

    #[test]
    fn debug_output_hides_api_key() {
        let rendered = format!("{:?}", client("https://example.test"));
        assert!(!rendered.contains("test-key"));
        assert!(rendered.contains("gemini-3-flash-preview"));
    }
}
