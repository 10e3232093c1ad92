//! Trait definitions for model backends and their capabilities.

use crate::{ImageRequest, ImageResponse, StructuredTextRequest};
use async_trait::async_trait;
use viralpost_error::ViralpostResult;

/// Core trait that every model backend implements.
pub trait ViralpostDriver: Send + Sync {
    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;
}

/// Backends that can produce text constrained to a JSON schema.
#[async_trait]
pub trait StructuredText: ViralpostDriver {
    /// Generate a JSON document for `req`.
    ///
    /// Returns `Ok(None)` when the model replied without any text payload.
    async fn generate_json(&self, req: &StructuredTextRequest) -> ViralpostResult<Option<String>>;
}

/// Backends that can synthesize images from a prompt.
#[async_trait]
pub trait ImageGeneration: ViralpostDriver {
    /// Generate an image for `req`.
    ///
    /// The reply's parts are returned in model order; a model may answer with
    /// explanatory text instead of image data.
    async fn generate_image(&self, req: &ImageRequest) -> ViralpostResult<ImageResponse>;
}
