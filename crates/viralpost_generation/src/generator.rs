//! The two-step post generation pipeline.

use std::future::Future;
use tracing::{debug, error, info, instrument, warn};

use viralpost_config::PostConfig;
use viralpost_core::{GenerationStatus, ImageOutcome, PostText, SocialPost, SourceText};
use viralpost_error::{
    GenerationError, GenerationErrorKind, GenerationResult, ViralpostError, ViralpostErrorKind,
};
use viralpost_interface::{ImageGeneration, ImageRequest, StructuredText, StructuredTextRequest};

use crate::cancel::Cancellation;
use crate::prompts::{image_prompt, post_schema, text_prompt};
use crate::scan::scan_image_parts;
use crate::status::{StatusCallback, notify};
use crate::validation::parse_post_text;

/// Turns source text into a [`SocialPost`] with a best-effort illustration.
///
/// The generator holds no per-call state; one instance may serve any number
/// of sequential or concurrent calls.
///
/// # Examples
///
/// ```no_run
/// use viralpost_config::PostConfig;
/// use viralpost_core::{GenerationStatus, SourceText};
/// use viralpost_generation::PostGenerator;
/// use viralpost_models::GeminiClient;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let generator = PostGenerator::new(GeminiClient::new()?, PostConfig::default());
/// let source = SourceText::new("Our coffee shop opens next week!")?;
///
/// let on_status = |status: GenerationStatus| eprintln!("{status}");
/// let post = generator.generate(&source, Some(&on_status)).await?;
/// println!("{}", post.headline());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PostGenerator<D> {
    driver: D,
    config: PostConfig,
}

impl<D> PostGenerator<D>
where
    D: StructuredText + ImageGeneration,
{
    /// Create a generator over `driver`.
    pub fn new(driver: D, config: PostConfig) -> Self {
        Self { driver, config }
    }

    /// The underlying model driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Post settings in effect.
    pub fn config(&self) -> &PostConfig {
        &self.config
    }

    /// Generate a post from `input`.
    ///
    /// Reports [`GenerationStatus::ComposingText`] before the text request and
    /// [`GenerationStatus::DrawingImage`] before the image request.
    ///
    /// # Errors
    ///
    /// Fails only when the text step fails. Image problems are recorded in
    /// the post's `image_error` instead.
    pub async fn generate(
        &self,
        input: &SourceText,
        on_status: Option<&StatusCallback<'_>>,
    ) -> GenerationResult<SocialPost> {
        self.run(input, on_status, None).await
    }

    /// Like [`generate`](Self::generate), aborting when `cancel` fires.
    ///
    /// Cancelling during the text step fails with
    /// [`GenerationErrorKind::Cancelled`]. Cancelling during the image step
    /// keeps the text and records the image as failed.
    pub async fn generate_with_cancellation(
        &self,
        input: &SourceText,
        on_status: Option<&StatusCallback<'_>>,
        cancel: &Cancellation,
    ) -> GenerationResult<SocialPost> {
        self.run(input, on_status, Some(cancel)).await
    }

    #[instrument(
        name = "generate_post",
        skip_all,
        fields(provider = self.driver.provider_name(), input_chars = input.char_count())
    )]
    async fn run(
        &self,
        input: &SourceText,
        on_status: Option<&StatusCallback<'_>>,
        cancel: Option<&Cancellation>,
    ) -> GenerationResult<SocialPost> {
        notify(on_status, GenerationStatus::ComposingText);
        let text = self.compose_text(input, cancel).await?;
        info!(
            headline = %text.headline,
            hashtags = text.hashtags.len(),
            "Post text generated"
        );

        let post = SocialPost::from(text);

        notify(on_status, GenerationStatus::DrawingImage);
        let outcome = self.draw_image(post.headline(), cancel).await;
        match outcome.error_message() {
            None => info!("Illustration attached"),
            Some(message) => warn!(image_error = %message, "Post finished without illustration"),
        }

        Ok(post.with_image(outcome))
    }

    /// Step 1: schema-constrained text.
    async fn compose_text(
        &self,
        input: &SourceText,
        cancel: Option<&Cancellation>,
    ) -> GenerationResult<PostText> {
        let request = StructuredTextRequest::builder()
            .prompt(text_prompt(input, &self.config))
            .response_schema(post_schema())
            .build()
            .map_err(|e| {
                error!(error = %e, "Failed to build text request");
                GenerationError::new(GenerationErrorKind::Failed)
            })?;

        let reply = until_cancelled(self.driver.generate_json(&request), cancel)
            .await
            .ok_or_else(|| {
                info!("Generation cancelled while composing text");
                GenerationError::new(GenerationErrorKind::Cancelled)
            })?;

        let payload = match reply {
            Ok(Some(payload)) if !payload.trim().is_empty() => payload,
            Ok(_) => {
                error!("Text generation returned no payload");
                return Err(GenerationError::new(GenerationErrorKind::Failed));
            }
            Err(e) => {
                error!(error = %e, "Text generation request failed");
                return Err(GenerationError::new(GenerationErrorKind::Failed));
            }
        };
        debug!(payload_length = payload.len(), "Text payload received");

        parse_post_text(&payload)
    }

    /// Step 2: best-effort illustration. Never fails.
    async fn draw_image(&self, headline: &str, cancel: Option<&Cancellation>) -> ImageOutcome {
        let request = match ImageRequest::builder()
            .prompt(image_prompt(headline, &self.config.aspect_ratio))
            .aspect_ratio(self.config.aspect_ratio.clone())
            .build()
        {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "Failed to build image request");
                return ImageOutcome::failed(e);
            }
        };

        match until_cancelled(self.driver.generate_image(&request), cancel).await {
            None => {
                info!("Generation cancelled while drawing image");
                ImageOutcome::failed("cancelled")
            }
            Some(Err(e)) => {
                warn!(error = %e, "Image generation failed");
                ImageOutcome::failed(error_summary(&e))
            }
            Some(Ok(response)) => {
                scan_image_parts(response.parts(), self.config.refusal_preview_chars)
            }
        }
    }
}

/// Await `future`, or return `None` if `cancel` fires first.
async fn until_cancelled<F: Future>(future: F, cancel: Option<&Cancellation>) -> Option<F::Output> {
    match cancel {
        None => Some(future.await),
        Some(token) => tokio::select! {
            biased;
            _ = token.cancelled() => None,
            output = future => Some(output),
        },
    }
}

/// Short description of a driver error, without source locations.
fn error_summary(err: &ViralpostError) -> String {
    match err.kind() {
        ViralpostErrorKind::Gemini(gemini) => gemini.kind.to_string(),
        ViralpostErrorKind::Generation(generation) => generation.message(),
        other => other.to_string(),
    }
}
