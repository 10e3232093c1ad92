//! Model provider integrations for ViralPost.
//!
//! Each provider lives behind its own feature flag. Only Google Gemini is
//! implemented today.
//!
//! # Example
//!
//! ```no_run
//! use viralpost_models::GeminiClient;
//! use viralpost_interface::{StructuredText, StructuredTextRequest};
//! use serde_json::json;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new()?;
//! let request = StructuredTextRequest::builder()
//!     .prompt("Write a haiku as JSON")
//!     .response_schema(json!({"type": "OBJECT", "properties": {"haiku": {"type": "STRING"}}}))
//!     .build()?;
//! let json = client.generate_json(&request).await?;
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::{
    Blob, Candidate, Content, GeminiClient, GeminiResult, GenerateContentRequest,
    GenerateContentResponse, GenerationConfig, GenerationConfigBuilder, ImageConfig, Part,
    PromptFeedback,
};
