//! Google Gemini REST API client.
//!
//! [`GeminiClient`] talks to the `generateContent` endpoint for both
//! capabilities ViralPost needs:
//! - schema-constrained JSON text (`responseMimeType` + `responseSchema`)
//! - image synthesis (`imageConfig.aspectRatio`), returning inline image parts

mod client;
mod conversion;
mod dto;

pub use client::GeminiClient;
pub use dto::{
    Blob, Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    GenerationConfigBuilder, ImageConfig, Part, PromptFeedback,
};

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, viralpost_error::GeminiError>;
