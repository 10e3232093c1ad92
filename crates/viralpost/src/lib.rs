//! ViralPost - rewrite any text into a viral social-media post.
//!
//! ViralPost sends the caller's text to a generative model twice: once for a
//! structured post (headline, body, call-to-action, hashtags) and once for a
//! matching illustration. The image step is best-effort; if it fails the post
//! is still returned with an explanation in `image_error`.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use viralpost::{GeminiClient, PostGenerator, SourceText, ViralpostConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ViralpostConfig::load()?;
//!     let client = GeminiClient::from_config(&config.gemini)?;
//!     let generator = PostGenerator::new(client, config.post);
//!
//!     let post = generator
//!         .generate(&SourceText::new("Our coffee shop opens next week!")?, None)
//!         .await?;
//!     println!("{}", post.clipboard_text());
//!     Ok(())
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `gemini` (default) - Google Gemini driver and the `viralpost` binary
//! - `api` - enables tests that call the real API
//!
//! # Architecture
//!
//! - `viralpost_error` - Error types
//! - `viralpost_core` - Post record, source text, status values, image helpers
//! - `viralpost_interface` - Driver traits and request types
//! - `viralpost_config` - Layered configuration
//! - `viralpost_models` - Gemini REST driver
//! - `viralpost_generation` - The two-step orchestrator
//!
//! This crate re-exports everything for convenience and adds the terminal
//! presentation helpers used by the binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use viralpost_config::*;
pub use viralpost_core::*;
pub use viralpost_error::*;
pub use viralpost_generation::*;
pub use viralpost_interface::*;

#[cfg(feature = "gemini")]
pub use viralpost_models::*;

pub mod presentation;
pub mod telemetry;
