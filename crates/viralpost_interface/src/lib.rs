//! Trait definitions for ViralPost model drivers.
//!
//! A driver wraps one model-serving API. Post generation needs two
//! capabilities from it: schema-constrained text and image synthesis.

mod traits;
mod types;

pub use traits::{ImageGeneration, StructuredText, ViralpostDriver};
pub use types::{
    ImageRequest, ImageRequestBuilder, ImageResponse, ResponsePart, StructuredTextRequest,
    StructuredTextRequestBuilder,
};
