//! Core data types for ViralPost.
//!
//! This crate provides the record types shared by the generation pipeline and
//! the presentation layer: the caller's source text, the generated
//! [`SocialPost`], progress [`GenerationStatus`] values and the image payload
//! helpers used to build and decode `data:` URLs.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod media;
mod outcome;
mod post;
mod source;
mod status;

pub use media::{MediaSource, PNG_DATA_URL_PREFIX, decode_png_data_url, png_data_url};
pub use outcome::{
    IMAGE_MISSING_MESSAGE, IMAGE_REFUSED_PREFIX, IMAGE_UNAVAILABLE_PREFIX, ImageOutcome,
};
pub use post::{PostText, SocialPost};
pub use source::SourceText;
pub use status::GenerationStatus;
