//! Post generation for ViralPost.
//!
//! [`PostGenerator`] runs the two-step pipeline against any driver that
//! implements both [`StructuredText`](viralpost_interface::StructuredText) and
//! [`ImageGeneration`](viralpost_interface::ImageGeneration):
//!
//! 1. Rewrite the caller's text into a schema-constrained post. Any failure
//!    here aborts with a [`GenerationError`](viralpost_error::GenerationError).
//! 2. Draw an illustration from the generated headline. Failures here are
//!    recorded on the post as `image_error` and never abort.
//!
//! Progress is reported through an optional [`StatusCallback`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cancel;
mod generator;
mod prompts;
mod scan;
mod status;
mod validation;

pub use cancel::Cancellation;
pub use generator::PostGenerator;
pub use prompts::{image_prompt, post_schema, text_prompt};
pub use scan::scan_image_parts;
pub use status::{StatusCallback, notify};
pub use validation::parse_post_text;
