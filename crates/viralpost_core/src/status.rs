//! Progress values reported while a post is being generated.

use serde::{Deserialize, Serialize};

/// Current phase of a generation, shown to the user while they wait.
///
/// Only the most recent value matters; statuses are overwritten, never queued.
///
/// # Examples
///
/// ```
/// use viralpost_core::GenerationStatus;
///
/// assert_eq!(GenerationStatus::ComposingText.to_string(), "Composing viral copy...");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum GenerationStatus {
    /// Request accepted, nothing sent yet
    #[display("Getting ready...")]
    Preparing,
    /// Text generation request in flight
    #[display("Composing viral copy...")]
    ComposingText,
    /// Image generation request in flight
    #[display("Drawing an eye-catching image...")]
    DrawingImage,
}
