//! Result of the best-effort image step.

use serde::{Deserialize, Serialize};

/// Prefix of the message recorded when the model explains instead of drawing.
pub const IMAGE_REFUSED_PREFIX: &str = "AI could not generate an image: ";

/// Prefix of the message recorded when the image request itself failed.
pub const IMAGE_UNAVAILABLE_PREFIX: &str = "Image service temporarily unavailable";

/// Message recorded when the reply carried neither an image nor an explanation.
pub const IMAGE_MISSING_MESSAGE: &str = "Image generation failed: no image data returned.";

/// How the image step ended.
///
/// Exactly one outcome is attached to each [`SocialPost`](crate::SocialPost).
///
/// # Examples
///
/// ```
/// use viralpost_core::ImageOutcome;
///
/// let refused = ImageOutcome::refused("I can't draw that.", 100);
/// assert_eq!(
///     refused.error_message().as_deref(),
///     Some("AI could not generate an image: I can't draw that.")
/// );
/// assert!(refused.image_url().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ImageOutcome {
    /// An inline image was returned
    Image {
        /// PNG `data:` URL
        data_url: String,
    },
    /// The model answered with text instead of an image
    Refused {
        /// Leading characters of the model's explanation
        explanation: String,
    },
    /// The request failed before a usable reply arrived
    Failed {
        /// Failure detail shown alongside the fallback panel
        reason: String,
    },
    /// The reply contained no image and no explanation
    Missing,
}

impl ImageOutcome {
    /// Build a refusal keeping at most `max_chars` characters of `text`.
    pub fn refused(text: &str, max_chars: usize) -> Self {
        ImageOutcome::Refused {
            explanation: text.chars().take(max_chars).collect(),
        }
    }

    /// Build a failure outcome from any displayable cause.
    pub fn failed(reason: impl std::fmt::Display) -> Self {
        ImageOutcome::Failed {
            reason: reason.to_string(),
        }
    }

    /// The image URL, when an image was produced.
    pub fn image_url(&self) -> Option<&str> {
        match self {
            ImageOutcome::Image { data_url } => Some(data_url),
            _ => None,
        }
    }

    /// The user-facing error text, when no image was produced.
    pub fn error_message(&self) -> Option<String> {
        match self {
            ImageOutcome::Image { .. } => None,
            ImageOutcome::Refused { explanation } => {
                Some(format!("{}{}", IMAGE_REFUSED_PREFIX, explanation))
            }
            ImageOutcome::Failed { reason } => {
                let reason = if reason.trim().is_empty() {
                    "Unknown error"
                } else {
                    reason.as_str()
                };
                Some(format!("{} ({})", IMAGE_UNAVAILABLE_PREFIX, reason))
            }
            ImageOutcome::Missing => Some(IMAGE_MISSING_MESSAGE.to_string()),
        }
    }
}
