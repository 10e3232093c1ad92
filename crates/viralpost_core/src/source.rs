//! Caller-supplied source text.

use serde::Serialize;
use viralpost_error::{GenerationError, GenerationErrorKind, GenerationResult};

/// Free-form text to rewrite into a post. Never blank.
///
/// The text is kept verbatim; only the emptiness check trims.
///
/// # Examples
///
/// ```
/// use viralpost_core::SourceText;
///
/// let text = SourceText::new("Our coffee shop opens next week!").unwrap();
/// assert_eq!(text.as_str(), "Our coffee shop opens next week!");
/// assert!(SourceText::new("   \n").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub struct SourceText(String);

impl SourceText {
    /// Validate and wrap `text`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationErrorKind::EmptyInput`] if the text is empty after trimming.
    #[track_caller]
    pub fn new(text: impl Into<String>) -> GenerationResult<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::EmptyInput));
        }
        Ok(Self(text))
    }

    /// The text as given.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters (not bytes) in the text.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    /// Unwrap into the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for SourceText {
    type Error = GenerationError;

    #[track_caller]
    fn try_from(value: String) -> GenerationResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for SourceText {
    type Error = GenerationError;

    #[track_caller]
    fn try_from(value: &str) -> GenerationResult<Self> {
        Self::new(value)
    }
}

impl AsRef<str> for SourceText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
