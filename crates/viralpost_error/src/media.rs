//! Illustration payload errors.

/// A generated illustration could not be decoded or saved.
///
/// Only raised when the user asks to keep the image; generation itself
/// reports image trouble through the post's `image_error` instead.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Media Error: {} at line {} in {}", message, line, file)]
pub struct MediaError {
    /// Why the payload is unusable
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl MediaError {
    /// Create a MediaError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use viralpost_error::{MediaError, ViralpostError, ViralpostErrorKind};
    ///
    /// let err = ViralpostError::from(MediaError::new("post has no image to save"));
    /// assert!(matches!(err.kind(), ViralpostErrorKind::Media(_)));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
