//! Post generation error types.
//!
//! These are the only errors the orchestrator surfaces to its caller. Transport
//! and decoding detail is logged where it happens and collapsed into
//! [`GenerationErrorKind::Failed`] before it reaches this type.

/// Conditions that abort a post generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// Text generation failed; the user-facing message never carries the cause
    #[display("Generation failed, please retry later or check your API key.")]
    Failed,
    /// The model replied with JSON that does not have the post shape
    #[display("The model returned a malformed post: {}", _0)]
    MalformedResponse(String),
    /// Input text was blank
    #[display("Input text must not be empty")]
    EmptyInput,
    /// The caller cancelled the generation before text was produced
    #[display("Generation was cancelled")]
    Cancelled,
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use viralpost_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::Failed);
/// assert!(err.message().contains("retry"));
/// assert_eq!(err.kind(), &GenerationErrorKind::Failed);
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GenerationErrorKind {
        &self.kind
    }

    /// Human-readable message suitable for an error banner.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// Result type for post generation.
pub type GenerationResult<T> = std::result::Result<T, GenerationError>;
