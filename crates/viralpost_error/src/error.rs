//! Top-level error wrapper types.

use crate::{ConfigError, GeminiError, GenerationError, IoError, JsonError, MediaError};

/// Every failure a ViralPost crate can report.
///
/// # Examples
///
/// ```
/// use viralpost_error::{ViralpostError, JsonError};
///
/// let json_err = JsonError::new("trailing comma");
/// let err: ViralpostError = json_err.into();
/// assert!(format!("{}", err).contains("JSON Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ViralpostErrorKind {
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Filesystem error
    #[from(IoError)]
    Io(IoError),
    /// Image payload error
    #[from(MediaError)]
    Media(MediaError),
    /// Gemini API error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Post generation error
    #[from(GenerationError)]
    Generation(GenerationError),
}

/// ViralPost error with kind discrimination.
///
/// # Examples
///
/// ```
/// use viralpost_error::{ConfigError, ViralpostResult};
///
/// fn might_fail() -> ViralpostResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("ViralPost Error: {}", _0)]
pub struct ViralpostError(Box<ViralpostErrorKind>);

impl ViralpostError {
    /// Create a new error from a kind.
    pub fn new(kind: ViralpostErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ViralpostErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to ViralpostErrorKind
impl<T> From<T> for ViralpostError
where
    T: Into<ViralpostErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for ViralPost operations.
pub type ViralpostResult<T> = std::result::Result<T, ViralpostError>;
