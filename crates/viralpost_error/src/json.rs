//! Errors rendering records as JSON for `--json` and `config show`.

use std::fmt::Display;

/// A post or configuration could not be rendered as JSON.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: {} at line {} in {}", message, line, file)]
pub struct JsonError {
    /// Serializer message, prefixed with the record involved
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Create a JsonError at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// Serializing `record` failed with `cause`.
    ///
    /// # Examples
    ///
    /// ```
    /// use viralpost_error::JsonError;
    ///
    /// let err = JsonError::serialize("post", "key must be a string");
    /// assert_eq!(err.message, "failed to serialize post: key must be a string");
    /// ```
    #[track_caller]
    pub fn serialize(record: &str, cause: impl Display) -> Self {
        Self::new(format!("failed to serialize {}: {}", record, cause))
    }
}
