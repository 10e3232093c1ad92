//! Settings errors: unreadable sources and out-of-range values.

use std::fmt::Display;

/// A configuration source could not be loaded, or a loaded value is unusable.
///
/// Messages for a specific setting start with its dotted key, e.g.
/// `post.min_hashtags`, so users can find the line in `viralpost.toml`.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What is wrong with the configuration
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a ConfigError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use viralpost_error::ConfigError;
    ///
    /// let err = ConfigError::new("Failed to parse configuration: invalid TOML");
    /// assert!(err.to_string().starts_with("Configuration Error: Failed to parse"));
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

    /// Reject the value of the setting `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use viralpost_error::ConfigError;
    ///
    /// let err = ConfigError::invalid("post.min_hashtags", "range 6-3 is empty");
    /// assert_eq!(err.message, "post.min_hashtags: range 6-3 is empty");
    /// ```
    #[track_caller]
    pub fn invalid(key: &str, reason: impl Display) -> Self {
        Self::new(format!("{}: {}", key, reason))
    }
}
