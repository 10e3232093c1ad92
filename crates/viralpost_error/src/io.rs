//! Errors reading source text and writing saved images or post text.

use std::fmt::Display;
use std::path::Path;

/// Reading the input or writing an output file failed.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("IO Error: {} at line {} in {}", message, line, file)]
pub struct IoError {
    /// What failed, including the path involved
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl IoError {
    /// Create an IoError at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// `action` ("read", "write") on `path` failed with `cause`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use viralpost_error::IoError;
    ///
    /// let err = IoError::at_path("read", Path::new("launch.txt"), "No such file or directory");
    /// assert_eq!(err.message, "Failed to read launch.txt: No such file or directory");
    /// ```
    #[track_caller]
    pub fn at_path(action: &str, path: &Path, cause: impl Display) -> Self {
        Self::new(format!("Failed to {} {}: {}", action, path.display(), cause))
    }
}
