//! Error types for ViralPost.
//!
//! Every crate in the workspace reports failures through the types defined here.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use viralpost_error::{IoError, ViralpostResult};
//!
//! fn fetch_data() -> ViralpostResult<String> {
//!     Err(IoError::new("input.txt: permission denied"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod gemini;
mod generation;
mod io;
mod json;
mod media;

pub use config::ConfigError;
pub use error::{ViralpostError, ViralpostErrorKind, ViralpostResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use generation::{GenerationError, GenerationErrorKind, GenerationResult};
pub use io::IoError;
pub use json::JsonError;
pub use media::MediaError;
