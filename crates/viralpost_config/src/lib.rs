//! Configuration for ViralPost.
//!
//! Settings are layered with the `config` crate:
//! 1. Bundled defaults (`viralpost.toml` shipped with this crate)
//! 2. `~/.config/viralpost/viralpost.toml`
//! 3. `./viralpost.toml`
//! 4. `VIRALPOST_<SECTION>__<KEY>` environment variables (lists comma-separated)
//!
//! Later sources override earlier ones.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod settings;

pub use settings::{GeminiConfig, PostConfig, ViralpostConfig};
