//! Configuration command handler.

use std::path::Path;
use viralpost::{JsonError, ViralpostConfig, ViralpostResult};

/// Load configuration from `path`, or from the default search path.
pub fn load_config(path: Option<&Path>) -> ViralpostResult<ViralpostConfig> {
    match path {
        Some(path) => ViralpostConfig::from_file(path),
        None => ViralpostConfig::load(),
    }
}

/// Print the effective configuration as JSON.
pub fn show_config(path: Option<&Path>) -> ViralpostResult<()> {
    let config = load_config(path)?;
    let json = serde_json::to_string_pretty(&config)
        .map_err(|e| JsonError::serialize("configuration", e))?;
    println!("{}", json);
    Ok(())
}
