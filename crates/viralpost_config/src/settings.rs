//! Configuration structures.

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use viralpost_error::{ConfigError, ViralpostError, ViralpostResult};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../viralpost.toml");

/// Connection settings for the Gemini API.
///
/// ```toml
/// [gemini]
/// base_url = "https://generativelanguage.googleapis.com/v1beta"
/// text_model = "gemini-3-flash-preview"
/// image_model = "gemini-2.5-flash-image"
/// api_key_env = ["GEMINI_API_KEY", "API_KEY"]
/// timeout_secs = 60
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// REST endpoint root, without a trailing slash
    pub base_url: String,

    /// Model used for the structured post text
    pub text_model: String,

    /// Model used for the illustration
    pub image_model: String,

    /// Environment variables holding the API key, checked in order
    pub api_key_env: Vec<String>,

    /// Per-request timeout; none means the transport default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            text_model: "gemini-3-flash-preview".to_string(),
            image_model: "gemini-2.5-flash-image".to_string(),
            api_key_env: vec!["GEMINI_API_KEY".to_string(), "API_KEY".to_string()],
            timeout_secs: None,
        }
    }
}

/// How posts are written and illustrated.
///
/// ```toml
/// [post]
/// language = "Traditional Chinese (Taiwan)"
/// min_hashtags = 3
/// max_hashtags = 5
/// aspect_ratio = "1:1"
/// refusal_preview_chars = 100
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PostConfig {
    /// Language and register the post is written in
    pub language: String,

    /// Fewest hashtags requested from the model
    pub min_hashtags: u32,

    /// Most hashtags requested from the model
    pub max_hashtags: u32,

    /// Illustration aspect ratio
    pub aspect_ratio: String,

    /// Characters of a refusal explanation kept in the image error
    pub refusal_preview_chars: usize,
}

impl Default for PostConfig {
    fn default() -> Self {
        Self {
            language: "Traditional Chinese (Taiwan)".to_string(),
            min_hashtags: 3,
            max_hashtags: 5,
            aspect_ratio: "1:1".to_string(),
            refusal_preview_chars: 100,
        }
    }
}

/// Top-level ViralPost configuration.
///
/// # Example
///
/// ```no_run
/// use viralpost_config::ViralpostConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ViralpostConfig::load()?;
/// println!("Text model: {}", config.gemini.text_model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct ViralpostConfig {
    /// Gemini API settings
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Post writing settings
    #[serde(default)]
    pub post: PostConfig,
}

impl ViralpostConfig {
    /// Load configuration with precedence: env > current dir > home dir > bundled default.
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if a present source cannot be parsed or the merged
    /// configuration fails validation.
    #[instrument]
    pub fn load() -> ViralpostResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/viralpost/viralpost.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("viralpost").required(false))
            .add_source(environment());

        Self::finish(builder)
    }

    /// Load configuration from a specific file layered over the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> ViralpostResult<Self> {
        debug!("Loading configuration from file");

        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()).required(true));

        Self::finish(builder)
    }

    fn finish(builder: config::ConfigBuilder<config::builder::DefaultState>) -> ViralpostResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| {
                ViralpostError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ViralpostError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gemini.base_url.trim().is_empty() {
            return Err(ConfigError::invalid("gemini.base_url", "must not be empty"));
        }
        if self.gemini.text_model.trim().is_empty() {
            return Err(ConfigError::invalid("gemini.text_model", "must not be empty"));
        }
        if self.gemini.image_model.trim().is_empty() {
            return Err(ConfigError::invalid("gemini.image_model", "must not be empty"));
        }
        if self.gemini.api_key_env.is_empty() {
            return Err(ConfigError::invalid(
                "gemini.api_key_env",
                "must name at least one variable",
            ));
        }
        if self.post.min_hashtags == 0 || self.post.min_hashtags > self.post.max_hashtags {
            return Err(ConfigError::invalid(
                "post.min_hashtags",
                format!(
                    "range {}-{} is empty or starts at zero",
                    self.post.min_hashtags, self.post.max_hashtags
                ),
            ));
        }
        if self.post.refusal_preview_chars == 0 {
            return Err(ConfigError::invalid(
                "post.refusal_preview_chars",
                "must be positive",
            ));
        }
        Ok(())
    }
}

/// `VIRALPOST_<SECTION>__<KEY>` variables.
///
/// Scalars are parsed from their text. `VIRALPOST_GEMINI__API_KEY_ENV` takes a
/// comma-separated list, e.g. `MY_KEY,GEMINI_API_KEY`.
fn environment() -> Environment {
    Environment::with_prefix("VIRALPOST")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("gemini.api_key_env")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_vars(vars: &[(&str, &str)]) -> ViralpostResult<ViralpostConfig> {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(environment().source(Some(vars)));
        ViralpostConfig::finish(builder)
    }

    #[test]
    fn env_overrides_key_variable_list() {
        let config = from_vars(&[("VIRALPOST_GEMINI__API_KEY_ENV", "MY_KEY,GEMINI_API_KEY")])
            .unwrap();
        assert_eq!(config.gemini.api_key_env, vec!["MY_KEY", "GEMINI_API_KEY"]);
    }

    #[test]
    fn env_overrides_scalars() {
        let config = from_vars(&[
            ("VIRALPOST_GEMINI__TEXT_MODEL", "gemini-2.5-flash"),
            ("VIRALPOST_POST__MAX_HASHTAGS", "8"),
        ])
        .unwrap();
        assert_eq!(config.gemini.text_model, "gemini-2.5-flash");
        assert_eq!(config.post.max_hashtags, 8);
        assert_eq!(config.gemini.api_key_env, vec!["GEMINI_API_KEY", "API_KEY"]);
    }

    #[test]
    fn validation_names_the_offending_key() {
        let mut config = ViralpostConfig::default();
        config.post.min_hashtags = 6;
        config.post.max_hashtags = 3;
        let err = config.validate().unwrap_err();
        assert!(err.message.starts_with("post.min_hashtags: range 6-3"));
    }
}
