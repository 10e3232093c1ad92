//! Logging setup for the `viralpost` binary.
//!
//! Logs always go to stderr so stdout stays clean for the post itself.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn";

/// Default filter with `--verbose`.
const VERBOSE_FILTER: &str = "info,viralpost=debug,viralpost_generation=debug,viralpost_models=debug,viralpost_config=debug";

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `verbose`. With `json` set, events are
/// written as one JSON object per line.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(verbose: bool, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER })
    });

    let json_layer = json.then(|| fmt::layer().json().with_writer(std::io::stderr));
    let text_layer = (!json).then(|| {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()?;

    Ok(())
}
