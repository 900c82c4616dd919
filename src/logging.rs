//! Tracing subscriber setup

use crate::config::LoggingConfig;
use crate::WeatherBlendError;
use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber.
///
/// `RUST_LOG` wins over the configured level when set. Fails if a global
/// subscriber is already installed.
pub fn init(config: &LoggingConfig) -> crate::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| level_filter(&config.level))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = match config.format.as_str() {
        "json" => builder.json().try_init(),
        _ => builder.pretty().try_init(),
    };

    result.map_err(|e| WeatherBlendError::general(format!("Failed to install tracing subscriber: {e}")))
}

fn level_filter(level: &str) -> crate::Result<EnvFilter> {
    EnvFilter::try_new(level)
        .map_err(|e| WeatherBlendError::config(format!("Invalid log filter: {e}")))
}
