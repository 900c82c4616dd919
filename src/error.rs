//! Error types for the `WeatherBlend` library
//!
//! The aggregation core itself is infallible: missing fields and failed
//! providers degrade the result instead of failing it. These errors cover the
//! ambient layers around it (configuration, payload parsing, logging setup).

use thiserror::Error;

/// Main error type for the `WeatherBlend` library
#[derive(Error, Debug)]
pub enum WeatherBlendError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Provider payload could not be decoded
    #[error("Parse error: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    /// General library errors
    #[error("Error: {message}")]
    General { message: String },
}

impl WeatherBlendError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WeatherBlendError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            WeatherBlendError::Parse { .. } => {
                "A weather provider returned data in an unexpected format.".to_string()
            }
            WeatherBlendError::General { message } => message.clone(),
        }
    }
}
