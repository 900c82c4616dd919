//! Global subscriber installation, kept in its own test binary

use weatherblend::config::LoggingConfig;
use weatherblend::logging;

/// A second install fails instead of replacing the first subscriber
#[test]
fn test_init_only_once() {
    let config = LoggingConfig {
        level: "warn".to_string(),
        format: "json".to_string(),
    };

    assert!(logging::init(&config).is_ok());
    assert!(logging::init(&config).is_err());
}
