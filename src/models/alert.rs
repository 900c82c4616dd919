//! Weather alert model

use super::observation::EpochMillis;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Alert severity, ordered from most to least severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Extreme,
    Severe,
    Moderate,
    Minor,
    #[default]
    #[serde(other)]
    Unknown,
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AlertSeverity::Extreme => "extreme",
            AlertSeverity::Severe => "severe",
            AlertSeverity::Moderate => "moderate",
            AlertSeverity::Minor => "minor",
            AlertSeverity::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// An active weather alert issued by one provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherAlert {
    /// Event name (e.g. "Flood Warning")
    pub event: String,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub severity: AlertSeverity,
    /// Start of validity
    pub start: EpochMillis,
    /// End of validity
    pub end: EpochMillis,
    /// Issuing provider
    #[serde(default)]
    pub source: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(AlertSeverity::Extreme < AlertSeverity::Severe);
        assert!(AlertSeverity::Severe < AlertSeverity::Moderate);
        assert!(AlertSeverity::Moderate < AlertSeverity::Minor);
        assert!(AlertSeverity::Minor < AlertSeverity::Unknown);
    }

    #[test]
    fn test_unrecognized_severity_is_unknown() {
        let severity: AlertSeverity = serde_json::from_str(r#""catastrophic""#).unwrap();
        assert_eq!(severity, AlertSeverity::Unknown);
        assert_eq!(severity.to_string(), "unknown");
    }
}
