//! Reconciled output shapes
//!
//! Every numeric field of an aggregate is a [`ReconciledMetric`] rather than a
//! bare number, so consumers always see the spread and the agreement behind
//! the representative value.

use super::alert::WeatherAlert;
use super::location::Location;
use super::observation::EpochMillis;
use super::provider::ProviderResult;
use crate::units;
use serde::{Deserialize, Serialize};

/// Consensus for one numeric field across providers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconciledMetric {
    /// Median of the contributing values
    pub value: f64,
    pub min: f64,
    pub max: f64,
    /// Agreement score, 0-100
    pub confidence: u8,
    /// Providers that contributed a usable value
    pub source_count: usize,
}

impl ReconciledMetric {
    /// Result when no provider reported the field
    pub const EMPTY: Self = Self {
        value: 0.0,
        min: 0.0,
        max: 0.0,
        confidence: 0,
        source_count: 0,
    };

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.source_count == 0
    }

    /// Spread between the lowest and highest reported value
    #[must_use]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

impl Default for ReconciledMetric {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Consensus for a textual condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciledCondition {
    pub label: String,
    /// Share of votes won by `label`, 0-100
    pub confidence: f64,
}

impl ReconciledCondition {
    pub const UNKNOWN_LABEL: &'static str = "Unknown";

    /// Result when no provider described the conditions
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            label: Self::UNKNOWN_LABEL.to_string(),
            confidence: 0.0,
        }
    }
}

/// Reconciled current conditions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedSnapshot {
    pub temperature: ReconciledMetric,
    pub feels_like: ReconciledMetric,
    pub condition: String,
    pub condition_confidence: f64,
    pub humidity: ReconciledMetric,
    pub pressure: ReconciledMetric,
    pub wind_speed: ReconciledMetric,
    pub wind_degree: ReconciledMetric,
    pub cloud_cover: ReconciledMetric,
    pub visibility: ReconciledMetric,
    pub uv_index: ReconciledMetric,
    pub dew_point: ReconciledMetric,
    pub precipitation: ReconciledMetric,
    /// Providers that supplied a current snapshot
    pub source_count: usize,
    /// When the aggregation ran
    pub timestamp: EpochMillis,
}

impl AggregatedSnapshot {
    /// 16-point compass label for the reconciled wind direction
    #[must_use]
    pub fn wind_direction_cardinal(&self) -> Option<&'static str> {
        if self.wind_degree.is_empty() {
            None
        } else {
            Some(units::degrees_to_cardinal(self.wind_degree.value))
        }
    }
}

/// Reconciled values for one hour bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedHourlyPoint {
    /// Start of the hour
    pub time: EpochMillis,
    pub temperature: ReconciledMetric,
    pub feels_like: ReconciledMetric,
    pub condition: String,
    pub precipitation_chance: ReconciledMetric,
    pub precipitation_amount: ReconciledMetric,
    pub humidity: ReconciledMetric,
    pub wind_speed: ReconciledMetric,
    pub wind_degree: ReconciledMetric,
    /// Providers with a record in this hour, in input order
    pub sources: Vec<String>,
}

/// Reconciled values for one day bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedDailyPoint {
    /// Start of the UTC day
    pub date: EpochMillis,
    pub temp_max: ReconciledMetric,
    pub temp_min: ReconciledMetric,
    pub condition: String,
    pub precipitation_chance: ReconciledMetric,
    pub precipitation_amount: ReconciledMetric,
    pub humidity: ReconciledMetric,
    pub wind_speed: ReconciledMetric,
    pub uv_index: ReconciledMetric,
    /// Providers with a record on this day, in input order
    pub sources: Vec<String>,
}

/// Everything known about one location after a fetch round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub location: Location,
    /// Raw provider results the aggregates were computed from
    pub sources: Vec<ProviderResult>,
    pub current: Option<AggregatedSnapshot>,
    pub hourly: Vec<AggregatedHourlyPoint>,
    pub daily: Vec<AggregatedDailyPoint>,
    pub alerts: Vec<WeatherAlert>,
    pub successful_sources: usize,
    pub total_sources: usize,
    pub last_updated: EpochMillis,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_metric_sentinel() {
        let metric = ReconciledMetric::default();
        assert!(metric.is_empty());
        assert_eq!(metric.value, 0.0);
        assert_eq!(metric.confidence, 0);
        assert_eq!(metric.range(), 0.0);
    }

    #[test]
    fn test_metric_serializes_camel_case() {
        let metric = ReconciledMetric {
            value: 20.0,
            min: 19.0,
            max: 22.0,
            confidence: 91,
            source_count: 3,
        };
        let json = serde_json::to_value(metric).unwrap();
        assert_eq!(json["sourceCount"], 3);
        assert_eq!(json["confidence"], 91);
    }

    #[test]
    fn test_unknown_condition() {
        let condition = ReconciledCondition::unknown();
        assert_eq!(condition.label, "Unknown");
        assert_eq!(condition.confidence, 0.0);
    }
}
