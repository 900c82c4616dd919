//! Per-provider observation records in the common schema
//!
//! Collaborators normalize every provider payload into these shapes before
//! aggregation: temperatures in Celsius, speeds in m/s, pressure in hPa,
//! distances in metres and timestamps in epoch milliseconds (UTC). Any
//! numeric field may be absent when a provider does not report it.

use serde::{Deserialize, Serialize};

/// Epoch milliseconds, UTC
pub type EpochMillis = i64;

/// Current conditions reported by one provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrentObservation {
    /// Temperature in Celsius
    pub temperature: Option<f64>,
    /// Apparent temperature in Celsius
    pub feels_like: Option<f64>,
    /// Human-readable description of conditions
    pub condition: Option<String>,
    /// Provider-specific condition code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_code: Option<String>,
    /// Relative humidity (0-100)
    pub humidity: Option<f64>,
    /// Pressure in hPa
    pub pressure: Option<f64>,
    /// Wind speed in m/s
    pub wind_speed: Option<f64>,
    /// Wind direction in degrees from north
    pub wind_degree: Option<f64>,
    /// Provider's own cardinal label, if it sends one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_direction: Option<String>,
    /// Cloud cover (0-100)
    pub cloud_cover: Option<f64>,
    /// Visibility in metres
    pub visibility: Option<f64>,
    pub uv_index: Option<f64>,
    /// Dew point in Celsius
    pub dew_point: Option<f64>,
    /// Precipitation in mm
    pub precipitation: Option<f64>,
    /// Observation time
    pub timestamp: EpochMillis,
}

/// One hourly forecast entry from one provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyObservation {
    /// Forecast instant
    pub time: EpochMillis,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub feels_like: Option<f64>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_code: Option<String>,
    /// Chance of precipitation (0-100)
    #[serde(default)]
    pub precipitation_chance: Option<f64>,
    /// Precipitation amount in mm
    #[serde(default)]
    pub precipitation_amount: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub wind_speed: Option<f64>,
    #[serde(default)]
    pub wind_degree: Option<f64>,
}

/// One daily forecast entry from one provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyObservation {
    /// Any instant within the forecast day
    pub date: EpochMillis,
    #[serde(default)]
    pub temp_max: Option<f64>,
    #[serde(default)]
    pub temp_min: Option<f64>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_code: Option<String>,
    #[serde(default)]
    pub precipitation_chance: Option<f64>,
    #[serde(default)]
    pub precipitation_amount: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub wind_speed: Option<f64>,
    #[serde(default)]
    pub uv_index: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunrise: Option<EpochMillis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunset: Option<EpochMillis>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let hourly: HourlyObservation =
            serde_json::from_str(r#"{"time": 3600000, "temperature": 12.5}"#).unwrap();
        assert_eq!(hourly.time, 3_600_000);
        assert_eq!(hourly.temperature, Some(12.5));
        assert!(hourly.humidity.is_none());
        assert!(hourly.condition.is_none());
    }

    #[test]
    fn test_camel_case_field_names() {
        let daily: DailyObservation = serde_json::from_str(
            r#"{"date": 0, "tempMax": 21.0, "tempMin": 9.5, "precipitationChance": 40, "uvIndex": 3}"#,
        )
        .unwrap();
        assert_eq!(daily.temp_max, Some(21.0));
        assert_eq!(daily.temp_min, Some(9.5));
        assert_eq!(daily.precipitation_chance, Some(40.0));
        assert_eq!(daily.uv_index, Some(3.0));
    }

    #[test]
    fn test_current_defaults_when_empty() {
        let current: CurrentObservation = serde_json::from_str("{}").unwrap();
        assert_eq!(current, CurrentObservation::default());
    }
}
