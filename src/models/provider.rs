//! One provider's outcome for a single location request

use super::alert::WeatherAlert;
use super::observation::{CurrentObservation, DailyObservation, EpochMillis, HourlyObservation};
use crate::Result;
use serde::{Deserialize, Serialize};

/// Normalized result handed over by a fetch collaborator
///
/// A failed fetch is still a `ProviderResult` (with `success == false`), so
/// the aggregators can report how many providers were asked in total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderResult {
    /// Provider identifier
    #[serde(alias = "source")]
    pub provider: String,
    pub success: bool,
    /// Failure reason when `success` is false
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// When the fetch completed
    #[serde(default, rename = "timestamp", skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<EpochMillis>,
    #[serde(default)]
    pub current: Option<CurrentObservation>,
    #[serde(default)]
    pub hourly: Option<Vec<HourlyObservation>>,
    #[serde(default)]
    pub daily: Option<Vec<DailyObservation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alerts: Option<Vec<WeatherAlert>>,
}

impl ProviderResult {
    /// Successful result with no data attached yet
    #[must_use]
    pub fn success(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            success: true,
            ..Self::default()
        }
    }

    /// Failed fetch
    #[must_use]
    pub fn failure(provider: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            success: false,
            error: Some(reason.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_current(mut self, current: CurrentObservation) -> Self {
        self.current = Some(current);
        self
    }

    #[must_use]
    pub fn with_hourly(mut self, hourly: Vec<HourlyObservation>) -> Self {
        self.hourly = Some(hourly);
        self
    }

    #[must_use]
    pub fn with_daily(mut self, daily: Vec<DailyObservation>) -> Self {
        self.daily = Some(daily);
        self
    }

    #[must_use]
    pub fn with_alerts(mut self, alerts: Vec<WeatherAlert>) -> Self {
        self.alerts = Some(alerts);
        self
    }

    /// Decode a single provider result from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a list of provider results from JSON bytes
    pub fn list_from_slice(bytes: &[u8]) -> Result<Vec<Self>> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Current snapshot, if this provider succeeded and sent one
    #[must_use]
    pub fn usable_current(&self) -> Option<&CurrentObservation> {
        self.current.as_ref().filter(|_| self.success)
    }

    /// Hourly series, if this provider succeeded and sent a non-empty one
    #[must_use]
    pub fn usable_hourly(&self) -> Option<&[HourlyObservation]> {
        self.hourly
            .as_deref()
            .filter(|series| self.success && !series.is_empty())
    }

    /// Daily series, if this provider succeeded and sent a non-empty one
    #[must_use]
    pub fn usable_daily(&self) -> Option<&[DailyObservation]> {
        self.daily
            .as_deref()
            .filter(|series| self.success && !series.is_empty())
    }
}
