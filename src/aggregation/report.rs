//! Full report for one location: sources, aggregates and alerts

use super::Aggregator;
use crate::alerts::merge_alerts;
use crate::models::{EpochMillis, Location, ProviderResult, WeatherAlert, WeatherReport};
use chrono::Utc;
use tracing::{info, instrument, warn};

impl Aggregator {
    /// Build a report from every provider's result.
    ///
    /// `extra_alerts` come from alert-only services; they are merged with the
    /// alerts carried by successful provider results.
    pub fn report(
        &self,
        location: Location,
        sources: Vec<ProviderResult>,
        extra_alerts: Vec<WeatherAlert>,
    ) -> WeatherReport {
        self.report_at(location, sources, extra_alerts, Utc::now().timestamp_millis())
    }

    /// Same as [`Aggregator::report`] with an explicit aggregation time
    #[instrument(skip(self, sources, extra_alerts), fields(location = %location.name, providers = sources.len()))]
    pub fn report_at(
        &self,
        location: Location,
        sources: Vec<ProviderResult>,
        extra_alerts: Vec<WeatherAlert>,
        now: EpochMillis,
    ) -> WeatherReport {
        for failed in sources.iter().filter(|s| !s.success) {
            warn!(
                provider = %failed.provider,
                error = failed.error.as_deref().unwrap_or("unknown error"),
                "Provider failed, aggregating without it"
            );
        }

        let current = self.current_at(&sources, now);
        let hourly = self.hourly(&sources);
        let daily = self.daily(&sources);

        let provider_alerts = sources
            .iter()
            .filter(|s| s.success)
            .filter_map(|s| s.alerts.as_deref())
            .flatten()
            .cloned();
        let alerts = merge_alerts(provider_alerts.chain(extra_alerts));

        let successful_sources = sources.iter().filter(|s| s.success).count();
        let total_sources = sources.len();

        info!(
            successful_sources,
            total_sources,
            hourly = hourly.len(),
            daily = daily.len(),
            alerts = alerts.len(),
            "Built weather report"
        );

        WeatherReport {
            location,
            sources,
            current,
            hourly,
            daily,
            alerts,
            successful_sources,
            total_sources,
            last_updated: now,
        }
    }
}

impl WeatherReport {
    /// Build a report with the default output limits
    #[must_use]
    pub fn build(
        location: Location,
        sources: Vec<ProviderResult>,
        extra_alerts: Vec<WeatherAlert>,
    ) -> Self {
        Aggregator::default().report(location, sources, extra_alerts)
    }

    /// Providers that failed, with their error if any
    pub fn failed_providers(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.sources
            .iter()
            .filter(|s| !s.success)
            .map(|s| (s.provider.as_str(), s.error.as_deref()))
    }

    /// True when at least one provider failed
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.successful_sources < self.total_sources
    }

    /// Whether any data at all could be aggregated
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.current.is_some() || !self.hourly.is_empty() || !self.daily.is_empty()
    }
}
