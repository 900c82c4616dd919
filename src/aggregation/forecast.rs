//! Hourly and daily forecasts merged across providers

use super::condition::reconcile_condition;
use super::metric::reconcile_metric;
use super::temporal::{AlignedRecord, Granularity, align, into_sorted};
use crate::models::{
    AggregatedDailyPoint, AggregatedHourlyPoint, DailyObservation, EpochMillis, HourlyObservation,
    ProviderResult, ReconciledMetric,
};
use tracing::{debug, instrument};

/// Default number of hourly points returned
pub const DEFAULT_HOURLY_LIMIT: usize = 48;

/// Default number of daily points returned
pub const DEFAULT_DAILY_LIMIT: usize = 7;

/// Hourly forecast, ascending by hour, at most [`DEFAULT_HOURLY_LIMIT`] points
pub fn aggregate_hourly(sources: &[ProviderResult]) -> Vec<AggregatedHourlyPoint> {
    aggregate_hourly_limited(sources, DEFAULT_HOURLY_LIMIT)
}

/// Daily forecast, ascending by day, at most [`DEFAULT_DAILY_LIMIT`] points
pub fn aggregate_daily(sources: &[ProviderResult]) -> Vec<AggregatedDailyPoint> {
    aggregate_daily_limited(sources, DEFAULT_DAILY_LIMIT)
}

#[instrument(level = "debug", skip(sources), fields(providers = sources.len()))]
pub fn aggregate_hourly_limited(
    sources: &[ProviderResult],
    limit: usize,
) -> Vec<AggregatedHourlyPoint> {
    let series = sources
        .iter()
        .filter_map(|s| s.usable_hourly().map(|hourly| (s.provider.as_str(), hourly)));
    let buckets = align(series, Granularity::Hour);
    debug!(buckets = buckets.len(), "Aligned hourly forecasts");

    into_sorted(buckets)
        .into_iter()
        .take(limit)
        .map(|(time, records)| hourly_point(time, &records))
        .collect()
}

#[instrument(level = "debug", skip(sources), fields(providers = sources.len()))]
pub fn aggregate_daily_limited(
    sources: &[ProviderResult],
    limit: usize,
) -> Vec<AggregatedDailyPoint> {
    let series = sources
        .iter()
        .filter_map(|s| s.usable_daily().map(|daily| (s.provider.as_str(), daily)));
    let buckets = align(series, Granularity::Day);
    debug!(buckets = buckets.len(), "Aligned daily forecasts");

    into_sorted(buckets)
        .into_iter()
        .take(limit)
        .map(|(date, records)| daily_point(date, &records))
        .collect()
}

fn hourly_point(time: EpochMillis, records: &[AlignedRecord<'_, HourlyObservation>]) -> AggregatedHourlyPoint {
    let field = |get: fn(&HourlyObservation) -> Option<f64>| -> ReconciledMetric {
        reconcile_metric(records.iter().map(|r| get(r.record)))
    };
    let condition = reconcile_condition(records.iter().map(|r| r.record.condition.as_deref()));

    AggregatedHourlyPoint {
        time,
        temperature: field(|h| h.temperature),
        feels_like: field(|h| h.feels_like),
        condition: condition.label,
        precipitation_chance: field(|h| h.precipitation_chance),
        precipitation_amount: field(|h| h.precipitation_amount),
        humidity: field(|h| h.humidity),
        wind_speed: field(|h| h.wind_speed),
        wind_degree: field(|h| h.wind_degree),
        sources: contributing_providers(records),
    }
}

fn daily_point(date: EpochMillis, records: &[AlignedRecord<'_, DailyObservation>]) -> AggregatedDailyPoint {
    let field = |get: fn(&DailyObservation) -> Option<f64>| -> ReconciledMetric {
        reconcile_metric(records.iter().map(|r| get(r.record)))
    };
    let condition = reconcile_condition(records.iter().map(|r| r.record.condition.as_deref()));

    AggregatedDailyPoint {
        date,
        temp_max: field(|d| d.temp_max),
        temp_min: field(|d| d.temp_min),
        condition: condition.label,
        precipitation_chance: field(|d| d.precipitation_chance),
        precipitation_amount: field(|d| d.precipitation_amount),
        humidity: field(|d| d.humidity),
        wind_speed: field(|d| d.wind_speed),
        uv_index: field(|d| d.uv_index),
        sources: contributing_providers(records),
    }
}

/// Distinct providers in a bucket, first appearance first
fn contributing_providers<T>(records: &[AlignedRecord<'_, T>]) -> Vec<String> {
    let mut providers: Vec<String> = Vec::new();
    for record in records {
        if !providers.iter().any(|p| p == record.provider) {
            providers.push(record.provider.to_string());
        }
    }
    providers
}
