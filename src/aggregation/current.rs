//! Current conditions: one snapshot reconciled across providers

use super::condition::reconcile_condition;
use super::metric::reconcile_metric;
use crate::models::{AggregatedSnapshot, CurrentObservation, EpochMillis, ProviderResult, ReconciledMetric};
use chrono::Utc;
use tracing::{debug, instrument};

/// Reconcile the current snapshot of every successful provider, stamped now.
///
/// Returns `None` when no provider succeeded with a current snapshot.
pub fn aggregate_current(sources: &[ProviderResult]) -> Option<AggregatedSnapshot> {
    aggregate_current_at(sources, Utc::now().timestamp_millis())
}

/// Same as [`aggregate_current`] with an explicit aggregation time
#[instrument(level = "debug", skip(sources), fields(providers = sources.len()))]
pub fn aggregate_current_at(
    sources: &[ProviderResult],
    now: EpochMillis,
) -> Option<AggregatedSnapshot> {
    let currents: Vec<&CurrentObservation> = sources
        .iter()
        .filter_map(ProviderResult::usable_current)
        .collect();

    if currents.is_empty() {
        debug!("No provider supplied current conditions");
        return None;
    }

    let field = |get: fn(&CurrentObservation) -> Option<f64>| -> ReconciledMetric {
        reconcile_metric(currents.iter().copied().map(get))
    };
    let condition = reconcile_condition(currents.iter().map(|c| c.condition.as_deref()));

    debug!(
        contributing = currents.len(),
        condition = %condition.label,
        "Reconciled current conditions"
    );

    Some(AggregatedSnapshot {
        temperature: field(|c| c.temperature),
        feels_like: field(|c| c.feels_like),
        condition: condition.label,
        condition_confidence: condition.confidence,
        humidity: field(|c| c.humidity),
        pressure: field(|c| c.pressure),
        wind_speed: field(|c| c.wind_speed),
        wind_degree: field(|c| c.wind_degree),
        cloud_cover: field(|c| c.cloud_cover),
        visibility: field(|c| c.visibility),
        uv_index: field(|c| c.uv_index),
        dew_point: field(|c| c.dew_point),
        precipitation: field(|c| c.precipitation),
        source_count: currents.len(),
        timestamp: now,
    })
}
