//! Merging alerts issued by several providers

use crate::models::WeatherAlert;
use std::collections::HashSet;

/// Combine alerts from all providers.
///
/// Two alerts with the same event name and start time are the same alert;
/// the first one seen is kept. The result is ordered from most to least
/// severe, keeping input order within a severity.
pub fn merge_alerts<I>(alerts: I) -> Vec<WeatherAlert>
where
    I: IntoIterator<Item = WeatherAlert>,
{
    let mut seen = HashSet::new();
    let mut merged: Vec<WeatherAlert> = alerts
        .into_iter()
        .filter(|alert| seen.insert((alert.event.clone(), alert.start)))
        .collect();

    merged.sort_by_key(|alert| alert.severity);
    merged
}
