//! Multi-provider aggregation engine
//!
//! Takes already-normalized [`ProviderResult`]s and reconciles them into a
//! single view with per-field confidence. Everything here is a pure function
//! of its input: no I/O, no shared state, no failure modes beyond returning
//! less data when fewer providers delivered.
//!
//! - `metric`: median, spread and agreement score for one numeric field
//! - `condition`: plurality vote over textual conditions
//! - `temporal`: hour/day bucketing across differently-sampled series
//! - `current` / `forecast`: the three public aggregate shapes
//! - `report`: the full per-location envelope

pub mod condition;
pub mod current;
pub mod forecast;
pub mod metric;
pub mod report;
pub mod temporal;

pub use condition::reconcile_condition;
pub use current::{aggregate_current, aggregate_current_at};
pub use forecast::{
    DEFAULT_DAILY_LIMIT, DEFAULT_HOURLY_LIMIT, aggregate_daily, aggregate_daily_limited,
    aggregate_hourly, aggregate_hourly_limited,
};
pub use metric::reconcile_metric;
pub use temporal::{Granularity, Timestamped, align};

use crate::config::AggregationConfig;
use crate::models::{
    AggregatedDailyPoint, AggregatedHourlyPoint, AggregatedSnapshot, EpochMillis, ProviderResult,
};

/// Aggregation entry point carrying the configured output bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aggregator {
    hourly_limit: usize,
    daily_limit: usize,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(DEFAULT_HOURLY_LIMIT, DEFAULT_DAILY_LIMIT)
    }
}

impl Aggregator {
    #[must_use]
    pub const fn new(hourly_limit: usize, daily_limit: usize) -> Self {
        Self {
            hourly_limit,
            daily_limit,
        }
    }

    #[must_use]
    pub fn from_config(config: &AggregationConfig) -> Self {
        Self::new(config.hourly_limit, config.daily_limit)
    }

    #[must_use]
    pub const fn hourly_limit(&self) -> usize {
        self.hourly_limit
    }

    #[must_use]
    pub const fn daily_limit(&self) -> usize {
        self.daily_limit
    }

    #[must_use]
    pub fn current(&self, sources: &[ProviderResult]) -> Option<AggregatedSnapshot> {
        aggregate_current(sources)
    }

    #[must_use]
    pub fn current_at(&self, sources: &[ProviderResult], now: EpochMillis) -> Option<AggregatedSnapshot> {
        aggregate_current_at(sources, now)
    }

    #[must_use]
    pub fn hourly(&self, sources: &[ProviderResult]) -> Vec<AggregatedHourlyPoint> {
        aggregate_hourly_limited(sources, self.hourly_limit)
    }

    #[must_use]
    pub fn daily(&self, sources: &[ProviderResult]) -> Vec<AggregatedDailyPoint> {
        aggregate_daily_limited(sources, self.daily_limit)
    }
}
