//! `WeatherBlend` - multi-provider weather aggregation
//!
//! This library reconciles weather observations and forecasts from several
//! independent providers into one view with per-field confidence scores.
//! Fetching, geocoding and presentation stay with the caller; the library
//! starts from normalized [`ProviderResult`]s.

pub mod aggregation;
pub mod alerts;
pub mod cache;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod units;

// Re-export core types for public API
pub use aggregation::{
    Aggregator, aggregate_current, aggregate_daily, aggregate_hourly, reconcile_condition,
    reconcile_metric,
};
pub use alerts::merge_alerts;
pub use cache::ReportCache;
pub use config::WeatherBlendConfig;
pub use error::WeatherBlendError;
pub use models::{
    AggregatedDailyPoint, AggregatedHourlyPoint, AggregatedSnapshot, Location, ProviderResult,
    ReconciledCondition, ReconciledMetric, WeatherAlert, WeatherReport,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WeatherBlendError>;
