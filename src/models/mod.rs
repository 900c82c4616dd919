//! Data models for the `WeatherBlend` library
//!
//! This module contains the domain models organized by concern:
//! - Location: coordinates the providers were queried for
//! - Observation: per-provider records in the common schema
//! - Provider: one provider's fetch outcome
//! - Alert: active weather warnings
//! - Aggregate: reconciled outputs with confidence scores

pub mod aggregate;
pub mod alert;
pub mod location;
pub mod observation;
pub mod provider;

// Re-export all public types for convenient access
pub use aggregate::{
    AggregatedDailyPoint, AggregatedHourlyPoint, AggregatedSnapshot, ReconciledCondition,
    ReconciledMetric, WeatherReport,
};
pub use alert::{AlertSeverity, WeatherAlert};
pub use location::Location;
pub use observation::{CurrentObservation, DailyObservation, EpochMillis, HourlyObservation};
pub use provider::ProviderResult;
