//! Unit conversions for provider normalizers
//!
//! The aggregation core expects Celsius, m/s, hPa and metres. Provider
//! adapters use these helpers to get there before building a
//! [`ProviderResult`](crate::models::ProviderResult).

use serde::{Deserialize, Serialize};

/// Temperature scale a provider reports in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

/// Speed unit a provider reports in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedUnit {
    MetersPerSecond,
    KilometersPerHour,
    MilesPerHour,
}

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

#[must_use]
pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - 273.15
}

#[must_use]
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

#[must_use]
pub fn kmh_to_mps(kmh: f64) -> f64 {
    kmh / 3.6
}

#[must_use]
pub fn mph_to_mps(mph: f64) -> f64 {
    mph * 0.44704
}

#[must_use]
pub fn mps_to_kmh(mps: f64) -> f64 {
    mps * 3.6
}

#[must_use]
pub fn mps_to_mph(mps: f64) -> f64 {
    mps * 2.23694
}

#[must_use]
pub fn meters_to_km(meters: f64) -> f64 {
    meters / 1000.0
}

#[must_use]
pub fn meters_to_miles(meters: f64) -> f64 {
    meters * 0.000_621_371
}

#[must_use]
pub fn hpa_to_inhg(hpa: f64) -> f64 {
    hpa * 0.02953
}

#[must_use]
pub fn mm_to_inches(mm: f64) -> f64 {
    mm * 0.039_370_1
}

/// Convert a temperature to Celsius
#[must_use]
pub fn normalize_temperature(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => fahrenheit_to_celsius(value),
        TemperatureUnit::Kelvin => kelvin_to_celsius(value),
    }
}

/// Convert a speed to m/s
#[must_use]
pub fn normalize_wind_speed(value: f64, unit: SpeedUnit) -> f64 {
    match unit {
        SpeedUnit::MetersPerSecond => value,
        SpeedUnit::KilometersPerHour => kmh_to_mps(value),
        SpeedUnit::MilesPerHour => mph_to_mps(value),
    }
}

/// Convert wind direction in degrees to one of 16 compass points
#[must_use]
pub fn degrees_to_cardinal(degrees: f64) -> &'static str {
    if !degrees.is_finite() {
        return "Unknown";
    }
    let sector = (degrees.rem_euclid(360.0) / 22.5).round() as usize % COMPASS_POINTS.len();
    COMPASS_POINTS[sector]
}
