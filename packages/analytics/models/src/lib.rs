#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Aggregation and forecast result types.
//!
//! These are ephemeral values computed fresh on every forecast request;
//! nothing here is persisted or cached.

use crime_watch_incident_models::RiskLevel;
use serde::{Deserialize, Serialize};

/// Per-location incident statistics for one forecast pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationAggregate {
    /// The location key this aggregate was grouped under.
    pub location: String,
    /// Number of incidents observed at this location. Always positive:
    /// aggregates are only created on first occurrence.
    pub count: u64,
    /// Sum of member severities.
    pub total_severity: f64,
}

/// One ranked entry in the hotspot forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Forecast location.
    pub location: String,
    /// Risk score used for ordering and threshold classification.
    /// Unbounded above.
    pub risk_score: f64,
    /// Number of incidents behind this entry.
    pub incident_count: u64,
    /// Mean member severity, rounded to 2 decimal places for display.
    pub avg_severity: f64,
    /// Categorical risk classification.
    pub risk_level: RiskLevel,
    /// Human-readable explanation of the classification.
    pub reason: String,
}
