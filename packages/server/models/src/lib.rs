#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the crime watch server.
//!
//! These types are serialized to JSON for the REST API. They are separate
//! from the domain types to allow independent evolution of the API
//! contract.

use crime_watch_analytics_models::ForecastEntry;
use crime_watch_incident_models::{Incident, RiskLevel};
use serde::{Deserialize, Serialize};

/// A crime incident as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiIncident {
    /// Source-assigned incident ID, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Location key.
    pub location: String,
    /// Free-text summary.
    pub summary: String,
    /// Derived severity in `[0.0, 1.0]`. Always present for incidents
    /// served from an initialized store.
    pub severity: Option<f64>,
    /// Source-specific fields passed through unchanged.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl From<Incident> for ApiIncident {
    fn from(incident: Incident) -> Self {
        Self {
            id: incident.id,
            location: incident.location,
            summary: incident.summary,
            severity: incident.severity,
            extra: incident.extra,
        }
    }
}

/// One hotspot forecast entry as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiForecastEntry {
    /// Forecast location.
    pub location: String,
    /// Risk score used for ranking.
    pub risk_score: f64,
    /// Number of incidents behind this entry.
    pub incident_count: u64,
    /// Mean member severity, rounded to 2 decimal places.
    pub avg_severity: f64,
    /// Categorical risk classification.
    pub risk_level: RiskLevel,
    /// Human-readable explanation.
    pub reason: String,
}

impl From<ForecastEntry> for ApiForecastEntry {
    fn from(entry: ForecastEntry) -> Self {
        Self {
            location: entry.location,
            risk_score: entry.risk_score,
            incident_count: entry.incident_count,
            avg_severity: entry.avg_severity,
            risk_level: entry.risk_level,
            reason: entry.reason,
        }
    }
}

/// Query parameters for the forecast endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastQueryParams {
    /// Maximum number of forecast entries to return.
    pub limit: Option<usize>,
}

/// Summary statistics for the current incident snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiStatsSummary {
    /// Total incidents in the snapshot.
    pub total_count: u64,
    /// Per-location incident counts, sorted descending.
    pub by_location: Vec<ApiLocationCount>,
}

/// Count of incidents for a single location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiLocationCount {
    /// Location key.
    pub location: String,
    /// Number of incidents.
    pub count: u64,
}

/// Service status banner returned at the root path.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiStatus {
    /// Fixed `"ok"` marker.
    pub status: String,
    /// Greeting message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}
