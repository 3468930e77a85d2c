#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Incident record types and the risk level taxonomy.
//!
//! This crate defines the canonical incident record shared across the
//! crime-watch system. Records carry a fixed set of known fields plus an
//! opaque passthrough payload, so source-specific extras (coordinates,
//! crime type, report dates) survive the pipeline unchanged.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A single crime incident.
///
/// `severity` is absent on raw records and attached exactly once when the
/// incident store is initialized; it is never recomputed for a record
/// within a process lifetime. Fields outside the known set are preserved
/// verbatim in `extra` and serialized back at the top level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    /// Source-assigned incident ID, when the source provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Location key. Exact-match, case-sensitive, untrimmed.
    pub location: String,
    /// Free-text incident summary.
    pub summary: String,
    /// Derived severity in `[0.0, 1.0]`, rounded to 3 decimal places.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<f64>,
    /// Source-specific fields passed through unchanged.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Risk score above which a location is classified [`RiskLevel::High`].
pub const HIGH_RISK_THRESHOLD: f64 = 10.0;

/// Risk score above which a location is classified [`RiskLevel::Medium`].
pub const MEDIUM_RISK_THRESHOLD: f64 = 5.0;

/// Categorical risk level attached to each forecast entry.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum RiskLevel {
    /// Risk score above 10: high incident volume and severity.
    High,
    /// Risk score above 5, up to and including 10.
    Medium,
    /// Risk score of 5 or below.
    Low,
}

impl RiskLevel {
    /// Classifies a risk score against the fixed thresholds.
    ///
    /// Both thresholds are strict: a score of exactly 10.0 is `Medium`
    /// and a score of exactly 5.0 is `Low`.
    #[must_use]
    pub fn for_score(risk_score: f64) -> Self {
        if risk_score > HIGH_RISK_THRESHOLD {
            Self::High
        } else if risk_score > MEDIUM_RISK_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }
}
