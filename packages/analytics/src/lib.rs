#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Location aggregation and hotspot risk ranking.
//!
//! The forecast pipeline runs in two passes over a read-only incident
//! snapshot: [`aggregate`] groups incidents by exact location key, then
//! [`rank`] scores each location, sorts, truncates to the top N, and
//! attaches a categorical risk level with a human-readable reason. Both
//! passes are side-effect-free and recomputed fully on every call.

use std::collections::BTreeMap;

use crime_watch_analytics_models::{ForecastEntry, LocationAggregate};
use crime_watch_incident_models::{Incident, RiskLevel};

/// Number of forecast entries returned when the caller does not override it.
pub const DEFAULT_TOP_N: usize = 3;

/// Severity assumed for an incident that was never scored.
pub const DEFAULT_SEVERITY: f64 = 0.5;

/// Groups incidents by location, counting and summing severities.
///
/// Location keys are matched exactly: case-sensitive, untrimmed, no
/// normalization. Incidents without a severity contribute
/// [`DEFAULT_SEVERITY`]. The output holds one entry per distinct observed
/// location; no entry is ever created outside this routine.
#[must_use]
pub fn aggregate(incidents: &[Incident]) -> BTreeMap<String, LocationAggregate> {
    let mut aggregates: BTreeMap<String, LocationAggregate> = BTreeMap::new();

    for incident in incidents {
        let severity = incident.severity.unwrap_or(DEFAULT_SEVERITY);
        aggregates
            .entry(incident.location.clone())
            .and_modify(|aggregate| {
                aggregate.count += 1;
                aggregate.total_severity += severity;
            })
            .or_insert_with(|| LocationAggregate {
                location: incident.location.clone(),
                count: 1,
                total_severity: severity,
            });
    }

    aggregates
}

/// Ranks aggregated locations into the hotspot forecast.
///
/// Risk is boosted by both volume and severity:
/// `risk_score = count * (1 + avg_severity)`. Entries are sorted by
/// descending risk score (ties broken by ascending location name, so
/// top-N selection is reproducible) and truncated to `top_n`. The
/// reported `avg_severity` is rounded to 2 decimal places; ranking and
/// classification use the unrounded value.
#[must_use]
pub fn rank(
    aggregates: &BTreeMap<String, LocationAggregate>,
    top_n: usize,
) -> Vec<ForecastEntry> {
    let mut candidates: Vec<(&LocationAggregate, f64, f64)> = aggregates
        .values()
        .filter(|aggregate| aggregate.count > 0)
        .map(|aggregate| {
            let avg_severity = aggregate.total_severity / aggregate.count as f64;
            let risk_score = aggregate.count as f64 * (1.0 + avg_severity);
            (aggregate, avg_severity, risk_score)
        })
        .collect();

    candidates.sort_by(|(a, _, a_score), (b, _, b_score)| {
        b_score
            .total_cmp(a_score)
            .then_with(|| a.location.cmp(&b.location))
    });
    candidates.truncate(top_n);

    candidates
        .into_iter()
        .map(|(aggregate, avg_severity, risk_score)| {
            let risk_level = RiskLevel::for_score(risk_score);
            ForecastEntry {
                location: aggregate.location.clone(),
                risk_score,
                incident_count: aggregate.count,
                avg_severity: round_to_2(avg_severity),
                risk_level,
                reason: reason(risk_level, aggregate.count),
            }
        })
        .collect()
}

/// Runs the full forecast pipeline over an incident snapshot.
#[must_use]
pub fn forecast(incidents: &[Incident], top_n: usize) -> Vec<ForecastEntry> {
    rank(&aggregate(incidents), top_n)
}

/// Builds the human-readable explanation for a classified entry.
fn reason(risk_level: RiskLevel, incident_count: u64) -> String {
    match risk_level {
        RiskLevel::High => {
            format!("High incident volume ({incident_count}) and high severity.")
        }
        RiskLevel::Medium => format!("Moderate incident volume ({incident_count})."),
        RiskLevel::Low => format!("Low incident volume ({incident_count})."),
    }
}

fn round_to_2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn incident(location: &str, severity: Option<f64>) -> Incident {
        Incident {
            id: None,
            location: location.to_string(),
            summary: "reported incident".to_string(),
            severity,
            extra: Map::new(),
        }
    }

    fn aggregates_of(entries: &[(&str, u64, f64)]) -> BTreeMap<String, LocationAggregate> {
        entries
            .iter()
            .map(|(location, count, total_severity)| {
                (
                    (*location).to_string(),
                    LocationAggregate {
                        location: (*location).to_string(),
                        count: *count,
                        total_severity: *total_severity,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn counts_sum_to_input_length() {
        let incidents = vec![
            incident("A", Some(0.9)),
            incident("A", Some(0.8)),
            incident("B", Some(0.1)),
            incident("C", Some(0.5)),
            incident("B", Some(0.2)),
        ];
        let aggregates = aggregate(&incidents);
        let total: u64 = aggregates.values().map(|a| a.count).sum();
        assert_eq!(total as usize, incidents.len());
        assert_eq!(aggregates.len(), 3);
        assert_eq!(aggregates["A"].count, 2);
    }

    #[test]
    fn location_keys_are_exact_match() {
        let incidents = vec![
            incident("Guntur", Some(0.5)),
            incident("guntur", Some(0.5)),
            incident("Guntur ", Some(0.5)),
        ];
        assert_eq!(aggregate(&incidents).len(), 3);
    }

    #[test]
    fn missing_severity_defaults_to_half() {
        let incidents = vec![incident("A", None), incident("A", Some(0.3))];
        let aggregates = aggregate(&incidents);
        assert!((aggregates["A"].total_severity - 0.8).abs() < 1e-12);
    }

    #[test]
    fn risk_score_equals_count_plus_total_severity() {
        let aggregates = aggregates_of(&[("A", 4, 2.6)]);
        let entries = rank(&aggregates, DEFAULT_TOP_N);
        // count * (1 + total/count) == count + total
        assert!((entries[0].risk_score - 6.6).abs() < 1e-12);
    }

    #[test]
    fn sorts_descending_and_truncates_to_top_n() {
        let aggregates = aggregates_of(&[
            ("A", 2, 1.0),
            ("B", 6, 4.0),
            ("C", 1, 0.2),
            ("D", 3, 2.0),
        ]);
        let entries = rank(&aggregates, 3);
        let locations: Vec<&str> = entries.iter().map(|e| e.location.as_str()).collect();
        assert_eq!(locations, ["B", "D", "A"]);
    }

    #[test]
    fn returns_all_when_fewer_than_top_n() {
        let aggregates = aggregates_of(&[("A", 2, 1.0), ("B", 1, 0.5)]);
        assert_eq!(rank(&aggregates, 3).len(), 2);
    }

    #[test]
    fn equal_scores_tie_break_by_location_name() {
        let aggregates = aggregates_of(&[("Nellore", 2, 1.0), ("Guntur", 2, 1.0)]);
        let entries = rank(&aggregates, DEFAULT_TOP_N);
        assert_eq!(entries[0].location, "Guntur");
        assert_eq!(entries[1].location, "Nellore");
    }

    #[test]
    fn score_of_exactly_ten_is_not_high() {
        // count 5, avg severity 1.0 -> risk 10.0
        let aggregates = aggregates_of(&[("A", 5, 5.0)]);
        let entries = rank(&aggregates, DEFAULT_TOP_N);
        assert!((entries[0].risk_score - 10.0).abs() < 1e-12);
        assert_eq!(entries[0].risk_level, RiskLevel::Medium);
        assert_eq!(entries[0].reason, "Moderate incident volume (5).");
    }

    #[test]
    fn score_of_exactly_five_is_not_medium() {
        // count 4, avg severity 0.25 -> risk 5.0
        let aggregates = aggregates_of(&[("A", 4, 1.0)]);
        let entries = rank(&aggregates, DEFAULT_TOP_N);
        assert!((entries[0].risk_score - 5.0).abs() < 1e-12);
        assert_eq!(entries[0].risk_level, RiskLevel::Low);
        assert_eq!(entries[0].reason, "Low incident volume (4).");
    }

    #[test]
    fn high_reason_cites_volume_and_severity() {
        // count 8, avg severity 0.75 -> risk 14.0
        let aggregates = aggregates_of(&[("A", 8, 6.0)]);
        let entries = rank(&aggregates, DEFAULT_TOP_N);
        assert_eq!(entries[0].risk_level, RiskLevel::High);
        assert_eq!(
            entries[0].reason,
            "High incident volume (8) and high severity."
        );
    }

    #[test]
    fn avg_severity_is_display_rounded_only() {
        // total 1.0 over count 3 -> 0.333..., displayed as 0.33, but the
        // risk score keeps the unrounded average.
        let aggregates = aggregates_of(&[("A", 3, 1.0)]);
        let entries = rank(&aggregates, DEFAULT_TOP_N);
        assert!((entries[0].avg_severity - 0.33).abs() < f64::EPSILON);
        assert!((entries[0].risk_score - 4.0).abs() < 1e-12);
    }

    #[test]
    fn forecast_is_idempotent() {
        let incidents = vec![
            incident("A", Some(0.9)),
            incident("B", Some(0.1)),
            incident("A", Some(0.7)),
        ];
        assert_eq!(
            forecast(&incidents, DEFAULT_TOP_N),
            forecast(&incidents, DEFAULT_TOP_N)
        );
    }

    #[test]
    fn empty_input_yields_empty_forecast() {
        assert!(forecast(&[], DEFAULT_TOP_N).is_empty());
        assert!(rank(&BTreeMap::new(), DEFAULT_TOP_N).is_empty());
    }

    #[test]
    fn two_location_scenario_ranks_the_violent_cluster_first() {
        // Two incidents at A with high severity, one nuisance at B.
        let incidents = vec![
            incident("A", Some(0.95)),
            incident("A", Some(0.8)),
            incident("B", Some(0.48)),
        ];
        let entries = forecast(&incidents, DEFAULT_TOP_N);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].location, "A");
        assert_eq!(entries[0].incident_count, 2);
        assert!(entries[0].avg_severity > 0.8);
        // With two incidents the score is bounded by 4.0, so even a
        // maximally severe cluster classifies Low.
        assert_eq!(entries[0].risk_level, RiskLevel::Low);
        assert_eq!(entries[1].location, "B");
    }
}
