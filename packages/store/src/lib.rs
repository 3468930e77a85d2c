#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! In-memory incident store.
//!
//! The store is populated exactly once at startup: each raw record is
//! converted to a typed [`Incident`], its summary is scored, and the
//! resulting severity is attached before the store becomes queryable.
//! Readers take cheap `Arc` snapshots; [`IncidentStore::reload`] swaps in
//! a complete new snapshot atomically, so a reader always sees either the
//! old or the new collection, never a partial one.

use std::sync::{Arc, RwLock};

use crime_watch_incident_models::Incident;
use crime_watch_sentiment::{SentimentModel, score};

/// The process-wide incident collection.
pub struct IncidentStore {
    incidents: RwLock<Arc<Vec<Incident>>>,
}

impl IncidentStore {
    /// Builds the store from raw JSON records, scoring each summary.
    ///
    /// Malformed records (missing `location` or `summary`, non-object
    /// values, or summaries the sentiment model rejects) are skipped with
    /// a logged warning — one bad record never aborts startup.
    #[must_use]
    pub fn initialize<M: SentimentModel + ?Sized>(
        raw: Vec<serde_json::Value>,
        model: &M,
    ) -> Self {
        let incidents = enrich(raw, model);
        log::info!("Incident store initialized with {} incidents", incidents.len());
        Self {
            incidents: RwLock::new(Arc::new(incidents)),
        }
    }

    /// Replaces the current snapshot with a freshly scored one.
    ///
    /// # Panics
    ///
    /// Panics if the store lock is poisoned.
    pub fn reload<M: SentimentModel + ?Sized>(&self, raw: Vec<serde_json::Value>, model: &M) {
        let incidents = Arc::new(enrich(raw, model));
        log::info!("Incident store reloaded with {} incidents", incidents.len());
        *self
            .incidents
            .write()
            .expect("incident store lock poisoned") = incidents;
    }

    /// Returns a read-only snapshot of all incidents in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if the store lock is poisoned.
    #[must_use]
    pub fn all(&self) -> Arc<Vec<Incident>> {
        Arc::clone(
            &self
                .incidents
                .read()
                .expect("incident store lock poisoned"),
        )
    }

    /// Number of incidents in the current snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.all().len()
    }

    /// Whether the current snapshot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all().is_empty()
    }
}

/// Converts raw records to typed incidents and attaches severities.
fn enrich<M: SentimentModel + ?Sized>(raw: Vec<serde_json::Value>, model: &M) -> Vec<Incident> {
    raw.into_iter()
        .enumerate()
        .filter_map(|(index, value)| {
            let mut incident: Incident = match serde_json::from_value(value) {
                Ok(incident) => incident,
                Err(e) => {
                    log::warn!("Skipping malformed incident record {index}: {e}");
                    return None;
                }
            };
            match score(model, &incident.summary) {
                Ok(severity) => incident.severity = Some(severity),
                Err(e) => {
                    log::warn!("Skipping unscoreable incident record {index}: {e}");
                    return None;
                }
            }
            Some(incident)
        })
        .collect()
}
