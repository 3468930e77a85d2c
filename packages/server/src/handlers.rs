//! HTTP handler functions for the crime watch API.
//!
//! All handlers are infallible: load-time failures are absorbed into an
//! empty store, so callers always receive a successful (possibly empty)
//! response.

use actix_web::{HttpResponse, web};
use crime_watch_analytics::DEFAULT_TOP_N;
use crime_watch_server_models::{
    ApiForecastEntry, ApiHealth, ApiIncident, ApiLocationCount, ApiStatsSummary, ApiStatus,
    ForecastQueryParams,
};

use crate::AppState;

/// `GET /`
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(ApiStatus {
        status: "ok".to_string(),
        message: "Welcome to the Crime Watch API".to_string(),
    })
}

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/incidents`
///
/// Returns the full enriched incident collection in insertion order,
/// each record carrying all original fields plus its severity.
pub async fn incidents(state: web::Data<AppState>) -> HttpResponse {
    let snapshot = state.store.all();
    let api_incidents: Vec<ApiIncident> = snapshot
        .iter()
        .cloned()
        .map(ApiIncident::from)
        .collect();
    HttpResponse::Ok().json(api_incidents)
}

/// `GET /api/forecast`
///
/// Re-runs the aggregation and ranking pipeline over the current
/// snapshot and returns the top hotspot locations. `?limit=N` overrides
/// the default of 3.
pub async fn forecast(
    state: web::Data<AppState>,
    params: web::Query<ForecastQueryParams>,
) -> HttpResponse {
    let top_n = params.limit.unwrap_or(DEFAULT_TOP_N);
    let snapshot = state.store.all();
    let entries: Vec<ApiForecastEntry> = crime_watch_analytics::forecast(&snapshot, top_n)
        .into_iter()
        .map(ApiForecastEntry::from)
        .collect();
    HttpResponse::Ok().json(entries)
}

/// `GET /api/stats`
///
/// Summary statistics for the current snapshot: total incident count and
/// per-location counts, busiest location first.
pub async fn stats(state: web::Data<AppState>) -> HttpResponse {
    let snapshot = state.store.all();
    let aggregates = crime_watch_analytics::aggregate(&snapshot);

    let mut by_location: Vec<ApiLocationCount> = aggregates
        .values()
        .map(|aggregate| ApiLocationCount {
            location: aggregate.location.clone(),
            count: aggregate.count,
        })
        .collect();
    by_location.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.location.cmp(&b.location)));

    HttpResponse::Ok().json(ApiStatsSummary {
        total_count: snapshot.len() as u64,
        by_location,
    })
}
