#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the crime watch service.
//!
//! Serves the REST API for listing severity-enriched crime incidents and
//! the hotspot risk forecast. Incident data is loaded and scored once at
//! startup into an in-memory snapshot; every request is answered from
//! that snapshot without further I/O.

mod handlers;

use std::path::Path;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use crime_watch_sentiment::LexiconModel;
use crime_watch_store::IncidentStore;

/// Incident data file used when `CRIME_DATA_PATH` is not set.
pub const DEFAULT_DATA_PATH: &str = "data/mock_incidents.json";

/// Shared application state.
pub struct AppState {
    /// The write-once incident snapshot.
    pub store: Arc<IncidentStore>,
}

/// Loads raw incident records, treating an unavailable source as empty.
///
/// The service stays up with an empty store rather than refusing to
/// start; listings and forecasts are simply empty until the data file
/// appears and the store is reloaded.
#[must_use]
pub fn load_raw_or_empty(path: &Path) -> Vec<serde_json::Value> {
    match crime_watch_source::load_raw_incidents(path) {
        Ok(records) => {
            log::info!(
                "Loaded {} raw incidents from {}",
                records.len(),
                path.display()
            );
            records
        }
        Err(e) => {
            log::error!("Incident data unavailable: {e}; continuing with an empty store");
            Vec::new()
        }
    }
}

/// Starts the crime watch API server.
///
/// Initializes logging, loads and scores the incident data, and starts
/// the Actix-Web HTTP server. This is a regular async function — the
/// caller is responsible for providing the async runtime (e.g. via
/// `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let data_path =
        std::env::var("CRIME_DATA_PATH").unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string());
    log::info!("Loading incident data from {data_path}...");
    let raw = load_raw_or_empty(Path::new(&data_path));

    let store = IncidentStore::initialize(raw, &LexiconModel::new());

    let state = web::Data::new(AppState {
        store: Arc::new(store),
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .route("/", web::get().to(handlers::index))
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/incidents", web::get().to(handlers::incidents))
                    .route("/forecast", web::get().to(handlers::forecast))
                    .route("/stats", web::get().to(handlers::stats)),
            )
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
