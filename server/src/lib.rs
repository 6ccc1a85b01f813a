//! # Signpost API
//!
//! HTTP surface for the Summerville happy-hour directory.
//!
//! The server loads a spot store once at startup (ingested data file, seed
//! fallback) and serves pure reads over it. There is no request-path
//! mutation, so no locking: handlers share one immutable snapshot behind an
//! `Arc`.
//!
//! ## Routes
//! - `GET /health` - liveness probe
//! - `GET /api/spots` - full venue list
//! - `GET /api/spots/nearby?lat=&lng=&radius=` - haversine nearby search
//! - `GET /api/spots/neighborhood/{area}` - facet filter by neighborhood
//! - `GET /api/spots/{id}` - single venue
//! - `GET /api/neighborhoods` - counts grouped by neighborhood
//! - `GET /api/cuisines` - counts grouped by cuisine tag
//! - `GET /api/search?q=` - text search

use std::time::Duration;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    middleware,
    routing::get,
};

use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use routes::{
    cuisines_handler, health_handler, log_request, nearby_handler, neighborhood_spots_handler,
    neighborhoods_handler, not_found_handler, search_handler, spot_handler, spots_handler,
};
use state::State;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = State::new();
    info!("Serving {} spots", state.store.len());

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/api/spots", get(spots_handler))
        .route("/api/spots/nearby", get(nearby_handler))
        .route("/api/spots/neighborhood/{area}", get(neighborhood_spots_handler))
        .route("/api/spots/{id}", get(spot_handler))
        .route("/api/neighborhoods", get(neighborhoods_handler))
        .route("/api/cuisines", get(cuisines_handler))
        .route("/api/search", get(search_handler))
        .fallback(not_found_handler)
        .layer(middleware::from_fn(log_request))
        .layer(cors)
        .with_state(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
