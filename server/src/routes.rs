use std::{collections::HashMap, sync::Arc};

use axum::{
    Json,
    extract::{Path, Query, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde_json::json;
use signpost::{query, report, spot::Spot};
use tracing::info;

use crate::{error::AppError, state};

pub async fn log_request(req: Request, next: Next) -> Response {
    info!("{} {}", req.method(), req.uri().path());
    next.run(req).await
}

pub async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok", "timestamp": Utc::now().to_rfc3339() }))
}

pub async fn spots_handler(State(state): State<Arc<state::State>>) -> Json<Vec<Spot>> {
    Json(state.store.spots().to_vec())
}

pub async fn spot_handler(
    State(state): State<Arc<state::State>>,
    Path(id): Path<String>,
) -> Result<Json<Spot>, AppError> {
    state
        .store
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(AppError::SpotNotFound)
}

pub async fn neighborhood_spots_handler(
    State(state): State<Arc<state::State>>,
    Path(area): Path<String>,
) -> Json<Vec<Spot>> {
    let filtered = query::facet_filter(state.store.spots(), Some(area.as_str()), None);

    Json(filtered.into_iter().cloned().collect())
}

pub async fn neighborhoods_handler(State(state): State<Arc<state::State>>) -> impl IntoResponse {
    Json(report::by_neighborhood(state.store.spots()))
}

pub async fn cuisines_handler(State(state): State<Arc<state::State>>) -> impl IntoResponse {
    Json(report::by_cuisine(state.store.spots()))
}

pub async fn search_handler(
    State(state): State<Arc<state::State>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Vec<Spot>> {
    let q = params.get("q").map(String::as_str).unwrap_or("");
    let results = query::text_search(state.store.spots(), q);

    Json(results.into_iter().cloned().collect())
}

pub async fn nearby_handler(
    State(state): State<Arc<state::State>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<serde_json::Value>, AppError> {
    let lat = parse_coordinate(params.get("lat"))?;
    let lng = parse_coordinate(params.get("lng"))?;
    let radius = params
        .get("radius")
        .map(|raw| raw.parse::<f64>().map_err(|_| AppError::InvalidCoordinates))
        .transpose()?;

    let hits = query::nearby(state.store.spots(), lat, lng, radius)?;
    let body = serde_json::to_value(&hits).map_err(|_| AppError::Internal)?;

    Ok(Json(body))
}

pub async fn not_found_handler() -> AppError {
    AppError::NotFound
}

fn parse_coordinate(raw: Option<&String>) -> Result<f64, AppError> {
    raw.ok_or(AppError::InvalidCoordinates)?
        .parse()
        .map_err(|_| AppError::InvalidCoordinates)
}
