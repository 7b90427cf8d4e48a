// HTTP request handlers
use crate::application::distance_service::DistanceService;
use crate::domain::distance::{DistanceBySegment, SegmentDistance};
use crate::domain::transport::DistanceUpdate;
use crate::infrastructure::http_response::{json_response, TotalDistanceResponse};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

/// Body of a total preview: the current mapping plus unsaved edits
#[derive(Deserialize)]
pub struct TotalRequest {
    pub distances: DistanceBySegment,
    #[serde(default)]
    pub updates: Vec<DistanceUpdate>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Resolved distances and total for one transport
pub async fn get_transport_distances(
    Path(uid): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    json_response(state.distance_service.transport_distances(&uid).await)
}

/// Save user distance edits
pub async fn update_transport_distances(
    Path(uid): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(updates): Json<Vec<DistanceUpdate>>,
) -> Response {
    json_response(state.distance_service.update_user_distances(&uid, updates).await)
}

/// Trigger a telematics/routing recomputation
pub async fn refresh_transport_distances(
    Path(uid): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    json_response(state.distance_service.refresh_distances(&uid).await)
}

/// Resolve a single segment record
pub async fn resolve_segment(Json(distance): Json<SegmentDistance>) -> impl IntoResponse {
    Json(distance.resolve())
}

/// Total over a posted mapping, with optional unsaved edits
pub async fn total_distance(Json(request): Json<TotalRequest>) -> impl IntoResponse {
    Json(TotalDistanceResponse {
        total_distance: DistanceService::preview_total(&request.distances, &request.updates),
    })
}
