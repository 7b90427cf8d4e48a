// Route table
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_transport_distances, health_check, refresh_transport_distances, resolve_segment,
    total_distance, update_transport_distances,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route(
            "/transports/:uid/distances",
            get(get_transport_distances).patch(update_transport_distances),
        )
        .route(
            "/transports/:uid/distances/refresh",
            post(refresh_transport_distances),
        )
        .route("/distances/resolve", post(resolve_segment))
        .route("/distances/total", post(total_distance))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
