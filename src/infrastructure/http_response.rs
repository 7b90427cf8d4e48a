// HTTP response utilities for JSON payloads and error mapping
use crate::domain::error::DistanceError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Serialize)]
pub struct TotalDistanceResponse {
    pub total_distance: Option<f64>,
}

impl DistanceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DistanceError::TransportNotFound(_) => StatusCode::NOT_FOUND,
            DistanceError::UnknownSegment { .. }
            | DistanceError::InvalidUserDistance { .. }
            | DistanceError::EmptyUpdate => StatusCode::UNPROCESSABLE_ENTITY,
            DistanceError::Backend(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for DistanceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// 200 with a JSON body, or the mapped error
pub fn json_response<T: Serialize>(result: Result<T, DistanceError>) -> Response {
    match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => e.into_response(),
    }
}
