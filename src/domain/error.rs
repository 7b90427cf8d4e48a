// Errors surfaced by distance use cases
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DistanceError {
    #[error("transport {0} not found")]
    TransportNotFound(String),

    #[error("segment {segment_uid} does not belong to transport {transport_uid}")]
    UnknownSegment {
        transport_uid: String,
        segment_uid: String,
    },

    #[error("invalid user distance {value} for segment {segment_uid}")]
    InvalidUserDistance { segment_uid: String, value: f64 },

    #[error("no distance updates given")]
    EmptyUpdate,

    #[error("backend request failed: {0:#}")]
    Backend(#[from] anyhow::Error),
}
