// Distance service - Use cases for reading, editing and refreshing transport distances
use crate::application::transport_repository::TransportRepository;
use crate::domain::distance::{total_distance_by_segment, DistanceBySegment};
use crate::domain::error::DistanceError;
use crate::domain::summary::TransportDistances;
use crate::domain::transport::{apply_user_distances, DistanceUpdate, Segment, Transport};
use std::sync::Arc;

#[derive(Clone)]
pub struct DistanceService {
    repository: Arc<dyn TransportRepository>,
}

impl DistanceService {
    pub fn new(repository: Arc<dyn TransportRepository>) -> Self {
        Self { repository }
    }

    pub async fn transport_distances(
        &self,
        transport_uid: &str,
    ) -> Result<TransportDistances, DistanceError> {
        let transport = self.load_transport(transport_uid).await?;
        let summary = TransportDistances::from_transport(&transport);

        tracing::debug!(
            "Resolved {} segments for transport {}, total distance {:?}",
            summary.segments.len(),
            transport_uid,
            summary.total_distance
        );

        Ok(summary)
    }

    pub async fn update_user_distances(
        &self,
        transport_uid: &str,
        updates: Vec<DistanceUpdate>,
    ) -> Result<TransportDistances, DistanceError> {
        if updates.is_empty() {
            return Err(DistanceError::EmptyUpdate);
        }

        let mut transport = self.load_transport(transport_uid).await?;
        validate_updates(&transport, &updates).inspect_err(|e| {
            tracing::warn!("Rejected distance edit on transport {}: {}", transport_uid, e);
        })?;

        let updated = self
            .repository
            .update_user_distances(transport_uid, &updates)
            .await
            .inspect_err(|e| {
                tracing::error!("Failed to save distances for transport {}: {:#}", transport_uid, e);
            })?;

        tracing::info!(
            "Saved {} distance edits on transport {} ({} segments returned)",
            updates.len(),
            transport_uid,
            updated.len()
        );

        merge_segments(&mut transport, updated);
        let mut distances = transport.distance_by_segment();
        apply_user_distances(&mut distances, &updates);

        Ok(TransportDistances::new(&transport, &distances))
    }

    pub async fn refresh_distances(
        &self,
        transport_uid: &str,
    ) -> Result<TransportDistances, DistanceError> {
        let transport = self
            .repository
            .refresh_distances(transport_uid)
            .await
            .inspect_err(|e| {
                tracing::error!("Failed to refresh distances for transport {}: {:#}", transport_uid, e);
            })?
            .ok_or_else(|| DistanceError::TransportNotFound(transport_uid.to_string()))?;

        tracing::info!("Refreshed distances for transport {}", transport_uid);
        Ok(TransportDistances::from_transport(&transport))
    }

    /// Total distance with unsaved edits applied, nothing is persisted
    pub fn preview_total(distances: &DistanceBySegment, updates: &[DistanceUpdate]) -> Option<f64> {
        let mut edited = distances.clone();
        apply_user_distances(&mut edited, updates);
        total_distance_by_segment(&edited)
    }

    async fn load_transport(&self, transport_uid: &str) -> Result<Transport, DistanceError> {
        self.repository
            .get_transport(transport_uid)
            .await
            .inspect_err(|e| {
                tracing::error!("Failed to fetch transport {}: {:#}", transport_uid, e);
            })?
            .ok_or_else(|| DistanceError::TransportNotFound(transport_uid.to_string()))
    }
}

fn validate_updates(transport: &Transport, updates: &[DistanceUpdate]) -> Result<(), DistanceError> {
    for update in updates {
        if !transport.has_segment(&update.segment_uid) {
            return Err(DistanceError::UnknownSegment {
                transport_uid: transport.uid.clone(),
                segment_uid: update.segment_uid.clone(),
            });
        }

        if let Some(value) = update.user_distance {
            if !value.is_finite() || value < 0.0 {
                return Err(DistanceError::InvalidUserDistance {
                    segment_uid: update.segment_uid.clone(),
                    value,
                });
            }
        }
    }

    Ok(())
}

// Replace segment records by uid with what the backend returned
fn merge_segments(transport: &mut Transport, updated: Vec<Segment>) {
    for segment in updated {
        if let Some(existing) = transport.segments.iter_mut().find(|s| s.uid == segment.uid) {
            *existing = segment;
        }
    }
}
