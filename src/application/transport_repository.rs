// Repository trait for transport data access
use crate::domain::transport::{DistanceUpdate, Segment, Transport};
use async_trait::async_trait;

#[async_trait]
pub trait TransportRepository: Send + Sync {
    /// Fetch a transport with all its segments, `None` if it does not exist
    async fn get_transport(&self, transport_uid: &str) -> anyhow::Result<Option<Transport>>;

    /// Persist user distance edits and return the updated segment records
    async fn update_user_distances(
        &self,
        transport_uid: &str,
        updates: &[DistanceUpdate],
    ) -> anyhow::Result<Vec<Segment>>;

    /// Ask the backend to recompute telematic and estimated distances
    async fn refresh_distances(&self, transport_uid: &str) -> anyhow::Result<Option<Transport>>;
}
