// In-memory repository, seeded from fixtures
use crate::application::transport_repository::TransportRepository;
use crate::domain::transport::{DistanceUpdate, Segment, Transport};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::path::Path;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct InMemoryTransportRepository {
    transports: RwLock<HashMap<String, Transport>>,
}

impl InMemoryTransportRepository {
    pub fn new(transports: Vec<Transport>) -> Self {
        Self {
            transports: RwLock::new(transports.into_iter().map(|t| (t.uid.clone(), t)).collect()),
        }
    }

    /// Load a JSON array of transports
    pub async fn from_fixtures(path: &Path) -> Result<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read fixtures {}", path.display()))?;
        let transports: Vec<Transport> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse fixtures {}", path.display()))?;

        tracing::info!("Loaded {} transports from {}", transports.len(), path.display());
        Ok(Self::new(transports))
    }
}

#[async_trait]
impl TransportRepository for InMemoryTransportRepository {
    async fn get_transport(&self, transport_uid: &str) -> Result<Option<Transport>> {
        Ok(self.transports.read().await.get(transport_uid).cloned())
    }

    async fn update_user_distances(
        &self,
        transport_uid: &str,
        updates: &[DistanceUpdate],
    ) -> Result<Vec<Segment>> {
        let mut transports = self.transports.write().await;
        let transport = transports
            .get_mut(transport_uid)
            .with_context(|| format!("Transport {} not found", transport_uid))?;

        let mut updated = Vec::with_capacity(updates.len());
        for update in updates {
            if let Some(segment) = transport
                .segments
                .iter_mut()
                .find(|s| s.uid == update.segment_uid)
            {
                segment.user_distance = update.user_distance;
                updated.push(segment.clone());
            }
        }

        Ok(updated)
    }

    async fn refresh_distances(&self, transport_uid: &str) -> Result<Option<Transport>> {
        // No telematics feed here, so only the refresh time moves
        let mut transports = self.transports.write().await;
        Ok(transports.get_mut(transport_uid).map(|transport| {
            transport.distances_refreshed_at = Some(Utc::now());
            transport.clone()
        }))
    }
}
