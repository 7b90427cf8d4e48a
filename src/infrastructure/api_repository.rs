// TMS backend API repository implementation
use crate::application::transport_repository::TransportRepository;
use crate::domain::transport::{DistanceUpdate, Segment, Transport};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ApiTransportRepository {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiTransportRepository {
    pub fn new(base_url: String, token: Option<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn transport_url(&self, transport_uid: &str, suffix: &str) -> String {
        format!(
            "{}/transports/{}{}",
            self.base_url,
            urlencoding::encode(transport_uid),
            suffix
        )
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header("Accept", "application/json");
        match &self.token {
            Some(token) => request.header("Authorization", format!("Token {}", token)),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder, what: &str) -> Result<Response> {
        self.authorize(request)
            .send()
            .await
            .with_context(|| format!("Failed to send {} request to TMS backend", what))
    }

    /// `None` on 404, error on any other non-success status
    async fn read_optional_transport(response: Response, what: &str) -> Result<Option<Transport>> {
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = Self::ensure_success(response, what).await?;

        let transport = response
            .json::<Transport>()
            .await
            .with_context(|| format!("Failed to parse {} response", what))?;
        Ok(Some(transport))
    }

    async fn ensure_success(response: Response, what: &str) -> Result<Response> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("TMS backend {} failed with status {}: {}", what, status, body);
        }
        Ok(response)
    }
}

#[async_trait]
impl TransportRepository for ApiTransportRepository {
    async fn get_transport(&self, transport_uid: &str) -> Result<Option<Transport>> {
        let url = self.transport_url(transport_uid, "");
        tracing::debug!("Fetching transport from {}", url);

        let response = self.send(self.client.get(&url), "transport").await?;
        Self::read_optional_transport(response, "transport").await
    }

    async fn update_user_distances(
        &self,
        transport_uid: &str,
        updates: &[DistanceUpdate],
    ) -> Result<Vec<Segment>> {
        let url = self.transport_url(transport_uid, "/segments/distances");
        tracing::debug!("Patching {} segment distances at {}", updates.len(), url);

        let response = self
            .send(self.client.patch(&url).json(updates), "distance update")
            .await?;
        let response = Self::ensure_success(response, "distance update").await?;

        response
            .json::<Vec<Segment>>()
            .await
            .context("Failed to parse distance update response")
    }

    async fn refresh_distances(&self, transport_uid: &str) -> Result<Option<Transport>> {
        let url = self.transport_url(transport_uid, "/distances/refresh");
        tracing::debug!("Requesting distance refresh at {}", url);

        let response = self.send(self.client.post(&url), "distance refresh").await?;
        Self::read_optional_transport(response, "distance refresh").await
    }
}
