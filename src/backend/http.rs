//! HTTP backend talking to the Fyyur server.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use super::{BackendError, DeleteOutcome, VenueBackend, VenueId};
use crate::config::ServerConfig;
use crate::constants::VENUES_PATH_SEGMENT;

/// Venue backend issuing requests against the server's REST routes.
#[derive(Clone, Debug)]
pub struct HttpVenueBackend {
    client: Client,
    base_url: Url,
}

impl HttpVenueBackend {
    /// Create a backend for the server at `base_url`.
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Create a backend from the `[server]` configuration section.
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .with_context(|| format!("Invalid server base_url: {}", config.base_url))?;
        Ok(Self::new(base_url))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of a venue resource: `<base>/venues/<id>`, the id encoded as a single path segment.
    pub fn venue_url(&self, venue_id: &VenueId) -> Result<Url, BackendError> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| BackendError::Other(format!("Base URL cannot have a path: {}", self.base_url)))?
            .clear()
            .push(VENUES_PATH_SEGMENT)
            .push(venue_id.as_str());
        Ok(url)
    }
}

#[async_trait]
impl VenueBackend for HttpVenueBackend {
    fn backend_type(&self) -> &str {
        "http"
    }

    async fn delete_venue(&self, venue_id: &VenueId) -> Result<DeleteOutcome, BackendError> {
        let url = self.venue_url(venue_id)?;
        log::debug!("DELETE {}", url);

        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        // The body decides the outcome, not the status code
        let status = response.status();
        if !status.is_success() {
            log::warn!("Delete of venue {} returned status {}", venue_id, status);
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        let json: Value = serde_json::from_slice(&body)
            .map_err(|e| BackendError::InvalidData(format!("Response body is not JSON: {}", e)))?;

        Ok(DeleteOutcome::from_json(&json))
    }
}
