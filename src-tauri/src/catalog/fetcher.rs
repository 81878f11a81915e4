//! Catalog Fetcher
//!
//! One GET against the generation endpoint. No retry, no cache, no timeout.

use crate::domain::{DomainError, DomainResult, Pokemon};
use super::normalize::parse_generation;
use super::CatalogOutcome;

/// HTTP client for the remote species list
pub struct CatalogFetcher {
    url: String,
    http: reqwest::Client,
}

impl CatalogFetcher {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Fetch and normalize the catalog
    pub async fn fetch(&self) -> DomainResult<Vec<Pokemon>> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DomainError::Network(format!("Catalog request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(DomainError::Network(format!(
                "Catalog request to {} returned {}",
                self.url,
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::Network(format!("Failed to read catalog body: {}", e)))?;

        parse_generation(&body)
    }

    /// Fetch, logging the outcome instead of propagating errors
    pub async fn fetch_catalog(&self) -> CatalogOutcome {
        match self.fetch().await {
            Ok(pokemon) => {
                log::info!("Catalog loaded: {} entries from {}", pokemon.len(), self.url);
                CatalogOutcome::Loaded { pokemon }
            }
            Err(e) => {
                log::error!("Catalog fetch failed: {}", e);
                CatalogOutcome::Failed { reason: e.to_string() }
            }
        }
    }
}
