//! API client for communicating with the campus map REST API.
//!
//! This module provides the `ApiClient` struct for fetching building and
//! search data from the map backend.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize};
use tracing::{debug, warn};

use crate::config::Config;
use crate::models::{Building, SearchResult};

use super::{ApiError, BuildingProvider};

// ============================================================================
// Constants
// ============================================================================

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
/// The remote search path applies its own, much shorter bound on top.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum number of retries for rate-limited (429) requests.
/// 3 retries with exponential backoff usually succeeds without excessive delay.
const MAX_RATE_LIMIT_RETRIES: u32 = 3;

/// Initial backoff delay in milliseconds for rate limiting.
/// 1 second is polite to the server while not making users wait too long.
const INITIAL_BACKOFF_MS: u64 = 1000;

/// Wrapper around the `/api/search` payload.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<SearchResult>,
}

/// API client for the campus map backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Check if response is successful, returning an error with body if not.
    /// Returns Ok(Some(response)) for success, Ok(None) for rate limit (should retry),
    /// or Err for other errors.
    async fn check_response_for_retry(
        response: reqwest::Response,
    ) -> Result<Option<reqwest::Response>> {
        if response.status().is_success() {
            Ok(Some(response))
        } else if response.status().as_u16() == 429 {
            // Rate limited - signal to retry
            Ok(None)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }

    async fn get<T: DeserializeOwned>(&self, url: &str, query: &[(&str, String)]) -> Result<T> {
        let mut retries = 0;
        let mut backoff_ms = INITIAL_BACKOFF_MS;

        loop {
            let response = self
                .client
                .get(url)
                .query(query)
                .send()
                .await
                .with_context(|| format!("Failed to send GET request to {}", url))?;

            match Self::check_response_for_retry(response).await? {
                Some(response) => {
                    return response.json().await
                        .with_context(|| format!("Failed to parse JSON response from {}", url));
                }
                None => {
                    // Rate limited
                    retries += 1;
                    if retries > MAX_RATE_LIMIT_RETRIES {
                        return Err(ApiError::RateLimited.into());
                    }
                    warn!(url = url, retry = retries, backoff_ms = backoff_ms, "Rate limited, backing off");
                    tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
                    backoff_ms *= 2; // Exponential backoff
                }
            }
        }
    }
}

#[async_trait]
impl BuildingProvider for ApiClient {
    async fn fetch_buildings(
        &self,
        query: Option<&str>,
        building_type: Option<&str>,
    ) -> Result<Vec<Building>> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(q) = query {
            params.push(("query", q.to_string()));
        }
        if let Some(t) = building_type {
            params.push(("type", t.to_string()));
        }

        let buildings: Vec<Building> = self.get(&self.url("/api/buildings"), &params).await?;
        debug!(count = buildings.len(), "Fetched building list");
        Ok(buildings)
    }

    async fn fetch_building(&self, id: &str) -> Result<Building> {
        let building: Building = self
            .get(&self.url(&format!("/api/buildings/{}", id)), &[])
            .await?;
        debug!(id, name = %building.name, "Fetched building");
        Ok(building)
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchResult>> {
        let params = [
            ("q", query.to_string()),
            ("limit", limit.to_string()),
        ];
        let response: SearchResponse = self.get(&self.url("/api/search"), &params).await?;
        debug!(count = response.results.len(), query, "Remote search returned");
        Ok(response.results)
    }

    async fn fetch_suggestions(&self) -> Result<Vec<String>> {
        self.get(&self.url("/api/suggestions"), &[]).await
    }
}
