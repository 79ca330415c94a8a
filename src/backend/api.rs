//! HTTP client for the Python search backend

use reqwest::{Client, StatusCode};

use super::types::{HealthResponse, SearchMode, SearchQuery, SearchResult};

/// Failures surfaced by [`BackendClient`] calls.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("backend returned {0}")]
    Status(StatusCode),
    #[error("could not decode backend response: {0}")]
    Decode(reqwest::Error),
}

/// Client for communicating with the search backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    origin: String,
}

impl BackendClient {
    pub fn new(origin: &str) -> Self {
        Self {
            client: Client::new(),
            origin: origin.trim_end_matches('/').to_string(),
        }
    }

    /// Run one search against the endpoint mapped to `mode`.
    ///
    /// The query is sent as-is; whether it is worth sending at all is the
    /// caller's decision.
    pub async fn search(
        &self,
        mode: SearchMode,
        query: &str,
    ) -> Result<Vec<SearchResult>, BackendError> {
        let url = format!("{}{}", self.origin, mode.endpoint_path());
        let response = self
            .client
            .post(&url)
            .json(&SearchQuery { query })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BackendError::Status(response.status()));
        }

        response.json().await.map_err(BackendError::Decode)
    }

    /// Check if backend is healthy
    pub async fn health(&self) -> Result<HealthResponse, BackendError> {
        let url = format!("{}/health", self.origin);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(BackendError::Status(response.status()));
        }

        response.json().await.map_err(BackendError::Decode)
    }
}
