//! MRT feed HTTP client.
//!
//! Fetches the upstream station document and decodes it into the station,
//! schedule and fare views. Every call is a fresh request; nothing is cached.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::domain::{FareRecord, ScheduleRecord, Station};

use super::convert::convert_all;
use super::error::UpstreamError;
use super::source::TransitSource;
use super::types::{FarePayload, SchedulePayload, StationPayload};

/// Default upstream document, serving all three views.
pub const DEFAULT_API_URL: &str = "https://jakartamrt.co.id/id/val/stasiuns";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// How much of a bad response body to keep for diagnostics.
const BODY_EXCERPT_CHARS: usize = 500;

/// Configuration for the MRT client.
#[derive(Debug, Clone)]
pub struct MrtConfig {
    /// URL of the station list
    pub stations_url: String,
    /// URL of the schedule list
    pub schedules_url: String,
    /// URL of the fare table
    pub fares_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl MrtConfig {
    /// Create a config where all three views come from `api_url`.
    pub fn new(api_url: impl Into<String>) -> Self {
        let api_url = api_url.into();
        Self {
            stations_url: api_url.clone(),
            schedules_url: api_url.clone(),
            fares_url: api_url,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Serve schedules from a different URL.
    pub fn with_schedules_url(mut self, url: impl Into<String>) -> Self {
        self.schedules_url = url.into();
        self
    }

    /// Serve fares from a different URL.
    pub fn with_fares_url(mut self, url: impl Into<String>) -> Self {
        self.fares_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for MrtConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

/// MRT feed client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct MrtClient {
    http: reqwest::Client,
    config: MrtConfig,
}

impl MrtClient {
    /// Create a new client with the given configuration.
    pub fn new(config: MrtConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &MrtConfig {
        &self.config
    }

    /// Fetch the raw station list.
    pub async fn fetch_stations(&self) -> Result<Vec<StationPayload>, UpstreamError> {
        self.fetch_json(&self.config.stations_url).await
    }

    /// Fetch the raw schedule list.
    pub async fn fetch_schedules(&self) -> Result<Vec<SchedulePayload>, UpstreamError> {
        self.fetch_json(&self.config.schedules_url).await
    }

    /// Fetch the raw fare table.
    pub async fn fetch_fares(&self) -> Result<Vec<FarePayload>, UpstreamError> {
        self.fetch_json(&self.config.fares_url).await
    }

    /// GET `url` and decode the body as JSON.
    ///
    /// Anything other than 200 is an error; the body is kept in the error
    /// message. Decode failures keep an excerpt of the body.
    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, UpstreamError> {
        tracing::debug!(url, "fetching upstream");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| UpstreamError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(BODY_EXCERPT_CHARS).collect()),
        })
    }
}

impl TransitSource for MrtClient {
    async fn stations(&self) -> Result<Vec<Station>, UpstreamError> {
        let payloads = self.fetch_stations().await?;
        tracing::debug!(count = payloads.len(), "decoded stations");
        Ok(convert_all(payloads))
    }

    async fn schedules(&self) -> Result<Vec<ScheduleRecord>, UpstreamError> {
        let payloads = self.fetch_schedules().await?;
        tracing::debug!(count = payloads.len(), "decoded schedules");
        Ok(convert_all(payloads))
    }

    async fn fares(&self) -> Result<Vec<FareRecord>, UpstreamError> {
        let payloads = self.fetch_fares().await?;
        tracing::debug!(count = payloads.len(), "decoded fares");
        Ok(convert_all(payloads))
    }
}
