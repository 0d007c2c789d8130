//! High-level client: `ForecastClient` with nested sub-client accessors.
//!
//! Each endpoint has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the [`ForecastApi`] implementation used by
//! `ForecastSession`.

use crate::domain::history::client::History;
use crate::domain::history::HistoryPoint;
use crate::domain::prediction::client::Predictions;
use crate::domain::prediction::wire::PredictRequest;
use crate::domain::prediction::Prediction;
use crate::error::ForecastError;
use crate::http::ForecastHttp;
use crate::network::{API_URL_ENV, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use crate::session::ForecastApi;
use crate::shared::{DateRange, Ticker};

use async_trait::async_trait;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::history::client::History as HistoryClient;
pub use crate::domain::prediction::client::Predictions as PredictionsClient;

/// The primary entry point for talking to the forecast service.
#[derive(Clone)]
pub struct ForecastClient {
    pub(crate) http: ForecastHttp,
}

impl ForecastClient {
    pub fn builder() -> ForecastClientBuilder {
        ForecastClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn history(&self) -> History<'_> {
        History { client: self }
    }

    pub fn predictions(&self) -> Predictions<'_> {
        Predictions { client: self }
    }
}

#[async_trait]
impl ForecastApi for ForecastClient {
    async fn fetch_history(
        &self,
        ticker: &Ticker,
        range: &DateRange,
    ) -> Result<Vec<HistoryPoint>, ForecastError> {
        self.history().get(ticker, range).await
    }

    async fn fetch_prediction(
        &self,
        ticker: &Ticker,
        request: &PredictRequest,
    ) -> Result<Prediction, ForecastError> {
        self.predictions().run(ticker, request).await
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct ForecastClientBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for ForecastClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ForecastClientBuilder {
    /// Defaults, with the base URL taken from `FORECAST_API_URL` when set.
    pub fn from_env() -> Self {
        let builder = Self::default();
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => builder.base_url(url.trim()),
            _ => builder,
        }
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Per-request timeout. A request that exceeds it fails as a network error.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<ForecastClient, ForecastError> {
        tracing::debug!(base_url = %self.base_url, "Building forecast client");
        Ok(ForecastClient {
            http: ForecastHttp::new(&self.base_url, self.timeout)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = ForecastClient::builder().build().unwrap();
        assert_eq!(client.base_url(), DEFAULT_API_URL);
    }

    #[test]
    fn test_builder_base_url_override() {
        let client = ForecastClient::builder()
            .base_url("http://forecast.internal:9000/")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://forecast.internal:9000");
    }
}
