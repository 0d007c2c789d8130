//! Low-level HTTP client: `ForecastHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens in the domain sub-clients). Requests are sent once; there is no
//! retry layer.

use crate::domain::history::wire::HistoryResponse;
use crate::domain::prediction::wire::{PredictRequest, PredictionResponse};
use crate::error::HttpError;
use crate::shared::{DateRange, Ticker};

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Low-level HTTP client for the forecast REST API.
#[derive(Clone)]
pub struct ForecastHttp {
    base_url: String,
    client: Client,
}

impl ForecastHttp {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(2)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Stock ────────────────────────────────────────────────────────────

    pub fn history_url(&self, ticker: &Ticker, range: &DateRange) -> String {
        format!(
            "{}/api/stock/{}?{}",
            self.base_url,
            ticker.path_segment(),
            range.query()
        )
    }

    pub fn predict_url(&self, ticker: &Ticker) -> String {
        format!(
            "{}/api/stock/{}/predict",
            self.base_url,
            ticker.path_segment()
        )
    }

    pub async fn get_stock_history(
        &self,
        ticker: &Ticker,
        range: &DateRange,
    ) -> Result<HistoryResponse, HttpError> {
        let url = self.history_url(ticker, range);
        self.get(&url).await
    }

    pub async fn predict(
        &self,
        ticker: &Ticker,
        request: &PredictRequest,
    ) -> Result<PredictionResponse, HttpError> {
        let url = self.predict_url(ticker);
        self.post(&url, request).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        self.do_request(reqwest::Method::GET, url, None::<&()>).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.do_request(reqwest::Method::POST, url, Some(body)).await
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        tracing::debug!(%method, "Requesting {}", url);

        let mut req = self.client.request(method, url);
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::Reqwest(e)
            }
        })?;
        let status = resp.status();

        if status.is_success() {
            let bytes = resp.bytes().await?;
            return serde_json::from_slice::<T>(&bytes)
                .map_err(|e| HttpError::InvalidBody(e.to_string()));
        }

        let body_text = resp.text().await.unwrap_or_default();
        Err(HttpError::from_status(status.as_u16(), body_text))
    }
}
