//! Wire types for the history endpoint.

use crate::shared::Ticker;
use serde::{Deserialize, Serialize};

/// A single `{date, close}` row as the service sends it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPointResponse {
    pub date: String,
    #[serde(default)]
    pub close: Option<f64>,
}

/// `GET /api/stock/{ticker}` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub ticker: Option<Ticker>,
    #[serde(default)]
    pub history: Option<Vec<HistoryPointResponse>>,
}
