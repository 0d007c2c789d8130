//! Wire types for the predict endpoint.

use crate::domain::history::wire::HistoryPointResponse;
use crate::shared::{DateRange, SimulationConfig, Ticker};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// `POST /api/stock/{ticker}/predict` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub n_sim: u32,
    pub future_days: u32,
}

impl PredictRequest {
    pub fn new(range: &DateRange, config: &SimulationConfig) -> Self {
        Self {
            start: range.start,
            end: range.end,
            n_sim: config.n_sim,
            future_days: config.future_days,
        }
    }
}

/// One `{day, price}` step of a simulated path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPointResponse {
    #[serde(default)]
    pub day: Option<i64>,
    #[serde(default)]
    pub price: Option<f64>,
}

/// Predict endpoint response. Every field is optional on the wire so that a
/// missing value surfaces as a validation error rather than a decode error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictionResponse {
    #[serde(default)]
    pub ticker: Option<Ticker>,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub future_days: Option<i64>,
    #[serde(default)]
    pub n_simulations: Option<i64>,
    #[serde(default)]
    pub expected_price: Option<f64>,
    #[serde(default)]
    pub median_price: Option<f64>,
    #[serde(default)]
    pub ci_95_lower: Option<f64>,
    #[serde(default)]
    pub ci_95_upper: Option<f64>,
    #[serde(default)]
    pub sigma: Option<f64>,
    #[serde(default)]
    pub history: Vec<HistoryPointResponse>,
    #[serde(default)]
    pub sample_paths: Vec<Vec<PathPointResponse>>,
}
