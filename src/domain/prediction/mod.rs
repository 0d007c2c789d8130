//! Prediction domain: the Monte Carlo forecast summary for one ticker.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::domain::history::HistoryPoint;
use crate::shared::Ticker;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One step of a simulated price path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub day: u32,
    pub price: Decimal,
}

/// Validated forecast payload.
///
/// `ci_95_lower <= median_price <= ci_95_upper` is trusted from the service and
/// not checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub ticker: Ticker,
    pub current_price: Decimal,
    /// Horizon in trading days.
    pub future_days: u32,
    pub n_simulations: u32,
    pub expected_price: Decimal,
    pub median_price: Decimal,
    pub ci_95_lower: Decimal,
    pub ci_95_upper: Decimal,
    /// Daily volatility used by the simulation.
    pub sigma: Decimal,
    pub history: Vec<HistoryPoint>,
    pub sample_paths: Vec<Vec<PathPoint>>,
}

impl Prediction {
    /// Last simulated price of every non-empty sample path.
    pub fn final_prices(&self) -> Vec<Decimal> {
        self.sample_paths
            .iter()
            .filter_map(|path| path.last().map(|p| p.price))
            .collect()
    }
}
