//! Transport seam between the session and the forecast service.

use crate::domain::history::HistoryPoint;
use crate::domain::prediction::wire::PredictRequest;
use crate::domain::prediction::Prediction;
use crate::error::ForecastError;
use crate::shared::{DateRange, Ticker};
use async_trait::async_trait;

/// The two calls a fetch cycle makes, already validated into domain types.
///
/// `ForecastClient` implements this over HTTP.
#[async_trait]
pub trait ForecastApi: Send + Sync {
    async fn fetch_history(
        &self,
        ticker: &Ticker,
        range: &DateRange,
    ) -> Result<Vec<HistoryPoint>, ForecastError>;

    async fn fetch_prediction(
        &self,
        ticker: &Ticker,
        request: &PredictRequest,
    ) -> Result<Prediction, ForecastError>;
}
