//! History sub-client: closing-price queries.

use crate::client::ForecastClient;
use crate::domain::history::HistoryPoint;
use crate::error::ForecastError;
use crate::shared::{DateRange, Ticker};

/// Sub-client for price history.
pub struct History<'a> {
    pub(crate) client: &'a ForecastClient,
}

impl<'a> History<'a> {
    /// Fetch and validate the closing-price series for `ticker` over `range`.
    pub async fn get(
        &self,
        ticker: &Ticker,
        range: &DateRange,
    ) -> Result<Vec<HistoryPoint>, ForecastError> {
        let resp = self.client.http.get_stock_history(ticker, range).await?;
        Ok(Vec::<HistoryPoint>::try_from(resp)?)
    }
}
