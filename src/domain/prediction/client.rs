//! Predictions sub-client: runs the remote Monte Carlo forecast.

use crate::client::ForecastClient;
use crate::domain::prediction::wire::PredictRequest;
use crate::domain::prediction::Prediction;
use crate::error::ForecastError;
use crate::shared::Ticker;

pub struct Predictions<'a> {
    pub(crate) client: &'a ForecastClient,
}

impl<'a> Predictions<'a> {
    pub async fn run(
        &self,
        ticker: &Ticker,
        request: &PredictRequest,
    ) -> Result<Prediction, ForecastError> {
        let resp = self.client.http.predict(ticker, request).await?;
        Ok(Prediction::try_from(resp)?)
    }
}
