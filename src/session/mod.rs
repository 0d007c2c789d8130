//! Fetch orchestration: `ForecastSession` drives the history → prediction
//! cycle and owns the [`InteractionState`].
//!
//! Both requests run on the caller's task, strictly one after the other. The
//! state sits behind a lock only so that observers can read it while a cycle
//! is suspended on the network; the session is its only writer, and the lock
//! is never held across an `.await`.

pub mod api;
pub mod state;

pub use api::ForecastApi;
pub use state::{InteractionState, HISTORY_FAILED, PREDICTION_FAILED};

use crate::domain::history::HistoryPoint;
use crate::domain::prediction::wire::PredictRequest;
use crate::domain::prediction::Prediction;
use crate::error::ForecastError;
use crate::shared::{DateRange, SimulationConfig, Ticker};

use async_lock::RwLock;

/// Which step of the cycle failed.
#[derive(Debug)]
enum CycleFailure {
    History(ForecastError),
    Prediction(ForecastError),
}

impl CycleFailure {
    fn message(&self) -> &'static str {
        match self {
            CycleFailure::History(_) => HISTORY_FAILED,
            CycleFailure::Prediction(_) => PREDICTION_FAILED,
        }
    }

    fn source(&self) -> &ForecastError {
        match self {
            CycleFailure::History(e) | CycleFailure::Prediction(e) => e,
        }
    }
}

/// Owns the interaction state and the transport used to fill it.
pub struct ForecastSession<A: ForecastApi> {
    api: A,
    state: RwLock<InteractionState>,
}

impl<A: ForecastApi> ForecastSession<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: RwLock::new(InteractionState::Idle),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Snapshot of the current state.
    pub async fn state(&self) -> InteractionState {
        self.state.read().await.clone()
    }

    /// Whether a new cycle may be started (the trigger control is enabled).
    pub async fn can_trigger(&self) -> bool {
        self.state.read().await.can_trigger()
    }

    /// Run one full fetch cycle. Ignored while a cycle is already loading.
    ///
    /// Outcomes are observed through [`ForecastSession::state`].
    pub async fn trigger_fetch(
        &self,
        ticker: &Ticker,
        range: &DateRange,
        config: &SimulationConfig,
    ) {
        {
            let mut state = self.state.write().await;
            if !state.begin() {
                tracing::warn!(
                    %ticker,
                    phase = state.phase(),
                    "Fetch already in flight, ignoring trigger"
                );
                return;
            }
        }
        tracing::info!(%ticker, start = %range.start, end = %range.end, "Fetch cycle started");

        match self.run_cycle(ticker, range, config).await {
            Ok(prediction) => {
                tracing::info!(
                    %ticker,
                    n_simulations = prediction.n_simulations,
                    "Fetch cycle succeeded"
                );
                self.state.write().await.prediction_received(prediction);
            }
            Err(failure) => {
                tracing::error!(
                    %ticker,
                    kind = ?failure.source().kind(),
                    error = %failure.source(),
                    "{}",
                    failure.message()
                );
                self.state.write().await.fail(failure.message());
            }
        }
    }

    /// History, then prediction; the first failure short-circuits.
    async fn run_cycle(
        &self,
        ticker: &Ticker,
        range: &DateRange,
        config: &SimulationConfig,
    ) -> Result<Prediction, CycleFailure> {
        let history = self.load_history(ticker, range).await?;
        tracing::debug!(%ticker, points = history.len(), "History received");
        self.state.write().await.history_received(history);

        let request = PredictRequest::new(range, config);
        self.api
            .fetch_prediction(ticker, &request)
            .await
            .map_err(CycleFailure::Prediction)
    }

    async fn load_history(
        &self,
        ticker: &Ticker,
        range: &DateRange,
    ) -> Result<Vec<HistoryPoint>, CycleFailure> {
        let history = self
            .api
            .fetch_history(ticker, range)
            .await
            .map_err(CycleFailure::History)?;
        if history.is_empty() {
            return Err(CycleFailure::History(ForecastError::InvalidPayload(
                "History is empty".to_string(),
            )));
        }
        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HttpError;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    struct DownApi;

    #[async_trait]
    impl ForecastApi for DownApi {
        async fn fetch_history(
            &self,
            _ticker: &Ticker,
            _range: &DateRange,
        ) -> Result<Vec<HistoryPoint>, ForecastError> {
            Err(HttpError::Timeout.into())
        }

        async fn fetch_prediction(
            &self,
            _ticker: &Ticker,
            _request: &PredictRequest,
        ) -> Result<Prediction, ForecastError> {
            unreachable!("prediction must not follow a failed history request")
        }
    }

    struct HistoryOnlyApi;

    #[async_trait]
    impl ForecastApi for HistoryOnlyApi {
        async fn fetch_history(
            &self,
            _ticker: &Ticker,
            _range: &DateRange,
        ) -> Result<Vec<HistoryPoint>, ForecastError> {
            Ok(vec![HistoryPoint::new(
                NaiveDate::from_ymd_opt(2026, 2, 4).unwrap(),
                Decimal::from(28000),
            )])
        }

        async fn fetch_prediction(
            &self,
            _ticker: &Ticker,
            _request: &PredictRequest,
        ) -> Result<Prediction, ForecastError> {
            Err(ForecastError::InvalidPayload("missing field".to_string()))
        }
    }

    fn trigger<A: ForecastApi>(session: &ForecastSession<A>) {
        tokio_test::block_on(session.trigger_fetch(
            &Ticker::default(),
            &DateRange::default(),
            &SimulationConfig::default(),
        ));
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = ForecastSession::new(DownApi);
        assert_eq!(tokio_test::block_on(session.state()), InteractionState::Idle);
        assert!(tokio_test::block_on(session.can_trigger()));
    }

    #[test]
    fn test_history_timeout_fails_cycle() {
        let session = ForecastSession::new(DownApi);
        trigger(&session);
        let state = tokio_test::block_on(session.state());
        assert_eq!(state.error_message(), Some(HISTORY_FAILED));
        assert!(state.history().is_none());
    }

    #[test]
    fn test_prediction_failure_keeps_history() {
        let session = ForecastSession::new(HistoryOnlyApi);
        trigger(&session);
        let state = tokio_test::block_on(session.state());
        assert_eq!(state.error_message(), Some(PREDICTION_FAILED));
        assert_eq!(state.history().map(|h| h.len()), Some(1));
    }
}
