//! End-to-end fetch cycles through `ForecastSession`.
//!
//! A scripted `ForecastApi` stands in for the service: it answers with a status
//! code and a JSON body, which go through the same wire → domain conversion as
//! the HTTP client, and it records every call it receives.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use forecast_view::domain::history::wire::HistoryResponse;
use forecast_view::domain::prediction::wire::PredictionResponse;
use forecast_view::error::{ErrorKind, HttpError};
use forecast_view::prelude::*;
use forecast_view::session::{HISTORY_FAILED, PREDICTION_FAILED};

const HISTORY_5: &str = r#"{
    "ticker": "6920.T",
    "history": [
        {"date": "2026-01-29", "close": 27400.0},
        {"date": "2026-01-30", "close": 27650.0},
        {"date": "2026-02-02", "close": 27900.0},
        {"date": "2026-02-03", "close": 27800.0},
        {"date": "2026-02-04", "close": 28000.0}
    ]
}"#;

const PREDICTION: &str = r#"{
    "ticker": "6920.T",
    "current_price": 28000,
    "future_days": 22,
    "n_simulations": 10000,
    "expected_price": 29000,
    "median_price": 28900,
    "ci_95_lower": 25000,
    "ci_95_upper": 33000,
    "sigma": 0.031,
    "history": [],
    "sample_paths": []
}"#;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    History(String),
    Prediction(String, PredictRequest),
}

struct Reply {
    status: u16,
    body: &'static str,
}

impl Reply {
    fn ok(body: &'static str) -> Self {
        Self { status: 200, body }
    }

    fn status(status: u16) -> Self {
        Self {
            status,
            body: r#"{"detail":"boom"}"#,
        }
    }

    fn decode<T: serde::de::DeserializeOwned>(&self) -> Result<T, ForecastError> {
        if !(200..300).contains(&self.status) {
            return Err(HttpError::from_status(self.status, self.body.to_string()).into());
        }
        serde_json::from_str(self.body).map_err(|e| HttpError::InvalidBody(e.to_string()).into())
    }
}

struct ScriptedApi {
    history: Reply,
    prediction: Reply,
    calls: Mutex<Vec<Call>>,
    history_gate: Option<Arc<Notify>>,
    prediction_gate: Option<Arc<Notify>>,
}

impl ScriptedApi {
    fn new(history: Reply, prediction: Reply) -> Self {
        Self {
            history,
            prediction,
            calls: Mutex::new(Vec::new()),
            history_gate: None,
            prediction_gate: None,
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ForecastApi for ScriptedApi {
    async fn fetch_history(
        &self,
        ticker: &Ticker,
        _range: &DateRange,
    ) -> Result<Vec<HistoryPoint>, ForecastError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::History(ticker.to_string()));
        if let Some(gate) = &self.history_gate {
            gate.notified().await;
        }
        let resp: HistoryResponse = self.history.decode()?;
        Ok(Vec::<HistoryPoint>::try_from(resp)?)
    }

    async fn fetch_prediction(
        &self,
        ticker: &Ticker,
        request: &PredictRequest,
    ) -> Result<Prediction, ForecastError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Prediction(ticker.to_string(), request.clone()));
        if let Some(gate) = &self.prediction_gate {
            gate.notified().await;
        }
        let resp: PredictionResponse = self.prediction.decode()?;
        Ok(Prediction::try_from(resp)?)
    }
}

async fn run(session: &ForecastSession<ScriptedApi>) {
    session
        .trigger_fetch(
            &Ticker::default(),
            &DateRange::default(),
            &SimulationConfig::default(),
        )
        .await;
}

#[tokio::test]
async fn success_cycle_renders_forecast_cards() {
    let session = ForecastSession::new(ScriptedApi::new(
        Reply::ok(HISTORY_5),
        Reply::ok(PREDICTION),
    ));
    assert_eq!(session.state().await, InteractionState::Idle);

    run(&session).await;

    let state = session.state().await;
    assert!(matches!(state, InteractionState::Success { .. }));
    assert_eq!(state.history().map(|h| h.len()), Some(5));

    let prediction = state.prediction().unwrap();
    let cards = summary_cards(prediction).unwrap();
    assert_eq!(cards[1].sub.as_deref(), Some("+3.57%"));
    assert_eq!(cards[3].value, "¥25,000 ~ ¥33,000");

    let view = render(state.history().unwrap(), &cards);
    assert_eq!(view.chart.points.len(), 5);
    assert_eq!(view.chart.visible_labels().len(), 5);
}

#[tokio::test]
async fn success_cycle_issues_two_ordered_calls() {
    let session = ForecastSession::new(ScriptedApi::new(
        Reply::ok(HISTORY_5),
        Reply::ok(PREDICTION),
    ));
    run(&session).await;

    let expected_body = PredictRequest::new(&DateRange::default(), &SimulationConfig::default());
    assert_eq!(
        session.api().calls(),
        vec![
            Call::History("6920.T".to_string()),
            Call::Prediction("6920.T".to_string(), expected_body),
        ]
    );
}

#[tokio::test]
async fn history_500_never_requests_prediction() {
    let session = ForecastSession::new(ScriptedApi::new(
        Reply::status(500),
        Reply::ok(PREDICTION),
    ));
    run(&session).await;

    let state = session.state().await;
    assert_eq!(state.error_message(), Some(HISTORY_FAILED));
    assert!(state.history().is_none());
    assert_eq!(session.api().calls().len(), 1);
    assert!(session.can_trigger().await);
}

#[tokio::test]
async fn empty_history_is_a_history_failure() {
    let session = ForecastSession::new(ScriptedApi::new(
        Reply::ok(r#"{"ticker":"6920.T","history":[]}"#),
        Reply::ok(PREDICTION),
    ));
    run(&session).await;

    assert_eq!(session.state().await.error_message(), Some(HISTORY_FAILED));
    assert_eq!(session.api().calls().len(), 1);
}

#[tokio::test]
async fn prediction_failure_keeps_history() {
    let session = ForecastSession::new(ScriptedApi::new(
        Reply::ok(HISTORY_5),
        Reply::status(404),
    ));
    run(&session).await;

    let state = session.state().await;
    assert_eq!(state.error_message(), Some(PREDICTION_FAILED));
    assert_eq!(state.history().map(|h| h.len()), Some(5));
    assert!(state.prediction().is_none());
    assert_eq!(session.api().calls().len(), 2);

    let page = render_page(&state).unwrap();
    assert!(page.chart.is_some());
    assert!(page.forecast.is_none());
    assert_eq!(page.error.as_deref(), Some(PREDICTION_FAILED));
}

#[tokio::test]
async fn malformed_prediction_is_a_prediction_failure() {
    let session = ForecastSession::new(ScriptedApi::new(
        Reply::ok(HISTORY_5),
        Reply::ok(r#"{"ticker":"6920.T","current_price":28000}"#),
    ));
    run(&session).await;

    assert_eq!(session.state().await.error_message(), Some(PREDICTION_FAILED));
}

#[tokio::test]
async fn undecodable_body_maps_to_invalid_payload() {
    let reply = Reply::ok("{not json");
    let err = reply.decode::<PredictionResponse>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidPayload);

    let err = Reply::status(502).decode::<PredictionResponse>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::HttpStatus);
}

#[tokio::test]
async fn retrigger_after_error_starts_fresh_cycle() {
    let session = ForecastSession::new(ScriptedApi::new(
        Reply::ok(HISTORY_5),
        Reply::status(500),
    ));
    run(&session).await;
    assert_eq!(session.state().await.error_message(), Some(PREDICTION_FAILED));

    run(&session).await;
    assert_eq!(session.api().calls().len(), 4);
    assert_eq!(session.state().await.error_message(), Some(PREDICTION_FAILED));
}

#[tokio::test]
async fn trigger_while_loading_is_ignored() {
    let gate = Arc::new(Notify::new());
    let mut api = ScriptedApi::new(Reply::ok(HISTORY_5), Reply::ok(PREDICTION));
    api.history_gate = Some(gate.clone());
    let session = ForecastSession::new(api);

    let first = run(&session);
    let second = async {
        run(&session).await;
        assert!(!session.can_trigger().await);
        assert!(session.state().await.is_loading());
        gate.notify_one();
    };
    tokio::join!(first, second);

    assert_eq!(session.api().calls().len(), 2);
    assert!(matches!(
        session.state().await,
        InteractionState::Success { .. }
    ));
}

#[tokio::test]
async fn history_is_observable_while_prediction_runs() {
    let gate = Arc::new(Notify::new());
    let mut api = ScriptedApi::new(Reply::ok(HISTORY_5), Reply::ok(PREDICTION));
    api.prediction_gate = Some(gate.clone());
    let session = ForecastSession::new(api);

    let cycle = run(&session);
    let observer = async {
        let state = session.state().await;
        assert!(state.is_loading());
        assert_eq!(state.history().map(|h| h.len()), Some(5));

        let page = render_page(&state).unwrap();
        assert!(!page.control.enabled);
        assert!(page.chart.is_some());
        gate.notify_one();
    };
    tokio::join!(cycle, observer);

    assert!(matches!(
        session.state().await,
        InteractionState::Success { .. }
    ));
}
