//! Interaction state machine: owned by `ForecastSession`, transitions live here.

use crate::domain::history::HistoryPoint;
use crate::domain::prediction::Prediction;

/// User-facing message when the history request fails.
pub const HISTORY_FAILED: &str = "history retrieval failed";

/// User-facing message when the prediction request fails.
pub const PREDICTION_FAILED: &str = "prediction failed";

/// What the page is showing. Exactly one variant is active.
///
/// `Loading` and `Error` carry the history once it has been fetched, so the
/// chart stays visible while the prediction runs and after it fails.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InteractionState {
    #[default]
    Idle,
    Loading {
        history: Option<Vec<HistoryPoint>>,
    },
    Success {
        history: Vec<HistoryPoint>,
        prediction: Prediction,
    },
    Error {
        message: String,
        history: Option<Vec<HistoryPoint>>,
    },
}

impl InteractionState {
    /// Start a new cycle, discarding whatever was shown.
    ///
    /// Returns `false` (and changes nothing) while a cycle is in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        *self = InteractionState::Loading { history: None };
        true
    }

    /// History arrived; stay in `Loading` while the prediction runs.
    pub fn history_received(&mut self, points: Vec<HistoryPoint>) {
        if let InteractionState::Loading { history } = self {
            *history = Some(points);
        }
    }

    /// Prediction arrived; only valid once history is in hand.
    pub fn prediction_received(&mut self, prediction: Prediction) {
        if let InteractionState::Loading { history } = self {
            if let Some(history) = history.take() {
                *self = InteractionState::Success {
                    history,
                    prediction,
                };
            }
        }
    }

    /// Either request failed; keep any history already fetched.
    pub fn fail(&mut self, message: impl Into<String>) {
        if let InteractionState::Loading { history } = self {
            let history = history.take();
            *self = InteractionState::Error {
                message: message.into(),
                history,
            };
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, InteractionState::Loading { .. })
    }

    /// Whether the trigger control should be enabled.
    pub fn can_trigger(&self) -> bool {
        !self.is_loading()
    }

    pub fn history(&self) -> Option<&[HistoryPoint]> {
        match self {
            InteractionState::Idle => None,
            InteractionState::Loading { history } | InteractionState::Error { history, .. } => {
                history.as_deref()
            }
            InteractionState::Success { history, .. } => Some(history.as_slice()),
        }
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        match self {
            InteractionState::Success { prediction, .. } => Some(prediction),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            InteractionState::Error { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Short name for logs.
    pub fn phase(&self) -> &'static str {
        match self {
            InteractionState::Idle => "idle",
            InteractionState::Loading { .. } => "loading",
            InteractionState::Success { .. } => "success",
            InteractionState::Error { .. } => "error",
        }
    }
}
