//! Rendering: turns a history series and summary cards into view models.
//!
//! [`render`] covers the chart and statistics panel; [`render_page`] composes a
//! whole page from an [`InteractionState`]: trigger control, error banner,
//! chart section, forecast section.

pub mod chart;
pub mod panel;

pub use chart::{ChartPoint, ChartView, Tooltip, YAxis};
pub use panel::StatsPanel;

use crate::domain::forecast::{forecast_footnote, summary_cards, DisplayCard};
use crate::domain::history::HistoryPoint;
use crate::error::ForecastError;
use crate::session::InteractionState;
use std::fmt;

pub const TRIGGER_LABEL: &str = "Fetch data & run prediction";
pub const LOADING_LABEL: &str = "Loading...";

/// Chart plus statistics panel.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedView {
    pub chart: ChartView,
    pub panel: StatsPanel,
}

pub fn render(history: &[HistoryPoint], cards: &[DisplayCard]) -> RenderedView {
    RenderedView {
        chart: ChartView::new(history),
        panel: StatsPanel::new(cards),
    }
}

impl fmt::Display for RenderedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.chart)?;
        writeln!(f)?;
        write!(f, "{}", self.panel)
    }
}

/// The button that starts a fetch cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerControl {
    pub label: &'static str,
    pub enabled: bool,
}

/// Everything a page shows for one state.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub control: TriggerControl,
    pub error: Option<String>,
    /// Present only for a non-empty history.
    pub chart: Option<ChartView>,
    /// Present only once a prediction has arrived.
    pub forecast: Option<StatsPanel>,
}

/// Compose the page for `state`. Cards are derived here, never stored.
pub fn render_page(state: &InteractionState) -> Result<PageView, ForecastError> {
    let control = if state.is_loading() {
        TriggerControl {
            label: LOADING_LABEL,
            enabled: false,
        }
    } else {
        TriggerControl {
            label: TRIGGER_LABEL,
            enabled: true,
        }
    };

    let chart = state
        .history()
        .filter(|h| !h.is_empty())
        .map(ChartView::new);

    let forecast = match state.prediction() {
        Some(prediction) => {
            let cards = summary_cards(prediction)?;
            Some(StatsPanel::new(&cards).with_footnote(forecast_footnote(prediction)))
        }
        None => None,
    };

    Ok(PageView {
        control,
        error: state.error_message().map(str::to_string),
        chart,
        forecast,
    })
}

impl fmt::Display for PageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.control.enabled { "" } else { " (disabled)" };
        writeln!(f, "[ {} ]{}", self.control.label, marker)?;
        if let Some(err) = &self.error {
            writeln!(f, "! {}", err)?;
        }
        if let Some(chart) = &self.chart {
            writeln!(f)?;
            write!(f, "{}", chart)?;
        }
        if let Some(panel) = &self.forecast {
            writeln!(f)?;
            write!(f, "{}", panel)?;
        }
        Ok(())
    }
}
