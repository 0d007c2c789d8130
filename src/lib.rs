//! # forecast-view
//!
//! Client-side presentation layer for a Monte Carlo stock forecast service.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core**: Shared newtypes, formatting, domain payloads and the pure
//!    forecast transforms (always available)
//! 2. **HTTP API**: `ForecastHttp`, one method per endpoint
//! 3. **High-Level Client**: `ForecastClient` with nested sub-clients
//! 4. **Session**: `ForecastSession`, the history → prediction fetch cycle and
//!    its interaction state
//! 5. **Render**: chart, statistics panel and page view models
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use forecast_view::prelude::*;
//!
//! let client = ForecastClient::builder()
//!     .base_url("http://localhost:8000")
//!     .build()?;
//! let session = ForecastSession::new(client);
//!
//! session
//!     .trigger_fetch(&Ticker::default(), &DateRange::default(), &SimulationConfig::default())
//!     .await;
//! println!("{}", render_page(&session.state().await)?);
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and display formatting.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, transforms.
pub mod domain;

/// Unified error types.
pub mod error;

/// Network constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// Low-level HTTP client.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `ForecastClient`: the primary entry point for the service.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 4: Session ─────────────────────────────────────────────────────────

/// Fetch orchestration and interaction state.
pub mod session;

// ── Layer 5: Render ──────────────────────────────────────────────────────────

/// View models for the chart, statistics panel and page.
pub mod render;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes + formatting
    pub use crate::shared::fmt::{format_currency, format_signed_percent};
    pub use crate::shared::{DateRange, SimulationConfig, Ticker, DEFAULT_TICKER};

    // Domain types
    pub use crate::domain::forecast::{
        confidence_interval_label, percent_change, summary_cards, CardKind, CardTone,
        DisplayCard,
    };
    pub use crate::domain::history::HistoryPoint;
    pub use crate::domain::prediction::wire::PredictRequest;
    pub use crate::domain::prediction::{PathPoint, Prediction};

    // Errors
    pub use crate::error::{ErrorKind, ForecastError, HttpError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        ForecastClient, ForecastClientBuilder, HistoryClient, PredictionsClient,
    };

    // Session
    pub use crate::session::{ForecastApi, ForecastSession, InteractionState};

    // Render
    pub use crate::render::{render, render_page, ChartView, PageView, RenderedView, StatsPanel};
}
