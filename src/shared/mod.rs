//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the forecast service expects, so they can be used directly in
//! wire types without conversion overhead.

pub mod fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Default ticker (Lasertec, Tokyo Stock Exchange).
pub const DEFAULT_TICKER: &str = "6920.T";

// ─── Ticker ──────────────────────────────────────────────────────────────────

/// Newtype for exchange ticker symbols (e.g. `"6920.T"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ticker(String);

impl Ticker {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Percent-encoded form for use as a URL path segment.
    pub fn path_segment(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self(DEFAULT_TICKER.to_string())
    }
}

impl std::fmt::Display for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Ticker {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Ticker {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for Ticker {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Ticker(s.to_string()))
    }
}

impl Serialize for Ticker {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Ticker {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Ticker(s))
    }
}

// ─── DateRange ───────────────────────────────────────────────────────────────

/// Inclusive calendar window of history to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Query string fragment: `start=YYYY-MM-DD&end=YYYY-MM-DD`.
    pub fn query(&self) -> String {
        format!("start={}&end={}", self.start, self.end)
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap_or_default(),
            end: NaiveDate::from_ymd_opt(2026, 2, 6).unwrap_or_default(),
        }
    }
}

// ─── SimulationConfig ────────────────────────────────────────────────────────

/// Parameters forwarded to the remote Monte Carlo forecaster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of simulated paths.
    pub n_sim: u32,
    /// Forecast horizon in trading days.
    pub future_days: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            n_sim: 10_000,
            future_days: 22,
        }
    }
}
