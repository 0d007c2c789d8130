//! History domain: daily closing prices for the chart.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

pub(crate) use convert::convert_points;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One trading day's closing price.
///
/// Sequences of these are kept in the order the service sent them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub date: NaiveDate,
    pub close: Decimal,
}

impl HistoryPoint {
    pub fn new(date: NaiveDate, close: Decimal) -> Self {
        Self { date, close }
    }

    /// Axis/tooltip label, `YYYY-MM-DD`.
    pub fn date_label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
