//! Display formatting shared by the forecast cards and the chart.

pub mod currency;
pub mod num;

pub use currency::{format_currency, format_signed_percent, CURRENCY_SYMBOL};
