//! HTTP client layer: `ForecastHttp`, one method per service endpoint.

pub mod client;

pub use client::ForecastHttp;
