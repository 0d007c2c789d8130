//! Network constants for the forecast service.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable that overrides the base URL at construction time.
pub const API_URL_ENV: &str = "FORECAST_API_URL";

/// Default per-request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
