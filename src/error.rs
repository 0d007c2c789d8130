//! Unified error types.

use thiserror::Error;

/// Top-level error for the forecast pipeline.
#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Division by zero: current price is zero")]
    DivisionByZero,
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Invalid response body: {0}")]
    InvalidBody(String),
}

/// Coarse error taxonomy surfaced at the session boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request was rejected before a response arrived.
    NetworkFailure,
    /// The service answered with a non-2xx status.
    HttpStatus,
    /// The response could not be decoded or failed validation.
    InvalidPayload,
    /// Percent change requested against a zero current price.
    DivisionByZero,
}

impl ForecastError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ForecastError::Http(e) => e.kind(),
            ForecastError::InvalidPayload(_) => ErrorKind::InvalidPayload,
            ForecastError::DivisionByZero => ErrorKind::DivisionByZero,
        }
    }
}

impl HttpError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            #[cfg(feature = "http")]
            HttpError::Reqwest(_) => ErrorKind::NetworkFailure,
            HttpError::Timeout => ErrorKind::NetworkFailure,
            HttpError::ServerError { .. } | HttpError::NotFound(_) | HttpError::BadRequest(_) => {
                ErrorKind::HttpStatus
            }
            HttpError::InvalidBody(_) => ErrorKind::InvalidPayload,
        }
    }

    /// Map a non-2xx status and its body to the matching variant.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            404 => HttpError::NotFound(body),
            400..=499 => HttpError::BadRequest(body),
            _ => HttpError::ServerError { status, body },
        }
    }
}
