//! Payload validation shared by the history and prediction slices.

use crate::error::ForecastError;
use rust_decimal::prelude::*;
use std::fmt;

#[derive(Debug)]
pub enum PayloadValidationError {
    Multiple(String, Vec<PayloadValidationError>),
    MissingField(&'static str),
    NonFinite(&'static str),
    Negative(&'static str),
    NotPositive(&'static str),
    OutOfRange(&'static str),
    InvalidDate(String),
    EmptyHistory,
    HistoryPoint(usize, Box<PayloadValidationError>),
    SamplePath(usize, Box<PayloadValidationError>),
}

impl fmt::Display for PayloadValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadValidationError::Multiple(context, errors) => {
                writeln!(f, "Payload validation errors ({context}):")?;
                for err in errors {
                    writeln!(f, "  - {}", err)?;
                }
                Ok(())
            }
            PayloadValidationError::MissingField(field) => write!(f, "Missing field: {field}"),
            PayloadValidationError::NonFinite(field) => write!(f, "Non-finite number: {field}"),
            PayloadValidationError::Negative(field) => write!(f, "Negative value: {field}"),
            PayloadValidationError::NotPositive(field) => {
                write!(f, "Value must be positive: {field}")
            }
            PayloadValidationError::OutOfRange(field) => write!(f, "Value out of range: {field}"),
            PayloadValidationError::InvalidDate(raw) => write!(f, "Invalid date: {raw:?}"),
            PayloadValidationError::EmptyHistory => write!(f, "History is empty"),
            PayloadValidationError::HistoryPoint(index, err) => {
                write!(f, "History point {index}: {err}")
            }
            PayloadValidationError::SamplePath(index, err) => {
                write!(f, "Sample path {index}: {err}")
            }
        }
    }
}

impl std::error::Error for PayloadValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PayloadValidationError::HistoryPoint(_, e) => Some(e.as_ref()),
            PayloadValidationError::SamplePath(_, e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<PayloadValidationError> for ForecastError {
    fn from(err: PayloadValidationError) -> Self {
        ForecastError::InvalidPayload(err.to_string().trim_end().to_string())
    }
}

/// Collapse collected errors: none → `Ok`, one → itself, many → `Multiple`.
pub(crate) fn collect(
    context: &str,
    mut errors: Vec<PayloadValidationError>,
) -> Result<(), PayloadValidationError> {
    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(PayloadValidationError::Multiple(context.to_string(), errors)),
    }
}

/// Required finite number → `Decimal`. Pushes an error and yields zero otherwise.
pub(crate) fn required_decimal(
    field: &'static str,
    value: Option<f64>,
    errors: &mut Vec<PayloadValidationError>,
) -> Decimal {
    match value {
        None => {
            errors.push(PayloadValidationError::MissingField(field));
            Decimal::ZERO
        }
        Some(v) if !v.is_finite() => {
            errors.push(PayloadValidationError::NonFinite(field));
            Decimal::ZERO
        }
        Some(v) => Decimal::from_f64(v).unwrap_or_else(|| {
            errors.push(PayloadValidationError::NonFinite(field));
            Decimal::ZERO
        }),
    }
}

/// Required strictly positive integer that fits in `u32`.
pub(crate) fn required_count(
    field: &'static str,
    value: Option<i64>,
    errors: &mut Vec<PayloadValidationError>,
) -> u32 {
    match value {
        None => {
            errors.push(PayloadValidationError::MissingField(field));
            0
        }
        Some(v) if v <= 0 => {
            errors.push(PayloadValidationError::NotPositive(field));
            0
        }
        Some(v) => u32::try_from(v).unwrap_or_else(|_| {
            errors.push(PayloadValidationError::OutOfRange(field));
            0
        }),
    }
}
