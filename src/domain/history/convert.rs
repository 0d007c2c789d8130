//! Conversion: HistoryResponse → Vec<HistoryPoint> (validation, order preserved).

use super::wire::{HistoryPointResponse, HistoryResponse};
use super::HistoryPoint;
use crate::domain::validation::{collect, required_decimal, PayloadValidationError};
use chrono::NaiveDate;
use rust_decimal::Decimal;

impl TryFrom<HistoryPointResponse> for HistoryPoint {
    type Error = PayloadValidationError;

    fn try_from(source: HistoryPointResponse) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();

        let date = NaiveDate::parse_from_str(&source.date, "%Y-%m-%d").unwrap_or_else(|_| {
            errors.push(PayloadValidationError::InvalidDate(source.date.clone()));
            NaiveDate::default()
        });

        let close = required_decimal("close", source.close, &mut errors);
        if close < Decimal::ZERO {
            errors.push(PayloadValidationError::Negative("close"));
        }

        collect(&source.date, errors)?;
        Ok(HistoryPoint { date, close })
    }
}

/// Validate every row, keeping input order. Failures are tagged with their index.
pub(crate) fn convert_points(
    rows: Vec<HistoryPointResponse>,
    errors: &mut Vec<PayloadValidationError>,
) -> Vec<HistoryPoint> {
    let mut points = Vec::with_capacity(rows.len());
    for (index, row) in rows.into_iter().enumerate() {
        match HistoryPoint::try_from(row) {
            Ok(point) => points.push(point),
            Err(err) => errors.push(PayloadValidationError::HistoryPoint(index, Box::new(err))),
        }
    }
    points
}

impl TryFrom<HistoryResponse> for Vec<HistoryPoint> {
    type Error = PayloadValidationError;

    fn try_from(source: HistoryResponse) -> Result<Self, Self::Error> {
        let context = source
            .ticker
            .as_ref()
            .map(|t| t.to_string())
            .unwrap_or_else(|| "history".to_string());

        let rows = source
            .history
            .ok_or(PayloadValidationError::MissingField("history"))?;
        if rows.is_empty() {
            return Err(PayloadValidationError::EmptyHistory);
        }

        let mut errors = Vec::new();
        let points = convert_points(rows, &mut errors);
        collect(&context, errors)?;
        Ok(points)
    }
}
