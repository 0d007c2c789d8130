//! Conversion: PredictionResponse → Prediction (TryFrom + validation).

use super::wire::{PathPointResponse, PredictionResponse};
use super::{PathPoint, Prediction};
use crate::domain::history::convert_points;
use crate::domain::validation::{collect, required_count, required_decimal, PayloadValidationError};
use crate::shared::Ticker;
use rust_decimal::Decimal;

impl TryFrom<PathPointResponse> for PathPoint {
    type Error = PayloadValidationError;

    fn try_from(source: PathPointResponse) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();

        let day = match source.day {
            None => {
                errors.push(PayloadValidationError::MissingField("day"));
                0
            }
            Some(d) if d < 0 => {
                errors.push(PayloadValidationError::Negative("day"));
                0
            }
            Some(d) => u32::try_from(d).unwrap_or_else(|_| {
                errors.push(PayloadValidationError::OutOfRange("day"));
                0
            }),
        };
        let price = required_decimal("price", source.price, &mut errors);

        collect("path point", errors)?;
        Ok(PathPoint { day, price })
    }
}

impl TryFrom<PredictionResponse> for Prediction {
    type Error = PayloadValidationError;

    fn try_from(source: PredictionResponse) -> Result<Self, Self::Error> {
        let mut errors: Vec<PayloadValidationError> = Vec::new();

        let ticker = source.ticker.clone().unwrap_or_else(|| {
            errors.push(PayloadValidationError::MissingField("ticker"));
            Ticker::new("")
        });
        let context = format!("prediction {}", ticker);

        let current_price = required_decimal("current_price", source.current_price, &mut errors);
        if source.current_price.is_some_and(f64::is_finite) && current_price <= Decimal::ZERO {
            errors.push(PayloadValidationError::NotPositive("current_price"));
        }

        let future_days = required_count("future_days", source.future_days, &mut errors);
        let n_simulations = required_count("n_simulations", source.n_simulations, &mut errors);
        let expected_price =
            required_decimal("expected_price", source.expected_price, &mut errors);
        let median_price = required_decimal("median_price", source.median_price, &mut errors);
        let ci_95_lower = required_decimal("ci_95_lower", source.ci_95_lower, &mut errors);
        let ci_95_upper = required_decimal("ci_95_upper", source.ci_95_upper, &mut errors);

        let sigma = required_decimal("sigma", source.sigma, &mut errors);
        if sigma < Decimal::ZERO {
            errors.push(PayloadValidationError::Negative("sigma"));
        }

        let history = convert_points(source.history, &mut errors);

        let mut sample_paths = Vec::with_capacity(source.sample_paths.len());
        for (index, path) in source.sample_paths.into_iter().enumerate() {
            let converted: Result<Vec<PathPoint>, _> =
                path.into_iter().map(PathPoint::try_from).collect();
            match converted {
                Ok(points) => sample_paths.push(points),
                Err(err) => errors.push(PayloadValidationError::SamplePath(index, Box::new(err))),
            }
        }

        collect(&context, errors)?;
        Ok(Prediction {
            ticker,
            current_price,
            future_days,
            n_simulations,
            expected_price,
            median_price,
            ci_95_lower,
            ci_95_upper,
            sigma,
            history,
            sample_paths,
        })
    }
}
