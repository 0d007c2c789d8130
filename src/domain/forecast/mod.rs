//! Forecast domain: pure transforms from a [`Prediction`] to display values.
//!
//! Nothing here performs I/O. Cards are derived on every render and never
//! stored.

use crate::domain::prediction::Prediction;
use crate::error::ForecastError;
use crate::shared::fmt::num::display_count;
use crate::shared::fmt::{format_currency, format_signed_percent};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Separator between the two interval bounds.
pub const INTERVAL_SEPARATOR: &str = " ~ ";

/// `(expected - current) / current * 100`.
///
/// A zero `current` is `DivisionByZero`; a result outside `Decimal`'s range is
/// `InvalidPayload`.
pub fn percent_change(current: &Decimal, expected: &Decimal) -> Result<Decimal, ForecastError> {
    if current.is_zero() {
        return Err(ForecastError::DivisionByZero);
    }
    expected
        .checked_sub(*current)
        .and_then(|diff| diff.checked_div(*current))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or_else(|| {
            ForecastError::InvalidPayload(format!(
                "percent change out of range: current {current}, expected {expected}"
            ))
        })
}

/// Both bounds through [`format_currency`], joined by [`INTERVAL_SEPARATOR`].
pub fn confidence_interval_label(lower: &Decimal, upper: &Decimal) -> String {
    format!(
        "{}{}{}",
        format_currency(lower),
        INTERVAL_SEPARATOR,
        format_currency(upper)
    )
}

/// Which summary statistic a card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    CurrentPrice,
    ExpectedPrice,
    MedianPrice,
    ConfidenceInterval,
}

impl CardKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::CurrentPrice => "Current price",
            Self::ExpectedPrice => "Expected price",
            Self::MedianPrice => "Median",
            Self::ConfidenceInterval => "95% confidence interval",
        }
    }
}

/// Card background. Only the expected-price card switches on the sign of change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardTone {
    Neutral,
    Gain,
    Loss,
    Median,
    Interval,
}

impl CardTone {
    /// Style class selector for the card container.
    pub fn class(&self) -> &'static str {
        match self {
            Self::Neutral => "bg-gray-100",
            Self::Gain => "bg-green-50",
            Self::Loss => "bg-red-50",
            Self::Median => "bg-blue-50",
            Self::Interval => "bg-purple-50",
        }
    }

    fn for_change(change: &Decimal) -> Self {
        if change.is_sign_negative() && !change.is_zero() {
            Self::Loss
        } else {
            Self::Gain
        }
    }
}

/// One summary statistic, ready to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayCard {
    pub kind: CardKind,
    pub label: String,
    pub value: String,
    pub sub: Option<String>,
    pub tone: CardTone,
}

impl DisplayCard {
    fn new(kind: CardKind, value: String, tone: CardTone) -> Self {
        Self {
            kind,
            label: kind.label().to_string(),
            value,
            sub: None,
            tone,
        }
    }
}

/// The four summary cards, always in this order: current, expected, median, interval.
pub fn summary_cards(prediction: &Prediction) -> Result<Vec<DisplayCard>, ForecastError> {
    let change = percent_change(&prediction.current_price, &prediction.expected_price)?;

    let mut expected = DisplayCard::new(
        CardKind::ExpectedPrice,
        format_currency(&prediction.expected_price),
        CardTone::for_change(&change),
    );
    expected.sub = Some(format_signed_percent(&change));

    Ok(vec![
        DisplayCard::new(
            CardKind::CurrentPrice,
            format_currency(&prediction.current_price),
            CardTone::Neutral,
        ),
        expected,
        DisplayCard::new(
            CardKind::MedianPrice,
            format_currency(&prediction.median_price),
            CardTone::Median,
        ),
        DisplayCard::new(
            CardKind::ConfidenceInterval,
            confidence_interval_label(&prediction.ci_95_lower, &prediction.ci_95_upper),
            CardTone::Interval,
        ),
    ])
}

/// `"22 trading days ahead / 10,000 simulations"`.
pub fn forecast_footnote(prediction: &Prediction) -> String {
    format!(
        "{} trading days ahead / {} simulations",
        prediction.future_days,
        display_count(u64::from(prediction.n_simulations))
    )
}
