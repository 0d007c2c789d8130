//! Currency and percentage formatting.
//!
//! Every yen amount on screen (cards, interval label, axis ticks, tooltips)
//! goes through [`format_currency`].
//!
//! Rounding is round-half-away-from-zero: `1234.5 → ¥1,235`, `-2.5 → -¥3`.

use super::num::group_thousands;
use rust_decimal::prelude::*;

pub const CURRENCY_SYMBOL: &str = "¥";

/// Round to whole yen, group thousands, prefix `¥` (sign goes before the symbol).
pub fn format_currency(amount: &Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let mut whole = rounded.abs();
    whole.rescale(0);

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!(
        "{}{}{}",
        sign,
        CURRENCY_SYMBOL,
        group_thousands(&whole.to_string())
    )
}

/// Two-decimal percentage with an explicit sign: `+3.57%`, `+0.00%`, `-10.00%`.
///
/// The sign follows the unrounded value, so `-0.001` renders as `-0.00%`.
pub fn format_signed_percent(pct: &Decimal) -> String {
    let sign = if pct.is_sign_negative() && !pct.is_zero() {
        "-"
    } else {
        "+"
    };
    let magnitude = pct
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{}{:.2}%", sign, magnitude)
}
