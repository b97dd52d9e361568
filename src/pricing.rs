//! Pricing

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places used for every charged amount.
pub const CURRENCY_SCALE: u32 = 2;

/// Round an amount to currency precision, half away from zero.
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Build a percentage from a whole-number percent (e.g. `10` for 10%).
pub fn percent_from_points(points: i64) -> Percentage {
    Percentage::from(Decimal::new(points, 2))
}

/// Calculates the amount charged for `value` once `discount` is applied.
///
/// The result is `value × (1 − discount)` rounded to currency precision. No
/// clamping is applied, so negative values keep their sign and discounts above
/// 100% produce negative costs.
pub fn discounted_cost(value: Decimal, discount: Percentage) -> Decimal {
    round_currency(value - discount * value)
}

/// Format an amount with exactly two decimal places.
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", round_currency(amount))
}
