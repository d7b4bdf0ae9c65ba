//! Week arithmetic shared by the decision stages.
//!
//! Coverage and arrival values are plain `Decimal` weeks. The "never"
//! sentinel stands for an arrival that will not happen (end of life) and for
//! stock that never depletes (no remaining demand).

use rust_decimal::Decimal;

/// Sentinel for "never": no replenishment, or stock that never depletes.
pub const NEVER_WEEKS: Decimal = Decimal::from_parts(999, 0, 0, false, 0);

/// Days per week.
pub const DAYS_PER_WEEK: Decimal = Decimal::from_parts(7, 0, 0, false, 0);

/// One hundred, for percentages.
pub const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Returns true if the value is at or beyond the never sentinel.
#[must_use]
pub fn is_never(weeks: Decimal) -> bool {
    weeks >= NEVER_WEEKS
}

/// Divide, returning `fallback` unless the denominator is strictly positive
/// and the quotient fits in a `Decimal`.
#[must_use]
pub fn ratio_or(numerator: Decimal, denominator: Decimal, fallback: Decimal) -> Decimal {
    if denominator > Decimal::ZERO {
        numerator.checked_div(denominator).unwrap_or(fallback)
    } else {
        fallback
    }
}

/// Weeks of coverage for a stock level at a weekly demand.
///
/// Returns the never sentinel when there is no positive demand left.
#[must_use]
pub fn coverage_or_never(stock: Decimal, weekly_demand: Decimal) -> Decimal {
    ratio_or(stock, weekly_demand, NEVER_WEEKS)
}

/// Convert a day count to weeks.
#[must_use]
pub fn days_to_weeks(days: Decimal) -> Decimal {
    days / DAYS_PER_WEEK
}
