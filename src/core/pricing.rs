use crate::core::dates::{parse_date, DateError};
use crate::models::Camper;

/// Minimum stay length, in days, for the weekly discount to apply
pub const DEFAULT_MIN_DISCOUNT_DAYS: i64 = 7;

/// Whole days between two dates, 0 if either is absent
///
/// Dates are parsed only when both are present. Negative when `end`
/// precedes `start`; the value is not clamped.
pub fn days_between(start: Option<&str>, end: Option<&str>) -> Result<i64, DateError> {
    match (start, end) {
        (Some(start), Some(end)) => Ok((parse_date(end)? - parse_date(start)?).num_days()),
        _ => Ok(0),
    }
}

/// Number of days a stay counts for, inclusive of both ends
#[inline]
pub fn days_stayed(start: Option<&str>, end: Option<&str>) -> Result<i64, DateError> {
    Ok(1 + days_between(start, end)?)
}

/// Calculate the total price of a stay
///
/// total = price_per_day * days_stayed, reduced by `weekly_discount`
/// when the stay reaches `min_discount_days`. No rounding is applied.
pub fn calculate_price(
    camper: &Camper,
    start: Option<&str>,
    end: Option<&str>,
    min_discount_days: i64,
) -> Result<f64, DateError> {
    let days = days_stayed(start, end)?;
    let total = camper.price_per_day * days as f64;

    if days >= min_discount_days {
        Ok(total - total * camper.weekly_discount)
    } else {
        Ok(total)
    }
}
