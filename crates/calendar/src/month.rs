//! Month lengths and leap-year rules for the proleptic Gregorian calendar.

use crate::error::CalendarError;

/// Number of days in each month of a common year (index 0 unused, index 1 = January).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days elapsed in a common year before the first of each month
/// (index 0 unused, index 1 = January starts after 0 days, ...).
pub(crate) const DAYS_BEFORE_MONTH: [u16; 13] =
    [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Returns whether `year` is a Gregorian leap year.
///
/// Works for year zero and negative (astronomical) years.
pub fn is_leap(year: i64) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

/// Returns the number of days in `month` of a leap or common year.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(month: u8, is_leap: bool) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth {
            month: i64::from(month),
        });
    }
    Ok(month_len(month, is_leap))
}

/// Returns the number of days in `month` of `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_year_month(year: i64, month: u8) -> Result<u8, CalendarError> {
    days_in_month(month, is_leap(year))
}

/// Returns 366 for leap years and 365 otherwise.
pub fn days_in_year(year: i64) -> u16 {
    if is_leap(year) { 366 } else { 365 }
}

/// Normalizes a possibly out-of-range month into `(year, month)` with the
/// month in 1..=12, carrying whole years (month 13 is January of the next
/// year, month 0 is December of the previous one).
///
/// # Errors
///
/// Returns [`CalendarError::ArithmeticOverflow`] if the carry overflows.
pub fn balance_year_month(year: i64, month: i64) -> Result<(i64, u8), CalendarError> {
    let overflow = CalendarError::ArithmeticOverflow {
        context: "balancing year and month",
    };
    let zero_based = month.checked_sub(1).ok_or_else(|| overflow.clone())?;
    let year = year
        .checked_add(zero_based.div_euclid(12))
        .ok_or(overflow)?;
    // rem_euclid(12) is in 0..12, so the cast is lossless.
    let month = zero_based.rem_euclid(12) as u8 + 1;
    Ok((year, month))
}

/// Month length for an already validated month.
pub(crate) fn month_len(month: u8, is_leap: bool) -> u8 {
    debug_assert!((1..=12).contains(&month), "month {month} not validated");
    if month == 2 && is_leap {
        29
    } else {
        DAYS_PER_MONTH[month as usize]
    }
}

/// Ordinal day within the year (1..=366) for an already validated date.
pub(crate) fn day_of_year(year: i64, month: u8, day: u8) -> u16 {
    let leap_shift = u16::from(month > 2 && is_leap(year));
    DAYS_BEFORE_MONTH[month as usize] + leap_shift + u16::from(day)
}
