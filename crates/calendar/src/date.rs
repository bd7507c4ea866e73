//! Proleptic Gregorian date with conversions to and from the epoch-day line.

use crate::MAX_YEAR;
use crate::error::CalendarError;
use crate::month::{balance_year_month, day_of_year, is_leap, month_len};
use crate::overflow::Overflow;

/// Days from 0000-03-01 to 1970-01-01 on the shifted (March-based) calendar.
const EPOCH_SHIFT: i64 = 719_468;
/// Days in a 400-year Gregorian cycle.
const DAYS_PER_ERA: i64 = 146_097;

/// A date in the proleptic Gregorian calendar.
///
/// Ordering is chronological because the fields are compared year, then
/// month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate {
    year: i64,
    month: u8,
    day: u8,
}

impl CivilDate {
    /// Creates a new `CivilDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the year is outside `±MAX_YEAR`, the
    /// month is not in 1..=12, or the day does not exist in that month.
    pub fn new(year: i64, month: u8, day: u8) -> Result<Self, CalendarError> {
        check_year(year)?;
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth {
                month: i64::from(month),
            });
        }
        let max_day = month_len(month, is_leap(year));
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                year,
                month,
                day: i64::from(day),
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Creates a date from a possibly out-of-range month and day.
    ///
    /// The month carries into the year first; the day is then resolved
    /// against the destination month under `overflow`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDay`] when `overflow` is
    /// [`Overflow::Reject`] and the day does not exist, or
    /// [`CalendarError::YearOutOfRange`] if the carry leaves the range.
    pub fn resolve(year: i64, month: i64, day: i64, overflow: Overflow) -> Result<Self, CalendarError> {
        let (year, month) = balance_year_month(year, month)?;
        check_year(year)?;
        let day = overflow.resolve_day(year, month, day)?;
        Ok(Self { year, month, day })
    }

    /// Returns the year.
    pub fn year(self) -> i64 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the number of days in this date's month.
    pub fn days_in_month(self) -> u8 {
        month_len(self.month, is_leap(self.year))
    }

    /// Returns the ordinal day within the year (1..=366).
    pub fn day_of_year(self) -> u16 {
        day_of_year(self.year, self.month, self.day)
    }

    /// Returns the number of days since 1970-01-01 (negative before it).
    pub fn to_epoch_days(self) -> i64 {
        // Shift the year so that it starts in March; the leap day then falls
        // at the end of the shifted year.
        let year = if self.month <= 2 {
            self.year - 1
        } else {
            self.year
        };
        let era = year.div_euclid(400);
        let year_of_era = year - era * 400;
        let month = i64::from(self.month);
        let shifted_month = if month > 2 { month - 3 } else { month + 9 };
        let day_of_shifted_year = (153 * shifted_month + 2) / 5 + i64::from(self.day) - 1;
        let day_of_era =
            year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_shifted_year;
        era * DAYS_PER_ERA + day_of_era - EPOCH_SHIFT
    }

    /// Converts a count of days since 1970-01-01 back into a date.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if the resulting year is
    /// outside `±MAX_YEAR`.
    pub fn from_epoch_days(days: i64) -> Result<Self, CalendarError> {
        // ±MAX_YEAR spans far fewer than i64::MAX / 2 days; anything larger
        // is out of range and must not reach the era arithmetic below.
        const LIMIT: i64 = (MAX_YEAR + 1) * 366;
        if !(-LIMIT..=LIMIT).contains(&days) {
            return Err(CalendarError::YearOutOfRange {
                year: days / 365 + 1970,
            });
        }
        let shifted = days + EPOCH_SHIFT;
        let era = shifted.div_euclid(DAYS_PER_ERA);
        let day_of_era = shifted - era * DAYS_PER_ERA;
        let year_of_era =
            (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
        let day_of_shifted_year =
            day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
        let shifted_month = (5 * day_of_shifted_year + 2) / 153;
        let day = day_of_shifted_year - (153 * shifted_month + 2) / 5 + 1;
        let month = if shifted_month < 10 {
            shifted_month + 3
        } else {
            shifted_month - 9
        };
        let year = year_of_era + era * 400 + i64::from(month <= 2);
        check_year(year)?;
        // month is in 1..=12 and day in 1..=31 by construction.
        Ok(Self {
            year,
            month: month as u8,
            day: day as u8,
        })
    }

    /// Returns the date `days` days after this one (before it if negative).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the result leaves the supported range.
    pub fn add_days(self, days: i64) -> Result<Self, CalendarError> {
        let target = self
            .to_epoch_days()
            .checked_add(days)
            .ok_or(CalendarError::ArithmeticOverflow {
                context: "adding days",
            })?;
        Self::from_epoch_days(target)
    }

    /// Moves this date by whole years and months, then resolves the original
    /// day-of-month against the destination month under `overflow`.
    ///
    /// 2020-01-31 shifted by one month is 2020-02-29 when constraining.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDay`] when rejecting a non-existent
    /// day, or a range/overflow error for absurd deltas.
    pub fn shift_year_month(
        self,
        years: i64,
        months: i64,
        overflow: Overflow,
    ) -> Result<Self, CalendarError> {
        let overflow_err = CalendarError::ArithmeticOverflow {
            context: "shifting years and months",
        };
        let year = self.year.checked_add(years).ok_or_else(|| overflow_err.clone())?;
        let month = i64::from(self.month)
            .checked_add(months)
            .ok_or(overflow_err)?;
        Self::resolve(year, month, i64::from(self.day), overflow)
    }
}

fn check_year(year: i64) -> Result<(), CalendarError> {
    if !(-MAX_YEAR..=MAX_YEAR).contains(&year) {
        return Err(CalendarError::YearOutOfRange { year });
    }
    Ok(())
}
