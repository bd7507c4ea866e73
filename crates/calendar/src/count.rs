//! Day counting: collapse a calendar delta into a signed number of days.

use crate::date::CivilDate;
use crate::error::CalendarError;
use crate::overflow::Overflow;

/// The calendar part of a duration: years, months, weeks and days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DateDelta {
    /// Whole years.
    pub years: i64,
    /// Whole months.
    pub months: i64,
    /// Whole weeks.
    pub weeks: i64,
    /// Whole days.
    pub days: i64,
}

impl DateDelta {
    /// A delta of only years and months.
    pub fn years_months(years: i64, months: i64) -> Self {
        Self {
            years,
            months,
            ..Self::default()
        }
    }

    /// Returns `true` if resolving this delta needs an anchor date.
    pub fn needs_anchor(&self) -> bool {
        self.years != 0 || self.months != 0
    }
}

/// Converts `delta` into a signed count of days relative to `anchor`.
///
/// Without years or months this is `weeks * 7 + days` and the anchor is
/// ignored. Otherwise the anchor moves by `years` and `months` in a single
/// jump, the day-of-month is clamped to the destination month, and
/// `weeks * 7 + days` are added on top. The result is the number of days
/// between the anchor and that destination.
///
/// # Errors
///
/// Returns [`CalendarError::MissingAnchor`] if years or months are non-zero
/// and no anchor is given, or a range/overflow error for absurd deltas.
///
/// # Example
///
/// ```
/// use almanac_calendar::{CivilDate, DateDelta, total_days};
///
/// let anchor = CivilDate::new(2020, 1, 31).unwrap();
/// let one_month = DateDelta::years_months(0, 1);
/// assert_eq!(total_days(&one_month, Some(&anchor)).unwrap(), 29);
/// ```
pub fn total_days(delta: &DateDelta, anchor: Option<&CivilDate>) -> Result<i64, CalendarError> {
    let overflow = CalendarError::ArithmeticOverflow {
        context: "counting days",
    };
    let fixed = delta
        .weeks
        .checked_mul(7)
        .and_then(|w| w.checked_add(delta.days))
        .ok_or_else(|| overflow.clone())?;
    if !delta.needs_anchor() {
        return Ok(fixed);
    }
    let anchor = anchor.ok_or(CalendarError::MissingAnchor)?;
    let shifted = anchor.shift_year_month(delta.years, delta.months, Overflow::Constrain)?;
    shifted
        .to_epoch_days()
        .checked_add(fixed)
        .map(|target| target - anchor.to_epoch_days())
        .ok_or(overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i64, m: u8, d: u8) -> CivilDate {
        CivilDate::new(y, m, d).unwrap()
    }

    #[test]
    fn fixed_units_need_no_anchor() {
        let delta = DateDelta {
            weeks: 2,
            days: 3,
            ..DateDelta::default()
        };
        assert_eq!(total_days(&delta, None).unwrap(), 17);
    }

    #[test]
    fn months_without_anchor_fail() {
        let delta = DateDelta::years_months(0, 1);
        assert_eq!(
            total_days(&delta, None).unwrap_err(),
            CalendarError::MissingAnchor
        );
    }

    #[test]
    fn year_length_depends_on_anchor() {
        let year = DateDelta::years_months(1, 0);
        assert_eq!(total_days(&year, Some(&date(2020, 1, 1))).unwrap(), 366);
        assert_eq!(total_days(&year, Some(&date(2021, 1, 1))).unwrap(), 365);
        assert_eq!(total_days(&year, Some(&date(2019, 3, 1))).unwrap(), 366);
    }

    #[test]
    fn month_clamps_then_adds_days() {
        let delta = DateDelta {
            months: 1,
            days: 1,
            ..DateDelta::default()
        };
        // 2021-01-31 + 1 month = 2021-02-28, + 1 day = 2021-03-01
        assert_eq!(total_days(&delta, Some(&date(2021, 1, 31))).unwrap(), 29);
    }

    #[test]
    fn negative_months() {
        let delta = DateDelta::years_months(0, -1);
        // 2020-03-31 - 1 month = 2020-02-29
        assert_eq!(total_days(&delta, Some(&date(2020, 3, 31))).unwrap(), -31);
    }

    #[test]
    fn overflowing_weeks() {
        let delta = DateDelta {
            weeks: i64::MAX,
            ..DateDelta::default()
        };
        assert!(matches!(
            total_days(&delta, None),
            Err(CalendarError::ArithmeticOverflow { .. })
        ));
    }
}
