//! Civil date-time on a millisecond line, with integer carry arithmetic.

use crate::date::CivilDate;
use crate::error::CalendarError;
use crate::overflow::Overflow;

/// Milliseconds in one second.
pub const MILLIS_PER_SECOND: i64 = 1_000;
/// Milliseconds in one minute.
pub const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
/// Milliseconds in one hour.
pub const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
/// Milliseconds in one 24-hour day.
pub const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// A date plus a wall-clock time with millisecond precision, no time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDateTime {
    date: CivilDate,
    hour: u8,
    minute: u8,
    second: u8,
    millisecond: u16,
}

impl CivilDateTime {
    /// Creates a date-time from a date and in-range clock fields.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidTime`] if a clock field is out of
    /// range (hour 0..=23, minute and second 0..=59, millisecond 0..=999).
    pub fn new(
        date: CivilDate,
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
    ) -> Result<Self, CalendarError> {
        let checks: [(&'static str, i64, i64); 4] = [
            ("hour", i64::from(hour), 23),
            ("minute", i64::from(minute), 59),
            ("second", i64::from(second), 59),
            ("millisecond", i64::from(millisecond), 999),
        ];
        for (field, value, max) in checks {
            if value > max {
                return Err(CalendarError::InvalidTime { field, value });
            }
        }
        Ok(Self {
            date,
            hour,
            minute,
            second,
            millisecond,
        })
    }

    /// Midnight at the start of `date`.
    pub fn midnight(date: CivilDate) -> Self {
        Self {
            date,
            hour: 0,
            minute: 0,
            second: 0,
            millisecond: 0,
        }
    }

    /// Builds a date-time from fields that may all be out of range.
    ///
    /// The month carries into the year, the day-of-month is resolved under
    /// `overflow`, and the clock fields then carry into the day (minute 61
    /// is one hour and one minute, hour 24 is midnight of the next day).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDay`] when rejecting a non-existent
    /// day, or a range/overflow error if the result leaves the supported
    /// range.
    #[allow(clippy::too_many_arguments)]
    pub fn from_overflowing(
        year: i64,
        month: i64,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
        millisecond: i64,
        overflow: Overflow,
    ) -> Result<Self, CalendarError> {
        let date = CivilDate::resolve(year, month, day, overflow)?;
        let clock = i128::from(hour) * i128::from(MILLIS_PER_HOUR)
            + i128::from(minute) * i128::from(MILLIS_PER_MINUTE)
            + i128::from(second) * i128::from(MILLIS_PER_SECOND)
            + i128::from(millisecond);
        let base = i128::from(date.to_epoch_days()) * i128::from(MILLIS_PER_DAY);
        Self::from_epoch_millis(base + clock)
    }

    /// Returns the date part.
    pub fn date(self) -> CivilDate {
        self.date
    }

    /// Returns the hour (0..=23).
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute (0..=59).
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Returns the second (0..=59).
    pub fn second(self) -> u8 {
        self.second
    }

    /// Returns the millisecond (0..=999).
    pub fn millisecond(self) -> u16 {
        self.millisecond
    }

    /// Milliseconds elapsed since midnight.
    pub fn millis_of_day(self) -> i64 {
        i64::from(self.hour) * MILLIS_PER_HOUR
            + i64::from(self.minute) * MILLIS_PER_MINUTE
            + i64::from(self.second) * MILLIS_PER_SECOND
            + i64::from(self.millisecond)
    }

    /// Milliseconds since 1970-01-01T00:00:00.000.
    pub fn to_epoch_millis(self) -> i128 {
        i128::from(self.date.to_epoch_days()) * i128::from(MILLIS_PER_DAY)
            + i128::from(self.millis_of_day())
    }

    /// Converts milliseconds since 1970-01-01T00:00:00.000 into a date-time.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if the result leaves the
    /// supported range.
    pub fn from_epoch_millis(millis: i128) -> Result<Self, CalendarError> {
        let day_len = i128::from(MILLIS_PER_DAY);
        let days = i64::try_from(millis.div_euclid(day_len)).map_err(|_| {
            CalendarError::ArithmeticOverflow {
                context: "converting milliseconds to days",
            }
        })?;
        // rem_euclid by one day always fits in i64.
        let clock = millis.rem_euclid(day_len) as i64;
        let date = CivilDate::from_epoch_days(days)?;
        Ok(Self::from_millis_of_day(date, clock))
    }

    /// Combines `date` with a clock value already reduced to one day.
    pub(crate) fn from_millis_of_day(date: CivilDate, clock: i64) -> Self {
        debug_assert!((0..MILLIS_PER_DAY).contains(&clock));
        Self {
            date,
            hour: (clock / MILLIS_PER_HOUR) as u8,
            minute: (clock % MILLIS_PER_HOUR / MILLIS_PER_MINUTE) as u8,
            second: (clock % MILLIS_PER_MINUTE / MILLIS_PER_SECOND) as u8,
            millisecond: (clock % MILLIS_PER_SECOND) as u16,
        }
    }
}

/// Splits a millisecond count (wrapped into one day) into
/// `(hour, minute, second, millisecond)`.
pub fn clock_fields(millis: i64) -> (u8, u8, u8, u16) {
    let clock = millis.rem_euclid(MILLIS_PER_DAY);
    (
        (clock / MILLIS_PER_HOUR) as u8,
        (clock % MILLIS_PER_HOUR / MILLIS_PER_MINUTE) as u8,
        (clock % MILLIS_PER_MINUTE / MILLIS_PER_SECOND) as u8,
        (clock % MILLIS_PER_SECOND) as u16,
    )
}
