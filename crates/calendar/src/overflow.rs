//! Overflow policy for days that do not exist in their month.

use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;
use crate::month::{is_leap, month_len};

/// What to do when an operation produces a non-existent day-of-month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Overflow {
    /// Clamp the day into the month (2020-02-31 becomes 2020-02-29).
    #[default]
    Constrain,
    /// Fail with [`CalendarError::InvalidDay`].
    Reject,
}

impl Overflow {
    /// Resolves `day` against `year`-`month` under this policy.
    ///
    /// `month` must already be in 1..=12.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDay`] under [`Overflow::Reject`] when
    /// `day` is outside the month, and [`CalendarError::InvalidMonth`] for a
    /// month outside 1..=12.
    pub fn resolve_day(self, year: i64, month: u8, day: i64) -> Result<u8, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth {
                month: i64::from(month),
            });
        }
        let max_day = month_len(month, is_leap(year));
        if (1..=i64::from(max_day)).contains(&day) {
            // In 1..=31, lossless.
            return Ok(day as u8);
        }
        match self {
            Overflow::Constrain => Ok(if day < 1 { 1 } else { max_day }),
            Overflow::Reject => Err(CalendarError::InvalidDay {
                year,
                month,
                day,
                max_day,
            }),
        }
    }

    /// Returns the lowercase name used in options and configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            Overflow::Constrain => "constrain",
            Overflow::Reject => "reject",
        }
    }
}

impl fmt::Display for Overflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Overflow {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "constrain" => Ok(Overflow::Constrain),
            "reject" => Ok(Overflow::Reject),
            _ => Err(CalendarError::UnknownOverflow {
                value: s.to_string(),
            }),
        }
    }
}
