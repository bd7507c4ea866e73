//! Duration units, finest to coarsest.

use std::fmt;
use std::str::FromStr;

use almanac_calendar::{MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND};
use almanac_iso::DurationFields;

use crate::error::ArithError;

/// A unit of a duration. Ordered from finest to coarsest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    /// Always 1,000 of a second.
    Millisecond,
    /// Always 1,000 milliseconds.
    Second,
    /// Always 60 seconds.
    Minute,
    /// Always 60 minutes.
    Hour,
    /// Always 24 hours; there are no time zones here.
    Day,
    /// Always 7 days.
    Week,
    /// 28 to 31 days, depending on where it is measured.
    Month,
    /// 365 or 366 days, depending on where it is measured.
    Year,
}

impl Unit {
    /// Every unit, finest first.
    pub const ALL: [Unit; 8] = [
        Unit::Millisecond,
        Unit::Second,
        Unit::Minute,
        Unit::Hour,
        Unit::Day,
        Unit::Week,
        Unit::Month,
        Unit::Year,
    ];

    /// Singular lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Unit::Millisecond => "millisecond",
            Unit::Second => "second",
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Week => "week",
            Unit::Month => "month",
            Unit::Year => "year",
        }
    }

    /// Length in milliseconds, for units of fixed length.
    pub fn millis(self) -> Option<i64> {
        match self {
            Unit::Millisecond => Some(1),
            Unit::Second => Some(MILLIS_PER_SECOND),
            Unit::Minute => Some(MILLIS_PER_MINUTE),
            Unit::Hour => Some(MILLIS_PER_HOUR),
            Unit::Day => Some(MILLIS_PER_DAY),
            Unit::Week => Some(7 * MILLIS_PER_DAY),
            Unit::Month | Unit::Year => None,
        }
    }

    /// Returns `true` for months and years, whose length needs an anchor.
    pub fn is_calendar(self) -> bool {
        self >= Unit::Month
    }

    /// Position of this unit's component in [`DurationFields::to_array`].
    pub(crate) fn slot(self) -> usize {
        7 - self as usize
    }

    /// This unit's component of `fields`.
    pub fn get(self, fields: &DurationFields) -> i64 {
        fields.to_array()[self.slot()]
    }

    /// Sets this unit's component of `fields`.
    pub fn set(self, fields: &mut DurationFields, value: i64) {
        let mut values = fields.to_array();
        values[self.slot()] = value;
        *fields = DurationFields::from_array(values);
    }

    /// Coarsest unit with a non-zero component.
    pub fn largest_in(fields: &DurationFields) -> Option<Unit> {
        Unit::ALL.into_iter().rev().find(|u| u.get(fields) != 0)
    }

    /// Finest unit with a non-zero component.
    pub fn smallest_in(fields: &DurationFields) -> Option<Unit> {
        Unit::ALL.into_iter().find(|u| u.get(fields) != 0)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = ArithError;

    /// Accepts singular or plural names in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        let singular = lower.strip_suffix('s').unwrap_or(&lower);
        Unit::ALL
            .into_iter()
            .find(|u| u.name() == singular)
            .ok_or_else(|| ArithError::UnknownUnit {
                name: s.to_string(),
            })
    }
}
