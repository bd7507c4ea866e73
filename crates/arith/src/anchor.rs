//! The reference point that gives months and years a length.

use std::fmt;
use std::str::FromStr;

use almanac_calendar::CivilDate;
use almanac_iso::{Date, DateTime, Temporal};

use crate::error::ArithError;

/// A date or date-time against which calendar units are measured.
///
/// Only the date matters for day counting; a time of day is carried for
/// display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativeTo {
    text: String,
    date: CivilDate,
}

impl RelativeTo {
    /// Anchors at a date.
    pub fn from_date(date: &Date) -> Result<Self, ArithError> {
        Ok(Self {
            text: date.to_string(),
            date: date.to_civil()?,
        })
    }

    /// Anchors at the date of a date-time.
    pub fn from_date_time(date_time: &DateTime) -> Result<Self, ArithError> {
        Ok(Self {
            text: date_time.to_string(),
            date: date_time.to_civil()?.date(),
        })
    }

    /// Anchors at a calendar date.
    pub fn from_civil(date: CivilDate) -> Result<Self, ArithError> {
        Self::from_date(&Date::from_civil(date)?)
    }

    /// The anchor date.
    pub fn date(&self) -> CivilDate {
        self.date
    }

    /// The anchor as it was given.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for RelativeTo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for RelativeTo {
    type Err = ArithError;

    /// Accepts canonical date or date-time text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Temporal::detect(s) {
            Ok(Temporal::Date(date)) => Self::from_date(&date),
            Ok(Temporal::DateTime(date_time)) => Self::from_date_time(&date_time),
            _ => Err(ArithError::InvalidRelativeTo {
                text: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_and_date_time() {
        let anchor: RelativeTo = "2020-01-01".parse().unwrap();
        assert_eq!(anchor.date(), CivilDate::new(2020, 1, 1).unwrap());
        let anchor: RelativeTo = "2020-01-31T12:00".parse().unwrap();
        assert_eq!(anchor.date(), CivilDate::new(2020, 1, 31).unwrap());
        assert_eq!(anchor.to_string(), "2020-01-31T12:00");
    }

    #[test]
    fn other_kinds_are_rejected() {
        for text in ["2020-01", "12:00", "P1D", "2020-01-01T00:00:00.000Z", "soon"] {
            assert!(
                matches!(text.parse::<RelativeTo>(), Err(ArithError::InvalidRelativeTo { .. })),
                "{text}"
            );
        }
    }

    #[test]
    fn day_past_month_end_is_clamped() {
        let anchor: RelativeTo = "2021-02-30".parse().unwrap();
        assert_eq!(anchor.date(), CivilDate::new(2021, 2, 28).unwrap());
    }
}
