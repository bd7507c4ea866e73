//! The closed set of temporal kinds and their field layouts.

use std::fmt;
use std::str::FromStr;

use crate::error::IsoError;

/// One of the seven textual temporal kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    /// `YYYY-MM-DDTHH:MM:SS.mmmZ`, an exact UTC instant.
    Instant,
    /// `YYYY-MM-DD`.
    Date,
    /// `HH[:MM[:SS[.mmm]]]`.
    Time,
    /// `YYYY-MM-DDTHH[:MM[:SS[.mmm]]]`, no UTC marker.
    DateTime,
    /// `YYYY-MM`.
    YearMonth,
    /// `--MM-DD`.
    MonthDay,
    /// `[-]P[nY][nM][nW][nD][T[nH][nM][n[.fff]S]]`.
    Duration,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const ALL: [Kind; 7] = [
        Kind::Instant,
        Kind::Date,
        Kind::Time,
        Kind::DateTime,
        Kind::YearMonth,
        Kind::MonthDay,
        Kind::Duration,
    ];

    /// Kinds tried, in order, when the kind of a text is not known up front.
    ///
    /// Longer grammars come first so that a prefix never shadows them.
    pub(crate) const DETECTION_ORDER: [Kind; 7] = [
        Kind::Duration,
        Kind::Instant,
        Kind::DateTime,
        Kind::Date,
        Kind::YearMonth,
        Kind::MonthDay,
        Kind::Time,
    ];

    /// Returns the kind's display name.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Instant => "Instant",
            Kind::Date => "Date",
            Kind::Time => "Time",
            Kind::DateTime => "DateTime",
            Kind::YearMonth => "YearMonth",
            Kind::MonthDay => "MonthDay",
            Kind::Duration => "Duration",
        }
    }

    /// Field names in positional-argument order.
    pub fn field_names(self) -> &'static [&'static str] {
        const DATE_TIME: &[&str] = &[
            "year",
            "month",
            "day",
            "hour",
            "minute",
            "second",
            "millisecond",
        ];
        match self {
            Kind::Instant | Kind::DateTime => DATE_TIME,
            Kind::Date => &DATE_TIME[..3],
            Kind::Time => &DATE_TIME[3..],
            Kind::YearMonth => &DATE_TIME[..2],
            Kind::MonthDay => &DATE_TIME[1..3],
            Kind::Duration => &crate::fields::DurationFields::NAMES,
        }
    }

    /// Field names a field record must carry to construct this kind.
    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            Kind::Instant | Kind::Date => &["year", "month", "day"],
            Kind::DateTime => &["year", "month", "day", "hour"],
            Kind::Time => &["hour"],
            Kind::YearMonth => &["year", "month"],
            Kind::MonthDay => &["month", "day"],
            Kind::Duration => &[],
        }
    }

    /// Wider kinds whose text carries everything this kind needs.
    pub(crate) fn sources(self) -> &'static [Kind] {
        match self {
            Kind::YearMonth | Kind::MonthDay => &[Kind::Date, Kind::DateTime, Kind::Instant],
            Kind::Date | Kind::Time => &[Kind::DateTime, Kind::Instant],
            Kind::DateTime => &[Kind::Instant],
            Kind::Instant | Kind::Duration => &[],
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = IsoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        Kind::ALL
            .into_iter()
            .find(|kind| kind.name().to_lowercase() == normalized)
            .ok_or_else(|| IsoError::UnknownKindName {
                name: s.to_string(),
            })
    }
}
