//! A value of any kind, for callers that only learn the kind at runtime.

use std::fmt;

use almanac_calendar::Overflow;

use crate::codec::is_valid;
use crate::error::IsoError;
use crate::kind::Kind;
use crate::value::{Date, DateTime, Duration, Instant, MonthDay, Time, YearMonth};

/// One temporal value tagged with its kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Temporal {
    Instant(Instant),
    Date(Date),
    Time(Time),
    DateTime(DateTime),
    YearMonth(YearMonth),
    MonthDay(MonthDay),
    Duration(Duration),
}

impl Temporal {
    /// Parses `text` as `kind`, accepting wider kinds where the newtype does.
    pub fn parse(kind: Kind, text: &str) -> Result<Self, IsoError> {
        Ok(match kind {
            Kind::Instant => Instant::parse(text)?.into(),
            Kind::Date => Date::parse(text)?.into(),
            Kind::Time => Time::parse(text)?.into(),
            Kind::DateTime => DateTime::parse(text)?.into(),
            Kind::YearMonth => YearMonth::parse(text)?.into(),
            Kind::MonthDay => MonthDay::parse(text)?.into(),
            Kind::Duration => Duration::parse(text)?.into(),
        })
    }

    /// Parses `text` as whichever kind it is the canonical spelling of.
    ///
    /// # Errors
    ///
    /// Returns [`IsoError::UnknownKind`] when no kind accepts the text.
    ///
    /// # Example
    ///
    /// ```
    /// use almanac_iso::{Kind, Temporal};
    ///
    /// assert_eq!(Temporal::detect("2020-01-31").unwrap().kind(), Kind::Date);
    /// assert_eq!(Temporal::detect("12:23").unwrap().kind(), Kind::Time);
    /// assert!(Temporal::detect("tomorrow").is_err());
    /// ```
    pub fn detect(text: &str) -> Result<Self, IsoError> {
        Kind::DETECTION_ORDER
            .into_iter()
            .find(|&kind| is_valid(kind, text))
            .ok_or_else(|| IsoError::UnknownKind {
                text: text.to_string(),
            })
            .and_then(|kind| Self::parse(kind, text))
    }

    /// The current moment in UTC as `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`IsoError::NoCurrentValue`] for durations.
    pub fn now(kind: Kind) -> Result<Self, IsoError> {
        Ok(match kind {
            Kind::Instant => Instant::now()?.into(),
            Kind::Date => Date::now()?.into(),
            Kind::Time => Time::now()?.into(),
            Kind::DateTime => DateTime::now()?.into(),
            Kind::YearMonth => YearMonth::now()?.into(),
            Kind::MonthDay => MonthDay::now()?.into(),
            Kind::Duration => return Err(IsoError::NoCurrentValue { kind }),
        })
    }

    /// Builds a `kind` value from `(name, number)` pairs.
    pub fn from_pairs<I, S>(kind: Kind, pairs: I, overflow: Overflow) -> Result<Self, IsoError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        Ok(match kind {
            Kind::Instant => Instant::from_pairs(pairs, overflow)?.into(),
            Kind::Date => Date::from_pairs(pairs, overflow)?.into(),
            Kind::Time => Time::from_pairs(pairs, overflow)?.into(),
            Kind::DateTime => DateTime::from_pairs(pairs, overflow)?.into(),
            Kind::YearMonth => YearMonth::from_pairs(pairs, overflow)?.into(),
            Kind::MonthDay => MonthDay::from_pairs(pairs, overflow)?.into(),
            Kind::Duration => Duration::from_pairs(pairs)?.into(),
        })
    }

    /// Builds a `kind` value from numbers in field order.
    pub fn from_parts(kind: Kind, parts: &[i64]) -> Result<Self, IsoError> {
        Ok(match kind {
            Kind::Instant => Instant::from_parts(parts)?.into(),
            Kind::Date => Date::from_parts(parts)?.into(),
            Kind::Time => Time::from_parts(parts)?.into(),
            Kind::DateTime => DateTime::from_parts(parts)?.into(),
            Kind::YearMonth => YearMonth::from_parts(parts)?.into(),
            Kind::MonthDay => MonthDay::from_parts(parts)?.into(),
            Kind::Duration => Duration::from_parts(parts)?.into(),
        })
    }

    /// The kind of the wrapped value.
    pub fn kind(&self) -> Kind {
        match self {
            Temporal::Instant(_) => Kind::Instant,
            Temporal::Date(_) => Kind::Date,
            Temporal::Time(_) => Kind::Time,
            Temporal::DateTime(_) => Kind::DateTime,
            Temporal::YearMonth(_) => Kind::YearMonth,
            Temporal::MonthDay(_) => Kind::MonthDay,
            Temporal::Duration(_) => Kind::Duration,
        }
    }

    /// The canonical text.
    pub fn as_str(&self) -> &str {
        match self {
            Temporal::Instant(v) => v.as_str(),
            Temporal::Date(v) => v.as_str(),
            Temporal::Time(v) => v.as_str(),
            Temporal::DateTime(v) => v.as_str(),
            Temporal::YearMonth(v) => v.as_str(),
            Temporal::MonthDay(v) => v.as_str(),
            Temporal::Duration(v) => v.as_str(),
        }
    }
}

impl fmt::Display for Temporal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! from_value {
    ($($name:ident),*) => {
        $(
            impl From<$name> for Temporal {
                fn from(value: $name) -> Self {
                    Temporal::$name(value)
                }
            }
        )*
    };
}

from_value!(Instant, Date, Time, DateTime, YearMonth, MonthDay, Duration);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_each_kind() {
        let cases = [
            ("2000-12-03T00:00:00.000Z", Kind::Instant),
            ("2000-12-03T00:00", Kind::DateTime),
            ("2000-12-03", Kind::Date),
            ("2000-12", Kind::YearMonth),
            ("--12-03", Kind::MonthDay),
            ("12:23:00.000", Kind::Time),
            ("-P2DT12H", Kind::Duration),
        ];
        for (text, kind) in cases {
            let value = Temporal::detect(text).unwrap();
            assert_eq!(value.kind(), kind, "{text}");
            assert_eq!(value.as_str(), text);
        }
    }

    #[test]
    fn detect_rejects_non_canonical() {
        assert!(matches!(
            Temporal::detect("P0D"),
            Err(IsoError::UnknownKind { .. })
        ));
    }

    #[test]
    fn build_from_pairs() {
        let value = Temporal::from_pairs(
            Kind::Date,
            [("year", 2020.0), ("month", 1.0), ("day", 31.0)],
            Overflow::Reject,
        )
        .unwrap();
        assert_eq!(value.to_string(), "2020-01-31");
    }

    #[test]
    fn durations_have_no_now() {
        assert_eq!(
            Temporal::now(Kind::Duration).unwrap_err(),
            IsoError::NoCurrentValue {
                kind: Kind::Duration
            }
        );
        assert_eq!(Temporal::now(Kind::YearMonth).unwrap().kind(), Kind::YearMonth);
    }
}
