//! One newtype per temporal kind.
//!
//! Each value holds its canonical text alongside the decoded fields, and can
//! only be built through the codec, so holding a value means holding valid
//! text.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use almanac_calendar::{
    CalendarError, CivilDate, CivilDateTime, MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE,
    MILLIS_PER_SECOND, Overflow, balance_year_month, clock_fields,
};

use crate::codec::{canonical_duration, canonical_fields};
use crate::error::IsoError;
use crate::fields::{DurationFields, Fields};
use crate::kind::Kind;
use crate::print::{print_duration, print_fields};

/// Leap year used to judge month-day combinations that carry no year.
const LEAP_REFERENCE_YEAR: i64 = 1972;

macro_rules! temporal_value {
    ($(#[$doc:meta])* $name:ident => $kind:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            text: String,
            fields: Fields,
        }

        impl $name {
            /// The kind of this value.
            pub const KIND: Kind = $kind;

            /// Parses canonical text of this kind, or of a wider kind that
            /// carries every field this one needs.
            ///
            /// # Errors
            ///
            /// Returns the error for this kind's own grammar when no
            /// accepted kind matches.
            pub fn parse(text: &str) -> Result<Self, IsoError> {
                let (text, fields) = parse_projected(Self::KIND, text)?;
                Ok(Self { text, fields })
            }

            /// Builds a value from a field record, normalizing out-of-range
            /// fields by carrying and resolving the day under `overflow`.
            ///
            /// # Errors
            ///
            /// Returns [`IsoError::MissingField`] when a required field is
            /// absent, or a range error when the result cannot be written.
            pub fn from_fields(fields: &Fields, overflow: Overflow) -> Result<Self, IsoError> {
                let fields = normalize(Self::KIND, fields, overflow)?;
                let text = print_fields(Self::KIND, &fields)?;
                Ok(Self { text, fields })
            }

            /// Builds a value from loosely typed `(name, number)` pairs.
            pub fn from_pairs<I, S>(pairs: I, overflow: Overflow) -> Result<Self, IsoError>
            where
                I: IntoIterator<Item = (S, f64)>,
                S: AsRef<str>,
            {
                Self::from_fields(&Fields::from_pairs(pairs)?, overflow)
            }

            /// Builds a value from numbers in field order, constraining
            /// non-existent days.
            pub fn from_parts(parts: &[i64]) -> Result<Self, IsoError> {
                Self::from_fields(&Fields::from_parts(Self::KIND, parts)?, Overflow::Constrain)
            }

            /// The current moment in UTC, as this kind.
            ///
            /// # Errors
            ///
            /// Returns [`IsoError::ClockBeforeEpoch`] if the system clock
            /// reads earlier than 1970.
            pub fn now() -> Result<Self, IsoError> {
                let now = Instant::now_inner()?;
                let fields = project(Self::KIND, now.fields());
                let text = print_fields(Self::KIND, &fields)?;
                Ok(Self { text, fields })
            }

            /// The canonical text.
            pub fn as_str(&self) -> &str {
                &self.text
            }

            /// The decoded field record.
            pub fn fields(&self) -> &Fields {
                &self.fields
            }

            /// Consumes the value, returning its text.
            pub fn into_string(self) -> String {
                self.text
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.text)
            }
        }

        impl FromStr for $name {
            type Err = IsoError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.text
            }
        }

        // Canonical text sorts chronologically.
        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                self.text.cmp(&other.text)
            }
        }
    };
}

temporal_value! {
    /// An exact UTC instant with millisecond precision, `YYYY-MM-DDTHH:MM:SS.mmmZ`.
    Instant => Kind::Instant
}

temporal_value! {
    /// A calendar date, `YYYY-MM-DD`.
    Date => Kind::Date
}

temporal_value! {
    /// A wall-clock time, `HH[:MM[:SS[.mmm]]]`.
    Time => Kind::Time
}

temporal_value! {
    /// A date and wall-clock time without a UTC marker.
    DateTime => Kind::DateTime
}

temporal_value! {
    /// A month of a specific year, `YYYY-MM`.
    YearMonth => Kind::YearMonth
}

temporal_value! {
    /// A recurring day of the year, `--MM-DD`.
    MonthDay => Kind::MonthDay
}

impl Instant {
    /// The instant `millis` milliseconds after 1970-01-01T00:00:00.000Z.
    pub fn from_epoch_millis(millis: i128) -> Result<Self, IsoError> {
        Self::from_civil(CivilDateTime::from_epoch_millis(millis)?)
    }

    /// Milliseconds since 1970-01-01T00:00:00.000Z.
    pub fn epoch_millis(&self) -> Result<i128, IsoError> {
        Ok(self.to_civil()?.to_epoch_millis())
    }

    /// Builds an instant from a civil date-time read as UTC.
    pub fn from_civil(civil: CivilDateTime) -> Result<Self, IsoError> {
        Self::from_fields(&civil_fields(&civil), Overflow::Reject)
    }

    /// The civil date-time in UTC.
    pub fn to_civil(&self) -> Result<CivilDateTime, IsoError> {
        civil_date_time(&self.fields)
    }
}

impl Date {
    /// Builds a date from a calendar date.
    pub fn from_civil(date: CivilDate) -> Result<Self, IsoError> {
        Self::from_fields(&date_fields(&date), Overflow::Reject)
    }

    /// The calendar date; a day past the end of its month is clamped.
    pub fn to_civil(&self) -> Result<CivilDate, IsoError> {
        civil_date(&self.fields)
    }
}

impl DateTime {
    /// Builds a date-time with full clock precision.
    pub fn from_civil(civil: CivilDateTime) -> Result<Self, IsoError> {
        Self::from_fields(&civil_fields(&civil), Overflow::Reject)
    }

    /// The calendar date-time; hour 24 rolls into the next day and a day
    /// past the end of its month is clamped.
    pub fn to_civil(&self) -> Result<CivilDateTime, IsoError> {
        civil_date_time(&self.fields)
    }
}

impl Time {
    /// The time `millis` after midnight, wrapped into one day, with full
    /// precision.
    pub fn from_millis_of_day(millis: i64) -> Result<Self, IsoError> {
        let (hour, minute, second, millisecond) = clock_fields(millis);
        let fields = Fields {
            hour: Some(hour.into()),
            minute: Some(minute.into()),
            second: Some(second.into()),
            millisecond: Some(millisecond.into()),
            ..Fields::default()
        };
        Self::from_fields(&fields, Overflow::Constrain)
    }

    /// Milliseconds since midnight. `24:00` counts as a whole day.
    pub fn millis_of_day(&self) -> i64 {
        let f = &self.fields;
        f.hour.unwrap_or(0) * MILLIS_PER_HOUR
            + f.minute.unwrap_or(0) * MILLIS_PER_MINUTE
            + f.second.unwrap_or(0) * MILLIS_PER_SECOND
            + f.millisecond.unwrap_or(0)
    }
}

impl YearMonth {
    /// The month `month` of `year`; months outside 1..=12 carry into the year.
    pub fn new(year: i64, month: i64) -> Result<Self, IsoError> {
        Self::from_parts(&[year, month])
    }
}

impl MonthDay {
    /// The day `day` of month `month`; February 29 is allowed.
    pub fn new(month: i64, day: i64) -> Result<Self, IsoError> {
        Self::from_fields(&Fields::from_parts(Kind::MonthDay, &[month, day])?, Overflow::Reject)
    }
}

/// A signed span of calendar and clock components.
///
/// All non-zero components share one sign; zero is `PT0S`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Duration {
    text: String,
    fields: DurationFields,
}

impl Duration {
    /// The kind of this value.
    pub const KIND: Kind = Kind::Duration;

    /// Parses canonical duration text.
    pub fn parse(text: &str) -> Result<Self, IsoError> {
        let fields = canonical_duration(text)?;
        Ok(Self {
            text: text.to_string(),
            fields,
        })
    }

    /// Builds a duration from its components.
    ///
    /// # Errors
    ///
    /// Returns [`IsoError::MixedSign`] if components disagree in sign.
    ///
    /// # Example
    ///
    /// ```
    /// use almanac_iso::{Duration, DurationFields};
    ///
    /// let d = Duration::from_fields(&DurationFields { days: -2, hours: -12, ..Default::default() }).unwrap();
    /// assert_eq!(d.as_str(), "-P2DT12H");
    /// ```
    pub fn from_fields(fields: &DurationFields) -> Result<Self, IsoError> {
        let text = print_duration(fields)?;
        // Seconds and milliseconds print combined; keep the decoded split.
        let fields = canonical_duration(&text)?;
        Ok(Self { text, fields })
    }

    /// Builds a duration from loosely typed `(name, number)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, IsoError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        Self::from_fields(&DurationFields::from_pairs(pairs)?)
    }

    /// Builds a duration from components in field order.
    pub fn from_parts(parts: &[i64]) -> Result<Self, IsoError> {
        let names = Kind::Duration.field_names();
        if parts.len() > names.len() {
            return Err(IsoError::TooManyParts {
                kind: Kind::Duration,
                got: parts.len(),
                max: names.len(),
            });
        }
        let mut values = [0i64; 8];
        values[..parts.len()].copy_from_slice(parts);
        Self::from_fields(&DurationFields::from_array(values))
    }

    /// The zero duration, `PT0S`.
    pub fn zero() -> Self {
        Self {
            text: "PT0S".to_string(),
            fields: DurationFields::default(),
        }
    }

    /// The canonical text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The components.
    pub fn fields(&self) -> &DurationFields {
        &self.fields
    }

    /// Consumes the value, returning its text.
    pub fn into_string(self) -> String {
        self.text
    }

    /// -1, 0 or 1.
    pub fn sign(&self) -> i8 {
        // Validated at construction.
        self.fields.sign().unwrap_or(0)
    }

    /// Returns `true` for `PT0S`.
    pub fn is_zero(&self) -> bool {
        self.fields.is_zero()
    }

    /// The same span in the opposite direction.
    pub fn negate(&self) -> Result<Self, IsoError> {
        Self::from_fields(&self.fields.negated()?)
    }
}

impl Default for Duration {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Duration {
    type Err = IsoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Duration {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl Instant {
    fn now_inner() -> Result<Self, IsoError> {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| IsoError::ClockBeforeEpoch)?;
        Self::from_epoch_millis(i128::try_from(elapsed.as_millis()).map_err(|_| {
            CalendarError::ArithmeticOverflow {
                context: "reading the system clock",
            }
        })?)
    }
}

/// Parses `text` as `kind`, falling back to wider kinds and projecting
/// their fields.
fn parse_projected(kind: Kind, text: &str) -> Result<(String, Fields), IsoError> {
    if kind == Kind::Instant {
        let fields = canonical_fields(kind, text)?;
        return Ok((text.to_string(), fields));
    }
    let own = match canonical_fields(kind, text) {
        Ok(fields) => return Ok((text.to_string(), fields)),
        Err(err) => err,
    };
    for &source in kind.sources() {
        if let Ok(wide) = canonical_fields(source, text) {
            let fields = project(kind, &wide);
            let text = print_fields(kind, &fields)?;
            return Ok((text, fields));
        }
    }
    Err(own)
}

/// Keeps only the fields `kind` is made of.
fn project(kind: Kind, wide: &Fields) -> Fields {
    let mut fields = Fields::default();
    for name in kind.field_names() {
        if let Some(value) = wide.get(name) {
            fields.set(name, value);
        }
    }
    fields
}

/// Resolves a field record into in-range fields for `kind`.
fn normalize(kind: Kind, input: &Fields, overflow: Overflow) -> Result<Fields, IsoError> {
    input.require(kind)?;
    let get = |value: Option<i64>| value.unwrap_or(0);
    let mut out = Fields::default();
    match kind {
        Kind::Date => {
            let date = CivilDate::resolve(get(input.year), get(input.month), get(input.day), overflow)?;
            out = date_fields(&date);
        }
        Kind::YearMonth => {
            let (year, month) = balance_year_month(get(input.year), get(input.month))?;
            out.year = Some(year);
            out.month = Some(month.into());
        }
        Kind::MonthDay => {
            let raw = get(input.month);
            let month = u8::try_from(raw)
                .ok()
                .filter(|m| (1..=12).contains(m))
                .ok_or(CalendarError::InvalidMonth { month: raw })?;
            let day = overflow.resolve_day(LEAP_REFERENCE_YEAR, month, get(input.day))?;
            out.month = Some(month.into());
            out.day = Some(day.into());
        }
        Kind::Time => {
            let clock = clock_millis(input);
            // rem_euclid by one day always fits in i64.
            let wrapped = clock.rem_euclid(i128::from(MILLIS_PER_DAY)) as i64;
            set_clock(&mut out, wrapped, precision(input));
        }
        Kind::DateTime | Kind::Instant => {
            let civil = CivilDateTime::from_overflowing(
                get(input.year),
                get(input.month),
                get(input.day),
                get(input.hour),
                get(input.minute),
                get(input.second),
                get(input.millisecond),
                overflow,
            )?;
            out = date_fields(&civil.date());
            let precision = if kind == Kind::Instant { 3 } else { precision(input) };
            set_clock(&mut out, civil.millis_of_day(), precision);
        }
        Kind::Duration => unreachable!("durations have their own constructor"),
    }
    Ok(out)
}

fn clock_millis(fields: &Fields) -> i128 {
    let get = |value: Option<i64>| i128::from(value.unwrap_or(0));
    get(fields.hour) * i128::from(MILLIS_PER_HOUR)
        + get(fields.minute) * i128::from(MILLIS_PER_MINUTE)
        + get(fields.second) * i128::from(MILLIS_PER_SECOND)
        + get(fields.millisecond)
}

/// Index of the finest clock field present: 0 hour through 3 millisecond.
fn precision(fields: &Fields) -> u8 {
    if fields.millisecond.is_some() {
        3
    } else if fields.second.is_some() {
        2
    } else if fields.minute.is_some() {
        1
    } else {
        0
    }
}

fn set_clock(out: &mut Fields, millis: i64, precision: u8) {
    let (hour, minute, second, millisecond) = clock_fields(millis);
    out.hour = Some(hour.into());
    out.minute = (precision >= 1).then_some(minute.into());
    out.second = (precision >= 2).then_some(second.into());
    out.millisecond = (precision >= 3).then_some(millisecond.into());
}

fn date_fields(date: &CivilDate) -> Fields {
    Fields {
        year: Some(date.year()),
        month: Some(date.month().into()),
        day: Some(date.day().into()),
        ..Fields::default()
    }
}

fn civil_fields(civil: &CivilDateTime) -> Fields {
    Fields {
        hour: Some(civil.hour().into()),
        minute: Some(civil.minute().into()),
        second: Some(civil.second().into()),
        millisecond: Some(civil.millisecond().into()),
        ..date_fields(&civil.date())
    }
}

fn civil_date(fields: &Fields) -> Result<CivilDate, IsoError> {
    let get = |value: Option<i64>| value.unwrap_or(0);
    Ok(CivilDate::resolve(
        get(fields.year),
        get(fields.month),
        get(fields.day),
        Overflow::Constrain,
    )?)
}

fn civil_date_time(fields: &Fields) -> Result<CivilDateTime, IsoError> {
    let get = |value: Option<i64>| value.unwrap_or(0);
    Ok(CivilDateTime::from_overflowing(
        get(fields.year),
        get(fields.month),
        get(fields.day),
        get(fields.hour),
        get(fields.minute),
        get(fields.second),
        get(fields.millisecond),
        Overflow::Constrain,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_own_kind_keeps_text() {
        let time = Time::parse("12:23").unwrap();
        assert_eq!(time.as_str(), "12:23");
        assert_eq!(time.fields().second, None);
    }

    #[test]
    fn parse_projects_wider_kinds() {
        let date = Date::parse("2000-12-03T12:30:15.123Z").unwrap();
        assert_eq!(date.as_str(), "2000-12-03");
        let time = Time::parse("2000-12-03T12:30").unwrap();
        assert_eq!(time.as_str(), "12:30");
        let ym = YearMonth::parse("2020-02-29").unwrap_err();
        assert!(matches!(ym, IsoError::InvalidText { kind: Kind::YearMonth, .. }));
        let md = MonthDay::parse("2020-02-29T00:00").unwrap();
        assert_eq!(md.as_str(), "--02-29");
    }

    #[test]
    fn instant_does_not_accept_narrower_text() {
        assert!(Instant::parse("2000-12-03T00:00:00.000").is_err());
    }

    #[test]
    fn from_fields_carries() {
        let f = Fields::from_parts(Kind::Date, &[2020, 14, 31]).unwrap();
        assert_eq!(Date::from_fields(&f, Overflow::Constrain).unwrap().as_str(), "2021-02-28");
        assert!(Date::from_fields(&f, Overflow::Reject).is_err());

        let f = Fields::from_parts(Kind::Time, &[23, 75]).unwrap();
        assert_eq!(Time::from_fields(&f, Overflow::Constrain).unwrap().as_str(), "00:15");

        let f = Fields::from_parts(Kind::DateTime, &[2020, 12, 31, 24]).unwrap();
        assert_eq!(
            DateTime::from_fields(&f, Overflow::Constrain).unwrap().as_str(),
            "2021-01-01T00"
        );
    }

    #[test]
    fn month_day_uses_leap_reference() {
        assert_eq!(MonthDay::new(2, 29).unwrap().as_str(), "--02-29");
        assert!(MonthDay::new(2, 30).is_err());
        assert!(MonthDay::new(13, 1).is_err());
    }

    #[test]
    fn instant_epoch_millis() {
        let instant = Instant::from_epoch_millis(975_846_615_123).unwrap();
        assert_eq!(instant.as_str(), "2000-12-03T12:30:15.123Z");
        assert_eq!(instant.epoch_millis().unwrap(), 975_846_615_123);
    }

    #[test]
    fn out_of_text_range_years_fail() {
        assert_eq!(
            Date::from_parts(&[10_000, 1, 1]).unwrap_err(),
            IsoError::YearOutOfRange { year: 10_000 }
        );
    }

    #[test]
    fn duration_constructors() {
        let d = Duration::from_pairs([("days", -2.0), ("hours", -12.0)]).unwrap();
        assert_eq!(d.as_str(), "-P2DT12H");
        assert_eq!(d.sign(), -1);
        assert_eq!(d.negate().unwrap().as_str(), "P2DT12H");
        assert!(matches!(
            Duration::from_pairs([("days", 2.0), ("hours", -1.0)]),
            Err(IsoError::MixedSign { .. })
        ));
        assert_eq!(Duration::from_parts(&[0, 1]).unwrap().as_str(), "P1M");
        assert_eq!(Duration::default().as_str(), "PT0S");
    }

    #[test]
    fn duration_keeps_canonical_components() {
        let cases = [
            (
                DurationFields {
                    milliseconds: 1500,
                    ..DurationFields::default()
                },
                "PT1.5S",
            ),
            (
                DurationFields {
                    milliseconds: 90_000,
                    ..DurationFields::default()
                },
                "PT90S",
            ),
            (
                DurationFields {
                    seconds: -2,
                    milliseconds: -2500,
                    ..DurationFields::default()
                },
                "-PT4.5S",
            ),
        ];
        for (fields, text) in cases {
            let built = Duration::from_fields(&fields).unwrap();
            let parsed = Duration::parse(text).unwrap();
            assert_eq!(built.as_str(), text);
            assert_eq!(built, parsed, "{text}");
            assert_eq!(built.fields(), parsed.fields());
        }
    }

    #[test]
    fn ordering_is_chronological() {
        let a = Date::parse("1999-12-31").unwrap();
        let b = Date::parse("2000-01-01").unwrap();
        assert!(a < b);
    }

    #[test]
    fn now_is_well_formed() {
        let now = Instant::now().unwrap();
        assert!(now.as_str().ends_with('Z'));
        assert_eq!(Date::now().unwrap().as_str().len(), 10);
    }
}
