//! Field records: the numeric counterpart of temporal text.

use crate::error::IsoError;
use crate::kind::Kind;

/// Decoded fields of a non-duration value.
///
/// Which fields are present depends on the kind: a `Date` has year, month
/// and day; a `Time` has an hour and optionally minute, second and
/// millisecond; and so on. Absent optional clock fields are what let `12:23`
/// and `12:23:00` be two distinct canonical texts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Fields {
    /// Calendar year.
    pub year: Option<i64>,
    /// Month of the year, 1-based.
    pub month: Option<i64>,
    /// Day of the month, 1-based.
    pub day: Option<i64>,
    /// Hour of the day.
    pub hour: Option<i64>,
    /// Minute of the hour.
    pub minute: Option<i64>,
    /// Second of the minute.
    pub second: Option<i64>,
    /// Millisecond of the second.
    pub millisecond: Option<i64>,
}

impl Fields {
    /// Names of all fields, most significant first.
    pub const NAMES: [&'static str; 7] = [
        "year",
        "month",
        "day",
        "hour",
        "minute",
        "second",
        "millisecond",
    ];

    /// Returns the field called `name`, or `None` if absent or unknown.
    pub fn get(&self, name: &str) -> Option<i64> {
        self.slot(name).and_then(|i| self.as_array()[i])
    }

    /// Sets the field called `name`. Unknown names are ignored.
    pub fn set(&mut self, name: &str, value: i64) {
        let Some(i) = self.slot(name) else {
            return;
        };
        let mut values = self.as_array();
        values[i] = Some(value);
        *self = Self::from_array(values);
    }

    /// Builds a field record from loosely typed `(name, number)` pairs.
    ///
    /// Unknown names are ignored. Every recognised value must be a finite
    /// integer.
    ///
    /// # Errors
    ///
    /// Returns [`IsoError::InvalidFieldValue`] for a non-finite or
    /// fractional value.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, IsoError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut fields = Self::default();
        for (name, value) in pairs {
            let name = name.as_ref();
            if fields.slot(name).is_none() {
                continue;
            }
            fields.set(name, integral(name, value)?);
        }
        Ok(fields)
    }

    /// Builds a field record for `kind` from positional values in the
    /// kind's field order.
    ///
    /// # Errors
    ///
    /// Returns [`IsoError::TooManyParts`] if more values than fields are
    /// given.
    pub fn from_parts(kind: Kind, parts: &[i64]) -> Result<Self, IsoError> {
        let names = kind.field_names();
        if parts.len() > names.len() {
            return Err(IsoError::TooManyParts {
                kind,
                got: parts.len(),
                max: names.len(),
            });
        }
        let mut fields = Self::default();
        for (name, value) in names.iter().zip(parts) {
            fields.set(name, *value);
        }
        Ok(fields)
    }

    /// Present fields as `(name, value)` pairs, most significant first.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, i64)> + '_ {
        Self::NAMES
            .into_iter()
            .zip(self.as_array())
            .filter_map(|(name, value)| value.map(|v| (name, v)))
    }

    /// Checks that every field `kind` requires is present.
    ///
    /// # Errors
    ///
    /// Returns [`IsoError::MissingField`] naming the first absent field.
    pub fn require(&self, kind: Kind) -> Result<(), IsoError> {
        match kind
            .required_fields()
            .iter()
            .find(|name| self.get(name).is_none())
        {
            Some(&field) => Err(IsoError::MissingField { kind, field }),
            None => Ok(()),
        }
    }

    fn slot(&self, name: &str) -> Option<usize> {
        Self::NAMES.iter().position(|n| *n == name)
    }

    fn as_array(&self) -> [Option<i64>; 7] {
        [
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.millisecond,
        ]
    }

    fn from_array(values: [Option<i64>; 7]) -> Self {
        let [year, month, day, hour, minute, second, millisecond] = values;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond,
        }
    }
}

/// Decoded components of a duration.
///
/// Components are stored signed; a valid duration has all non-zero
/// components of one sign. The record itself does not enforce that so it
/// can carry the raw, unbalanced intermediates of arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DurationFields {
    /// Calendar years.
    pub years: i64,
    /// Calendar months.
    pub months: i64,
    /// Weeks.
    pub weeks: i64,
    /// Days.
    pub days: i64,
    /// Hours.
    pub hours: i64,
    /// Minutes.
    pub minutes: i64,
    /// Seconds.
    pub seconds: i64,
    /// Milliseconds.
    pub milliseconds: i64,
}

impl DurationFields {
    /// Component names, most significant first.
    pub const NAMES: [&'static str; 8] = [
        "years",
        "months",
        "weeks",
        "days",
        "hours",
        "minutes",
        "seconds",
        "milliseconds",
    ];

    /// Components in [`DurationFields::NAMES`] order.
    pub fn to_array(&self) -> [i64; 8] {
        [
            self.years,
            self.months,
            self.weeks,
            self.days,
            self.hours,
            self.minutes,
            self.seconds,
            self.milliseconds,
        ]
    }

    /// Builds a record from components in [`DurationFields::NAMES`] order.
    pub fn from_array(values: [i64; 8]) -> Self {
        let [years, months, weeks, days, hours, minutes, seconds, milliseconds] = values;
        Self {
            years,
            months,
            weeks,
            days,
            hours,
            minutes,
            seconds,
            milliseconds,
        }
    }

    /// Builds a record from loosely typed `(name, number)` pairs.
    ///
    /// Unknown names are ignored. Every value must be a finite integer,
    /// except `seconds`, which may carry up to millisecond precision.
    ///
    /// # Errors
    ///
    /// Returns [`IsoError::InvalidFieldValue`] for a non-finite value, a
    /// fractional value outside `seconds`, or a sub-millisecond fraction.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, IsoError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut values = [0i64; 8];
        for (name, value) in pairs {
            let name = name.as_ref();
            let Some(i) = Self::NAMES.iter().position(|n| *n == name) else {
                continue;
            };
            if name == "seconds" {
                let (whole, millis) = seconds_with_fraction(value)?;
                values[i] = whole;
                values[7] = values[7].checked_add(millis).ok_or_else(|| invalid(name, value))?;
            } else {
                let v = integral(name, value)?;
                values[i] = values[i].checked_add(v).ok_or_else(|| invalid(name, value))?;
            }
        }
        Ok(Self::from_array(values))
    }

    /// Non-zero components as `(name, value)` pairs.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (&'static str, i64)> {
        Self::NAMES
            .into_iter()
            .zip(self.to_array())
            .filter(|(_, v)| *v != 0)
    }

    /// Returns `true` when every component is zero.
    pub fn is_zero(&self) -> bool {
        self.to_array().iter().all(|v| *v == 0)
    }

    /// The common sign of the components: -1, 0 or 1.
    ///
    /// # Errors
    ///
    /// Returns [`IsoError::MixedSign`] if components disagree.
    pub fn sign(&self) -> Result<i8, IsoError> {
        let mut sign = 0i64;
        for value in self.to_array() {
            let s = value.signum();
            if s == 0 {
                continue;
            }
            if sign != 0 && sign != s {
                return Err(IsoError::MixedSign {
                    detail: self.describe(),
                });
            }
            sign = s;
        }
        Ok(sign as i8)
    }

    /// Every component negated.
    ///
    /// # Errors
    ///
    /// Returns [`IsoError::InvalidFieldValue`] if a component is `i64::MIN`.
    pub fn negated(&self) -> Result<Self, IsoError> {
        let mut values = self.to_array();
        for (name, value) in Self::NAMES.iter().zip(values.iter_mut()) {
            *value = value.checked_neg().ok_or_else(|| IsoError::InvalidFieldValue {
                field: name.to_string(),
                value: value.to_string(),
            })?;
        }
        Ok(Self::from_array(values))
    }

    /// Component-wise sum, or `None` on overflow.
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        let mut values = self.to_array();
        for (lhs, rhs) in values.iter_mut().zip(other.to_array()) {
            *lhs = lhs.checked_add(rhs)?;
        }
        Some(Self::from_array(values))
    }

    /// `name=value` list of the non-zero components, for messages.
    pub fn describe(&self) -> String {
        let parts: Vec<String> = self
            .iter_nonzero()
            .map(|(name, value)| format!("{name}={value}"))
            .collect();
        if parts.is_empty() {
            "zero".to_string()
        } else {
            parts.join(", ")
        }
    }
}

fn invalid(name: &str, value: f64) -> IsoError {
    IsoError::InvalidFieldValue {
        field: name.to_string(),
        value: value.to_string(),
    }
}

/// Largest magnitude an `f64` holds without losing integer precision.
const MAX_EXACT_F64: f64 = 9_007_199_254_740_992.0;

fn integral(name: &str, value: f64) -> Result<i64, IsoError> {
    if !value.is_finite() || value.fract() != 0.0 || value.abs() > MAX_EXACT_F64 {
        return Err(invalid(name, value));
    }
    Ok(value as i64)
}

fn seconds_with_fraction(value: f64) -> Result<(i64, i64), IsoError> {
    if !value.is_finite() || value.abs() > MAX_EXACT_F64 {
        return Err(invalid("seconds", value));
    }
    let whole = value.trunc();
    let millis = (value - whole) * 1_000.0;
    let rounded = millis.round();
    if (millis - rounded).abs() > 1e-6 {
        return Err(invalid("seconds", value));
    }
    Ok((whole as i64, rounded as i64))
}
