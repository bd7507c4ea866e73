//! Error types for the almanac-iso crate.

use almanac_calendar::CalendarError;

use crate::kind::Kind;

/// Broad classification of an error, shared by every almanac crate.
///
/// Callers can match on this instead of individual variants, for example
/// to supply an anchor when [`ErrorKind::MissingAnchor`] comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Text fails its grammar, or a field record is missing or malformed.
    InvalidInput,
    /// A value exists syntactically but falls outside the calendar or an
    /// option's allowed range.
    Range,
    /// A year, month or week count was requested without a reference date.
    MissingAnchor,
    /// Duration components disagree in sign.
    MixedSign,
    /// The operation does not apply to the given kind, unit or field.
    Unsupported,
}

/// Error type for all fallible operations in the almanac-iso crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IsoError {
    /// Returned when text does not match the grammar of its kind.
    #[error("invalid {kind} {text:?}: {reason}")]
    InvalidText {
        /// The kind the text was parsed as.
        kind: Kind,
        /// The offending text.
        text: String,
        /// What the parser expected.
        reason: &'static str,
    },

    /// Returned when text parses but is not the canonical spelling.
    #[error("invalid {kind} {text:?}: not canonical (canonical form is {canonical:?})")]
    NonCanonical {
        /// The kind the text was parsed as.
        kind: Kind,
        /// The offending text.
        text: String,
        /// The canonical re-encoding of the same fields.
        canonical: String,
    },

    /// Returned when a field record lacks a field its kind requires.
    #[error("{kind} field record is missing required field `{field}`")]
    MissingField {
        /// The kind being constructed.
        kind: Kind,
        /// Name of the missing field.
        field: &'static str,
    },

    /// Returned when a field value is non-finite, fractional where an
    /// integer is required, or too large.
    #[error("invalid value for field `{field}`: {value}")]
    InvalidFieldValue {
        /// Name of the field.
        field: String,
        /// The rejected value, as given.
        value: String,
    },

    /// Returned when a field record value cannot be printed by its kind.
    #[error("{kind} field `{field}` is out of range: {value}")]
    FieldOutOfRange {
        /// The kind being encoded.
        kind: Kind,
        /// Name of the field.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// Returned when more positional arguments are given than the kind has fields.
    #[error("too many positional arguments for {kind}: got {got}, at most {max}")]
    TooManyParts {
        /// The kind being constructed.
        kind: Kind,
        /// Number of arguments given.
        got: usize,
        /// Number of fields the kind has.
        max: usize,
    },

    /// Returned when duration components disagree in sign.
    #[error("duration components have mixed signs: {detail}")]
    MixedSign {
        /// The offending input.
        detail: String,
    },

    /// Returned when a year cannot be written as four ISO-8601 digits.
    #[error("year {year} is outside 0000..=9999")]
    YearOutOfRange {
        /// The offending year.
        year: i64,
    },

    /// Returned when text matches none of the temporal kinds.
    #[error("{text:?} is not a recognised temporal value")]
    UnknownKind {
        /// The offending text.
        text: String,
    },

    /// Returned when a kind name is not recognised.
    #[error("unknown temporal kind: {name:?}")]
    UnknownKindName {
        /// The unrecognised name.
        name: String,
    },

    /// Returned when a kind has no notion of the current moment.
    #[error("{kind} has no current value")]
    NoCurrentValue {
        /// The requested kind.
        kind: Kind,
    },

    /// Returned when the system clock is before 1970.
    #[error("system clock is before the Unix epoch")]
    ClockBeforeEpoch,

    /// Calendar arithmetic failed.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

impl IsoError {
    /// Classifies this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            IsoError::InvalidText { .. }
            | IsoError::NonCanonical { .. }
            | IsoError::MissingField { .. }
            | IsoError::InvalidFieldValue { .. }
            | IsoError::TooManyParts { .. }
            | IsoError::UnknownKind { .. }
            | IsoError::UnknownKindName { .. } => ErrorKind::InvalidInput,
            IsoError::FieldOutOfRange { .. }
            | IsoError::YearOutOfRange { .. }
            | IsoError::ClockBeforeEpoch => ErrorKind::Range,
            IsoError::MixedSign { .. } => ErrorKind::MixedSign,
            IsoError::NoCurrentValue { .. } => ErrorKind::Unsupported,
            IsoError::Calendar(err) => calendar_error_kind(err),
        }
    }
}

/// Classifies a calendar-level error.
pub fn calendar_error_kind(err: &CalendarError) -> ErrorKind {
    match err {
        CalendarError::MissingAnchor => ErrorKind::MissingAnchor,
        CalendarError::UnknownOverflow { .. } => ErrorKind::InvalidInput,
        CalendarError::InvalidMonth { .. }
        | CalendarError::InvalidDay { .. }
        | CalendarError::InvalidTime { .. }
        | CalendarError::YearOutOfRange { .. }
        | CalendarError::ArithmeticOverflow { .. } => ErrorKind::Range,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_text() {
        let err = IsoError::InvalidText {
            kind: Kind::Date,
            text: "2020-1-1".to_string(),
            reason: "expected two-digit month",
        };
        assert_eq!(
            err.to_string(),
            "invalid Date \"2020-1-1\": expected two-digit month"
        );
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn error_missing_field() {
        let err = IsoError::MissingField {
            kind: Kind::Date,
            field: "day",
        };
        assert_eq!(
            err.to_string(),
            "Date field record is missing required field `day`"
        );
    }

    #[test]
    fn error_mixed_sign_kind() {
        let err = IsoError::MixedSign {
            detail: "days=2, hours=-1".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::MixedSign);
    }

    #[test]
    fn calendar_errors_are_classified() {
        assert_eq!(
            IsoError::from(CalendarError::MissingAnchor).kind(),
            ErrorKind::MissingAnchor
        );
        let reject = CalendarError::InvalidDay {
            year: 2020,
            month: 2,
            day: 31,
            max_day: 29,
        };
        assert_eq!(IsoError::from(reject).kind(), ErrorKind::Range);
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<IsoError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<IsoError>();
    }
}
