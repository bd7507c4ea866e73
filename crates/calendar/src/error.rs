//! Error types for the almanac-calendar crate.

/// Error type for all fallible operations in the almanac-calendar crate.
///
/// Every variant carries the value that was rejected so callers can report
/// it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: i64,
    },

    /// Returned when a day does not exist in the given year and month.
    ///
    /// This is also what [`Overflow::Reject`](crate::Overflow::Reject)
    /// produces when an operation lands on a non-existent date.
    #[error("invalid day: {year:04}-{month:02}-{day:02} (max day {max_day})")]
    InvalidDay {
        /// Year of the offending date.
        year: i64,
        /// Month of the offending date.
        month: u8,
        /// The day that does not exist.
        day: i64,
        /// The last day of that month.
        max_day: u8,
    },

    /// Returned when a clock field is out of range.
    #[error("invalid {field}: {value}")]
    InvalidTime {
        /// Name of the clock field.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// Returned when a year leaves the range the epoch arithmetic supports.
    #[error("year {year} is outside the supported range (|year| <= {max})", max = crate::MAX_YEAR)]
    YearOutOfRange {
        /// The offending year.
        year: i64,
    },

    /// Returned when integer arithmetic on a user supplied delta overflows.
    #[error("arithmetic overflow while {context}")]
    ArithmeticOverflow {
        /// What was being computed.
        context: &'static str,
    },

    /// Returned when a year or month delta is counted without an anchor date.
    #[error("a reference point is required to count years or months")]
    MissingAnchor,

    /// Returned when an overflow policy name is not recognised.
    #[error("unknown overflow policy: {value:?} (expected \"constrain\" or \"reject\")")]
    UnknownOverflow {
        /// The unrecognised name.
        value: String,
    },
}
