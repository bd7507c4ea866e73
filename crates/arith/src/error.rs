//! Error types for the almanac-arith crate.

use almanac_calendar::CalendarError;
use almanac_iso::{ErrorKind, IsoError, Kind, calendar_error_kind};

use crate::unit::Unit;

/// Error type for all fallible operations in the almanac-arith crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArithError {
    /// Returned when two operands must share a kind and do not.
    #[error("cannot combine {left} with {right}")]
    KindMismatch {
        /// Kind of the left operand.
        left: Kind,
        /// Kind of the right operand.
        right: Kind,
    },

    /// Returned when an operation is not defined for a kind.
    #[error("{operation} is not supported for {kind}")]
    UnsupportedKind {
        /// The operation attempted.
        operation: &'static str,
        /// The kind it was attempted on.
        kind: Kind,
    },

    /// Returned when a duration carries a component the target kind cannot
    /// absorb, such as days added to a time.
    #[error("unsupported field: {kind} cannot take a duration with {field}")]
    UnsupportedField {
        /// The kind being added to.
        kind: Kind,
        /// The offending duration component.
        field: &'static str,
    },

    /// Returned when a unit is outside what an operation allows for a kind.
    #[error("{operation} of {kind} does not support unit {unit}")]
    UnsupportedUnit {
        /// The operation attempted.
        operation: &'static str,
        /// The kind it was attempted on.
        kind: Kind,
        /// The rejected unit.
        unit: Unit,
    },

    /// Returned when a month or year length is needed without a reference
    /// date.
    #[error("a reference point (relative_to) is required to work in {unit}s")]
    MissingAnchor {
        /// The unit whose length is unknown.
        unit: Unit,
    },

    /// Returned when rounding a value without naming a smallest unit.
    #[error("a smallest unit is required")]
    MissingSmallestUnit,

    /// Returned when an increment does not evenly divide its bound.
    #[error("rounding increment {increment} for {unit} must divide {must_divide} and be less than it")]
    InvalidIncrement {
        /// The unit being rounded to.
        unit: Unit,
        /// The rejected increment.
        increment: i64,
        /// The bound the increment must divide.
        must_divide: i64,
    },

    /// Returned when an increment is zero or negative.
    #[error("rounding increment for {unit} must be positive, got {increment}")]
    NonPositiveIncrement {
        /// The unit being rounded to.
        unit: Unit,
        /// The rejected increment.
        increment: i64,
    },

    /// Returned when the largest unit is finer than the smallest.
    #[error("largest unit {largest} is smaller than smallest unit {smallest}")]
    UnitOrder {
        /// The requested largest unit.
        largest: Unit,
        /// The requested smallest unit.
        smallest: Unit,
    },

    /// Returned when a unit name is not recognised.
    #[error("unknown unit: {name:?}")]
    UnknownUnit {
        /// The unrecognised name.
        name: String,
    },

    /// Returned when a rounding mode name is not recognised.
    #[error("unknown rounding mode: {name:?}")]
    UnknownRoundingMode {
        /// The unrecognised name.
        name: String,
    },

    /// Returned when a reference point is not a date or date-time.
    #[error("relative_to must be a Date or DateTime, got {text:?}")]
    InvalidRelativeTo {
        /// The offending text.
        text: String,
    },

    /// Returned when an intermediate count leaves the representable range.
    #[error("arithmetic overflow while {context}")]
    Overflow {
        /// What was being computed.
        context: &'static str,
    },

    /// A value could not be parsed, built or printed.
    #[error(transparent)]
    Iso(#[from] IsoError),

    /// Calendar arithmetic failed.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

impl ArithError {
    /// Classifies this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ArithError::KindMismatch { .. }
            | ArithError::MissingSmallestUnit
            | ArithError::UnknownUnit { .. }
            | ArithError::UnknownRoundingMode { .. }
            | ArithError::InvalidRelativeTo { .. } => ErrorKind::InvalidInput,
            ArithError::UnsupportedKind { .. }
            | ArithError::UnsupportedField { .. }
            | ArithError::UnsupportedUnit { .. } => ErrorKind::Unsupported,
            ArithError::MissingAnchor { .. } => ErrorKind::MissingAnchor,
            ArithError::InvalidIncrement { .. }
            | ArithError::NonPositiveIncrement { .. }
            | ArithError::UnitOrder { .. }
            | ArithError::Overflow { .. } => ErrorKind::Range,
            ArithError::Iso(err) => err.kind(),
            ArithError::Calendar(err) => calendar_error_kind(err),
        }
    }
}
