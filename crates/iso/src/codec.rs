//! Text to field-record codec.
//!
//! A text is valid for a kind exactly when decoding and re-encoding it
//! reproduces the same bytes. Decoding on its own only checks the grammar,
//! so `2020-02-30` and `24:00` decode, while `P0D` decodes but fails the
//! round trip against its canonical `PT0S`.

use crate::error::IsoError;
use crate::fields::{DurationFields, Fields};
use crate::kind::Kind;
use crate::parse::{decode_duration, decode_fields};
use crate::print::{print_duration, print_fields};

/// A decoded field record of either shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Record {
    /// Fields of a non-duration kind.
    Fields(Fields),
    /// Components of a duration.
    Duration(DurationFields),
}

impl Record {
    /// The non-duration fields, if this is one.
    pub fn as_fields(&self) -> Option<&Fields> {
        match self {
            Record::Fields(fields) => Some(fields),
            Record::Duration(_) => None,
        }
    }

    /// The duration components, if this is one.
    pub fn as_duration(&self) -> Option<&DurationFields> {
        match self {
            Record::Duration(fields) => Some(fields),
            Record::Fields(_) => None,
        }
    }
}

/// Decodes `text` against the grammar of `kind`.
///
/// # Errors
///
/// Returns [`IsoError::InvalidText`] when the grammar does not match and
/// [`IsoError::MixedSign`] for a duration whose components disagree in sign.
pub fn decode(kind: Kind, text: &str) -> Result<Record, IsoError> {
    match kind {
        Kind::Duration => decode_duration(text).map(Record::Duration),
        _ => decode_fields(kind, text).map(Record::Fields),
    }
}

/// Encodes `record` as canonical text of `kind`.
///
/// # Errors
///
/// Fails when the record shape does not match the kind, a required field is
/// missing, or a field is outside what the text form can express.
///
/// # Example
///
/// ```
/// use almanac_iso::{DurationFields, Kind, Record, encode};
///
/// let record = Record::Duration(DurationFields { days: -2, hours: -12, ..Default::default() });
/// assert_eq!(encode(Kind::Duration, &record).unwrap(), "-P2DT12H");
/// ```
pub fn encode(kind: Kind, record: &Record) -> Result<String, IsoError> {
    match (kind, record) {
        (Kind::Duration, Record::Duration(fields)) => print_duration(fields),
        (Kind::Duration, Record::Fields(_)) => Err(IsoError::MissingField {
            kind,
            field: "years",
        }),
        (_, Record::Fields(fields)) => print_fields(kind, fields),
        (_, Record::Duration(_)) => Err(IsoError::MissingField {
            kind,
            field: kind.required_fields().first().copied().unwrap_or("hour"),
        }),
    }
}

/// Returns `true` if `text` is the canonical spelling of a `kind` value.
pub fn is_valid(kind: Kind, text: &str) -> bool {
    canonical(kind, text).is_ok()
}

/// Decodes `text` and checks that it round-trips.
pub(crate) fn canonical(kind: Kind, text: &str) -> Result<Record, IsoError> {
    match kind {
        Kind::Duration => canonical_duration(text).map(Record::Duration),
        _ => canonical_fields(kind, text).map(Record::Fields),
    }
}

pub(crate) fn canonical_fields(kind: Kind, text: &str) -> Result<Fields, IsoError> {
    let fields = decode_fields(kind, text)?;
    same_text(kind, text, print_fields(kind, &fields)?)?;
    Ok(fields)
}

pub(crate) fn canonical_duration(text: &str) -> Result<DurationFields, IsoError> {
    let fields = decode_duration(text)?;
    same_text(Kind::Duration, text, print_duration(&fields)?)?;
    Ok(fields)
}

fn same_text(kind: Kind, text: &str, encoded: String) -> Result<(), IsoError> {
    if encoded != text {
        return Err(IsoError::NonCanonical {
            kind,
            text: text.to_string(),
            canonical: encoded,
        });
    }
    Ok(())
}
