//! Encoding of field records into canonical text.

use std::fmt::Write;

use crate::error::IsoError;
use crate::fields::{DurationFields, Fields};
use crate::kind::Kind;

/// Prints a non-duration field record as `kind`.
///
/// Clock fields print down to the finest one present, except for instants,
/// which always carry millisecond precision.
pub(crate) fn print_fields(kind: Kind, fields: &Fields) -> Result<String, IsoError> {
    fields.require(kind)?;
    let mut out = String::with_capacity(24);
    match kind {
        Kind::Date => write_date(&mut out, kind, fields)?,
        Kind::YearMonth => {
            write_year(&mut out, fields.year)?;
            out.push('-');
            write_two(&mut out, kind, "month", fields.month, 1..=12)?;
        }
        Kind::MonthDay => {
            out.push_str("--");
            write_two(&mut out, kind, "month", fields.month, 1..=12)?;
            out.push('-');
            write_two(&mut out, kind, "day", fields.day, 1..=31)?;
        }
        Kind::Time => write_clock(&mut out, kind, fields)?,
        Kind::DateTime => {
            write_date(&mut out, kind, fields)?;
            out.push('T');
            write_clock(&mut out, kind, fields)?;
        }
        Kind::Instant => {
            write_date(&mut out, kind, fields)?;
            out.push('T');
            let full = Fields {
                minute: Some(fields.minute.unwrap_or(0)),
                second: Some(fields.second.unwrap_or(0)),
                millisecond: Some(fields.millisecond.unwrap_or(0)),
                ..*fields
            };
            write_clock(&mut out, kind, &full)?;
            out.push('Z');
        }
        Kind::Duration => unreachable!("durations are printed by print_duration"),
    }
    Ok(out)
}

/// Prints a duration in canonical form.
///
/// Zero is `PT0S`. Components of one sign print as magnitudes behind a
/// single leading `-`; seconds and milliseconds combine into one decimal
/// seconds component with trailing zeros trimmed.
pub(crate) fn print_duration(fields: &DurationFields) -> Result<String, IsoError> {
    let sign = fields.sign()?;
    if fields.is_zero() {
        return Ok("PT0S".to_string());
    }
    let mut out = String::with_capacity(16);
    if sign < 0 {
        out.push('-');
    }
    out.push('P');
    for (value, designator) in [
        (fields.years, 'Y'),
        (fields.months, 'M'),
        (fields.weeks, 'W'),
        (fields.days, 'D'),
    ] {
        if value != 0 {
            let _ = write!(out, "{}{designator}", value.unsigned_abs());
        }
    }
    let millis = u128::from(fields.seconds.unsigned_abs()) * 1_000
        + u128::from(fields.milliseconds.unsigned_abs());
    if fields.hours != 0 || fields.minutes != 0 || millis != 0 {
        out.push('T');
        if fields.hours != 0 {
            let _ = write!(out, "{}H", fields.hours.unsigned_abs());
        }
        if fields.minutes != 0 {
            let _ = write!(out, "{}M", fields.minutes.unsigned_abs());
        }
        if millis != 0 {
            let (whole, fraction) = (millis / 1_000, millis % 1_000);
            if fraction == 0 {
                let _ = write!(out, "{whole}S");
            } else {
                let digits = format!("{fraction:03}");
                let _ = write!(out, "{whole}.{}S", digits.trim_end_matches('0'));
            }
        }
    }
    Ok(out)
}

fn write_date(out: &mut String, kind: Kind, fields: &Fields) -> Result<(), IsoError> {
    write_year(out, fields.year)?;
    out.push('-');
    write_two(out, kind, "month", fields.month, 1..=12)?;
    out.push('-');
    write_two(out, kind, "day", fields.day, 1..=31)
}

fn write_clock(out: &mut String, kind: Kind, fields: &Fields) -> Result<(), IsoError> {
    write_two(out, kind, "hour", fields.hour, 0..=24)?;
    let Some(minute) = fields.minute else {
        return Ok(());
    };
    out.push(':');
    write_two(out, kind, "minute", Some(minute), 0..=59)?;
    let Some(second) = fields.second else {
        return Ok(());
    };
    out.push(':');
    write_two(out, kind, "second", Some(second), 0..=59)?;
    let Some(millisecond) = fields.millisecond else {
        return Ok(());
    };
    if !(0..=999).contains(&millisecond) {
        return Err(IsoError::FieldOutOfRange {
            kind,
            field: "millisecond",
            value: millisecond,
        });
    }
    let _ = write!(out, ".{millisecond:03}");
    Ok(())
}

fn write_year(out: &mut String, year: Option<i64>) -> Result<(), IsoError> {
    let year = year.unwrap_or_default();
    if !(0..=9999).contains(&year) {
        return Err(IsoError::YearOutOfRange { year });
    }
    let _ = write!(out, "{year:04}");
    Ok(())
}

fn write_two(
    out: &mut String,
    kind: Kind,
    field: &'static str,
    value: Option<i64>,
    range: std::ops::RangeInclusive<i64>,
) -> Result<(), IsoError> {
    let value = value.unwrap_or_default();
    if !range.contains(&value) {
        return Err(IsoError::FieldOutOfRange { kind, field, value });
    }
    let _ = write!(out, "{value:02}");
    Ok(())
}
