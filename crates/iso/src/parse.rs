//! Grammar-level decoding of temporal text into field records.
//!
//! The parsers work on byte slices and hand back the unconsumed tail with
//! each value, so that every grammar is a straight sequence of small steps.
//! Failures carry a static reason; the caller attaches kind and text.

use crate::error::IsoError;
use crate::fields::{DurationFields, Fields};
use crate::kind::Kind;

type Reason = &'static str;

/// A parsed value and the input that follows it.
struct Parsed<'i, T> {
    value: T,
    input: &'i [u8],
}

/// Clock fields; the nesting of the optional parts mirrors the grammar.
#[derive(Default)]
struct Clock {
    hour: i64,
    minute: Option<i64>,
    second: Option<i64>,
    millisecond: Option<i64>,
}

/// Decodes `text` as the non-duration `kind`.
pub(crate) fn decode_fields(kind: Kind, text: &str) -> Result<Fields, IsoError> {
    fields_inner(kind, text.as_bytes()).map_err(|reason| IsoError::InvalidText {
        kind,
        text: text.to_string(),
        reason,
    })
}

/// Decodes `text` as a duration, enforcing one sign across components.
pub(crate) fn decode_duration(text: &str) -> Result<DurationFields, IsoError> {
    let fields = duration_inner(text.as_bytes()).map_err(|reason| IsoError::InvalidText {
        kind: Kind::Duration,
        text: text.to_string(),
        reason,
    })?;
    fields.sign().map_err(|_| IsoError::MixedSign {
        detail: text.to_string(),
    })?;
    Ok(fields)
}

fn fields_inner(kind: Kind, input: &[u8]) -> Result<Fields, Reason> {
    let mut fields = Fields::default();
    let input = match kind {
        Kind::Date => {
            let Parsed { value, input } = parse_date(input)?;
            set_date(&mut fields, value);
            input
        }
        Kind::YearMonth => {
            let Parsed { value: year, input } = parse_year(input)?;
            let input = expect(input, b'-', "expected '-' after year")?;
            let Parsed { value: month, input } = parse_month(input)?;
            fields.year = Some(year);
            fields.month = Some(month);
            input
        }
        Kind::MonthDay => {
            let input = input
                .strip_prefix(b"--")
                .ok_or("expected leading '--' before month")?;
            let Parsed { value: month, input } = parse_month(input)?;
            let input = expect(input, b'-', "expected '-' after month")?;
            let Parsed { value: day, input } = parse_day(input)?;
            fields.month = Some(month);
            fields.day = Some(day);
            input
        }
        Kind::Time => {
            let Parsed { value, input } = parse_clock(input)?;
            set_clock(&mut fields, value);
            input
        }
        Kind::DateTime | Kind::Instant => {
            let Parsed { value: date, input } = parse_date(input)?;
            let input = expect(input, b'T', "expected 'T' between date and time")?;
            let Parsed { value: clock, input } = parse_clock(input)?;
            let input = if kind == Kind::Instant {
                if clock.millisecond.is_none() {
                    return Err("instant requires hours, minutes, seconds and milliseconds");
                }
                expect(input, b'Z', "expected trailing 'Z' UTC marker")?
            } else {
                input
            };
            set_date(&mut fields, date);
            set_clock(&mut fields, clock);
            input
        }
        Kind::Duration => unreachable!("durations are decoded by decode_duration"),
    };
    if !input.is_empty() {
        return Err("unexpected trailing characters");
    }
    Ok(fields)
}

fn duration_inner(input: &[u8]) -> Result<DurationFields, Reason> {
    let (sign, input) = match input.split_first() {
        Some((b'-', rest)) => (-1, rest),
        Some((b'+', rest)) => (1, rest),
        _ => (1, input),
    };
    let mut input = expect(input, b'P', "expected 'P' designator")?;
    let mut values = [0i64; 8];
    let mut any = false;

    // Index of the first designator still allowed, into DurationFields::NAMES.
    let mut next = 0;
    while let Some(&b) = input.first() {
        if b == b'T' {
            break;
        }
        let Parsed { value: (n, fraction), input: rest } = parse_component(input)?;
        if fraction.is_some() {
            return Err("only seconds may carry a fraction");
        }
        let (&designator, rest) = rest.split_first().ok_or("expected unit designator")?;
        let slot = match designator {
            b'Y' => 0,
            b'M' => 1,
            b'W' => 2,
            b'D' => 3,
            _ => return Err("expected one of Y, M, W or D"),
        };
        if slot < next {
            return Err("date components out of order or repeated");
        }
        values[slot] = n.checked_mul(sign).ok_or("component too large")?;
        next = slot + 1;
        any = true;
        input = rest;
    }

    if let Some(rest) = input.strip_prefix(b"T") {
        input = rest;
        if input.is_empty() {
            return Err("expected time components after 'T'");
        }
        let mut next = 4;
        while !input.is_empty() {
            if input[0] == b'T' {
                return Err("at most one 'T' separator is allowed");
            }
            let Parsed { value: (n, fraction), input: rest } = parse_component(input)?;
            let (&designator, rest) = rest.split_first().ok_or("expected unit designator")?;
            let slot = match designator {
                b'H' => 4,
                b'M' => 5,
                b'S' => 6,
                _ => return Err("expected one of H, M or S"),
            };
            if slot < next {
                return Err("time components out of order or repeated");
            }
            if let Some(millis) = fraction {
                if slot != 6 {
                    return Err("only seconds may carry a fraction");
                }
                // A fraction carries the sign of its whole part, including
                // "-0.5S".
                let millis = if n < 0 || rest_is_negative(input) {
                    -millis
                } else {
                    millis
                };
                values[7] = millis.checked_mul(sign).ok_or("component too large")?;
            }
            values[slot] = n.checked_mul(sign).ok_or("component too large")?;
            next = slot + 1;
            any = true;
            input = rest;
        }
    }

    if !any {
        return Err("duration has no components");
    }
    Ok(DurationFields::from_array(values))
}

fn rest_is_negative(component: &[u8]) -> bool {
    component.first() == Some(&b'-')
}

/// An optionally negated integer, optionally followed by a 1-3 digit
/// fraction (returned in milliseconds).
fn parse_component(input: &[u8]) -> Result<Parsed<'_, (i64, Option<i64>)>, Reason> {
    let (negative, input) = match input.strip_prefix(b"-") {
        Some(rest) => (true, rest),
        None => (false, input),
    };
    let len = input.iter().take_while(|b| b.is_ascii_digit()).count();
    if len == 0 {
        return Err("expected digits");
    }
    let (digits, mut input) = input.split_at(len);
    let mut n = number(digits)?;
    if negative {
        n = -n;
    }
    let mut fraction = None;
    if let Some(rest) = input.strip_prefix(b".") {
        let len = rest.iter().take_while(|b| b.is_ascii_digit()).count();
        if !(1..=3).contains(&len) {
            return Err("fraction must have one to three digits");
        }
        let (digits, rest) = rest.split_at(len);
        let scale = [100, 10, 1][len - 1];
        fraction = Some(number(digits)? * scale);
        input = rest;
    }
    Ok(Parsed {
        value: (n, fraction),
        input,
    })
}

fn parse_date(input: &[u8]) -> Result<Parsed<'_, (i64, i64, i64)>, Reason> {
    let Parsed { value: year, input } = parse_year(input)?;
    let input = expect(input, b'-', "expected '-' after year")?;
    let Parsed { value: month, input } = parse_month(input)?;
    let input = expect(input, b'-', "expected '-' after month")?;
    let Parsed { value: day, input } = parse_day(input)?;
    Ok(Parsed {
        value: (year, month, day),
        input,
    })
}

fn parse_clock(input: &[u8]) -> Result<Parsed<'_, Clock>, Reason> {
    let Parsed { value: hour, mut input } = fixed(input, 2, 0..=24, "expected two-digit hour 00-24")?;
    let mut clock = Clock {
        hour,
        ..Clock::default()
    };
    if let Some(rest) = input.strip_prefix(b":") {
        let minute = fixed(rest, 2, 0..=59, "expected two-digit minute 00-59")?;
        clock.minute = Some(minute.value);
        input = minute.input;
        if let Some(rest) = input.strip_prefix(b":") {
            let second = fixed(rest, 2, 0..=59, "expected two-digit second 00-59")?;
            clock.second = Some(second.value);
            input = second.input;
            if let Some(rest) = input.strip_prefix(b".") {
                let millis = fixed(rest, 3, 0..=999, "expected three-digit millisecond")?;
                clock.millisecond = Some(millis.value);
                input = millis.input;
            }
        }
    }
    Ok(Parsed {
        value: clock,
        input,
    })
}

fn parse_year(input: &[u8]) -> Result<Parsed<'_, i64>, Reason> {
    fixed(input, 4, 0..=9999, "expected four-digit year")
}

fn parse_month(input: &[u8]) -> Result<Parsed<'_, i64>, Reason> {
    fixed(input, 2, 1..=12, "expected two-digit month 01-12")
}

fn parse_day(input: &[u8]) -> Result<Parsed<'_, i64>, Reason> {
    fixed(input, 2, 1..=31, "expected two-digit day 01-31")
}

/// Exactly `width` ASCII digits whose value lies in `range`.
fn fixed(
    input: &[u8],
    width: usize,
    range: std::ops::RangeInclusive<i64>,
    reason: Reason,
) -> Result<Parsed<'_, i64>, Reason> {
    if input.len() < width {
        return Err(reason);
    }
    let (digits, input) = input.split_at(width);
    if !digits.iter().all(u8::is_ascii_digit) {
        return Err(reason);
    }
    let value = number(digits)?;
    if !range.contains(&value) {
        return Err(reason);
    }
    Ok(Parsed { value, input })
}

fn number(digits: &[u8]) -> Result<i64, Reason> {
    digits.iter().try_fold(0i64, |acc, &b| {
        acc.checked_mul(10)
            .and_then(|acc| acc.checked_add(i64::from(b - b'0')))
            .ok_or("number too large")
    })
}

fn expect(input: &[u8], byte: u8, reason: Reason) -> Result<&[u8], Reason> {
    match input.split_first() {
        Some((&b, rest)) if b == byte => Ok(rest),
        _ => Err(reason),
    }
}

fn set_date(fields: &mut Fields, (year, month, day): (i64, i64, i64)) {
    fields.year = Some(year);
    fields.month = Some(month);
    fields.day = Some(day);
}

fn set_clock(fields: &mut Fields, clock: Clock) {
    fields.hour = Some(clock.hour);
    fields.minute = clock.minute;
    fields.second = clock.second;
    fields.millisecond = clock.millisecond;
}
