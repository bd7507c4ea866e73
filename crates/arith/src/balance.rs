//! Balancing: redistributing a duration so that nothing coarser than a
//! chosen largest unit is non-zero.
//!
//! Fixed units (weeks and below) are plain division of a millisecond total.
//! Months and years have no fixed length, so they are counted by walking an
//! anchor one unit at a time from an estimate just short of the answer.
//! Every step is measured
//! from the original anchor in a single jump, `anchor + k units`, so
//! end-of-month clamping never accumulates across steps and the result
//! matches what addition produces for the same duration.

use almanac_calendar::{
    CalendarError, CivilDate, DateDelta, MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE,
    MILLIS_PER_SECOND, total_days,
};
use almanac_iso::{Duration, DurationFields};
use tracing::{debug, trace};

use crate::anchor::RelativeTo;
use crate::error::ArithError;
use crate::unit::Unit;

/// Whole calendar units that fit into a day count, and what is left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Stepped {
    /// Whole units, signed.
    pub whole: i64,
    /// Days left over, same sign as the input, smaller than `next_len`.
    pub remainder: i64,
    /// Signed length in days of the partially consumed unit.
    pub next_len: i64,
}

/// Redistributes `duration` under `largest`, or under its own largest
/// non-zero unit when `largest` is `None`.
///
/// # Errors
///
/// Returns [`ArithError::MissingAnchor`] if months or years are involved
/// and `relative_to` is `None`.
///
/// # Example
///
/// ```
/// use almanac_arith::{RelativeTo, Unit, balance};
/// use almanac_iso::Duration;
///
/// let hours = Duration::parse("PT8784H").unwrap();
/// let anchor: RelativeTo = "2020-01-01".parse().unwrap();
/// let years = balance(&hours, Some(Unit::Year), Some(&anchor)).unwrap();
/// assert_eq!(years.as_str(), "P1Y");
/// ```
pub fn balance(
    duration: &Duration,
    largest: Option<Unit>,
    relative_to: Option<&RelativeTo>,
) -> Result<Duration, ArithError> {
    let largest = largest
        .or_else(|| Unit::largest_in(duration.fields()))
        .unwrap_or(Unit::Millisecond);
    let anchor = relative_to.map(RelativeTo::date);
    let fields = balance_fields(duration.fields(), largest, anchor.as_ref())?;
    Ok(Duration::from_fields(&fields)?)
}

/// Balances raw components, which need not share a sign.
pub(crate) fn balance_fields(
    fields: &DurationFields,
    largest: Unit,
    anchor: Option<&CivilDate>,
) -> Result<DurationFields, ArithError> {
    if largest.is_calendar() && anchor.is_none() {
        return Err(ArithError::MissingAnchor { unit: largest });
    }
    let total = total_millis(fields, anchor)?;
    balance_millis(total, largest, anchor)
}

/// Spreads a signed millisecond total over the units up to `largest`.
pub(crate) fn balance_millis(
    total: i128,
    largest: Unit,
    anchor: Option<&CivilDate>,
) -> Result<DurationFields, ArithError> {
    if !largest.is_calendar() {
        return split_millis(total, largest);
    }
    let anchor = anchor.ok_or(ArithError::MissingAnchor { unit: largest })?;
    let (days, rest) = whole_days(total)?;
    let sign = direction(total);
    let mut fields = split_millis(rest, Unit::Hour)?;
    let (years, days) = if largest == Unit::Year {
        let years = step_units(anchor, Unit::Year, 0, days, sign)?;
        (years.whole, years.remainder)
    } else {
        (0, days)
    };
    let months = step_units(anchor, Unit::Month, years, days, sign)?;
    fields.years = years;
    fields.months = months.whole;
    fields.days = months.remainder;
    debug!(%largest, years, months = months.whole, days = months.remainder, "balanced over calendar units");
    Ok(fields)
}

/// Collapses all components into milliseconds, measuring years and months
/// from `anchor`.
pub(crate) fn total_millis(
    fields: &DurationFields,
    anchor: Option<&CivilDate>,
) -> Result<i128, ArithError> {
    let delta = DateDelta {
        years: fields.years,
        months: fields.months,
        weeks: fields.weeks,
        days: fields.days,
    };
    let days = total_days(&delta, anchor).map_err(|err| match err {
        CalendarError::MissingAnchor => ArithError::MissingAnchor {
            unit: if fields.years != 0 { Unit::Year } else { Unit::Month },
        },
        other => other.into(),
    })?;
    Ok(i128::from(days) * i128::from(MILLIS_PER_DAY) + time_millis(fields))
}

/// Milliseconds in the hours through milliseconds components.
pub(crate) fn time_millis(fields: &DurationFields) -> i128 {
    i128::from(fields.hours) * i128::from(MILLIS_PER_HOUR)
        + i128::from(fields.minutes) * i128::from(MILLIS_PER_MINUTE)
        + i128::from(fields.seconds) * i128::from(MILLIS_PER_SECOND)
        + i128::from(fields.milliseconds)
}

/// Splits a millisecond total over the fixed units up to `largest`,
/// truncating toward zero so every component shares the total's sign.
pub(crate) fn split_millis(total: i128, largest: Unit) -> Result<DurationFields, ArithError> {
    let mut fields = DurationFields::default();
    let mut rest = total;
    for unit in Unit::ALL.into_iter().rev() {
        if unit > largest || unit == Unit::Millisecond {
            continue;
        }
        let Some(len) = unit.millis() else {
            continue;
        };
        let len = i128::from(len);
        unit.set(&mut fields, narrow(rest / len)?);
        rest %= len;
    }
    fields.milliseconds = narrow(rest)?;
    Ok(fields)
}

/// Counts whole `unit`s (months or years) in `days` starting at `anchor`.
///
/// `years_offset` shifts the starting point by whole years, for counting
/// months after years have been taken out. `sign` is the direction of
/// travel, used when `days` is zero.
pub(crate) fn step_units(
    anchor: &CivilDate,
    unit: Unit,
    years_offset: i64,
    days: i64,
    sign: i64,
) -> Result<Stepped, ArithError> {
    debug_assert!(unit.is_calendar());
    let delta = |k: i64| match unit {
        Unit::Year => DateDelta::years_months(years_offset.saturating_add(k), 0),
        _ => DateDelta::years_months(years_offset, k),
    };
    let origin = total_days(&delta(0), Some(anchor))?;
    let offset = |k: i64| -> Result<i64, ArithError> {
        Ok(total_days(&delta(k), Some(anchor))? - origin)
    };

    // 146097 days are 400 Gregorian years. Start one unit short of the mean.
    let per_cycle = if unit == Unit::Year { 400 } else { 4800 };
    let estimate = i128::from(days) * per_cycle / 146_097;
    let mut whole = narrow((estimate.abs() - 1).max(0))? * sign;
    let mut consumed = offset(whole)?;
    while (days - consumed) * sign < 0 {
        whole -= sign;
        consumed = offset(whole)?;
    }
    loop {
        let next = offset(whole + sign)?;
        let len = next - consumed;
        if (days - consumed).abs() < len.abs() {
            return Ok(Stepped {
                whole,
                remainder: days - consumed,
                next_len: len,
            });
        }
        whole += sign;
        consumed = next;
        trace!(%unit, whole, consumed, "stepped anchor");
    }
}

/// Whole days and leftover milliseconds, both truncated toward zero.
pub(crate) fn whole_days(total: i128) -> Result<(i64, i128), ArithError> {
    let day = i128::from(MILLIS_PER_DAY);
    Ok((narrow(total / day)?, total % day))
}

/// -1 for negative totals, otherwise 1.
pub(crate) fn direction(total: i128) -> i64 {
    if total < 0 { -1 } else { 1 }
}

fn narrow(value: i128) -> Result<i64, ArithError> {
    i64::try_from(value).map_err(|_| ArithError::Overflow {
        context: "balancing a duration",
    })
}
