//! Rounding values and durations to a unit and increment.

use almanac_calendar::{CivilDate, CivilDateTime, MILLIS_PER_DAY};
use almanac_iso::{DateTime, Duration, DurationFields, Instant, Temporal, Time};
use tracing::debug;

use crate::balance::{Stepped, balance_millis, direction, step_units, total_millis, whole_days};
use crate::error::ArithError;
use crate::increment;
use crate::mode::RoundingMode;
use crate::options::RoundOptions;
use crate::unit::Unit;

/// Resolved rounding parameters for a span of time.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Rounding {
    pub smallest: Unit,
    pub largest: Unit,
    pub increment: i64,
    pub mode: RoundingMode,
}

/// Rounds `value` to a multiple of `increment` smallest units.
///
/// Instants, times and date-times round their position on the millisecond
/// line, so carry propagates naturally: `23:59:59.999` rounded up to the
/// second is the next day. Results print with full clock precision.
///
/// Durations are rounded as a whole and re-balanced to the largest unit.
/// Months and years are measured from `relative_to`.
///
/// # Errors
///
/// Returns [`ArithError::MissingSmallestUnit`] if no unit is set,
/// [`ArithError::UnsupportedKind`] for dates, year-months and month-days,
/// and range errors for invalid increments.
///
/// # Example
///
/// ```
/// use almanac_arith::{RoundOptions, Unit, round};
/// use almanac_iso::Temporal;
///
/// let time = Temporal::detect("12:23").unwrap();
/// let options = RoundOptions::new(Unit::Minute).with_increment(15);
/// assert_eq!(round(&time, &options).unwrap().as_str(), "12:30:00.000");
/// ```
#[tracing::instrument(skip(options), fields(value = %value))]
pub fn round(value: &Temporal, options: &RoundOptions) -> Result<Temporal, ArithError> {
    if let Temporal::Duration(duration) = value {
        return Ok(round_duration(duration, options)?.into());
    }
    let kind = value.kind();
    let smallest = options.smallest().ok_or(ArithError::MissingSmallestUnit)?;
    let increment = increment::for_value(smallest, options.increment())?;
    let step = match smallest.millis() {
        Some(len) => i128::from(len) * i128::from(increment),
        None => {
            return Err(ArithError::UnsupportedUnit {
                operation: "rounding",
                kind,
                unit: smallest,
            });
        }
    };
    let mode = options.mode();
    debug!(%smallest, increment, %mode, "resolved rounding");
    match value {
        Temporal::Instant(instant) => {
            let millis = mode.round(instant.epoch_millis()?, step);
            Ok(Instant::from_epoch_millis(millis)?.into())
        }
        Temporal::Time(time) => {
            if smallest > Unit::Hour {
                return Err(ArithError::UnsupportedUnit {
                    operation: "rounding",
                    kind,
                    unit: smallest,
                });
            }
            let clock = mode.round(i128::from(time.millis_of_day()), step);
            // Rounded within 0..=one day, so it fits in i64.
            Ok(Time::from_millis_of_day(clock as i64)?.into())
        }
        Temporal::DateTime(date_time) => {
            let millis = mode.round(date_time.to_civil()?.to_epoch_millis(), step);
            Ok(DateTime::from_civil(CivilDateTime::from_epoch_millis(millis)?)?.into())
        }
        _ => Err(ArithError::UnsupportedKind {
            operation: "rounding",
            kind,
        }),
    }
}

/// Rounds a duration; see [`round`].
pub fn round_duration(duration: &Duration, options: &RoundOptions) -> Result<Duration, ArithError> {
    if options.smallest().is_none() && options.largest().is_none() {
        return Err(ArithError::MissingSmallestUnit);
    }
    let fields = duration.fields();
    let smallest = options.smallest().unwrap_or(Unit::Millisecond);
    let largest = options.largest().unwrap_or_else(|| {
        Unit::largest_in(fields)
            .unwrap_or(Unit::Millisecond)
            .max(smallest)
    });
    let anchor = options.relative_to().map(|r| r.date());
    let total = total_millis(fields, anchor.as_ref())?;
    let rounding = Rounding {
        smallest,
        largest,
        increment: options.increment(),
        mode: options.mode(),
    };
    let rounded = round_span(total, &rounding, anchor.as_ref())?;
    Ok(Duration::from_fields(&rounded)?)
}

/// Rounds a signed millisecond span and balances it to `largest`.
///
/// Fixed units round the total directly. Months and years round the whole
/// units counted from the anchor plus the fraction of the next unit that
/// the leftover covers.
pub(crate) fn round_span(
    total: i128,
    rounding: &Rounding,
    anchor: Option<&CivilDate>,
) -> Result<DurationFields, ArithError> {
    let Rounding {
        smallest,
        largest,
        increment,
        mode,
    } = *rounding;
    if largest < smallest {
        return Err(ArithError::UnitOrder { largest, smallest });
    }
    let increment = increment::for_span(smallest, increment)?;
    if let Some(len) = smallest.millis() {
        let rounded = mode.round(total, i128::from(len) * i128::from(increment));
        return balance_millis(rounded, largest, anchor);
    }

    let anchor = anchor.ok_or(ArithError::MissingAnchor { unit: largest })?;
    let (days, rest) = whole_days(total)?;
    let sign = direction(total);
    let mut fields = DurationFields::default();
    if smallest == Unit::Year {
        let years = step_units(anchor, Unit::Year, 0, days, sign)?;
        fields.years = round_units(&years, rest, increment, mode)?;
    } else {
        let months = step_units(anchor, Unit::Month, 0, days, sign)?;
        let months = round_units(&months, rest, increment, mode)?;
        if largest == Unit::Year {
            fields.years = months / 12;
            fields.months = months % 12;
        } else {
            fields.months = months;
        }
    }
    Ok(fields)
}

/// Rounds `whole` units plus a leftover of `remainder` days and `rest`
/// milliseconds, measured against the length of the next unit.
fn round_units(
    stepped: &Stepped,
    rest: i128,
    increment: i64,
    mode: RoundingMode,
) -> Result<i64, ArithError> {
    let day = i128::from(MILLIS_PER_DAY);
    let unit = i128::from(stepped.next_len.abs()) * day;
    let quantity = i128::from(stepped.whole) * unit + i128::from(stepped.remainder) * day + rest;
    let rounded = mode.round(quantity, unit * i128::from(increment)) / unit;
    i64::try_from(rounded).map_err(|_| ArithError::Overflow {
        context: "rounding calendar units",
    })
}
