//! Validation of rounding increments.
//!
//! A time-unit increment must divide one of the next larger unit evenly and
//! be smaller than it, so that a rounded value never spills into a partial
//! larger unit. Durations accept any positive increment for days and
//! coarser units; values can only round to whole single days.

use crate::error::ArithError;
use crate::unit::Unit;

/// Indexed by `Unit`, millisecond through hour.
const TIME_LIMITS: [i64; 4] = [1_000, 60, 60, 24];

/// Validates an increment for rounding durations and differences.
pub(crate) fn for_span(unit: Unit, increment: i64) -> Result<i64, ArithError> {
    positive(unit, increment)?;
    if unit >= Unit::Day {
        return Ok(increment);
    }
    within(unit, increment, TIME_LIMITS[unit as usize])
}

/// Validates an increment for rounding instants, times and date-times.
pub(crate) fn for_value(unit: Unit, increment: i64) -> Result<i64, ArithError> {
    positive(unit, increment)?;
    match unit {
        Unit::Day => within(unit, increment, 2),
        Unit::Week | Unit::Month | Unit::Year => Err(ArithError::InvalidIncrement {
            unit,
            increment,
            must_divide: 1,
        }),
        _ => within(unit, increment, TIME_LIMITS[unit as usize]),
    }
}

fn positive(unit: Unit, increment: i64) -> Result<(), ArithError> {
    if increment <= 0 {
        return Err(ArithError::NonPositiveIncrement { unit, increment });
    }
    Ok(())
}

fn within(unit: Unit, increment: i64, must_divide: i64) -> Result<i64, ArithError> {
    if increment >= must_divide || must_divide % increment != 0 {
        return Err(ArithError::InvalidIncrement {
            unit,
            increment,
            must_divide,
        });
    }
    Ok(increment)
}
