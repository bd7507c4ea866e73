//! Signed differences and ordering between values.

use std::cmp::Ordering;

use almanac_calendar::{CivilDate, MILLIS_PER_DAY, Overflow};
use almanac_iso::{Duration, DurationFields, Fields, Temporal};
use tracing::debug;

use crate::balance::total_millis;
use crate::error::ArithError;
use crate::options::{CompareOptions, DifferenceOptions};
use crate::round::{Rounding, round_span};
use crate::unit::Unit;

/// The duration from `left` to `right`, which must share a kind.
///
/// Instants default to hours as the largest unit. Other kinds default to
/// the coarsest unit in which the two values differ field by field. The
/// result is balanced relative to `left` and then rounded to the smallest
/// unit, which defaults to the finest unit the kind has.
///
/// # Errors
///
/// Returns [`ArithError::KindMismatch`] for operands of different kinds,
/// [`ArithError::UnsupportedKind`] for month-days and durations, and
/// range errors for invalid unit or increment options.
///
/// # Example
///
/// ```
/// use almanac_arith::{DifferenceOptions, difference};
/// use almanac_iso::Temporal;
///
/// let a = Temporal::detect("2000-01-01T12:30:15.123Z").unwrap();
/// let b = Temporal::detect("2000-01-01T14:45:15.123Z").unwrap();
/// let d = difference(&a, &b, &DifferenceOptions::new()).unwrap();
/// assert_eq!(d.as_str(), "PT2H15M");
/// ```
#[tracing::instrument(skip(options), fields(left = %left, right = %right))]
pub fn difference(
    left: &Temporal,
    right: &Temporal,
    options: &DifferenceOptions,
) -> Result<Duration, ArithError> {
    same_kind(left, right)?;
    let kind = left.kind();
    let (total, anchor, finest, coarsest, auto) = match (left, right) {
        (Temporal::Instant(l), Temporal::Instant(r)) => {
            let total = r.epoch_millis()? - l.epoch_millis()?;
            let anchor = l.to_civil()?.date();
            (total, Some(anchor), Unit::Millisecond, Unit::Year, Unit::Hour)
        }
        (Temporal::Date(l), Temporal::Date(r)) => {
            let (a, b) = (l.to_civil()?, r.to_civil()?);
            let total = day_millis(&a, &b);
            let auto = fieldwise_largest(l.fields(), r.fields(), Unit::Day);
            (total, Some(a), Unit::Day, Unit::Year, auto)
        }
        (Temporal::DateTime(l), Temporal::DateTime(r)) => {
            let (a, b) = (l.to_civil()?, r.to_civil()?);
            let total = b.to_epoch_millis() - a.to_epoch_millis();
            let auto = fieldwise_largest(l.fields(), r.fields(), Unit::Millisecond);
            (total, Some(a.date()), Unit::Millisecond, Unit::Year, auto)
        }
        (Temporal::Time(l), Temporal::Time(r)) => {
            let total = i128::from(r.millis_of_day() - l.millis_of_day());
            let auto = fieldwise_largest(l.fields(), r.fields(), Unit::Millisecond);
            (total, None, Unit::Millisecond, Unit::Hour, auto)
        }
        (Temporal::YearMonth(l), Temporal::YearMonth(r)) => {
            let a = first_of_month(l.fields())?;
            let b = first_of_month(r.fields())?;
            let auto = fieldwise_largest(l.fields(), r.fields(), Unit::Month);
            (day_millis(&a, &b), Some(a), Unit::Month, Unit::Year, auto)
        }
        _ => {
            return Err(ArithError::UnsupportedKind {
                operation: "difference",
                kind,
            });
        }
    };

    let smallest = options.smallest().unwrap_or(finest);
    let largest = options.largest().unwrap_or_else(|| auto.max(smallest));
    for unit in [smallest, largest] {
        if unit < finest || unit > coarsest {
            return Err(ArithError::UnsupportedUnit {
                operation: "difference",
                kind,
                unit,
            });
        }
    }
    debug!(%largest, %smallest, "resolved difference units");

    let rounding = Rounding {
        smallest,
        largest,
        increment: options.increment(),
        mode: options.mode(),
    };
    let fields = round_span(total, &rounding, anchor.as_ref())?;
    Ok(Duration::from_fields(&fields)?)
}

/// Orders two values of one kind: -1, 0 or 1.
///
/// Non-duration kinds compare by canonical text, which sorts
/// chronologically. Durations compare by their length in milliseconds,
/// measured from the anchor when they carry months or years.
///
/// # Errors
///
/// Returns [`ArithError::KindMismatch`] for operands of different kinds and
/// [`ArithError::MissingAnchor`] for calendar durations without an anchor.
pub fn compare(left: &Temporal, right: &Temporal, options: &CompareOptions) -> Result<i8, ArithError> {
    same_kind(left, right)?;
    let ordering = match (left, right) {
        (Temporal::Duration(l), Temporal::Duration(r)) => {
            let anchor = options.relative_to().map(|a| a.date());
            let l = total_millis(l.fields(), anchor.as_ref())?;
            let r = total_millis(r.fields(), anchor.as_ref())?;
            l.cmp(&r)
        }
        _ => left.as_str().cmp(right.as_str()),
    };
    Ok(match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    })
}

fn same_kind(left: &Temporal, right: &Temporal) -> Result<(), ArithError> {
    if left.kind() != right.kind() {
        return Err(ArithError::KindMismatch {
            left: left.kind(),
            right: right.kind(),
        });
    }
    Ok(())
}

fn day_millis(a: &CivilDate, b: &CivilDate) -> i128 {
    i128::from(b.to_epoch_days() - a.to_epoch_days()) * i128::from(MILLIS_PER_DAY)
}

fn first_of_month(fields: &Fields) -> Result<CivilDate, ArithError> {
    let year = fields.year.unwrap_or(0);
    let month = fields.month.unwrap_or(1);
    Ok(CivilDate::resolve(year, month, 1, Overflow::Constrain)?)
}

/// Coarsest unit whose field differs between `left` and `right`, or
/// `floor` if none does.
fn fieldwise_largest(left: &Fields, right: &Fields, floor: Unit) -> Unit {
    const UNITS: [Unit; 7] = [
        Unit::Year,
        Unit::Month,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
        Unit::Millisecond,
    ];
    let mut raw = DurationFields::default();
    for (name, unit) in Fields::NAMES.into_iter().zip(UNITS) {
        let delta = right.get(name).unwrap_or(0) - left.get(name).unwrap_or(0);
        unit.set(&mut raw, delta);
    }
    Unit::largest_in(&raw).unwrap_or(floor).max(floor)
}

#[cfg(test)]
mod tests {
    use almanac_iso::Kind;

    use super::*;

    fn diff(a: &str, b: &str, options: &DifferenceOptions) -> Result<String, ArithError> {
        let a = Temporal::detect(a).unwrap();
        let b = Temporal::detect(b).unwrap();
        difference(&a, &b, options).map(|d| d.to_string())
    }

    fn diff_default(a: &str, b: &str) -> String {
        diff(a, b, &DifferenceOptions::new()).unwrap()
    }

    #[test]
    fn instants_default_to_hours() {
        assert_eq!(
            diff_default("2000-01-01T00:00:00.000Z", "2000-01-03T01:00:00.000Z"),
            "PT49H"
        );
    }

    #[test]
    fn dates_auto_largest_from_fields() {
        assert_eq!(diff_default("2020-01-31", "2020-02-29"), "P1M");
        assert_eq!(diff_default("2020-01-31", "2020-02-01"), "P1D");
        assert_eq!(diff_default("2019-12-31", "2020-01-01"), "P1D");
        assert_eq!(diff_default("2020-02-29", "2020-01-31"), "-P29D");
        assert_eq!(diff_default("2020-01-15", "2020-01-20"), "P5D");
    }

    #[test]
    fn dates_with_largest() {
        let options = DifferenceOptions::new().with_largest(Unit::Year);
        assert_eq!(diff("2020-02-29", "2024-03-01", &options).unwrap(), "P4Y1D");
        let options = DifferenceOptions::new().with_largest(Unit::Week);
        assert_eq!(diff("2020-01-01", "2020-01-20", &options).unwrap(), "P2W5D");
    }

    #[test]
    fn date_times_balance_time_into_days() {
        assert_eq!(
            diff_default("2020-01-31T06:00", "2020-02-29T12:00"),
            "P1MT6H"
        );
        assert_eq!(
            diff_default("2020-01-31T12:00", "2020-02-29T06:00"),
            "P28DT18H"
        );
    }

    #[test]
    fn times() {
        assert_eq!(diff_default("12:23", "14:00"), "PT1H37M");
        assert_eq!(diff_default("14:00", "12:23:30"), "-PT1H36M30S");
        let options = DifferenceOptions::new().with_largest(Unit::Day);
        assert!(matches!(
            diff("12:00", "13:00", &options),
            Err(ArithError::UnsupportedUnit { .. })
        ));
    }

    #[test]
    fn year_months() {
        assert_eq!(diff_default("2020-11", "2022-01"), "P1Y2M");
        let options = DifferenceOptions::new().with_largest(Unit::Month);
        assert_eq!(diff("2020-11", "2022-01", &options).unwrap(), "P14M");
        let options = DifferenceOptions::new().with_smallest(Unit::Day);
        assert!(diff("2020-11", "2022-01", &options).is_err());
    }

    #[test]
    fn rounding_the_difference() {
        let options = DifferenceOptions::new()
            .with_smallest(Unit::Minute)
            .with_increment(15)
            .with_mode(crate::RoundingMode::HalfExpand);
        assert_eq!(
            diff("2020-01-01T00:00", "2020-01-01T01:08", &options).unwrap(),
            "PT1H15M"
        );
        let options = DifferenceOptions::new().with_smallest(Unit::Month);
        assert_eq!(diff("2020-01-31", "2020-03-30", &options).unwrap(), "P1M");
    }

    #[test]
    fn mismatched_kinds() {
        let a = Temporal::detect("2020-01-01").unwrap();
        let b = Temporal::detect("2020-01-01T00:00").unwrap();
        assert_eq!(
            difference(&a, &b, &DifferenceOptions::new()).unwrap_err(),
            ArithError::KindMismatch {
                left: Kind::Date,
                right: Kind::DateTime
            }
        );
        assert!(compare(&a, &b, &CompareOptions::new()).is_err());
    }

    #[test]
    fn compare_text_and_durations() {
        let cmp = |a: &str, b: &str, options: &CompareOptions| {
            compare(
                &Temporal::detect(a).unwrap(),
                &Temporal::detect(b).unwrap(),
                options,
            )
        };
        let none = CompareOptions::new();
        assert_eq!(cmp("2020-01-01", "2019-12-31", &none).unwrap(), 1);
        assert_eq!(cmp("--02-29", "--03-01", &none).unwrap(), -1);
        assert_eq!(cmp("PT36H", "P1DT12H", &none).unwrap(), 0);
        assert_eq!(cmp("PT1H", "PT59M", &none).unwrap(), 1);
        assert!(matches!(
            cmp("P1M", "P30D", &none),
            Err(ArithError::MissingAnchor { .. })
        ));
        let feb = CompareOptions::new().with_relative_to("2020-02-01".parse().unwrap());
        assert_eq!(cmp("P1M", "P30D", &feb).unwrap(), -1);
        let jan = CompareOptions::new().with_relative_to("2020-01-01".parse().unwrap());
        assert_eq!(cmp("P1M", "P30D", &jan).unwrap(), 1);
    }
}
