//! Adding durations to values.

use almanac_calendar::{
    CivilDate, CivilDateTime, MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND,
    balance_year_month,
};
use almanac_iso::{
    Date, DateTime, Duration, DurationFields, Fields, Instant, Kind, Temporal, Time, YearMonth,
};

use crate::balance::{balance_fields, time_millis};
use crate::error::ArithError;
use crate::options::AddOptions;
use crate::unit::Unit;

/// Adds `duration` to `value`, returning a value of the same kind.
///
/// Years and months move the calendar position first; a day-of-month that
/// no longer exists is clamped or rejected per the overflow option. Weeks,
/// days and clock components are then added with ordinary carry. A
/// negative duration subtracts.
///
/// Adding two durations sums their components and balances the sum to the
/// coarser of the two largest units.
///
/// # Errors
///
/// Returns [`ArithError::UnsupportedField`] when the duration has a
/// component the kind cannot take, [`ArithError::UnsupportedKind`] for
/// month-days, and a calendar error when rejecting a non-existent day.
///
/// # Example
///
/// ```
/// use almanac_arith::{AddOptions, add};
/// use almanac_iso::{Duration, Temporal};
///
/// let jan31 = Temporal::detect("2020-01-31").unwrap();
/// let month = Duration::parse("P1M").unwrap();
/// assert_eq!(add(&jan31, &month, &AddOptions::new()).unwrap().as_str(), "2020-02-29");
/// ```
pub fn add(value: &Temporal, duration: &Duration, options: &AddOptions) -> Result<Temporal, ArithError> {
    let d = duration.fields();
    match value {
        Temporal::Instant(instant) => {
            forbid(Kind::Instant, d, Unit::Day)?;
            let millis = instant.epoch_millis()? + time_millis(d);
            Ok(Instant::from_epoch_millis(millis)?.into())
        }
        Temporal::Time(time) => {
            forbid(Kind::Time, d, Unit::Day)?;
            let day = i128::from(MILLIS_PER_DAY);
            // rem_euclid by one day always fits in i64.
            let clock = (i128::from(time.millis_of_day()) + time_millis(d)).rem_euclid(day) as i64;
            Ok(Time::from_millis_of_day(clock)?.into())
        }
        Temporal::Date(date) => {
            forbid_below(Kind::Date, d, Unit::Day)?;
            let f = date.fields();
            let shifted = shift(f.year, f.month, f.day, d, options)?;
            let date = shifted.add_days(fixed_days(d)?)?;
            Ok(Date::from_civil(date)?.into())
        }
        Temporal::DateTime(date_time) => {
            let f = date_time.fields();
            let shifted = shift(f.year, f.month, f.day, d, options)?;
            let millis = i128::from(shifted.to_epoch_days()) * i128::from(MILLIS_PER_DAY)
                + i128::from(fixed_days(d)?) * i128::from(MILLIS_PER_DAY)
                + clock_millis(f)
                + time_millis(d);
            let result = CivilDateTime::from_epoch_millis(millis)?;
            Ok(DateTime::from_civil(result)?.into())
        }
        Temporal::YearMonth(year_month) => {
            forbid_below(Kind::YearMonth, d, Unit::Month)?;
            let f = year_month.fields();
            let year = checked(f.year.unwrap_or(0), d.years)?;
            let month = checked(f.month.unwrap_or(0), d.months)?;
            let (year, month) = balance_year_month(year, month)?;
            Ok(YearMonth::new(year, month.into())?.into())
        }
        Temporal::MonthDay(_) => Err(ArithError::UnsupportedKind {
            operation: "addition",
            kind: Kind::MonthDay,
        }),
        Temporal::Duration(left) => Ok(add_durations(left, duration, options)?.into()),
    }
}

/// Subtracts `duration` from `value`; the same as adding its negation.
pub fn subtract(value: &Temporal, duration: &Duration, options: &AddOptions) -> Result<Temporal, ArithError> {
    add(value, &duration.negate()?, options)
}

fn add_durations(left: &Duration, right: &Duration, options: &AddOptions) -> Result<Duration, ArithError> {
    let sum = left
        .fields()
        .checked_add(right.fields())
        .ok_or(ArithError::Overflow {
            context: "adding durations",
        })?;
    let largest = Unit::largest_in(left.fields())
        .max(Unit::largest_in(right.fields()))
        .unwrap_or(Unit::Millisecond);
    let anchor = options.relative_to().map(|r| r.date());
    let balanced = balance_fields(&sum, largest, anchor.as_ref())?;
    Ok(Duration::from_fields(&balanced)?)
}

/// Moves a date by the years and months of `d`, resolving the day.
fn shift(
    year: Option<i64>,
    month: Option<i64>,
    day: Option<i64>,
    d: &DurationFields,
    options: &AddOptions,
) -> Result<CivilDate, ArithError> {
    let year = checked(year.unwrap_or(0), d.years)?;
    let month = checked(month.unwrap_or(0), d.months)?;
    Ok(CivilDate::resolve(year, month, day.unwrap_or(1), options.overflow())?)
}

/// The wall clock of `f` in milliseconds; `24:00` is a whole day.
fn clock_millis(f: &Fields) -> i128 {
    i128::from(f.hour.unwrap_or(0)) * i128::from(MILLIS_PER_HOUR)
        + i128::from(f.minute.unwrap_or(0)) * i128::from(MILLIS_PER_MINUTE)
        + i128::from(f.second.unwrap_or(0)) * i128::from(MILLIS_PER_SECOND)
        + i128::from(f.millisecond.unwrap_or(0))
}

fn fixed_days(d: &DurationFields) -> Result<i64, ArithError> {
    d.weeks
        .checked_mul(7)
        .and_then(|w| w.checked_add(d.days))
        .ok_or(ArithError::Overflow {
            context: "adding weeks and days",
        })
}

fn checked(a: i64, b: i64) -> Result<i64, ArithError> {
    a.checked_add(b).ok_or(ArithError::Overflow {
        context: "adding calendar fields",
    })
}

/// Rejects any non-zero component at `from` or coarser.
fn forbid(kind: Kind, d: &DurationFields, from: Unit) -> Result<(), ArithError> {
    reject_where(kind, d, |unit| unit >= from)
}

/// Rejects any non-zero component finer than `to`.
fn forbid_below(kind: Kind, d: &DurationFields, to: Unit) -> Result<(), ArithError> {
    reject_where(kind, d, |unit| unit < to)
}

fn reject_where(kind: Kind, d: &DurationFields, forbidden: impl Fn(Unit) -> bool) -> Result<(), ArithError> {
    for (field, unit) in DurationFields::NAMES.into_iter().zip(Unit::ALL.into_iter().rev()) {
        if forbidden(unit) && unit.get(d) != 0 {
            return Err(ArithError::UnsupportedField { kind, field });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(text: &str) -> Temporal {
        Temporal::detect(text).unwrap()
    }

    fn duration(text: &str) -> Duration {
        Duration::parse(text).unwrap()
    }

    fn add_str(v: &str, d: &str) -> Result<String, ArithError> {
        add(&value(v), &duration(d), &AddOptions::new()).map(|t| t.to_string())
    }

    #[test]
    fn clock_carry_on_date_time() {
        assert_eq!(
            add_str("2020-12-31T23:30", "PT45M").unwrap(),
            "2021-01-01T00:15:00.000"
        );
    }

    #[test]
    fn time_wraps() {
        assert_eq!(add_str("23:00", "PT2H").unwrap(), "01:00:00.000");
        assert_eq!(add_str("00:00", "-PT1S").unwrap(), "23:59:59.000");
    }

    #[test]
    fn year_month_rolls_over() {
        assert_eq!(add_str("2020-11", "P3M").unwrap(), "2021-02");
        assert_eq!(add_str("2020-01", "-P1Y1M").unwrap(), "2018-12");
    }

    #[test]
    fn unsupported_fields() {
        assert_eq!(
            add_str("2020-01-01", "PT1H").unwrap_err(),
            ArithError::UnsupportedField {
                kind: Kind::Date,
                field: "hours"
            }
        );
        assert_eq!(
            add_str("12:00", "P1D").unwrap_err(),
            ArithError::UnsupportedField {
                kind: Kind::Time,
                field: "days"
            }
        );
        assert!(add_str("2020-01", "P1W").is_err());
        assert!(add_str("2000-01-01T00:00:00.000Z", "P1M").is_err());
        assert!(matches!(
            add_str("--02-29", "P1D"),
            Err(ArithError::UnsupportedKind { .. })
        ));
    }

    #[test]
    fn weeks_after_clamp() {
        // 2021-01-31 + 1M clamps to 02-28, then + 1W.
        assert_eq!(add_str("2021-01-31", "P1M1W").unwrap(), "2021-03-07");
    }

    #[test]
    fn grammar_level_day_is_resolved() {
        assert_eq!(add_str("2021-02-30", "P1D").unwrap(), "2021-03-01");
    }

    #[test]
    fn durations_sum_and_balance() {
        assert_eq!(add_str("PT50M", "PT20M").unwrap(), "PT70M");
        assert_eq!(add_str("PT1H50M", "PT20M").unwrap(), "PT2H10M");
        assert_eq!(add_str("P1D", "-PT1H").unwrap(), "PT23H");
        assert!(matches!(
            add_str("P1M", "P1D"),
            Err(ArithError::MissingAnchor { .. })
        ));
        let options = AddOptions::new().with_relative_to("2020-01-31".parse().unwrap());
        let sum = add(&value("P1M"), &duration("P1D"), &options).unwrap();
        assert_eq!(sum.as_str(), "P1M1D");
    }

    #[test]
    fn subtract_is_negated_add() {
        let v = value("2020-03-31");
        let d = duration("P1M");
        let options = AddOptions::new();
        assert_eq!(
            subtract(&v, &d, &options).unwrap(),
            add(&v, &d.negate().unwrap(), &options).unwrap()
        );
        assert_eq!(subtract(&v, &d, &options).unwrap().as_str(), "2020-02-29");
    }
}
