//! Expressing a duration as a fractional count of one unit.

use almanac_calendar::MILLIS_PER_DAY;
use almanac_iso::Duration;
use tracing::debug;

use crate::balance::{direction, step_units, total_millis, whole_days};
use crate::error::ArithError;
use crate::options::TotalOptions;

/// The length of `duration` in `unit`s, as a float.
///
/// Weeks and finer units divide the millisecond total. Months and years
/// count whole units from `relative_to` and add the fraction of the next
/// unit covered by the leftover, so the same number of days totals
/// differently from different anchors.
///
/// # Errors
///
/// Returns [`ArithError::MissingAnchor`] when months or years are involved
/// and no `relative_to` is set.
///
/// # Example
///
/// ```
/// use almanac_arith::{RelativeTo, TotalOptions, Unit, total};
/// use almanac_iso::Duration;
///
/// let d = Duration::parse("PT8784H").unwrap();
/// let anchor: RelativeTo = "2020-01-01".parse().unwrap();
/// let options = TotalOptions::new(Unit::Year).with_relative_to(anchor);
/// assert_eq!(total(&d, &options).unwrap(), 1.0);
/// ```
#[tracing::instrument(skip(options), fields(duration = %duration, unit = %options.unit()))]
pub fn total(duration: &Duration, options: &TotalOptions) -> Result<f64, ArithError> {
    let unit = options.unit();
    let anchor = options.relative_to().map(|r| r.date());
    let millis = total_millis(duration.fields(), anchor.as_ref())?;

    if let Some(len) = unit.millis() {
        let len = i128::from(len);
        return Ok(fraction(millis / len, millis % len, len));
    }

    let anchor = anchor.ok_or(ArithError::MissingAnchor { unit })?;
    let (days, rest) = whole_days(millis)?;
    let stepped = step_units(&anchor, unit, 0, days, direction(millis))?;
    let day = i128::from(MILLIS_PER_DAY);
    let leftover = i128::from(stepped.remainder) * day + rest;
    let next = i128::from(stepped.next_len.abs()) * day;
    debug!(
        whole = stepped.whole,
        remainder = stepped.remainder,
        next_len = stepped.next_len,
        "counted calendar units"
    );
    Ok(fraction(i128::from(stepped.whole), leftover, next))
}

/// `whole + part / len`, keeping the integer part exact.
fn fraction(whole: i128, part: i128, len: i128) -> f64 {
    whole as f64 + part as f64 / len as f64
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::anchor::RelativeTo;
    use crate::unit::Unit;

    fn total_str(d: &str, unit: Unit, anchor: Option<&str>) -> Result<f64, ArithError> {
        let mut options = TotalOptions::new(unit);
        if let Some(anchor) = anchor {
            options = options.with_relative_to(anchor.parse::<RelativeTo>().unwrap());
        }
        total(&Duration::parse(d).unwrap(), &options)
    }

    #[test]
    fn fixed_units() {
        assert_relative_eq!(total_str("PT1H30M", Unit::Hour, None).unwrap(), 1.5);
        assert_relative_eq!(total_str("PT1H30M", Unit::Minute, None).unwrap(), 90.0);
        assert_relative_eq!(total_str("P1DT12H", Unit::Day, None).unwrap(), 1.5);
        assert_relative_eq!(total_str("P10D", Unit::Week, None).unwrap(), 10.0 / 7.0);
        assert_relative_eq!(total_str("-PT1.5S", Unit::Millisecond, None).unwrap(), -1500.0);
    }

    #[test]
    fn years_from_leap_year() {
        assert_eq!(total_str("PT8784H", Unit::Year, Some("2020-01-01")).unwrap(), 1.0);
        assert_relative_eq!(
            total_str("PT8784H", Unit::Year, Some("2021-01-01")).unwrap(),
            1.0 + 1.0 / 365.0
        );
    }

    #[test]
    fn months_fraction_of_next_month() {
        // 2020-01-01: January 31 days, then February 29.
        assert_relative_eq!(
            total_str("P45D", Unit::Month, Some("2020-01-01")).unwrap(),
            1.0 + 14.0 / 29.0
        );
        assert_relative_eq!(
            total_str("-P45D", Unit::Month, Some("2020-03-01")).unwrap(),
            -(1.0 + 16.0 / 31.0)
        );
    }

    #[test]
    fn months_in_a_hundred_million_years() {
        assert_eq!(
            total_str("P100000000Y", Unit::Month, Some("2000-01-01")).unwrap(),
            1_200_000_000.0
        );
        assert_eq!(
            total_str("-P100000000Y", Unit::Year, Some("2000-01-01")).unwrap(),
            -100_000_000.0
        );
    }

    #[test]
    fn calendar_units_need_anchor() {
        assert_eq!(
            total_str("P45D", Unit::Month, None).unwrap_err(),
            ArithError::MissingAnchor { unit: Unit::Month }
        );
        assert!(matches!(
            total_str("P1Y", Unit::Day, None),
            Err(ArithError::MissingAnchor { .. })
        ));
        assert_relative_eq!(total_str("P1Y", Unit::Day, Some("2020-01-01")).unwrap(), 366.0);
    }
}
