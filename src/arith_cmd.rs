//! Arithmetic commands: add, subtract, diff, compare, round, total, balance.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use almanac_arith::{add, balance, compare, difference, round, subtract, total};

use crate::cli::{BalanceArgs, CompareArgs, DiffArgs, RoundArgs, ShiftArgs, TotalArgs};
use crate::config::DefaultsToml;
use crate::convert;
use crate::report::Report;

/// Run `add`, or `subtract` when `negate` is set.
pub fn run_shift(args: &ShiftArgs, defaults: &DefaultsToml, negate: bool) -> Result<Report> {
    let (command, preposition) = if negate {
        ("subtract", "from")
    } else {
        ("add", "to")
    };
    let _cmd = info_span!("shift", command).entered();
    let value = convert::parse_value(&args.value)?;
    let duration = convert::parse_duration(&args.duration)?;
    let options = convert::build_add_options(args, defaults)?;
    info!(kind = %value.kind(), overflow = %options.overflow().as_str(), "shifting value");

    let result = if negate {
        subtract(&value, &duration, &options)
    } else {
        add(&value, &duration, &options)
    }
    .with_context(|| format!("failed to {command} {duration} {preposition} {value}"))?;
    Ok(Report::new(command, &[&args.value, &args.duration], &result).with_kind(result.kind()))
}

/// Run `diff`.
pub fn run_diff(args: &DiffArgs, defaults: &DefaultsToml) -> Result<Report> {
    let _cmd = info_span!("diff").entered();
    let left = convert::parse_value(&args.left)?;
    let right = convert::parse_value(&args.right)?;
    let options = convert::build_difference_options(args, defaults)?;
    let result = difference(&left, &right, &options)
        .with_context(|| format!("failed to take the difference from {left} to {right}"))?;
    Ok(Report::new("diff", &[&args.left, &args.right], &result).with_kind("Duration"))
}

/// Run `compare`.
pub fn run_compare(args: &CompareArgs, defaults: &DefaultsToml) -> Result<Report> {
    let _cmd = info_span!("compare").entered();
    let left = convert::parse_value(&args.left)?;
    let right = convert::parse_value(&args.right)?;
    let options = convert::build_compare_options(args, defaults)?;
    let ordering = compare(&left, &right, &options)
        .with_context(|| format!("failed to compare {left} with {right}"))?;
    Ok(Report::new("compare", &[&args.left, &args.right], ordering))
}

/// Run `round`.
pub fn run_round(args: &RoundArgs, defaults: &DefaultsToml) -> Result<Report> {
    let _cmd = info_span!("round").entered();
    let value = convert::parse_value(&args.value)?;
    let options = convert::build_round_options(args, defaults)?;
    let result = round(&value, &options).with_context(|| format!("failed to round {value}"))?;
    Ok(Report::new("round", &[&args.value], &result).with_kind(result.kind()))
}

/// Run `total`.
pub fn run_total(args: &TotalArgs, defaults: &DefaultsToml) -> Result<Report> {
    let _cmd = info_span!("total").entered();
    let duration = convert::parse_duration(&args.duration)?;
    let options = convert::build_total_options(args, defaults)?;
    let result = total(&duration, &options)
        .with_context(|| format!("failed to total {duration} in {}s", options.unit()))?;
    Ok(Report::new("total", &[&args.duration], result))
}

/// Run `balance`.
pub fn run_balance(args: &BalanceArgs, defaults: &DefaultsToml) -> Result<Report> {
    let _cmd = info_span!("balance").entered();
    let duration = convert::parse_duration(&args.duration)?;
    let (largest, relative_to) = convert::build_balance_options(args, defaults)?;
    let result = balance(&duration, largest, relative_to.as_ref())
        .with_context(|| format!("failed to balance {duration}"))?;
    Ok(Report::new("balance", &[&args.duration], &result).with_kind("Duration"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shift(value: &str, duration: &str, overflow: Option<&str>) -> ShiftArgs {
        ShiftArgs {
            value: value.to_string(),
            duration: duration.to_string(),
            overflow: overflow.map(str::to_string),
            relative_to: None,
        }
    }

    #[test]
    fn add_and_subtract() {
        let defaults = DefaultsToml::default();
        let report = run_shift(&shift("2020-01-31", "P1M", None), &defaults, false).unwrap();
        assert_eq!(report.result, "2020-02-29");
        assert_eq!(report.kind.as_deref(), Some("Date"));
        let report = run_shift(&shift("2020-03-31", "P1M", None), &defaults, true).unwrap();
        assert_eq!(report.result, "2020-02-29");
    }

    #[test]
    fn reject_overflow_fails_with_context() {
        let err = run_shift(
            &shift("2020-01-31", "P1M", Some("reject")),
            &DefaultsToml::default(),
            false,
        )
        .unwrap_err();
        assert!(format!("{err:#}").starts_with("failed to add P1M to 2020-01-31"));
    }

    #[test]
    fn total_of_leap_year() {
        let args = TotalArgs {
            duration: "PT8784H".to_string(),
            unit: "years".to_string(),
            relative_to: Some("2020-01-01".to_string()),
        };
        let report = run_total(&args, &DefaultsToml::default()).unwrap();
        assert_eq!(report.result, "1");
    }

    #[test]
    fn round_time() {
        let args = RoundArgs {
            value: "12:23".to_string(),
            smallest: Some("minute".to_string()),
            largest: None,
            increment: Some(15),
            mode: None,
            relative_to: None,
        };
        let report = run_round(&args, &DefaultsToml::default()).unwrap();
        assert_eq!(report.result, "12:30:00.000");
        assert_eq!(report.kind.as_deref(), Some("Time"));
    }

    #[test]
    fn compare_needs_matching_kinds() {
        let args = CompareArgs {
            left: "2020-01-01".to_string(),
            right: "12:00".to_string(),
            relative_to: None,
        };
        assert!(run_compare(&args, &DefaultsToml::default()).is_err());
    }
}
