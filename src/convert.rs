//! Pure conversion functions: command-line strings and TOML config -> engine
//! option types.
//!
//! Command-line flags win over `[defaults]` from the config file.

use anyhow::{Context, Result, bail};

use almanac_arith::{
    AddOptions, CompareOptions, DifferenceOptions, Overflow, RelativeTo, RoundOptions,
    RoundingMode, TotalOptions, Unit,
};
use almanac_iso::{Duration, Kind, Temporal};

use crate::cli::{BalanceArgs, CompareArgs, DiffArgs, RoundArgs, ShiftArgs, TotalArgs};
use crate::config::DefaultsToml;

/// Parses a unit name such as `day` or `Months`.
pub fn parse_unit(s: &str) -> Result<Unit> {
    s.parse().with_context(|| format!("invalid unit: {s:?}"))
}

/// Parses a rounding mode name such as `halfExpand`.
pub fn parse_mode(s: &str) -> Result<RoundingMode> {
    s.parse()
        .with_context(|| format!("invalid rounding mode: {s:?}"))
}

/// Parses an overflow policy, `constrain` or `reject`.
pub fn parse_overflow(s: &str) -> Result<Overflow> {
    s.parse()
        .with_context(|| format!("invalid overflow policy: {s:?}"))
}

/// Parses a kind name such as `date` or `year-month`.
pub fn parse_kind(s: &str) -> Result<Kind> {
    s.parse().with_context(|| format!("invalid kind: {s:?}"))
}

/// Parses a date or date-time anchor.
pub fn parse_relative_to(s: &str) -> Result<RelativeTo> {
    s.parse()
        .with_context(|| format!("invalid relative_to: {s:?}"))
}

/// Detects the kind of `s` and parses it.
pub fn parse_value(s: &str) -> Result<Temporal> {
    Temporal::detect(s).with_context(|| format!("not a valid ISO-8601 value: {s:?}"))
}

/// Parses canonical duration text.
pub fn parse_duration(s: &str) -> Result<Duration> {
    Duration::parse(s).with_context(|| format!("not a valid duration: {s:?}"))
}

/// Parses `name=number` pairs for the field-record constructors.
pub fn parse_pairs(pairs: &[String]) -> Result<Vec<(String, f64)>> {
    pairs
        .iter()
        .map(|pair| {
            let Some((name, value)) = pair.split_once('=') else {
                bail!("expected name=number, got {pair:?}");
            };
            let value: f64 = value
                .trim()
                .parse()
                .with_context(|| format!("invalid number for {name}: {value:?}"))?;
            Ok((name.trim().to_string(), value))
        })
        .collect()
}

/// The flag if given, otherwise the config default, parsed.
fn relative_to(flag: Option<&str>, defaults: &DefaultsToml) -> Result<Option<RelativeTo>> {
    flag.or(defaults.relative_to.as_deref())
        .map(parse_relative_to)
        .transpose()
}

/// Builds [`AddOptions`] for `add` and `subtract`.
pub fn build_add_options(args: &ShiftArgs, defaults: &DefaultsToml) -> Result<AddOptions> {
    let overflow = args.overflow.as_deref().unwrap_or(&defaults.overflow);
    let mut options = AddOptions::new().with_overflow(parse_overflow(overflow)?);
    if let Some(anchor) = relative_to(args.relative_to.as_deref(), defaults)? {
        options = options.with_relative_to(anchor);
    }
    Ok(options)
}

/// Builds [`DifferenceOptions`] for `diff`.
pub fn build_difference_options(
    args: &DiffArgs,
    defaults: &DefaultsToml,
) -> Result<DifferenceOptions> {
    let mode = args.mode.as_deref().unwrap_or(&defaults.difference_mode);
    let mut options = DifferenceOptions::new()
        .with_mode(parse_mode(mode)?)
        .with_increment(args.increment.unwrap_or(1));
    if let Some(ref unit) = args.largest {
        options = options.with_largest(parse_unit(unit)?);
    }
    if let Some(ref unit) = args.smallest {
        options = options.with_smallest(parse_unit(unit)?);
    }
    Ok(options)
}

/// Builds [`CompareOptions`] for `compare`.
pub fn build_compare_options(args: &CompareArgs, defaults: &DefaultsToml) -> Result<CompareOptions> {
    let mut options = CompareOptions::new();
    if let Some(anchor) = relative_to(args.relative_to.as_deref(), defaults)? {
        options = options.with_relative_to(anchor);
    }
    Ok(options)
}

/// Builds [`RoundOptions`] for `round`.
pub fn build_round_options(args: &RoundArgs, defaults: &DefaultsToml) -> Result<RoundOptions> {
    let mode = args.mode.as_deref().unwrap_or(&defaults.rounding_mode);
    let mut options = RoundOptions::default()
        .with_mode(parse_mode(mode)?)
        .with_increment(args.increment.unwrap_or(1));
    if let Some(ref unit) = args.smallest {
        options = options.with_smallest(parse_unit(unit)?);
    }
    if let Some(ref unit) = args.largest {
        options = options.with_largest(parse_unit(unit)?);
    }
    if let Some(anchor) = relative_to(args.relative_to.as_deref(), defaults)? {
        options = options.with_relative_to(anchor);
    }
    Ok(options)
}

/// Builds [`TotalOptions`] for `total`.
pub fn build_total_options(args: &TotalArgs, defaults: &DefaultsToml) -> Result<TotalOptions> {
    let mut options = TotalOptions::new(parse_unit(&args.unit)?);
    if let Some(anchor) = relative_to(args.relative_to.as_deref(), defaults)? {
        options = options.with_relative_to(anchor);
    }
    Ok(options)
}

/// The largest unit and anchor for `balance`.
pub fn build_balance_options(
    args: &BalanceArgs,
    defaults: &DefaultsToml,
) -> Result<(Option<Unit>, Option<RelativeTo>)> {
    let largest = args.largest.as_deref().map(parse_unit).transpose()?;
    Ok((largest, relative_to(args.relative_to.as_deref(), defaults)?))
}
