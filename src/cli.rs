use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Calendar-correct arithmetic over ISO-8601 text.
#[derive(Parser)]
#[command(
    name = "almanac",
    version,
    about = "Calendar-correct arithmetic over ISO-8601 text"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (default: almanac.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print a JSON report instead of bare text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Add a duration to a value.
    Add(ShiftArgs),
    /// Subtract a duration from a value.
    Subtract(ShiftArgs),
    /// Duration from LEFT to RIGHT.
    Diff(DiffArgs),
    /// Order two values of the same kind (-1, 0 or 1).
    Compare(CompareArgs),
    /// Round a value or duration.
    Round(RoundArgs),
    /// Express a duration as a fractional count of one unit.
    Total(TotalArgs),
    /// Redistribute a duration under a largest unit.
    Balance(BalanceArgs),
    /// Detect or validate the kind of a text and print its fields.
    Check(CheckArgs),
    /// Build a value from `name=number` fields.
    Build(BuildArgs),
}

/// Arguments for `add` and `subtract`.
#[derive(clap::Args)]
pub struct ShiftArgs {
    /// Value to shift; its kind is detected from the text.
    pub value: String,

    /// Duration to add or subtract.
    pub duration: String,

    /// Policy for days past the end of a month: constrain or reject.
    #[arg(long)]
    pub overflow: Option<String>,

    /// Anchor for balancing the sum of two durations.
    #[arg(long = "relative-to")]
    pub relative_to: Option<String>,
}

/// Arguments for `diff`.
#[derive(clap::Args)]
pub struct DiffArgs {
    /// Start value.
    pub left: String,

    /// End value, of the same kind as LEFT.
    pub right: String,

    /// Coarsest unit of the result.
    #[arg(long)]
    pub largest: Option<String>,

    /// Finest unit of the result.
    #[arg(long)]
    pub smallest: Option<String>,

    /// Rounding increment, in smallest units.
    #[arg(long)]
    pub increment: Option<i64>,

    /// Rounding mode: trunc, floor, ceil or halfExpand.
    #[arg(long)]
    pub mode: Option<String>,
}

/// Arguments for `compare`.
#[derive(clap::Args)]
pub struct CompareArgs {
    /// First value.
    pub left: String,

    /// Second value, of the same kind as LEFT.
    pub right: String,

    /// Anchor for durations with months or years.
    #[arg(long = "relative-to")]
    pub relative_to: Option<String>,
}

/// Arguments for `round`.
#[derive(clap::Args)]
pub struct RoundArgs {
    /// Value or duration to round.
    pub value: String,

    /// Unit to round to.
    #[arg(long)]
    pub smallest: Option<String>,

    /// Coarsest unit of a rounded duration.
    #[arg(long)]
    pub largest: Option<String>,

    /// Rounding increment, in smallest units.
    #[arg(long)]
    pub increment: Option<i64>,

    /// Rounding mode: trunc, floor, ceil or halfExpand.
    #[arg(long)]
    pub mode: Option<String>,

    /// Anchor for durations with months or years.
    #[arg(long = "relative-to")]
    pub relative_to: Option<String>,
}

/// Arguments for `total`.
#[derive(clap::Args)]
pub struct TotalArgs {
    /// Duration to measure.
    pub duration: String,

    /// Unit to count in.
    #[arg(long)]
    pub unit: String,

    /// Anchor for months and years.
    #[arg(long = "relative-to")]
    pub relative_to: Option<String>,
}

/// Arguments for `balance`.
#[derive(clap::Args)]
pub struct BalanceArgs {
    /// Duration to balance.
    pub duration: String,

    /// Coarsest unit of the result (default: the duration's own).
    #[arg(long)]
    pub largest: Option<String>,

    /// Anchor for months and years.
    #[arg(long = "relative-to")]
    pub relative_to: Option<String>,
}

/// Arguments for `check`.
#[derive(clap::Args)]
pub struct CheckArgs {
    /// Text to check.
    pub text: String,

    /// Kind to validate against instead of detecting one.
    #[arg(short, long)]
    pub kind: Option<String>,
}

/// Arguments for `build`.
#[derive(clap::Args)]
pub struct BuildArgs {
    /// Kind to build.
    pub kind: String,

    /// Fields as `name=number`, e.g. `year=2020 month=13 day=1`.
    pub fields: Vec<String>,

    /// Policy for days past the end of a month: constrain or reject.
    #[arg(long)]
    pub overflow: Option<String>,
}
