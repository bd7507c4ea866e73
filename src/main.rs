mod arith_cmd;
mod check_cmd;
mod cli;
mod config;
mod convert;
mod logging;
mod report;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    let defaults = &config.defaults;
    let report = match cli.command {
        Command::Add(ref args) => arith_cmd::run_shift(args, defaults, false),
        Command::Subtract(ref args) => arith_cmd::run_shift(args, defaults, true),
        Command::Diff(ref args) => arith_cmd::run_diff(args, defaults),
        Command::Compare(ref args) => arith_cmd::run_compare(args, defaults),
        Command::Round(ref args) => arith_cmd::run_round(args, defaults),
        Command::Total(ref args) => arith_cmd::run_total(args, defaults),
        Command::Balance(ref args) => arith_cmd::run_balance(args, defaults),
        Command::Check(ref args) => check_cmd::run_check(args),
        Command::Build(ref args) => check_cmd::run_build(args, defaults),
    }?;
    println!("{}", report.render(cli.json || config.output.json)?);
    Ok(())
}
