//! Codec commands: check a text, build a value from fields.

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use almanac_iso::{Record, Temporal, decode};

use crate::cli::{BuildArgs, CheckArgs};
use crate::config::DefaultsToml;
use crate::convert;
use crate::report::Report;

/// Run `check`: validate against `--kind`, or detect the kind.
pub fn run_check(args: &CheckArgs) -> Result<Report> {
    let _cmd = info_span!("check").entered();
    let value = match args.kind {
        Some(ref kind) => {
            let kind = convert::parse_kind(kind)?;
            Temporal::parse(kind, &args.text)
                .with_context(|| format!("not a valid {kind}: {:?}", args.text))?
        }
        None => convert::parse_value(&args.text)?,
    };
    debug!(kind = %value.kind(), "validated");
    report("check", &[&args.text], &value)
}

/// Run `build`: the field-record constructor of the given kind.
pub fn run_build(args: &BuildArgs, defaults: &DefaultsToml) -> Result<Report> {
    let _cmd = info_span!("build").entered();
    let kind = convert::parse_kind(&args.kind)?;
    let pairs = convert::parse_pairs(&args.fields)?;
    let overflow = args.overflow.as_deref().unwrap_or(&defaults.overflow);
    let overflow = convert::parse_overflow(overflow)?;
    let value = Temporal::from_pairs(kind, pairs, overflow)
        .with_context(|| format!("failed to build a {kind} from {:?}", args.fields))?;
    let inputs: Vec<&str> = std::iter::once(args.kind.as_str())
        .chain(args.fields.iter().map(String::as_str))
        .collect();
    report("build", &inputs, &value)
}

/// The value's text, kind and decoded fields.
fn report(command: &'static str, inputs: &[&str], value: &Temporal) -> Result<Report> {
    let kind = value.kind();
    let record = decode(kind, value.as_str())
        .with_context(|| format!("failed to decode {value} as {kind}"))?;
    let fields: Vec<(&str, i64)> = match record {
        Record::Fields(fields) => fields.iter().collect(),
        Record::Duration(fields) => fields.iter_nonzero().collect(),
    };
    Ok(Report::new(command, inputs, value)
        .with_kind(kind)
        .with_fields(fields))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_kind_and_lists_fields() {
        let args = CheckArgs {
            text: "2020-02-30".to_string(),
            kind: None,
        };
        let report = run_check(&args).unwrap();
        assert_eq!(report.kind.as_deref(), Some("Date"));
        assert_eq!(
            report.fields,
            vec![
                ("year".to_string(), 2020),
                ("month".to_string(), 2),
                ("day".to_string(), 30)
            ]
        );
    }

    #[test]
    fn explicit_kind_narrows_wider_text() {
        let args = CheckArgs {
            text: "2000-12-03T12:30:15.123Z".to_string(),
            kind: Some("year-month".to_string()),
        };
        let report = run_check(&args).unwrap();
        assert_eq!(report.result, "2000-12");
    }

    #[test]
    fn non_canonical_text_fails() {
        let args = CheckArgs {
            text: "P0D".to_string(),
            kind: Some("duration".to_string()),
        };
        assert!(run_check(&args).is_err());
    }

    #[test]
    fn build_carries_months() {
        let args = BuildArgs {
            kind: "date".to_string(),
            fields: vec!["year=2020".into(), "month=13".into(), "day=31".into()],
            overflow: None,
        };
        let report = run_build(&args, &DefaultsToml::default()).unwrap();
        assert_eq!(report.result, "2021-01-31");
        assert_eq!(report.inputs[0], "date");
    }

    #[test]
    fn build_duration_mixed_sign_fails() {
        let args = BuildArgs {
            kind: "duration".to_string(),
            fields: vec!["days=2".into(), "hours=-1".into()],
            overflow: None,
        };
        assert!(run_build(&args, &DefaultsToml::default()).is_err());
    }
}
