use almanac_arith::{
    AddOptions, ArithError, DifferenceOptions, ErrorKind, Overflow, RelativeTo, RoundOptions,
    TotalOptions, Unit, add, difference, round, total,
};
use almanac_iso::{Duration, Kind, Temporal};

fn value(text: &str) -> Temporal {
    Temporal::detect(text).unwrap()
}

fn duration(text: &str) -> Duration {
    Duration::parse(text).unwrap()
}

#[test]
fn instant_plus_clock_duration() {
    let sum = add(
        &value("2000-12-03T00:00:00.000Z"),
        &duration("PT12H30M15.123S"),
        &AddOptions::new(),
    )
    .unwrap();
    assert_eq!(sum.kind(), Kind::Instant);
    assert_eq!(sum.as_str(), "2000-12-03T12:30:15.123Z");
}

#[test]
fn month_end_constrain_and_reject() {
    let jan31 = value("2020-01-31");
    let month = duration("P1M");
    assert_eq!(
        add(&jan31, &month, &AddOptions::new()).unwrap().as_str(),
        "2020-02-29"
    );
    let err = add(&jan31, &month, &AddOptions::new().with_overflow(Overflow::Reject)).unwrap_err();
    assert!(matches!(err, ArithError::Calendar(_)));
    assert_eq!(err.kind(), ErrorKind::Range);
}

#[test]
fn instant_difference_defaults_to_hours() {
    let d = difference(
        &value("2000-01-01T12:30:15.123Z"),
        &value("2000-01-01T14:45:15.123Z"),
        &DifferenceOptions::new(),
    )
    .unwrap();
    assert_eq!(d.as_str(), "PT2H15M");
}

#[test]
fn time_rounded_to_quarter_hour() {
    let options = RoundOptions::new(Unit::Minute).with_increment(15);
    let rounded = round(&value("12:23"), &options).unwrap();
    assert_eq!(rounded.as_str(), "12:30:00.000");
}

#[test]
fn leap_year_of_hours() {
    let anchor: RelativeTo = "2020-01-01".parse().unwrap();
    let options = TotalOptions::new(Unit::Year).with_relative_to(anchor);
    assert_eq!(total(&duration("PT8784H"), &options).unwrap(), 1.0);
}

#[test]
fn duration_from_signed_pairs() {
    let d = Duration::from_pairs([("days", -2.0), ("hours", -12.0)]).unwrap();
    assert_eq!(d.as_str(), "-P2DT12H");
    let err = Duration::from_pairs([("days", 2.0), ("hours", -1.0)]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MixedSign);
}

#[test]
fn missing_anchor_is_distinguishable() {
    let err = total(&duration("P1M"), &TotalOptions::new(Unit::Day)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingAnchor);
    let err = round(&value("P40D"), &RoundOptions::new(Unit::Month)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingAnchor);
}
