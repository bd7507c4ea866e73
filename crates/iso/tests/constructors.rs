use almanac_iso::{
    Date, DateTime, Duration, ErrorKind, Fields, Instant, IsoError, Kind, MonthDay, Overflow,
    Temporal, Time, YearMonth,
};

#[test]
fn duration_from_negative_components() {
    let d = Duration::from_pairs([("days", -2.0), ("hours", -12.0)]).unwrap();
    assert_eq!(d.as_str(), "-P2DT12H");
}

#[test]
fn duration_with_mixed_signs_fails() {
    let err = Duration::from_pairs([("days", 2.0), ("hours", -1.0)]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MixedSign);
    assert!(err.to_string().contains("days=2, hours=-1"), "{err}");
}

#[test]
fn canonical_text_is_returned_unchanged() {
    for text in ["2020-01-31", "0001-01-01"] {
        assert_eq!(Date::parse(text).unwrap().as_str(), text);
    }
    assert_eq!(Time::parse("12:23").unwrap().as_str(), "12:23");
    assert_eq!(
        DateTime::parse("2000-01-01T12:30:15.123").unwrap().as_str(),
        "2000-01-01T12:30:15.123"
    );
}

#[test]
fn wider_text_narrows() {
    assert_eq!(
        DateTime::parse("2000-12-03T12:30:15.123Z").unwrap().as_str(),
        "2000-12-03T12:30:15.123"
    );
    assert_eq!(YearMonth::parse("2000-12-03").unwrap().as_str(), "2000-12");
    assert_eq!(MonthDay::parse("2000-12-03").unwrap().as_str(), "--12-03");
    assert_eq!(Time::parse("2000-12-03T12:30:15.123Z").unwrap().as_str(), "12:30:15.123");
}

#[test]
fn invalid_text_names_the_value() {
    let err = Date::parse("2020-13-01").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert!(err.to_string().contains("2020-13-01"));
}

#[test]
fn field_record_requires_keys() {
    let fields = Fields::from_pairs([("year", 2020.0), ("month", 1.0), ("colour", 7.0)]).unwrap();
    assert_eq!(
        Date::from_fields(&fields, Overflow::Constrain).unwrap_err(),
        IsoError::MissingField {
            kind: Kind::Date,
            field: "day"
        }
    );
    let err = Date::from_pairs([("year", 2020.0), ("month", f64::NAN), ("day", 1.0)], Overflow::Constrain)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn overflow_policy_applies_to_fields() {
    let pairs = [("year", 2021.0), ("month", 2.0), ("day", 29.0)];
    assert_eq!(
        Date::from_pairs(pairs, Overflow::Constrain).unwrap().as_str(),
        "2021-02-28"
    );
    let err = Date::from_pairs(pairs, Overflow::Reject).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert!(err.to_string().contains("2021-02-29"), "{err}");
}

#[test]
fn positional_parts() {
    assert_eq!(Date::from_parts(&[2020, 1, 31]).unwrap().as_str(), "2020-01-31");
    assert_eq!(
        Instant::from_parts(&[2000, 12, 3]).unwrap().as_str(),
        "2000-12-03T00:00:00.000Z"
    );
    assert_eq!(
        DateTime::from_parts(&[2000, 1, 1, 12, 30]).unwrap().as_str(),
        "2000-01-01T12:30"
    );
    assert_eq!(YearMonth::new(2020, 13).unwrap().as_str(), "2021-01");
    assert!(matches!(
        Date::from_parts(&[2020, 1, 1, 0]),
        Err(IsoError::TooManyParts { .. })
    ));
}

#[test]
fn clock_carry() {
    let t = Time::from_parts(&[23, 59, 59, 1_000]).unwrap();
    assert_eq!(t.as_str(), "00:00:00.000");
    let dt = DateTime::from_parts(&[2020, 2, 28, 23, 59, 59, 1_000]).unwrap();
    assert_eq!(dt.as_str(), "2020-02-29T00:00:00.000");
    let dt = DateTime::from_parts(&[2020, 1, 1, 0, -1]).unwrap();
    assert_eq!(dt.as_str(), "2019-12-31T23:59");
}

#[test]
fn now_for_every_non_duration_kind() {
    for kind in Kind::ALL {
        match Temporal::now(kind) {
            Ok(value) => assert_eq!(value.kind(), kind),
            Err(err) => {
                assert_eq!(kind, Kind::Duration);
                assert_eq!(err.kind(), ErrorKind::Unsupported);
            }
        }
    }
}
