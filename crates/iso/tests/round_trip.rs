use almanac_iso::{IsoError, Kind, Record, decode, encode, is_valid};

const VALID: &[(Kind, &str)] = &[
    (Kind::Instant, "2000-12-03T00:00:00.000Z"),
    (Kind::Instant, "0000-01-01T23:59:59.999Z"),
    (Kind::Date, "2020-02-29"),
    (Kind::Date, "2021-02-30"),
    (Kind::Time, "00"),
    (Kind::Time, "12:23"),
    (Kind::Time, "12:23:00"),
    (Kind::Time, "24:00:00.000"),
    (Kind::DateTime, "1999-12-31T23"),
    (Kind::DateTime, "1999-12-31T23:59:59.999"),
    (Kind::YearMonth, "9999-12"),
    (Kind::MonthDay, "--02-29"),
    (Kind::Duration, "PT0S"),
    (Kind::Duration, "-P2DT12H"),
    (Kind::Duration, "P1Y2M3W4DT5H6M7.89S"),
    (Kind::Duration, "PT0.001S"),
    (Kind::Duration, "PT8784H"),
];

#[test]
fn canonical_text_round_trips() {
    for &(kind, text) in VALID {
        let record = decode(kind, text).unwrap_or_else(|e| panic!("{text}: {e}"));
        assert_eq!(encode(kind, &record).unwrap(), text, "{kind}");
        assert!(is_valid(kind, text), "{kind} {text}");
    }
}

#[test]
fn semantically_equal_spellings_are_invalid() {
    let cases = [
        (Kind::Duration, "P0D"),
        (Kind::Duration, "PT1.10S"),
        (Kind::Duration, "P0Y1D"),
        (Kind::Duration, "+P1D"),
        (Kind::Time, "12:23:00.5"),
        (Kind::Instant, "2000-12-03T00:00Z"),
    ];
    for (kind, text) in cases {
        assert!(!is_valid(kind, text), "{kind} {text:?} should be invalid");
    }
}

#[test]
fn grammar_violations() {
    let cases = [
        (Kind::Date, "2020-1-01"),
        (Kind::Date, "20200101"),
        (Kind::Date, "+02020-01-01"),
        (Kind::Time, "25:00"),
        (Kind::Time, "12:60"),
        (Kind::DateTime, "2020-01-01 12:00"),
        (Kind::YearMonth, "2020-00"),
        (Kind::MonthDay, "--00-10"),
        (Kind::Duration, "P1DT"),
        (Kind::Duration, "PT1HT1M"),
        (Kind::Duration, "P1.5D"),
    ];
    for (kind, text) in cases {
        assert!(
            matches!(decode(kind, text), Err(IsoError::InvalidText { .. })),
            "{kind} {text:?}"
        );
    }
}

#[test]
fn mixed_sign_duration_text() {
    assert!(matches!(
        decode(Kind::Duration, "P1DT-1H"),
        Err(IsoError::MixedSign { .. })
    ));
}

#[test]
fn decoded_records_have_the_kind_shape() {
    let Record::Fields(fields) = decode(Kind::MonthDay, "--12-25").unwrap() else {
        panic!("month-day decodes to fields");
    };
    assert_eq!((fields.year, fields.month, fields.day), (None, Some(12), Some(25)));
    let Record::Duration(d) = decode(Kind::Duration, "PT8784H").unwrap() else {
        panic!("duration decodes to components");
    };
    assert_eq!(d.hours, 8784);
}
