use almanac_calendar::{CalendarError, CivilDate, CivilDateTime, MILLIS_PER_DAY, days_in_year};

#[test]
fn epoch_days_roundtrip_every_day_of_2000_to_2003() {
    let start = CivilDate::new(2000, 1, 1).unwrap();
    let mut date = start;
    for offset in 0..1461 {
        assert_eq!(
            date.to_epoch_days(),
            start.to_epoch_days() + offset,
            "epoch day mismatch for {date:?}"
        );
        let back = CivilDate::from_epoch_days(date.to_epoch_days()).unwrap();
        assert_eq!(back, date, "roundtrip failed for offset {offset}");
        date = date.add_days(1).unwrap();
    }
    assert_eq!(date, CivilDate::new(2004, 1, 1).unwrap());
}

#[test]
fn year_lengths_match_epoch_distance() {
    for year in 1890..2110 {
        let jan1 = CivilDate::new(year, 1, 1).unwrap();
        let next = CivilDate::new(year + 1, 1, 1).unwrap();
        assert_eq!(
            next.to_epoch_days() - jan1.to_epoch_days(),
            i64::from(days_in_year(year)),
            "year {year} has the wrong length"
        );
    }
}

#[test]
fn ordinal_day_of_last_day() {
    assert_eq!(CivilDate::new(2020, 12, 31).unwrap().day_of_year(), 366);
    assert_eq!(CivilDate::new(2021, 12, 31).unwrap().day_of_year(), 365);
}

#[test]
fn year_zero_and_negative_years() {
    let dec31 = CivilDate::new(-1, 12, 31).unwrap();
    assert_eq!(dec31.add_days(1).unwrap(), CivilDate::new(0, 1, 1).unwrap());
    // Year 0 is a leap year.
    assert_eq!(CivilDate::new(0, 2, 29).unwrap().days_in_month(), 29);
}

#[test]
fn epoch_millis_of_known_instant() {
    let date = CivilDate::new(2000, 1, 1).unwrap();
    let dt = CivilDateTime::new(date, 12, 30, 15, 123).unwrap();
    assert_eq!(
        dt.to_epoch_millis(),
        i128::from(10_957 * MILLIS_PER_DAY + 45_015_123)
    );
}

#[test]
fn out_of_range_epoch_days() {
    assert!(matches!(
        CivilDate::from_epoch_days(i64::MAX),
        Err(CalendarError::YearOutOfRange { .. })
    ));
}
