use notus_calendar::{
    month_of_index, CalendarError, CalibrationPeriod, DEFAULT_CALIBRATION_END_YEAR,
    DEFAULT_CALIBRATION_START_YEAR, MONTHS_PER_YEAR,
};

#[test]
fn default_reference_period() {
    let p = CalibrationPeriod::new(DEFAULT_CALIBRATION_START_YEAR, DEFAULT_CALIBRATION_END_YEAR)
        .unwrap();
    assert_eq!(p.n_years(), 30);
    assert_eq!(p.n_months(), 360);
}

#[test]
fn month_range_matches_month_of_index() {
    // Every index range returned must start on a January.
    let p = CalibrationPeriod::new(1991, 1995).unwrap();
    let r = p.month_range(1985, 20 * MONTHS_PER_YEAR).unwrap();
    assert_eq!(month_of_index(r.start), 1);
    assert_eq!(r.len(), 5 * MONTHS_PER_YEAR);
}

#[test]
fn rejects_calibration_before_data() {
    let p = CalibrationPeriod::new(1970, 1999).unwrap();
    assert!(matches!(
        p.month_range(1980, 600),
        Err(CalendarError::StartsBeforeData { .. })
    ));
}

#[test]
fn rejects_span_longer_than_data() {
    let p = CalibrationPeriod::new(1980, 2019).unwrap();
    assert!(matches!(
        p.month_range(1980, 120),
        Err(CalendarError::ExceedsData { .. })
    ));
}

#[test]
fn errors_are_descriptive() {
    let p = CalibrationPeriod::new(1970, 1999).unwrap();
    let e = p.month_range(1980, 600).unwrap_err();
    assert_eq!(
        e.to_string(),
        "calibration start year 1970 precedes the data start year 1980"
    );
}
