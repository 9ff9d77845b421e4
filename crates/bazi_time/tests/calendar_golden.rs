//! Golden values for the proleptic day count and civil clocks.

use bazi_time::{
    CivilClock, CivilDate, CivilDateTime, J2000_JD, calendar_to_jd, days_between,
    days_from_civil, jd_to_calendar, tt_to_ut_jd, ut_to_tt_jd,
};

#[test]
fn day_epoch_offsets() {
    let epoch = CivilDate::new(2000, 1, 1).unwrap();
    let cases = [
        ((2000, 1, 1), 0),
        ((2000, 3, 1), 60),
        ((2001, 1, 1), 366),
        ((1999, 1, 1), -365),
        ((1900, 1, 1), -36_524),
        ((1582, 10, 15), -152_384),
    ];
    for ((y, m, d), expected) in cases {
        let date = CivilDate::new(y, m, d).unwrap();
        assert_eq!(days_between(epoch, date), expected, "{date}");
    }
}

#[test]
fn day_number_matches_julian_date() {
    for &(y, m, d) in &[(1957, 10, 4), (2000, 1, 1), (1600, 12, 31), (333, 1, 27)] {
        let jd = calendar_to_jd(y, m, f64::from(d));
        let days = days_from_civil(y, m, d);
        assert_eq!(jd - 2_440_587.5, days as f64);
    }
}

#[test]
fn jd_calendar_inverse() {
    let mut jd = 2_300_000.25;
    while jd < 2_500_000.0 {
        let (y, m, d) = jd_to_calendar(jd);
        let back = calendar_to_jd(y, m, d);
        assert!((back - jd).abs() < 1e-6, "jd {jd} -> {y}-{m}-{d}");
        jd += 123.456;
    }
}

#[test]
fn j2000_through_clock_and_delta_t() {
    // J2000.0 = 2000-01-01 12:00 TT, about 64 s ahead of UT.
    let jd_ut = tt_to_ut_jd(J2000_JD);
    let civil = CivilClock::UT.jd_ut_to_civil(jd_ut);
    assert_eq!(civil.date(), CivilDate::new(2000, 1, 1).unwrap());
    assert_eq!((civil.hour, civil.minute), (11, 58));
    assert!((ut_to_tt_jd(jd_ut) - J2000_JD).abs() < 1e-8);
}

#[test]
fn zone_clock_from_longitude() {
    let clock = CivilClock::zone_for_longitude(139.69);
    let civil = CivilDateTime::new(2024, 6, 21, 9, 0, 0.0).unwrap();
    let ut = CivilClock::UT.jd_ut_to_civil(clock.civil_to_jd_ut(&civil));
    assert_eq!(ut, CivilDateTime::new(2024, 6, 21, 0, 0, 0.0).unwrap());
}
