//! End-to-end chart tests.
//!
//! Boundary tests find the relevant solar term first, then place births a
//! minute or two either side of it, so they hold regardless of the term's
//! exact second.

use bazi_chart::{
    AuxiliaryTables, BirthContext, ChartConfig, ClockPolicy, PillarComputer, Sex, StaticTables,
};
use bazi_cycle::GanZhi;
use bazi_ephem::{AnalyticEphemeris, GeoLocation};
use bazi_search::SolarTerm;
use bazi_time::CivilDateTime;

fn computer() -> PillarComputer<AnalyticEphemeris> {
    PillarComputer::new(AnalyticEphemeris::new(), ChartConfig::default()).unwrap()
}

fn birth_at(civil: CivilDateTime, lat: f64, lon: f64) -> BirthContext {
    BirthContext::new(civil, GeoLocation::at_sea_level(lat, lon), Sex::Female).unwrap()
}

fn indices(gz: GanZhi) -> (u8, u8) {
    (gz.stem().index(), gz.branch().index())
}

#[test]
fn epoch_midnight_at_null_island() {
    let pc = computer();
    let birth = BirthContext::parse("2000-01-01 00:00", 0.0, 0.0, Sex::Male).unwrap();
    let chart = pc.compute(&birth).unwrap();

    assert_eq!(indices(chart.day.ganzhi), (0, 0));
    assert_eq!(chart.day.days_from_epoch, 0);

    // Before 立春 2000, so still the 1999 (己卯) year
    assert_eq!(chart.year.cyclic_year, 1999);
    assert_eq!(chart.year.ganzhi.to_string(), "己卯");
    let spring = chart.year.start_of_spring.civil;
    assert_eq!((spring.year, spring.month, spring.day), (2000, 2, 4));

    // Between 冬至 1999 and 小寒 2000: interval 19 of the 1999 schedule
    assert_eq!(chart.month.interval_index, -5);
    assert_eq!(chart.month.schedule_year, 1999);
    assert_eq!(chart.month.start.term, SolarTerm::Dongzhi);
    assert_eq!(chart.month.end.term, SolarTerm::Xiaohan);
    assert_eq!(indices(chart.month.ganzhi), (0, 8));

    // Early January the sundial runs ~3.2 min slow, pulling true solar
    // time back into the 亥 double hour of Dec 31.
    assert!((chart.hour.equation_of_time_minutes + 3.2).abs() < 0.4);
    assert_eq!(chart.hour.longitude_correction_minutes, 0.0);
    assert_eq!(chart.hour.true_solar_time.day, 31);
    assert_eq!(indices(chart.hour.ganzhi), (1, 11));

    assert_eq!(chart.eight_characters(), "己卯 甲申 甲子 乙亥");
    assert!(chart.readings.is_empty());
}

#[test]
fn year_switches_at_lichun_2024() {
    let pc = computer();
    let birth = BirthContext::parse("2024-02-04 12:00", 39.9, 116.4, Sex::Male).unwrap();
    let observer = pc.observer_for(&birth);
    let spring = *pc.schedule(&observer, 2023).unwrap().start_of_spring().unwrap();
    // 2024-02-04 16:27 China Standard Time
    assert_eq!((spring.civil.month, spring.civil.day, spring.civil.hour), (2, 4, 16));

    let before = pc
        .year_pillar(&birth_at(spring.civil.add_minutes(-2.0), 39.9, 116.4))
        .unwrap();
    let after = pc
        .year_pillar(&birth_at(spring.civil.add_minutes(2.0), 39.9, 116.4))
        .unwrap();
    assert_eq!(before.ganzhi.to_string(), "癸卯");
    assert_eq!(after.ganzhi.to_string(), "甲辰");
    assert_eq!(before.ganzhi.next(), after.ganzhi);
}

#[test]
fn year_is_stable_between_springs() {
    let pc = computer();
    let expected = GanZhi::from_offset(2024 - 4);
    for (mo, d) in [(2, 5), (3, 1), (6, 15), (9, 30), (12, 31)] {
        let civil = CivilDateTime::new(2024, mo, d, 12, 0, 0.0).unwrap();
        let y = pc.year_pillar(&birth_at(civil, 39.9, 116.4)).unwrap();
        assert_eq!(y.ganzhi, expected, "{civil}");
    }
    let civil = CivilDateTime::new(2025, 1, 20, 12, 0, 0.0).unwrap();
    assert_eq!(pc.year_pillar(&birth_at(civil, 39.9, 116.4)).unwrap().ganzhi, expected);
}

#[test]
fn month_straddles_qingming_2024() {
    let pc = computer();
    let birth = BirthContext::parse("2024-04-04 00:00", 39.9, 116.4, Sex::Male).unwrap();
    let observer = pc.observer_for(&birth);
    let qingming = *pc
        .schedule(&observer, 2024)
        .unwrap()
        .term(SolarTerm::Qingming)
        .unwrap();

    let before = pc
        .month_pillar(&birth_at(qingming.civil.add_minutes(-1.0), 39.9, 116.4))
        .unwrap();
    let after = pc
        .month_pillar(&birth_at(qingming.civil.add_minutes(1.0), 39.9, 116.4))
        .unwrap();
    assert_eq!(before.interval_index + 1, after.interval_index);
    assert_eq!(
        (before.ganzhi.branch().index() + 1) % 12,
        after.ganzhi.branch().index()
    );
    assert_eq!(before.ganzhi.next(), after.ganzhi);
    assert_eq!(after.start, qingming);
}

#[test]
fn month_is_constant_within_an_interval() {
    let pc = computer();
    let birth = BirthContext::parse("2012-07-01 00:00", 22.3, 114.2, Sex::Male).unwrap();
    let observer = pc.observer_for(&birth);
    let schedule = pc.schedule(&observer, 2012).unwrap();
    let (a, b) = (
        schedule.term(SolarTerm::Xiaoshu).unwrap().civil,
        schedule.term(SolarTerm::Dashu).unwrap().civil,
    );
    let span = (b.to_jd() - a.to_jd()) * 1440.0;

    let first = pc.month_pillar(&birth_at(a.add_minutes(1.0), 22.3, 114.2)).unwrap();
    for k in 1..10 {
        let civil = a.add_minutes(span * f64::from(k) / 10.0);
        let m = pc.month_pillar(&birth_at(civil, 22.3, 114.2)).unwrap();
        assert_eq!(m.ganzhi, first.ganzhi, "{civil}");
    }
    let next = pc.month_pillar(&birth_at(b.add_minutes(1.0), 22.3, 114.2)).unwrap();
    assert_eq!(next.ganzhi, first.ganzhi.next());
}

#[test]
fn month_is_constant_across_new_year() {
    let pc = computer();
    let birth = BirthContext::parse("2000-01-01 00:00", 0.0, 0.0, Sex::Male).unwrap();
    let observer = pc.observer_for(&birth);
    let schedule = pc.schedule(&observer, 1999).unwrap();
    let (a, b) = (
        schedule.term(SolarTerm::Dongzhi).unwrap().civil,
        schedule.term(SolarTerm::Xiaohan).unwrap().civil,
    );
    assert_eq!((a.year, b.year), (1999, 2000));
    let span = (b.to_jd() - a.to_jd()) * 1440.0;

    let first = pc.month_pillar(&birth_at(a.add_minutes(1.0), 0.0, 0.0)).unwrap();
    for k in 1..20 {
        let civil = a.add_minutes(span * f64::from(k) / 20.0);
        let m = pc.month_pillar(&birth_at(civil, 0.0, 0.0)).unwrap();
        assert_eq!(m.ganzhi, first.ganzhi, "{civil}");
        assert_eq!((m.start, m.end), (first.start, first.end), "{civil}");
    }
    for civil in ["1999-12-31 23:59", "2000-01-01 00:00", "2000-01-01 00:01"] {
        let m = pc
            .month_pillar(&birth_at(civil.parse().unwrap(), 0.0, 0.0))
            .unwrap();
        assert_eq!(m.ganzhi, first.ganzhi, "{civil}");
    }
    let next = pc.month_pillar(&birth_at(b.add_minutes(1.0), 0.0, 0.0)).unwrap();
    assert_eq!(next.ganzhi, first.ganzhi.next());
}

#[test]
fn month_steps_at_chunfen() {
    let pc = computer();
    let birth = BirthContext::parse("2024-03-10 00:00", 39.9, 116.4, Sex::Male).unwrap();
    let observer = pc.observer_for(&birth);
    let jingzhe = *pc
        .schedule(&observer, 2023)
        .unwrap()
        .term(SolarTerm::Jingzhe)
        .unwrap();
    let chunfen = *pc
        .schedule(&observer, 2024)
        .unwrap()
        .term(SolarTerm::Chunfen)
        .unwrap();

    // 惊蛰..春分 keeps one pillar throughout
    let span = (chunfen.jd_tt - jingzhe.jd_tt) * 1440.0;
    let inside = pc
        .month_pillar(&birth_at(jingzhe.civil.add_minutes(1.0), 39.9, 116.4))
        .unwrap();
    for k in 1..10 {
        let civil = jingzhe.civil.add_minutes(span * f64::from(k) / 10.0);
        assert_eq!(
            pc.month_pillar(&birth_at(civil, 39.9, 116.4)).unwrap().ganzhi,
            inside.ganzhi,
            "{civil}"
        );
    }

    let before = pc
        .month_pillar(&birth_at(chunfen.civil.add_minutes(-1.0), 39.9, 116.4))
        .unwrap();
    let after = pc
        .month_pillar(&birth_at(chunfen.civil.add_minutes(1.0), 39.9, 116.4))
        .unwrap();
    assert_eq!(before.ganzhi, inside.ganzhi);
    assert_eq!((before.interval_index, after.interval_index), (0, 1));
    assert_eq!((before.schedule_year, after.schedule_year), (2023, 2024));
    assert_eq!(before.end, chunfen);
    assert_eq!(after.start, chunfen);
    assert_eq!(
        (before.ganzhi.branch().index() + 1) % 12,
        after.ganzhi.branch().index()
    );
    assert_eq!(before.ganzhi.to_string(), "癸丑");
    assert_eq!(after.ganzhi.to_string(), "丙寅");
}

#[test]
fn hour_branches_cover_the_day() {
    let config = ChartConfig {
        clock: ClockPolicy::LocalMeanTime,
        ..ChartConfig::default()
    };
    let pc = PillarComputer::new(AnalyticEphemeris::new(), config).unwrap();
    let mut branches = Vec::new();
    for h in 0..24 {
        // Mid-February the equation of time is about -14 min.
        let civil = CivilDateTime::new(2021, 2, 11, h, 30, 0.0).unwrap();
        let hour = pc.hour_pillar(&birth_at(civil, 34.0, 108.9)).unwrap();
        assert_eq!(hour.true_solar_time.hour, h);
        branches.push(hour.ganzhi.branch().index());
    }
    assert!(branches.windows(2).all(|w| w[0] <= w[1]));
    let mut distinct = branches.clone();
    distinct.dedup();
    assert_eq!(distinct.len(), 12);
    assert_eq!(distinct, (0..12).collect::<Vec<u8>>());
}

#[test]
fn hour_stem_follows_day_stem() {
    let pc = computer();
    // 2000-01-02 is a 乙丑 day; its 午 hour is 壬午.
    let civil = CivilDateTime::new(2000, 1, 2, 12, 30, 0.0).unwrap();
    let birth = birth_at(civil, 0.0, 0.0);
    assert_eq!(pc.day_pillar(&birth).unwrap().ganzhi.to_string(), "乙丑");
    assert_eq!(pc.hour_pillar(&birth).unwrap().ganzhi.to_string(), "壬午");
}

#[test]
fn static_tables_fill_readings() {
    let pc = computer();
    let birth = BirthContext::parse("1988-08-08 08:08", 25.0, 121.5, Sex::Female).unwrap();
    let chart = pc.compute_with_tables(&birth, &StaticTables).unwrap();
    assert_eq!(chart.readings.najia.as_deref(), Some("海中金"));
    assert_eq!(chart.readings.five_element_states.len(), 5);
    assert_eq!(chart.readings.luck_periods, ["10岁: 丙子", "20岁: 丁丑"]);
    assert_eq!(chart.readings, StaticTables.readings(&chart, Sex::Male));
    assert_eq!(chart.sex, Sex::Female);
}

#[test]
fn chart_summary_helpers() {
    let pc = computer();
    let birth = BirthContext::parse("1975-11-30 21:15", 48.9, 2.35, Sex::Male).unwrap();
    let chart = pc.compute(&birth).unwrap();
    let total: usize = chart.element_counts().iter().map(|(_, n)| n).sum();
    assert_eq!(total, 8);
    assert_eq!(chart.pillars().len(), 4);
    assert_eq!(chart.eight_characters().split(' ').count(), 4);
    let text = chart.to_string();
    assert!(text.starts_with("年柱"));
    assert_eq!(text.lines().count(), 4);
}

#[test]
fn repeated_charts_reuse_schedules() {
    let pc = computer();
    let birth = BirthContext::parse("2015-06-01 10:00", 1.35, 103.8, Sex::Male).unwrap();
    pc.compute(&birth).unwrap();
    let misses = pc.cache().misses();
    pc.compute(&birth).unwrap();
    assert_eq!(pc.cache().misses(), misses);
    assert!(pc.cache().hits() > 0);
}
