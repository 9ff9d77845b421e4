//! Pillar derivation.

use std::sync::Arc;

use bazi_cycle::{GanZhi, branch, stem};
use bazi_ephem::{Observer, SolarEphemeris};
use bazi_search::{TermSchedule, TermScheduleCache, normalize_to_pm180};
use bazi_time::{CivilDate, days_between};
use tracing::{debug, instrument};

use crate::auxiliary::AuxiliaryTables;
use crate::birth::BirthContext;
use crate::chart::BaziChart;
use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::pillar_types::{DayPillar, HourPillar, MonthPillar, YearPillar};

/// Day 0 of the day count, itself a 甲子 day.
const DAY_EPOCH: CivilDate = CivilDate {
    year: 2000,
    month: 1,
    day: 1,
};

/// Cycle position 0 (甲子) falls on year 4.
const YEAR_EPOCH: i64 = 4;

/// Minutes of time per degree of hour angle.
const MINUTES_PER_DEG: f64 = 4.0;

/// Derives the four pillars for birth contexts.
///
/// Owns its ephemeris and a schedule cache, and is `Send + Sync` whenever
/// the ephemeris is, so one computer can serve many threads.
pub struct PillarComputer<E: SolarEphemeris> {
    ephemeris: E,
    config: ChartConfig,
    cache: TermScheduleCache,
}

impl<E: SolarEphemeris> PillarComputer<E> {
    pub fn new(ephemeris: E, config: ChartConfig) -> Result<Self, ChartError> {
        config.validate()?;
        Ok(Self {
            ephemeris,
            config,
            cache: TermScheduleCache::new(config.cache_capacity),
        })
    }

    pub fn ephemeris(&self) -> &E {
        &self.ephemeris
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn cache(&self) -> &TermScheduleCache {
        &self.cache
    }

    /// The observer a birth is seen from: its location and clock policy.
    pub fn observer_for(&self, birth: &BirthContext) -> Observer {
        Observer::new(
            birth.location,
            self.config.clock.clock_for(birth.location.longitude_deg),
        )
    }

    /// Term schedule starting at the March equinox of `year`.
    pub fn schedule(&self, observer: &Observer, year: i32) -> Result<Arc<TermSchedule>, ChartError> {
        Ok(self
            .cache
            .get_or_compute(&self.ephemeris, observer, year, &self.config.search)?)
    }

    fn birth_instant(&self, birth: &BirthContext, observer: &Observer) -> Result<f64, ChartError> {
        birth.validate()?;
        Ok(self.ephemeris.from_local_civil_time(observer, &birth.civil)?)
    }

    pub fn year_pillar(&self, birth: &BirthContext) -> Result<YearPillar, ChartError> {
        let observer = self.observer_for(birth);
        let jd_tt = self.birth_instant(birth, &observer)?;
        let year = birth.civil.year;

        let previous = self.schedule(&observer, year - 1)?;
        let start_of_spring = *previous.start_of_spring().ok_or(ChartError::Unscheduled {
            year: year - 1,
            jd_tt,
        })?;
        let cyclic_year = if jd_tt < start_of_spring.jd_tt {
            year - 1
        } else {
            year
        };

        Ok(YearPillar {
            ganzhi: GanZhi::from_offset(i64::from(cyclic_year) - YEAR_EPOCH),
            cyclic_year,
            start_of_spring,
        })
    }

    pub fn month_pillar(&self, birth: &BirthContext) -> Result<MonthPillar, ChartError> {
        let observer = self.observer_for(birth);
        let jd_tt = self.birth_instant(birth, &observer)?;
        let year = birth.civil.year;
        let unscheduled = ChartError::Unscheduled { year, jd_tt };

        let current = self.schedule(&observer, year)?;
        let first = *current.first().ok_or_else(|| unscheduled.clone())?;

        // Interval k of a schedule is [term(k-1), term(k)); k = 24 is the
        // 惊蛰..春分 interval closed by the next schedule's first term.
        let (schedule_year, k, start, end) = if jd_tt >= first.jd_tt {
            let k = current
                .interval_containing(jd_tt)
                .ok_or_else(|| unscheduled.clone())?;
            (year, k, current.terms()[k - 1], current.terms()[k])
        } else {
            let previous = self.schedule(&observer, year - 1)?;
            match previous.interval_containing(jd_tt) {
                Some(k) => (year - 1, k, previous.terms()[k - 1], previous.terms()[k]),
                None => match previous.last() {
                    Some(last) if last.jd_tt <= jd_tt => {
                        (year - 1, TermSchedule::LEN, *last, first)
                    }
                    _ => return Err(unscheduled),
                },
            }
        };
        let interval_index = if schedule_year == year {
            k as i32
        } else {
            k as i32 - TermSchedule::LEN as i32
        };

        let (y, k) = (i64::from(schedule_year), k as i64);
        let ganzhi = GanZhi::new(stem(2 * y + k + 3), branch(k + 1))?;
        debug!(year, schedule_year, interval_index, %ganzhi, start = %start.civil, end = %end.civil, "month pillar");

        Ok(MonthPillar {
            ganzhi,
            interval_index,
            schedule_year,
            start,
            end,
        })
    }

    pub fn day_pillar(&self, birth: &BirthContext) -> Result<DayPillar, ChartError> {
        birth.validate()?;
        let days_from_epoch = days_between(DAY_EPOCH, birth.civil.date());
        Ok(DayPillar {
            ganzhi: GanZhi::from_offset(days_from_epoch),
            days_from_epoch,
        })
    }

    pub fn hour_pillar(&self, birth: &BirthContext) -> Result<HourPillar, ChartError> {
        let observer = self.observer_for(birth);
        let jd_tt = self.birth_instant(birth, &observer)?;
        let day = self.day_pillar(birth)?;

        let apparent_ra_deg = self.ephemeris.sun_right_ascension(&observer, jd_tt)? * 15.0;
        let mean_ra_deg = self.ephemeris.mean_sun_right_ascension(&observer, jd_tt)?;
        let equation_of_time_minutes = MINUTES_PER_DEG * normalize_to_pm180(mean_ra_deg - apparent_ra_deg);
        let longitude_correction_minutes =
            MINUTES_PER_DEG * (birth.location.longitude_deg - observer.clock.meridian_deg());

        let true_solar_time = birth
            .civil
            .add_minutes(equation_of_time_minutes + longitude_correction_minutes);
        let double_hour = i64::from(true_solar_time.hour / 2);
        let day_stem = i64::from(day.ganzhi.stem().index());
        let ganzhi = GanZhi::new(stem(day_stem * 2 + double_hour), branch(double_hour))?;
        debug!(
            equation_of_time_minutes,
            longitude_correction_minutes,
            true_solar = %true_solar_time,
            %ganzhi,
            "hour pillar"
        );

        Ok(HourPillar {
            ganzhi,
            equation_of_time_minutes,
            longitude_correction_minutes,
            true_solar_time,
        })
    }

    /// All four pillars, with empty auxiliary readings.
    #[instrument(level = "debug", skip(self, birth), fields(civil = %birth.civil))]
    pub fn compute(&self, birth: &BirthContext) -> Result<BaziChart, ChartError> {
        let chart = BaziChart {
            year: self.year_pillar(birth)?,
            month: self.month_pillar(birth)?,
            day: self.day_pillar(birth)?,
            hour: self.hour_pillar(birth)?,
            sex: birth.sex,
            readings: Default::default(),
        };
        debug!(chart = %chart.eight_characters(), "chart");
        Ok(chart)
    }

    /// All four pillars, with readings filled in by `tables`.
    pub fn compute_with_tables(
        &self,
        birth: &BirthContext,
        tables: &dyn AuxiliaryTables,
    ) -> Result<BaziChart, ChartError> {
        let mut chart = self.compute(birth)?;
        chart.readings = tables.readings(&chart, birth.sex);
        Ok(chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazi_ephem::{AnalyticEphemeris, GeoLocation};
    use bazi_time::CivilDateTime;

    use crate::birth::Sex;
    use crate::config::ClockPolicy;

    fn computer() -> PillarComputer<AnalyticEphemeris> {
        PillarComputer::new(AnalyticEphemeris::new(), ChartConfig::default()).unwrap()
    }

    fn birth(y: i32, mo: u32, d: u32, h: u32, mi: u32, lat: f64, lon: f64) -> BirthContext {
        BirthContext::new(
            CivilDateTime::new(y, mo, d, h, mi, 0.0).unwrap(),
            GeoLocation::at_sea_level(lat, lon),
            Sex::Male,
        )
        .unwrap()
    }

    #[test]
    fn day_epoch_and_period() {
        let pc = computer();
        let epoch = pc.day_pillar(&birth(2000, 1, 1, 12, 0, 0.0, 0.0)).unwrap();
        assert_eq!(epoch.days_from_epoch, 0);
        assert_eq!((epoch.ganzhi.stem().index(), epoch.ganzhi.branch().index()), (0, 0));

        let later = pc.day_pillar(&birth(2000, 3, 1, 0, 0, 0.0, 0.0)).unwrap();
        assert_eq!(later.days_from_epoch, 60);
        assert_eq!(later.ganzhi, epoch.ganzhi);

        let before = pc.day_pillar(&birth(1999, 12, 31, 23, 59, 0.0, 0.0)).unwrap();
        assert_eq!(before.days_from_epoch, -1);
        assert_eq!(before.ganzhi.to_string(), "癸亥");
    }

    #[test]
    fn jia_year_interval_one_is_bing_yin() {
        let pc = computer();
        let m = pc.month_pillar(&birth(2024, 3, 25, 12, 0, 39.9, 116.4)).unwrap();
        assert_eq!(m.interval_index, 1);
        assert_eq!(m.start.term, bazi_search::SolarTerm::Chunfen);
        assert_eq!(m.end.term, bazi_search::SolarTerm::Qingming);
        assert_eq!(m.ganzhi.to_string(), "丙寅");
    }

    #[test]
    fn early_january_reads_previous_schedule() {
        let pc = computer();
        let m = pc.month_pillar(&birth(2000, 1, 1, 0, 0, 0.0, 0.0)).unwrap();
        assert_eq!(m.interval_index, -5);
        assert_eq!(m.schedule_year, 1999);
        assert_eq!(m.start.term, bazi_search::SolarTerm::Dongzhi);
        assert_eq!(m.end.term, bazi_search::SolarTerm::Xiaohan);
        // interval 19 of the 1999 schedule: stem(2·1999 + 22), branch(20)
        assert_eq!(m.ganzhi.to_string(), "甲申");
    }

    #[test]
    fn month_holds_across_new_year() {
        let pc = computer();
        let dec = pc.month_pillar(&birth(1999, 12, 31, 23, 59, 0.0, 0.0)).unwrap();
        let jan = pc.month_pillar(&birth(2000, 1, 1, 0, 0, 0.0, 0.0)).unwrap();
        assert_eq!(dec.ganzhi, jan.ganzhi);
        assert_eq!((dec.start, dec.end), (jan.start, jan.end));
        assert_eq!(dec.schedule_year, jan.schedule_year);
        assert_eq!(dec.interval_index, 19);
        assert_eq!(jan.interval_index, -5);
    }

    #[test]
    fn jingzhe_to_chunfen_closes_previous_schedule() {
        let pc = computer();
        // 2024-03-12 lies between 惊蛰 (03-05) and 春分 (03-20)
        let m = pc.month_pillar(&birth(2024, 3, 12, 12, 0, 39.9, 116.4)).unwrap();
        assert_eq!(m.interval_index, 0);
        assert_eq!(m.schedule_year, 2023);
        assert_eq!(m.start.term, bazi_search::SolarTerm::Jingzhe);
        assert_eq!(m.end.term, bazi_search::SolarTerm::Chunfen);
        // stem(2·2023 + 27) = 癸, branch(25) = 丑
        assert_eq!(m.ganzhi.to_string(), "癸丑");
    }

    #[test]
    fn lmt_has_no_longitude_correction() {
        let config = ChartConfig {
            clock: ClockPolicy::LocalMeanTime,
            ..ChartConfig::default()
        };
        let pc = PillarComputer::new(AnalyticEphemeris::new(), config).unwrap();
        let h = pc.hour_pillar(&birth(2010, 7, 1, 9, 0, 30.0, 103.7)).unwrap();
        assert!(h.longitude_correction_minutes.abs() < 1e-9);
        assert!(h.equation_of_time_minutes.abs() < 17.0);
    }

    #[test]
    fn zone_clock_longitude_correction() {
        let pc = computer();
        // 121.47°E keeps UTC+8 (meridian 120°): +5.88 min
        let h = pc.hour_pillar(&birth(2010, 7, 1, 9, 0, 31.23, 121.47)).unwrap();
        assert!((h.longitude_correction_minutes - 5.88).abs() < 1e-9);
    }

    #[test]
    fn invalid_config_fails_construction() {
        let config = ChartConfig {
            cache_capacity: 0,
            ..ChartConfig::default()
        };
        assert!(PillarComputer::new(AnalyticEphemeris::new(), config).is_err());
    }

    #[test]
    fn computer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PillarComputer<AnalyticEphemeris>>();
    }
}
