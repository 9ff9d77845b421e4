//! Pillar values with the instants that produced them.

use bazi_cycle::GanZhi;
use bazi_search::SolarTermInstant;
use bazi_time::CivilDateTime;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearPillar {
    pub ganzhi: GanZhi,
    /// Civil year whose 立春 most recently preceded the birth.
    pub cyclic_year: i32,
    /// The 立春 opening the birth's civil year.
    pub start_of_spring: SolarTermInstant,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthPillar {
    pub ganzhi: GanZhi,
    /// `i` such that the birth lies in `[term(i-1), term(i))` of the birth
    /// year's schedule; `i <= 0` reaches into the previous year's.
    pub interval_index: i32,
    /// Year of the schedule the interval closes: the birth year, or the
    /// year before for births ahead of the birth year's 春分.
    pub schedule_year: i32,
    pub start: SolarTermInstant,
    pub end: SolarTermInstant,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayPillar {
    pub ganzhi: GanZhi,
    /// Whole days from 2000-01-01 to the birth date.
    pub days_from_epoch: i64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourPillar {
    pub ganzhi: GanZhi,
    /// Apparent minus mean solar time, minutes.
    pub equation_of_time_minutes: f64,
    /// Four minutes per degree between the birth longitude and the
    /// clock's meridian.
    pub longitude_correction_minutes: f64,
    /// Civil time plus both corrections.
    pub true_solar_time: CivilDateTime,
}

impl HourPillar {
    /// Two-hour period index, 0..12.
    pub fn double_hour(&self) -> u8 {
        self.ganzhi.branch().index()
    }
}
