//! The computed chart.

use std::fmt::{Display, Formatter};

use bazi_cycle::{ALL_ELEMENTS, Element, GanZhi, GrowthPhase};

use crate::auxiliary::AuxiliaryReadings;
use crate::birth::Sex;
use crate::pillar_types::{DayPillar, HourPillar, MonthPillar, YearPillar};

/// Four pillars plus the pass-through auxiliary readings.
#[derive(Debug, Clone, PartialEq)]
pub struct BaziChart {
    pub year: YearPillar,
    pub month: MonthPillar,
    pub day: DayPillar,
    pub hour: HourPillar,
    pub sex: Sex,
    pub readings: AuxiliaryReadings,
}

impl BaziChart {
    /// Year, month, day, hour.
    pub fn pillars(&self) -> [GanZhi; 4] {
        [
            self.year.ganzhi,
            self.month.ganzhi,
            self.day.ganzhi,
            self.hour.ganzhi,
        ]
    }

    /// The four pillars as text, e.g. `己卯 壬申 甲子 乙亥`.
    pub fn eight_characters(&self) -> String {
        self.pillars()
            .iter()
            .map(GanZhi::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Day stem's growth phase on each pillar's branch.
    pub fn growth_phases(&self) -> [GrowthPhase; 4] {
        let day_stem = self.day.ganzhi.stem();
        self.pillars().map(|p| GrowthPhase::of(day_stem, p.branch()))
    }

    /// How many of the eight characters belong to each phase.
    pub fn element_counts(&self) -> [(Element, usize); 5] {
        let mut counts = ALL_ELEMENTS.map(|e| (e, 0));
        for p in self.pillars() {
            for e in [p.stem().element(), p.branch().element()] {
                if let Some(slot) = counts.iter_mut().find(|(k, _)| *k == e) {
                    slot.1 += 1;
                }
            }
        }
        counts
    }
}

impl Display for BaziChart {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "年柱 {}  (立春 {})", self.year.ganzhi, self.year.start_of_spring.civil)?;
        writeln!(
            f,
            "月柱 {}  ({} {} .. {} {})",
            self.month.ganzhi,
            self.month.start.term,
            self.month.start.civil,
            self.month.end.term,
            self.month.end.civil
        )?;
        writeln!(f, "日柱 {}  (day {})", self.day.ganzhi, self.day.days_from_epoch)?;
        write!(
            f,
            "时柱 {}  (true solar {}, EoT {:+.2} min, longitude {:+.2} min)",
            self.hour.ganzhi,
            self.hour.true_solar_time,
            self.hour.equation_of_time_minutes,
            self.hour.longitude_correction_minutes
        )
    }
}
