//! Auxiliary readings filled from static tables.
//!
//! The element-state table, luck periods, auxiliary stars and the 纳音
//! label are interpretive data looked up after the pillars are known.
//! They never feed back into pillar computation.

use crate::birth::Sex;
use crate::chart::BaziChart;

/// Pass-through slots populated by an [`AuxiliaryTables`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuxiliaryReadings {
    /// Element → state (旺, 相, 休, 囚, 死).
    pub five_element_states: Vec<(String, String)>,
    pub luck_periods: Vec<String>,
    pub hidden_stars: Vec<String>,
    pub najia: Option<String>,
}

impl AuxiliaryReadings {
    pub fn is_empty(&self) -> bool {
        self.five_element_states.is_empty()
            && self.luck_periods.is_empty()
            && self.hidden_stars.is_empty()
            && self.najia.is_none()
    }
}

/// Read-only data service consulted once a chart's pillars are known.
pub trait AuxiliaryTables: Send + Sync {
    fn readings(&self, chart: &BaziChart, sex: Sex) -> AuxiliaryReadings;
}

/// Fixed placeholder tables: the same readings for every chart.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticTables;

impl AuxiliaryTables for StaticTables {
    fn readings(&self, _chart: &BaziChart, _sex: Sex) -> AuxiliaryReadings {
        let states = [("金", "旺"), ("木", "相"), ("水", "休"), ("火", "囚"), ("土", "死")];
        AuxiliaryReadings {
            five_element_states: states
                .iter()
                .map(|(e, s)| ((*e).to_string(), (*s).to_string()))
                .collect(),
            luck_periods: vec!["10岁: 丙子".to_string(), "20岁: 丁丑".to_string()],
            hidden_stars: vec!["天乙贵人".to_string()],
            najia: Some("海中金".to_string()),
        }
    }
}
