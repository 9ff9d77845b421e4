//! Four-pillar chart computation.
//!
//! [`PillarComputer`] turns a [`BirthContext`] into a [`BaziChart`]:
//! - Year pillar, switching at 立春 (start of spring)
//! - Month pillar, one interval per solar term
//! - Day pillar, counted from 2000-01-01 (甲子)
//! - Hour pillar, from true solar time at the birth location
//!
//! Auxiliary readings (element states, luck periods, stars, 纳音) are not
//! computed here; an [`AuxiliaryTables`] implementation fills them from
//! static data.

pub mod auxiliary;
pub mod birth;
pub mod chart;
pub mod computer;
pub mod config;
pub mod error;
pub mod pillar_types;

pub use auxiliary::{AuxiliaryReadings, AuxiliaryTables, StaticTables};
pub use birth::{BirthContext, Sex};
pub use chart::BaziChart;
pub use computer::PillarComputer;
pub use config::{ChartConfig, ClockPolicy};
pub use error::ChartError;
pub use pillar_types::{DayPillar, HourPillar, MonthPillar, YearPillar};
