//! Sexagenary (GanZhi) indexing.
//!
//! This crate provides:
//! - The 10 Heavenly Stems and 12 Earthly Branches with their symbols,
//!   Five Phases element and yin/yang polarity
//! - [`GanZhi`], a parity-checked Stem-Branch pair of the 60-term cycle
//! - Conversions between cycle positions and pairs
//! - The twelve growth phases (长生 … 养)
//!
//! Everything here is pure integer arithmetic with no state.

pub mod branch;
pub mod element;
pub mod error;
pub mod ganzhi;
pub mod growth;
pub mod stem;

pub use branch::{ALL_BRANCHES, EarthlyBranch, branch};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use error::CycleError;
pub use ganzhi::{ALL_GANZHI, GanZhi, cycle_position_of_pair, pair_of_cycle_position};
pub use growth::{ALL_GROWTH_PHASES, GrowthPhase};
pub use stem::{ALL_STEMS, HeavenlyStem, stem};
