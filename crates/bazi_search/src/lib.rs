//! Solar term search and scheduling.
//!
//! This crate provides:
//! - The 24 solar terms (节气) at 15° steps of apparent solar longitude
//! - A bounded scan + bisection search for any longitude crossing
//! - Per-year term schedules anchored on the adapter's equinox/solstice
//!   queries, with next/previous/range lookups
//! - A thread-safe cache of schedules keyed on year and observer

pub mod cache;
pub mod error;
pub mod schedule;
pub(crate) mod search_util;
pub mod solar_term;
pub mod term_types;

pub use cache::TermScheduleCache;
pub use error::SearchError;
pub use schedule::{next_solar_term, prev_solar_term, search_solar_terms, terms_for_year};
pub use search_util::{find_longitude_crossing, normalize_to_pm180};
pub use solar_term::{ALL_SOLAR_TERMS, SolarTerm};
pub use term_types::{SearchDirection, SolarTermInstant, TermSchedule, TermSearchConfig};
