//! Types for solar term search and scheduling.

use bazi_ephem::Observer;
use bazi_time::CivilDateTime;

use crate::solar_term::SolarTerm;

/// Direction of a time-domain search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchDirection {
    Forward,
    Backward,
}

/// Configuration for longitude-crossing search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TermSearchConfig {
    /// Coarse scan step size in days (default 1.0).
    pub scan_step_days: f64,
    /// Longest span scanned before giving up, in days (default 400).
    pub max_window_days: f64,
    /// Maximum bisection iterations (default 60).
    pub max_iterations: u32,
    /// Bisection stops once the bracket is narrower than this, in days
    /// (default 1e-7, ~9 ms).
    pub convergence_days: f64,
    /// Largest acceptable longitude residual at the result, degrees
    /// (default 0.01).
    pub tolerance_deg: f64,
}

impl Default for TermSearchConfig {
    fn default() -> Self {
        Self {
            scan_step_days: 1.0,
            max_window_days: 400.0,
            max_iterations: 60,
            convergence_days: 1e-7,
            tolerance_deg: 0.01,
        }
    }
}

impl TermSearchConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.scan_step_days.is_finite() || self.scan_step_days <= 0.0 {
            return Err("scan_step_days must be positive");
        }
        // Must stay well inside the ±180° residual wrap.
        if self.scan_step_days > 30.0 {
            return Err("scan_step_days must be at most 30");
        }
        if !self.max_window_days.is_finite() || self.max_window_days < self.scan_step_days {
            return Err("max_window_days must be at least scan_step_days");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        if !self.convergence_days.is_finite() || self.convergence_days <= 0.0 {
            return Err("convergence_days must be positive");
        }
        if !self.tolerance_deg.is_finite() || self.tolerance_deg <= 0.0 {
            return Err("tolerance_deg must be positive");
        }
        Ok(())
    }
}

/// A solar term instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTermInstant {
    pub term: SolarTerm,
    /// Event time as Julian Date (TT).
    pub jd_tt: f64,
    /// Event time on the observer's civil clock.
    pub civil: CivilDateTime,
}

/// The 24 solar terms starting at a year's March equinox.
///
/// Term 0 (春分) falls in March of `year`; terms 19–23 (小寒 … 惊蛰)
/// fall in the following civil year. Instants are strictly increasing.
#[derive(Debug, Clone, PartialEq)]
pub struct TermSchedule {
    year: i32,
    observer: Observer,
    terms: Vec<SolarTermInstant>,
}

impl TermSchedule {
    /// Number of terms in a schedule.
    pub const LEN: usize = 24;

    /// Caller guarantees 24 increasing instants in term order.
    pub(crate) fn new(year: i32, observer: Observer, terms: Vec<SolarTermInstant>) -> Self {
        debug_assert_eq!(terms.len(), Self::LEN);
        Self {
            year,
            observer,
            terms,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }

    pub fn terms(&self) -> &[SolarTermInstant] {
        &self.terms
    }

    pub fn get(&self, index: usize) -> Option<&SolarTermInstant> {
        self.terms.get(index)
    }

    pub fn term(&self, term: SolarTerm) -> Option<&SolarTermInstant> {
        self.get(usize::from(term.index()))
    }

    /// 立春, which opens civil year `year + 1`.
    pub fn start_of_spring(&self) -> Option<&SolarTermInstant> {
        self.term(SolarTerm::Lichun)
    }

    pub fn first(&self) -> Option<&SolarTermInstant> {
        self.terms.first()
    }

    pub fn last(&self) -> Option<&SolarTermInstant> {
        self.terms.last()
    }

    /// Index `i` in 1..24 with `term[i-1] <= jd_tt < term[i]`.
    pub fn interval_containing(&self, jd_tt: f64) -> Option<usize> {
        let after = self.terms.partition_point(|t| t.jd_tt <= jd_tt);
        (1..Self::LEN).contains(&after).then_some(after)
    }
}
