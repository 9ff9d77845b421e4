//! Optional TOML configuration file.
//!
//! ```toml
//! cache_capacity = 32
//!
//! [clock]
//! policy = "fixed"        # "zone", "lmt" or "fixed"
//! offset_minutes = 480
//!
//! [search]
//! scan_step_days = 1.0
//! tolerance_deg = 0.01
//! ```

use std::path::Path;

use anyhow::{Context, Result, bail};
use bazi_chart::{ChartConfig, ClockPolicy};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub cache_capacity: Option<usize>,
    pub clock: Option<ClockSection>,
    pub search: SearchSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClockSection {
    pub policy: String,
    pub offset_minutes: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchSection {
    pub scan_step_days: Option<f64>,
    pub max_window_days: Option<f64>,
    pub max_iterations: Option<u32>,
    pub convergence_days: Option<f64>,
    pub tolerance_deg: Option<f64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Overlay the file's settings on `base`.
    pub fn apply(&self, mut base: ChartConfig) -> Result<ChartConfig> {
        if let Some(capacity) = self.cache_capacity {
            base.cache_capacity = capacity;
        }
        if let Some(clock) = &self.clock {
            base.clock = clock.policy()?;
        }
        let s = &self.search;
        let search = &mut base.search;
        if let Some(v) = s.scan_step_days {
            search.scan_step_days = v;
        }
        if let Some(v) = s.max_window_days {
            search.max_window_days = v;
        }
        if let Some(v) = s.max_iterations {
            search.max_iterations = v;
        }
        if let Some(v) = s.convergence_days {
            search.convergence_days = v;
        }
        if let Some(v) = s.tolerance_deg {
            search.tolerance_deg = v;
        }
        Ok(base)
    }
}

impl ClockSection {
    fn policy(&self) -> Result<ClockPolicy> {
        match (self.policy.as_str(), self.offset_minutes) {
            ("zone", _) => Ok(ClockPolicy::ZoneFromLongitude),
            ("lmt", _) => Ok(ClockPolicy::LocalMeanTime),
            ("fixed", Some(m)) => Ok(ClockPolicy::FixedOffsetMinutes(m)),
            ("fixed", None) => bail!("clock policy \"fixed\" needs offset_minutes"),
            (other, _) => bail!("unknown clock policy {other:?}"),
        }
    }
}

/// `zone`, `lmt`, or an offset from UT in minutes.
pub fn parse_clock(s: &str) -> Result<ClockPolicy, String> {
    match s {
        "zone" => Ok(ClockPolicy::ZoneFromLongitude),
        "lmt" => Ok(ClockPolicy::LocalMeanTime),
        other => other
            .parse::<i32>()
            .map(ClockPolicy::FixedOffsetMinutes)
            .map_err(|_| format!("expected zone, lmt or minutes, got {other:?}")),
    }
}
