//! Per-year solar term schedules and next/previous term lookup.
//!
//! Quarter points (春分, 夏至, 秋分, 冬至) come straight from the
//! ephemeris' equinox and solstice queries, each chained from the one
//! before. The 20 minor terms are longitude-crossing searches starting
//! at the preceding term.

use bazi_ephem::{Observer, SolarEphemeris};
use bazi_time::{CivilDate, CivilDateTime};
use tracing::{debug, instrument};

use crate::error::SearchError;
use crate::search_util::{find_crossing, find_longitude_crossing, normalize_to_pm180};
use crate::solar_term::{ALL_SOLAR_TERMS, SolarTerm};
use crate::term_types::{SearchDirection, SolarTermInstant, TermSchedule, TermSearchConfig};

/// Range scans resume this far past each found term; terms are ~15 days apart.
const RESUME_OFFSET_DAYS: f64 = 1.0;

/// The 24 terms from the first March equinox after `year`-01-01 00:00 on
/// the observer's civil clock.
#[instrument(level = "debug", skip(eph, observer, config))]
pub fn terms_for_year<E: SolarEphemeris + ?Sized>(
    eph: &E,
    observer: &Observer,
    year: i32,
    config: &TermSearchConfig,
) -> Result<TermSchedule, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    observer.validate()?;

    let new_year = CivilDateTime::midnight(CivilDate {
        year,
        month: 1,
        day: 1,
    });
    let start = eph.from_local_civil_time(observer, &new_year)?;

    let mut terms: Vec<SolarTermInstant> = Vec::with_capacity(TermSchedule::LEN);
    for term in ALL_SOLAR_TERMS {
        let index = term.index();
        let wrap = |source: SearchError| SearchError::Term {
            year,
            index,
            source: Box::new(source),
        };
        let prev = terms.last().map_or(start, |t| t.jd_tt);

        let found = match term {
            SolarTerm::Chunfen => eph.next_vernal_equinox(observer, prev).map_err(SearchError::from),
            SolarTerm::Xiazhi | SolarTerm::Dongzhi => {
                eph.next_solstice(observer, prev).map_err(SearchError::from)
            }
            SolarTerm::Qiufen => eph.next_equinox(observer, prev).map_err(SearchError::from),
            _ => find_longitude_crossing(eph, observer, term.longitude_deg(), prev, config),
        };
        let jd_tt = found.map_err(wrap)?;
        if !terms.is_empty() && jd_tt <= prev {
            return Err(SearchError::OutOfOrder { year, index });
        }

        let civil = eph
            .to_local_civil_time(observer, jd_tt)
            .map_err(|e| wrap(e.into()))?;
        debug!(year, term = term.pinyin(), jd_tt, %civil, "solar term");
        terms.push(SolarTermInstant { term, jd_tt, civil });
    }

    Ok(TermSchedule::new(year, *observer, terms))
}

/// Start instants this close to a term mark (under a second of solar
/// motion) count as sitting on that term.
const ON_MARK_DEG: f64 = 1e-5;

/// Longitude mark the Sun reaches next (forward) or last reached
/// (backward), with the instant to scan from.
fn adjacent_term<E: SolarEphemeris + ?Sized>(
    eph: &E,
    observer: &Observer,
    jd_tt: f64,
    direction: SearchDirection,
    config: &TermSearchConfig,
) -> Result<(SolarTerm, f64), SearchError> {
    let lon = eph.sun_ecliptic_longitude(observer, jd_tt)?;
    let nearest = SolarTerm::containing_longitude(lon + 7.5);
    let on_mark = normalize_to_pm180(lon - nearest.longitude_deg()).abs() <= ON_MARK_DEG;
    let current = SolarTerm::containing_longitude(lon);
    Ok(match (direction, on_mark) {
        (SearchDirection::Forward, true) => (nearest.next(), jd_tt),
        (SearchDirection::Forward, false) => (current.next(), jd_tt),
        // one step ahead so the scan brackets a root at `jd_tt` itself
        (SearchDirection::Backward, true) => (nearest, jd_tt + config.scan_step_days),
        (SearchDirection::Backward, false) => (current, jd_tt),
    })
}

fn find_term<E: SolarEphemeris + ?Sized>(
    eph: &E,
    observer: &Observer,
    jd_tt: f64,
    direction: SearchDirection,
    config: &TermSearchConfig,
) -> Result<SolarTermInstant, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    let (term, jd_from) = adjacent_term(eph, observer, jd_tt, direction, config)?;
    let jd = find_crossing(eph, observer, term.longitude_deg(), jd_from, direction, config)?;
    let civil = eph.to_local_civil_time(observer, jd)?;
    Ok(SolarTermInstant {
        term,
        jd_tt: jd,
        civil,
    })
}

/// The first solar term after `jd_tt` (TT).
pub fn next_solar_term<E: SolarEphemeris + ?Sized>(
    eph: &E,
    observer: &Observer,
    jd_tt: f64,
    config: &TermSearchConfig,
) -> Result<SolarTermInstant, SearchError> {
    find_term(eph, observer, jd_tt, SearchDirection::Forward, config)
}

/// The most recent solar term at or before `jd_tt` (TT).
pub fn prev_solar_term<E: SolarEphemeris + ?Sized>(
    eph: &E,
    observer: &Observer,
    jd_tt: f64,
    config: &TermSearchConfig,
) -> Result<SolarTermInstant, SearchError> {
    find_term(eph, observer, jd_tt, SearchDirection::Backward, config)
}

/// All solar terms in `[jd_start, jd_end]` (TT), in order.
pub fn search_solar_terms<E: SolarEphemeris + ?Sized>(
    eph: &E,
    observer: &Observer,
    jd_start: f64,
    jd_end: f64,
    config: &TermSearchConfig,
) -> Result<Vec<SolarTermInstant>, SearchError> {
    if !(jd_start.is_finite() && jd_end.is_finite()) || jd_end < jd_start {
        return Err(SearchError::InvalidConfig(
            "search range must be finite with jd_end >= jd_start",
        ));
    }
    let mut out = Vec::new();
    let mut cursor = jd_start;
    loop {
        let instant = next_solar_term(eph, observer, cursor, config)?;
        if instant.jd_tt > jd_end {
            break;
        }
        cursor = instant.jd_tt + RESUME_OFFSET_DAYS;
        out.push(instant);
    }
    Ok(out)
}
