//! Shared cache of per-year term schedules.
//!
//! A schedule depends only on the year and the observer, so it is
//! computed once and handed out as `Arc<TermSchedule>`. Eviction is FIFO
//! once `capacity` schedules are held.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use bazi_ephem::{Observer, SolarEphemeris};
use tracing::trace;

use crate::error::SearchError;
use crate::schedule::terms_for_year;
use crate::term_types::{TermSchedule, TermSearchConfig};

/// `(year, lat bits, lon bits, alt bits, clock offset bits)`.
type CacheKey = (i32, u64, u64, u64, u64);

fn cache_key(year: i32, observer: &Observer) -> CacheKey {
    let loc = &observer.location;
    (
        year,
        loc.latitude_deg.to_bits(),
        loc.longitude_deg.to_bits(),
        loc.altitude_m.to_bits(),
        observer.clock.offset_minutes().to_bits(),
    )
}

#[derive(Default)]
struct Entries {
    map: HashMap<CacheKey, Arc<TermSchedule>>,
    order: VecDeque<CacheKey>,
}

/// Thread-safe, bounded store of [`TermSchedule`]s.
pub struct TermScheduleCache {
    capacity: usize,
    entries: Mutex<Entries>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl TermScheduleCache {
    /// A cache holding at most `capacity` schedules (at least one).
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: Mutex::new(Entries::default()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Entries> {
        // Entries are only ever inserted whole, so a poisoned map is still consistent.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// The schedule for `year` at `observer`, computing it on a miss.
    ///
    /// The lock is not held while computing; if two threads miss on the
    /// same key, the first insert wins and both get that schedule.
    pub fn get_or_compute<E: SolarEphemeris + ?Sized>(
        &self,
        eph: &E,
        observer: &Observer,
        year: i32,
        config: &TermSearchConfig,
    ) -> Result<Arc<TermSchedule>, SearchError> {
        let key = cache_key(year, observer);
        if let Some(hit) = self.lock().map.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(year, "term schedule cache hit");
            return Ok(Arc::clone(hit));
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        trace!(year, "term schedule cache miss");
        let computed = Arc::new(terms_for_year(eph, observer, year, config)?);

        let mut entries = self.lock();
        if let Some(existing) = entries.map.get(&key) {
            return Ok(Arc::clone(existing));
        }
        while entries.order.len() >= self.capacity {
            match entries.order.pop_front() {
                Some(old) => {
                    entries.map.remove(&old);
                }
                None => break,
            }
        }
        entries.order.push_back(key);
        entries.map.insert(key, Arc::clone(&computed));
        Ok(computed)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.lock().map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn clear(&self) {
        let mut entries = self.lock();
        entries.map.clear();
        entries.order.clear();
    }
}

impl std::fmt::Debug for TermScheduleCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TermScheduleCache")
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .field("hits", &self.hits())
            .field("misses", &self.misses())
            .finish()
    }
}
