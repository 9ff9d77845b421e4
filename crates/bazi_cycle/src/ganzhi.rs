//! Stem-Branch pairs and the 60-term cycle.
//!
//! A pair (s, b) belongs to the cycle only when `s ≡ b (mod 2)`. Its
//! position p satisfies `p ≡ s (mod 10)` and `p ≡ b (mod 12)`; solving the
//! congruences gives `p = (6s − 5b) mod 60`.

use std::fmt::{Display, Formatter};

use crate::branch::{ALL_BRANCHES, EarthlyBranch};
use crate::error::CycleError;
use crate::stem::{ALL_STEMS, HeavenlyStem};

/// A valid member of the sexagenary cycle.
///
/// Fields are private: every value in existence has matching parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GanZhi {
    stem: HeavenlyStem,
    branch: EarthlyBranch,
}

const fn build_cycle() -> [GanZhi; 60] {
    let mut out = [GanZhi {
        stem: HeavenlyStem::Jia,
        branch: EarthlyBranch::Zi,
    }; 60];
    let mut i = 0;
    while i < 60 {
        out[i] = GanZhi {
            stem: ALL_STEMS[i % 10],
            branch: ALL_BRANCHES[i % 12],
        };
        i += 1;
    }
    out
}

/// All 60 pairs in cycle order (index 0 = 甲子, 59 = 癸亥).
pub const ALL_GANZHI: [GanZhi; 60] = build_cycle();

impl GanZhi {
    /// Pair a stem with a branch; fails when their parities differ.
    pub fn new(stem: HeavenlyStem, branch: EarthlyBranch) -> Result<Self, CycleError> {
        if stem.index() % 2 != branch.index() % 2 {
            return Err(CycleError::ParityMismatch {
                stem: stem.index(),
                branch: branch.index(),
            });
        }
        Ok(Self { stem, branch })
    }

    /// Pair at any integer offset from 甲子, reduced modulo 60.
    pub fn from_offset(offset: i64) -> Self {
        ALL_GANZHI[offset.rem_euclid(60) as usize]
    }

    pub const fn stem(self) -> HeavenlyStem {
        self.stem
    }

    pub const fn branch(self) -> EarthlyBranch {
        self.branch
    }

    /// Position in the cycle, 0..60.
    pub fn position(self) -> u8 {
        position_of(self.stem.index(), self.branch.index())
    }

    pub fn next(self) -> Self {
        self.offset_by(1)
    }

    pub fn offset_by(self, steps: i64) -> Self {
        Self::from_offset(i64::from(self.position()) + steps)
    }

    pub fn pinyin(self) -> String {
        format!("{} {}", self.stem.pinyin(), self.branch.pinyin())
    }
}

impl Display for GanZhi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

fn position_of(stem: u8, branch: u8) -> u8 {
    (6 * i16::from(stem) - 5 * i16::from(branch)).rem_euclid(60) as u8
}

/// The pair at a cycle position.
pub fn pair_of_cycle_position(position: u8) -> Result<GanZhi, CycleError> {
    ALL_GANZHI
        .get(usize::from(position))
        .copied()
        .ok_or(CycleError::PositionOutOfRange(position))
}

/// Cycle position of a (stem index, branch index) pair.
pub fn cycle_position_of_pair(stem_index: u8, branch_index: u8) -> Result<u8, CycleError> {
    if stem_index >= 10 || branch_index >= 12 {
        return Err(CycleError::IndexOutOfRange {
            stem: stem_index,
            branch: branch_index,
        });
    }
    if stem_index % 2 != branch_index % 2 {
        return Err(CycleError::ParityMismatch {
            stem: stem_index,
            branch: branch_index,
        });
    }
    Ok(position_of(stem_index, branch_index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_all_positions() {
        for p in 0..60u8 {
            let gz = pair_of_cycle_position(p).unwrap();
            assert_eq!(
                cycle_position_of_pair(gz.stem().index(), gz.branch().index()),
                Ok(p)
            );
            assert_eq!(gz.position(), p);
        }
    }

    #[test]
    fn every_generated_pair_has_matching_parity() {
        for gz in ALL_GANZHI {
            assert_eq!(gz.stem().index() % 2, gz.branch().index() % 2);
            assert!(GanZhi::new(gz.stem(), gz.branch()).is_ok());
        }
    }

    #[test]
    fn mismatched_parity_rejected() {
        for s in ALL_STEMS {
            for b in ALL_BRANCHES {
                if s.index() % 2 != b.index() % 2 {
                    assert!(GanZhi::new(s, b).is_err());
                    assert_eq!(
                        cycle_position_of_pair(s.index(), b.index()),
                        Err(CycleError::ParityMismatch {
                            stem: s.index(),
                            branch: b.index()
                        })
                    );
                }
            }
        }
    }

    #[test]
    fn out_of_range_inputs() {
        assert_eq!(
            pair_of_cycle_position(60),
            Err(CycleError::PositionOutOfRange(60))
        );
        assert!(cycle_position_of_pair(10, 0).is_err());
        assert!(cycle_position_of_pair(0, 12).is_err());
    }

    #[test]
    fn sixty_distinct_pairs() {
        let mut seen = std::collections::HashSet::new();
        for gz in ALL_GANZHI {
            assert!(seen.insert(gz));
        }
        assert_eq!(seen.len(), 60);
    }

    #[test]
    fn offsets_wrap_both_ways() {
        assert_eq!(GanZhi::from_offset(0).to_string(), "甲子");
        assert_eq!(GanZhi::from_offset(59).to_string(), "癸亥");
        assert_eq!(GanZhi::from_offset(-1).to_string(), "癸亥");
        assert_eq!(GanZhi::from_offset(60), GanZhi::from_offset(0));
        // 2024 is 甲辰
        assert_eq!(GanZhi::from_offset(2024 - 4).to_string(), "甲辰");
        assert_eq!(GanZhi::from_offset(59).next(), GanZhi::from_offset(0));
        assert_eq!(GanZhi::from_offset(3).offset_by(-5).position(), 58);
    }

    #[test]
    fn pinyin_joins_parts() {
        assert_eq!(GanZhi::from_offset(0).pinyin(), "jiǎ zǐ");
    }
}
