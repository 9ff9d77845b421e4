//! The twelve growth phases (十二长生).
//!
//! Each stem is "born" (长生) at a fixed branch and moves through the
//! phases one branch at a time: forward for yang stems, backward for yin.

use std::fmt::{Display, Formatter};

use crate::branch::EarthlyBranch;
use crate::element::Polarity;
use crate::stem::HeavenlyStem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrowthPhase {
    Birth,
    Bathing,
    Capping,
    Office,
    Peak,
    Decline,
    Sickness,
    Death,
    Tomb,
    Extinction,
    Conception,
    Nurture,
}

pub const ALL_GROWTH_PHASES: [GrowthPhase; 12] = [
    GrowthPhase::Birth,
    GrowthPhase::Bathing,
    GrowthPhase::Capping,
    GrowthPhase::Office,
    GrowthPhase::Peak,
    GrowthPhase::Decline,
    GrowthPhase::Sickness,
    GrowthPhase::Death,
    GrowthPhase::Tomb,
    GrowthPhase::Extinction,
    GrowthPhase::Conception,
    GrowthPhase::Nurture,
];

impl GrowthPhase {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Birth => "长生",
            Self::Bathing => "沐浴",
            Self::Capping => "冠带",
            Self::Office => "临官",
            Self::Peak => "帝旺",
            Self::Decline => "衰",
            Self::Sickness => "病",
            Self::Death => "死",
            Self::Tomb => "墓",
            Self::Extinction => "绝",
            Self::Conception => "胎",
            Self::Nurture => "养",
        }
    }

    /// Phase of `stem` when it sits on `branch`.
    pub fn of(stem: HeavenlyStem, branch: EarthlyBranch) -> Self {
        let birth = birth_branch(stem);
        let b = i16::from(branch.index());
        let steps = match stem.polarity() {
            Polarity::Yang => b - birth,
            Polarity::Yin => birth - b,
        };
        ALL_GROWTH_PHASES[steps.rem_euclid(12) as usize]
    }
}

/// Branch index where each stem's 长生 falls.
fn birth_branch(stem: HeavenlyStem) -> i16 {
    match stem {
        HeavenlyStem::Jia => 11,
        HeavenlyStem::Yi => 6,
        HeavenlyStem::Bing | HeavenlyStem::Wu => 2,
        HeavenlyStem::Ding | HeavenlyStem::Ji => 9,
        HeavenlyStem::Geng => 5,
        HeavenlyStem::Xin => 0,
        HeavenlyStem::Ren => 8,
        HeavenlyStem::Gui => 3,
    }
}

impl Display for GrowthPhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanzi())
    }
}
