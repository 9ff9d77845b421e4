//! The twelve Earthly Branches (地支).

use std::fmt::{Display, Formatter};

use crate::element::{Element, Polarity};

/// Earthly Branch, index 0 = 子 through 11 = 亥.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum EarthlyBranch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All twelve branches in cycle order.
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Zi,
    EarthlyBranch::Chou,
    EarthlyBranch::Yin,
    EarthlyBranch::Mao,
    EarthlyBranch::Chen,
    EarthlyBranch::Si,
    EarthlyBranch::Wu,
    EarthlyBranch::Wei,
    EarthlyBranch::Shen,
    EarthlyBranch::You,
    EarthlyBranch::Xu,
    EarthlyBranch::Hai,
];

impl EarthlyBranch {
    /// 0-based index (子 = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch at `index`, or `None` when `index >= 12`.
    pub fn from_index(index: u8) -> Option<Self> {
        ALL_BRANCHES.get(usize::from(index)).copied()
    }

    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Zi => "zǐ",
            Self::Chou => "chǒu",
            Self::Yin => "yín",
            Self::Mao => "mǎo",
            Self::Chen => "chén",
            Self::Si => "sì",
            Self::Wu => "wǔ",
            Self::Wei => "wèi",
            Self::Shen => "shēn",
            Self::You => "yǒu",
            Self::Xu => "xū",
            Self::Hai => "hài",
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Hai | Self::Zi => Element::Water,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => Element::Earth,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// Zodiac animal associated with the branch.
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Zi => "Rat",
            Self::Chou => "Ox",
            Self::Yin => "Tiger",
            Self::Mao => "Rabbit",
            Self::Chen => "Dragon",
            Self::Si => "Snake",
            Self::Wu => "Horse",
            Self::Wei => "Goat",
            Self::Shen => "Monkey",
            Self::You => "Rooster",
            Self::Xu => "Dog",
            Self::Hai => "Pig",
        }
    }
}

impl Display for EarthlyBranch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanzi())
    }
}

/// Branch for any integer offset, reduced with Euclidean modulo 12.
pub fn branch(offset: i64) -> EarthlyBranch {
    ALL_BRANCHES[offset.rem_euclid(12) as usize]
}
