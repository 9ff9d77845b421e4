//! The ten Heavenly Stems (天干).

use std::fmt::{Display, Formatter};

use crate::element::{Element, Polarity};

/// Heavenly Stem, index 0 = 甲 through 9 = 癸.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum HeavenlyStem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All ten stems in cycle order.
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Jia,
    HeavenlyStem::Yi,
    HeavenlyStem::Bing,
    HeavenlyStem::Ding,
    HeavenlyStem::Wu,
    HeavenlyStem::Ji,
    HeavenlyStem::Geng,
    HeavenlyStem::Xin,
    HeavenlyStem::Ren,
    HeavenlyStem::Gui,
];

impl HeavenlyStem {
    /// 0-based index (甲 = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem at `index`, or `None` when `index >= 10`.
    pub fn from_index(index: u8) -> Option<Self> {
        ALL_STEMS.get(usize::from(index)).copied()
    }

    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Jia => "jiǎ",
            Self::Yi => "yǐ",
            Self::Bing => "bǐng",
            Self::Ding => "dīng",
            Self::Wu => "wù",
            Self::Ji => "jǐ",
            Self::Geng => "gēng",
            Self::Xin => "xīn",
            Self::Ren => "rén",
            Self::Gui => "guǐ",
        }
    }

    /// Stems pair off by phase: 甲乙 Wood, 丙丁 Fire, 戊己 Earth, 庚辛 Metal, 壬癸 Water.
    pub const fn element(self) -> Element {
        match self.index() / 2 {
            0 => Element::Wood,
            1 => Element::Fire,
            2 => Element::Earth,
            3 => Element::Metal,
            _ => Element::Water,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }
}

impl Display for HeavenlyStem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanzi())
    }
}

/// Stem for any integer offset, reduced with Euclidean modulo 10.
pub fn stem(offset: i64) -> HeavenlyStem {
    ALL_STEMS[offset.rem_euclid(10) as usize]
}
