//! The 24 solar terms (二十四节气).
//!
//! Indexed from the March equinox: term `i` is the instant the Sun's
//! apparent longitude reaches `15·i` degrees.

use std::fmt::{Display, Formatter};

/// One of the 24 solar terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum SolarTerm {
    Chunfen,
    Qingming,
    Guyu,
    Lixia,
    Xiaoman,
    Mangzhong,
    Xiazhi,
    Xiaoshu,
    Dashu,
    Liqiu,
    Chushu,
    Bailu,
    Qiufen,
    Hanlu,
    Shuangjiang,
    Lidong,
    Xiaoxue,
    Daxue,
    Dongzhi,
    Xiaohan,
    Dahan,
    Lichun,
    Yushui,
    Jingzhe,
}

/// All 24 terms in longitude order (index 0 = 春分 at 0°).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::Chunfen,
    SolarTerm::Qingming,
    SolarTerm::Guyu,
    SolarTerm::Lixia,
    SolarTerm::Xiaoman,
    SolarTerm::Mangzhong,
    SolarTerm::Xiazhi,
    SolarTerm::Xiaoshu,
    SolarTerm::Dashu,
    SolarTerm::Liqiu,
    SolarTerm::Chushu,
    SolarTerm::Bailu,
    SolarTerm::Qiufen,
    SolarTerm::Hanlu,
    SolarTerm::Shuangjiang,
    SolarTerm::Lidong,
    SolarTerm::Xiaoxue,
    SolarTerm::Daxue,
    SolarTerm::Dongzhi,
    SolarTerm::Xiaohan,
    SolarTerm::Dahan,
    SolarTerm::Lichun,
    SolarTerm::Yushui,
    SolarTerm::Jingzhe,
];

impl SolarTerm {
    /// 0-based index (春分 = 0 … 惊蛰 = 23).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Term at `index`, or `None` when `index >= 24`.
    pub fn from_index(index: u8) -> Option<Self> {
        ALL_SOLAR_TERMS.get(usize::from(index)).copied()
    }

    /// Apparent solar longitude marking this term, degrees.
    pub const fn longitude_deg(self) -> f64 {
        self.index() as f64 * 15.0
    }

    /// The term whose 15° segment contains `lon_deg`.
    pub fn containing_longitude(lon_deg: f64) -> Self {
        let i = (lon_deg.rem_euclid(360.0) / 15.0).floor() as usize;
        ALL_SOLAR_TERMS[i.min(23)]
    }

    /// Equinoxes and solstices (0°, 90°, 180°, 270°).
    pub const fn is_quarter_point(self) -> bool {
        self.index() % 6 == 0
    }

    /// Month-opening terms (节): 立春, 惊蛰, 清明, … 小寒.
    pub const fn is_jie(self) -> bool {
        self.index() % 2 == 1
    }

    pub const fn next(self) -> Self {
        ALL_SOLAR_TERMS[(self.index() as usize + 1) % 24]
    }

    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Chunfen => "春分",
            Self::Qingming => "清明",
            Self::Guyu => "谷雨",
            Self::Lixia => "立夏",
            Self::Xiaoman => "小满",
            Self::Mangzhong => "芒种",
            Self::Xiazhi => "夏至",
            Self::Xiaoshu => "小暑",
            Self::Dashu => "大暑",
            Self::Liqiu => "立秋",
            Self::Chushu => "处暑",
            Self::Bailu => "白露",
            Self::Qiufen => "秋分",
            Self::Hanlu => "寒露",
            Self::Shuangjiang => "霜降",
            Self::Lidong => "立冬",
            Self::Xiaoxue => "小雪",
            Self::Daxue => "大雪",
            Self::Dongzhi => "冬至",
            Self::Xiaohan => "小寒",
            Self::Dahan => "大寒",
            Self::Lichun => "立春",
            Self::Yushui => "雨水",
            Self::Jingzhe => "惊蛰",
        }
    }

    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Chunfen => "chūnfēn",
            Self::Qingming => "qīngmíng",
            Self::Guyu => "gǔyǔ",
            Self::Lixia => "lìxià",
            Self::Xiaoman => "xiǎomǎn",
            Self::Mangzhong => "mángzhòng",
            Self::Xiazhi => "xiàzhì",
            Self::Xiaoshu => "xiǎoshǔ",
            Self::Dashu => "dàshǔ",
            Self::Liqiu => "lìqiū",
            Self::Chushu => "chǔshǔ",
            Self::Bailu => "báilù",
            Self::Qiufen => "qiūfēn",
            Self::Hanlu => "hánlù",
            Self::Shuangjiang => "shuāngjiàng",
            Self::Lidong => "lìdōng",
            Self::Xiaoxue => "xiǎoxuě",
            Self::Daxue => "dàxuě",
            Self::Dongzhi => "dōngzhì",
            Self::Xiaohan => "xiǎohán",
            Self::Dahan => "dàhán",
            Self::Lichun => "lìchūn",
            Self::Yushui => "yǔshuǐ",
            Self::Jingzhe => "jīngzhé",
        }
    }

    pub const fn english(self) -> &'static str {
        match self {
            Self::Chunfen => "Spring Equinox",
            Self::Qingming => "Pure Brightness",
            Self::Guyu => "Grain Rain",
            Self::Lixia => "Start of Summer",
            Self::Xiaoman => "Grain Full",
            Self::Mangzhong => "Grain in Ear",
            Self::Xiazhi => "Summer Solstice",
            Self::Xiaoshu => "Minor Heat",
            Self::Dashu => "Major Heat",
            Self::Liqiu => "Start of Autumn",
            Self::Chushu => "End of Heat",
            Self::Bailu => "White Dew",
            Self::Qiufen => "Autumn Equinox",
            Self::Hanlu => "Cold Dew",
            Self::Shuangjiang => "Frost's Descent",
            Self::Lidong => "Start of Winter",
            Self::Xiaoxue => "Minor Snow",
            Self::Daxue => "Major Snow",
            Self::Dongzhi => "Winter Solstice",
            Self::Xiaohan => "Minor Cold",
            Self::Dahan => "Major Cold",
            Self::Lichun => "Start of Spring",
            Self::Yushui => "Rain Water",
            Self::Jingzhe => "Awakening of Insects",
        }
    }
}

impl Display for SolarTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanzi())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_and_longitudes() {
        for (i, t) in ALL_SOLAR_TERMS.iter().enumerate() {
            assert_eq!(t.index() as usize, i);
            assert_eq!(t.longitude_deg(), i as f64 * 15.0);
        }
        assert_eq!(SolarTerm::Lichun.longitude_deg(), 315.0);
        assert_eq!(SolarTerm::Jingzhe.longitude_deg(), 345.0);
        assert_eq!(SolarTerm::from_index(24), None);
    }

    #[test]
    fn quarter_points() {
        let q: Vec<SolarTerm> = ALL_SOLAR_TERMS
            .into_iter()
            .filter(|t| t.is_quarter_point())
            .collect();
        assert_eq!(
            q,
            [
                SolarTerm::Chunfen,
                SolarTerm::Xiazhi,
                SolarTerm::Qiufen,
                SolarTerm::Dongzhi
            ]
        );
    }

    #[test]
    fn twelve_jie() {
        assert_eq!(ALL_SOLAR_TERMS.iter().filter(|t| t.is_jie()).count(), 12);
        assert!(SolarTerm::Lichun.is_jie());
        assert!(!SolarTerm::Yushui.is_jie());
    }

    #[test]
    fn containing_longitude_wraps() {
        assert_eq!(SolarTerm::containing_longitude(0.0), SolarTerm::Chunfen);
        assert_eq!(SolarTerm::containing_longitude(359.999), SolarTerm::Jingzhe);
        assert_eq!(SolarTerm::containing_longitude(-1.0), SolarTerm::Jingzhe);
        assert_eq!(SolarTerm::containing_longitude(316.0), SolarTerm::Lichun);
        assert_eq!(SolarTerm::Jingzhe.next(), SolarTerm::Chunfen);
    }
}
