//! Heavenly stems, earthly branches and the sexagenary pillars built from them.
//!
//! Stem index: 甲(0) 乙(1) 丙(2) 丁(3) 戊(4) 己(5) 庚(6) 辛(7) 壬(8) 癸(9)
//! Branch index: 子(0) 丑(1) 寅(2) 卯(3) 辰(4) 巳(5) 午(6) 未(7) 申(8) 酉(9) 戌(10) 亥(11)

use serde::{Serialize, Serializer};
use std::fmt;

use crate::wuxing::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stem {
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

pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

impl Stem {
    pub fn from_cycle(n: i64) -> Self {
        ALL_STEMS[n.rem_euclid(10) as usize]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Stem::Jia => "甲",
            Stem::Yi => "乙",
            Stem::Bing => "丙",
            Stem::Ding => "丁",
            Stem::Wu => "戊",
            Stem::Ji => "己",
            Stem::Geng => "庚",
            Stem::Xin => "辛",
            Stem::Ren => "壬",
            Stem::Gui => "癸",
        }
    }

    pub fn element(self) -> Element {
        match self {
            Stem::Jia | Stem::Yi => Element::Wood,
            Stem::Bing | Stem::Ding => Element::Fire,
            Stem::Wu | Stem::Ji => Element::Earth,
            Stem::Geng | Stem::Xin => Element::Metal,
            Stem::Ren | Stem::Gui => Element::Water,
        }
    }

    pub fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
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

pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

/// 三合: 申子辰 水局, 寅午戌 火局, 亥卯未 木局, 巳酉丑 金局
const HARMONY_TRIADS: [[Branch; 3]; 4] = [
    [Branch::Shen, Branch::Zi, Branch::Chen],
    [Branch::Yin, Branch::Wu, Branch::Xu],
    [Branch::Hai, Branch::Mao, Branch::Wei],
    [Branch::Si, Branch::You, Branch::Chou],
];

const HOUR_RANGES: [&str; 12] = [
    "23:00-01:00",
    "01:00-03:00",
    "03:00-05:00",
    "05:00-07:00",
    "07:00-09:00",
    "09:00-11:00",
    "11:00-13:00",
    "13:00-15:00",
    "15:00-17:00",
    "17:00-19:00",
    "19:00-21:00",
    "21:00-23:00",
];

impl Branch {
    pub fn from_cycle(n: i64) -> Self {
        ALL_BRANCHES[n.rem_euclid(12) as usize]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Branch::Zi => "子",
            Branch::Chou => "丑",
            Branch::Yin => "寅",
            Branch::Mao => "卯",
            Branch::Chen => "辰",
            Branch::Si => "巳",
            Branch::Wu => "午",
            Branch::Wei => "未",
            Branch::Shen => "申",
            Branch::You => "酉",
            Branch::Xu => "戌",
            Branch::Hai => "亥",
        }
    }

    pub fn element(self) -> Element {
        match self {
            Branch::Zi | Branch::Hai => Element::Water,
            Branch::Yin | Branch::Mao => Element::Wood,
            Branch::Si | Branch::Wu => Element::Fire,
            Branch::Shen | Branch::You => Element::Metal,
            Branch::Chou | Branch::Chen | Branch::Wei | Branch::Xu => Element::Earth,
        }
    }

    pub fn zodiac(self) -> &'static str {
        match self {
            Branch::Zi => "鼠",
            Branch::Chou => "牛",
            Branch::Yin => "虎",
            Branch::Mao => "兔",
            Branch::Chen => "龙",
            Branch::Si => "蛇",
            Branch::Wu => "马",
            Branch::Wei => "羊",
            Branch::Shen => "猴",
            Branch::You => "鸡",
            Branch::Xu => "狗",
            Branch::Hai => "猪",
        }
    }

    /// 六冲 partner, six positions away.
    pub fn clash(self) -> Branch {
        Branch::from_cycle(self.index() as i64 + 6)
    }

    /// The other two members of this branch's 三合 triad, in table order.
    pub fn harmony_partners(self) -> Vec<Branch> {
        HARMONY_TRIADS
            .iter()
            .find(|triad| triad.contains(&self))
            .map(|triad| triad.iter().copied().filter(|b| *b != self).collect())
            .unwrap_or_default()
    }

    pub fn hour_label(self) -> String {
        format!("{}时", self.name())
    }

    pub fn hour_range(self) -> &'static str {
        HOUR_RANGES[self.index()]
    }

    pub fn hour_slot(self) -> String {
        format!("{} {}", self.hour_label(), self.hour_range())
    }

    /// Branch of the two-hour slot containing `hour` (0-23). 23:00 opens 子.
    pub fn from_hour(hour: u32) -> Branch {
        if hour == 23 {
            return Branch::Zi;
        }
        Branch::from_cycle(((hour as i64) + 1) / 2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    /// Pillar at position `n` of the cycle: stem `n mod 10`, branch `n mod 12`.
    pub fn from_cycle(n: i64) -> Self {
        Self {
            stem: Stem::from_cycle(n),
            branch: Branch::from_cycle(n),
        }
    }

    /// Pairs a stem with a branch. Returns `None` when the parities differ,
    /// since such a pair never occurs in the cycle.
    pub fn new(stem: Stem, branch: Branch) -> Option<Self> {
        if stem.index() % 2 != branch.index() % 2 {
            return None;
        }
        Some(Self { stem, branch })
    }

    pub fn stem_element(self) -> Element {
        self.stem.element()
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem.name(), self.branch.name())
    }
}

impl Serialize for Pillar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_positions_wrap() {
        assert_eq!(Pillar::from_cycle(0).to_string(), "甲子");
        assert_eq!(Pillar::from_cycle(40).to_string(), "甲辰");
        assert_eq!(Pillar::from_cycle(59).to_string(), "癸亥");
        assert_eq!(Pillar::from_cycle(60).to_string(), "甲子");
        assert_eq!(Pillar::from_cycle(-1).to_string(), "癸亥");
    }

    #[test]
    fn every_cycle_pillar_has_matching_parity() {
        for n in 0..60 {
            let pillar = Pillar::from_cycle(n);
            assert!(Pillar::new(pillar.stem, pillar.branch).is_some());
        }
        assert!(Pillar::new(Stem::Jia, Branch::Chou).is_none());
    }

    #[test]
    fn hour_slots() {
        assert_eq!(Branch::from_hour(23), Branch::Zi);
        assert_eq!(Branch::from_hour(0), Branch::Zi);
        assert_eq!(Branch::from_hour(1), Branch::Chou);
        assert_eq!(Branch::from_hour(18), Branch::You);
        assert_eq!(Branch::from_hour(22), Branch::Hai);
        assert_eq!(Branch::Zi.hour_slot(), "子时 23:00-01:00");
    }

    #[test]
    fn clash_and_harmony() {
        assert_eq!(Branch::Zi.clash(), Branch::Wu);
        assert_eq!(Branch::Hai.clash(), Branch::Si);
        assert_eq!(Branch::Zi.harmony_partners(), vec![Branch::Shen, Branch::Chen]);
        assert_eq!(Branch::Chou.harmony_partners(), vec![Branch::Si, Branch::You]);
    }
}
