use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::{self, lunar, Branch, LunarDate, Pillar};
use crate::wuxing::Element;

/// The twelve day officers (建除十二神), in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Jianchu {
    Jian,
    Chu,
    Man,
    Ping,
    Ding,
    Zhi,
    Po,
    Wei,
    Cheng,
    Shou,
    Kai,
    Bi,
}

pub const ALL_JIANCHU: [Jianchu; 12] = [
    Jianchu::Jian,
    Jianchu::Chu,
    Jianchu::Man,
    Jianchu::Ping,
    Jianchu::Ding,
    Jianchu::Zhi,
    Jianchu::Po,
    Jianchu::Wei,
    Jianchu::Cheng,
    Jianchu::Shou,
    Jianchu::Kai,
    Jianchu::Bi,
];

pub struct JianchuProfile {
    pub yi: &'static [&'static str],
    pub ji: &'static [&'static str],
    pub trigram: &'static str,
    pub element: Element,
    pub meaning: &'static str,
}

impl Jianchu {
    pub fn from_index(idx: i64) -> Self {
        ALL_JIANCHU[idx.rem_euclid(12) as usize]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Jianchu::Jian => "建",
            Jianchu::Chu => "除",
            Jianchu::Man => "满",
            Jianchu::Ping => "平",
            Jianchu::Ding => "定",
            Jianchu::Zhi => "执",
            Jianchu::Po => "破",
            Jianchu::Wei => "危",
            Jianchu::Cheng => "成",
            Jianchu::Shou => "收",
            Jianchu::Kai => "开",
            Jianchu::Bi => "闭",
        }
    }

    pub fn profile(self) -> JianchuProfile {
        match self {
            Jianchu::Jian => JianchuProfile {
                yi: &["出行", "上任", "会友", "求财", "开市"],
                ji: &["动土", "开仓", "安葬", "修造"],
                trigram: "震",
                element: Element::Wood,
                meaning: "建始，万物生发之象，宜开始新事务",
            },
            Jianchu::Chu => JianchuProfile {
                yi: &["解除", "祭祀", "祈福", "求医", "出行"],
                ji: &["结婚", "搬家", "开市", "诉讼"],
                trigram: "艮",
                element: Element::Earth,
                meaning: "清除旧物，更新气象，适宜消除不良因素",
            },
            Jianchu::Man => JianchuProfile {
                yi: &["祭祀", "祈福", "求财", "结婚", "修造"],
                ji: &["赴任", "求医", "栽种", "出行"],
                trigram: "坎",
                element: Element::Water,
                meaning: "圆满充盈，适宜完成事物，但需防过满",
            },
            Jianchu::Ping => JianchuProfile {
                yi: &["祭祀", "修补", "涂泥", "交易", "安床"],
                ji: &["开市", "远行", "开仓", "动土"],
                trigram: "兑",
                element: Element::Metal,
                meaning: "平稳安宁，适宜巩固基础，不宜轻举妄动",
            },
            Jianchu::Ding => JianchuProfile {
                yi: &["交易", "立券", "会友", "订婚", "求职"],
                ji: &["诉讼", "出行", "开仓", "移徙"],
                trigram: "坤",
                element: Element::Earth,
                meaning: "安定稳固，适宜确立关系，奠定基础",
            },
            Jianchu::Zhi => JianchuProfile {
                yi: &["祈福", "祭祀", "求子", "结婚", "立约"],
                ji: &["开市", "交易", "搬家", "安床"],
                trigram: "巽",
                element: Element::Wood,
                meaning: "执行决定，适宜坚持既定计划，履行承诺",
            },
            Jianchu::Po => JianchuProfile {
                yi: &["破屋", "坏垣", "求医", "解除"],
                ji: &["结婚", "出行", "开市", "动土"],
                trigram: "离",
                element: Element::Fire,
                meaning: "破旧立新，适宜打破陈规，但需谨慎从事",
            },
            Jianchu::Wei => JianchuProfile {
                yi: &["交易", "立券", "安床", "求财", "祭祀"],
                ji: &["登山", "乘船", "动土", "远行"],
                trigram: "乾",
                element: Element::Metal,
                meaning: "危险与机遇并存，需谨慎应对，防范风险",
            },
            Jianchu::Cheng => JianchuProfile {
                yi: &["结婚", "开市", "修造", "入学", "出行"],
                ji: &["诉讼", "争执", "安葬"],
                trigram: "乾",
                element: Element::Metal,
                meaning: "事情成就，适宜庆祝完成，收获成果",
            },
            Jianchu::Shou => JianchuProfile {
                yi: &["祭祀", "求财", "签约", "纳畜", "立券"],
                ji: &["安床", "造葬", "搬家"],
                trigram: "坤",
                element: Element::Earth,
                meaning: "收敛聚集，适宜储蓄积累，整理归纳",
            },
            Jianchu::Kai => JianchuProfile {
                yi: &["祭祀", "祈福", "开市", "出行", "交易"],
                ji: &["安葬", "诉讼", "动土"],
                trigram: "震",
                element: Element::Wood,
                meaning: "开启门户，万事亨通，适宜开展新事业",
            },
            Jianchu::Bi => JianchuProfile {
                yi: &["祭祀", "交易", "纳财", "安葬"],
                ji: &["出行", "结婚", "开市"],
                trigram: "艮",
                element: Element::Earth,
                meaning: "闭藏收敛，适宜休养生息，不宜外务",
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct Almanac {
    pub date: NaiveDate,
    pub lunar: LunarDate,
    pub solar_term: Option<&'static str>,
    pub jianchu: Jianchu,
    pub lucky_hours: Vec<Branch>,
    pub avoid_hour: Branch,
}

impl Almanac {
    /// Almanac for a supported date (1900-2100).
    pub fn for_date(date: NaiveDate) -> Option<Self> {
        let lunar = calendar::solar_to_lunar(date)?;
        Some(Self::build(date, lunar))
    }

    /// Almanac of the supported date closest to `date`.
    pub fn nearest(date: NaiveDate) -> Self {
        let date = calendar::clamp_to_supported(date);
        Self::build(date, lunar::convert(date))
    }

    fn build(date: NaiveDate, lunar: LunarDate) -> Self {
        let day_branch = lunar.day_branch();
        // Month branch approximated from the lunar month: 正月 is 寅.
        let month_branch_idx = (lunar.month as i64 + 1).rem_euclid(12);
        let jianchu = Jianchu::from_index(day_branch.index() as i64 - month_branch_idx);

        Self {
            date,
            lunar,
            solar_term: calendar::solar_term_on(date),
            jianchu,
            lucky_hours: day_branch.harmony_partners(),
            avoid_hour: day_branch.clash(),
        }
    }

    pub fn day_pillar(&self) -> Pillar {
        self.lunar.day_pillar()
    }

    pub fn day_branch(&self) -> Branch {
        self.lunar.day_branch()
    }

    pub fn day_element(&self) -> Element {
        self.day_pillar().stem_element()
    }

    pub fn profile(&self) -> JianchuProfile {
        self.jianchu.profile()
    }

    pub fn lucky_times(&self) -> Vec<String> {
        self.lucky_hours.iter().map(|b| b.hour_slot()).collect()
    }

    pub fn avoid_time(&self) -> String {
        self.avoid_hour.hour_slot()
    }

    pub fn summary(&self) -> AlmanacSummary {
        let profile = self.profile();
        AlmanacSummary {
            solar: calendar::format_ymd(self.date),
            lunar_date: self.lunar.label(),
            solar_term: self.solar_term.unwrap_or_default().to_string(),
            ganzhi_day: self.lunar.day_pillar().to_string(),
            ganzhi_month: self.lunar.month_pillar().to_string(),
            ganzhi_year: self.lunar.year_pillar().to_string(),
            year_animal: self.lunar.zodiac().to_string(),
            jianchu: self.jianchu.name().to_string(),
            jianchu_meaning: profile.meaning.to_string(),
            jianchu_trigram: profile.trigram.to_string(),
            jianchu_element: profile.element,
            yi: profile.yi.iter().map(|s| s.to_string()).collect(),
            ji: profile.ji.iter().map(|s| s.to_string()).collect(),
            lucky_times: self.lucky_times(),
            avoid_time: self.avoid_time(),
            day_branch: self.day_branch().name().to_string(),
            day_element: self.day_element(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlmanacSummary {
    pub solar: String,
    pub lunar_date: String,
    pub solar_term: String,
    pub ganzhi_day: String,
    pub ganzhi_month: String,
    pub ganzhi_year: String,
    pub year_animal: String,
    pub jianchu: String,
    pub jianchu_meaning: String,
    pub jianchu_trigram: String,
    pub jianchu_element: Element,
    pub yi: Vec<String>,
    pub ji: Vec<String>,
    pub lucky_times: Vec<String>,
    pub avoid_time: String,
    pub day_branch: String,
    pub day_element: Element,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn new_year_2024() {
        let almanac = Almanac::for_date(ymd(2024, 2, 10)).expect("supported");
        // day 辰 in 正月 (寅): 4 - 2
        assert_eq!(almanac.jianchu, Jianchu::Man);
        assert_eq!(almanac.day_element(), Element::Wood);
        assert_eq!(almanac.lucky_times(), vec!["申时 15:00-17:00", "子时 23:00-01:00"]);
        assert_eq!(almanac.avoid_time(), "戌时 19:00-21:00");
        let summary = almanac.summary();
        assert_eq!(summary.lunar_date, "正月初一");
        assert_eq!(summary.ganzhi_year, "甲辰");
        assert_eq!(summary.ganzhi_month, "丙寅");
        assert_eq!(summary.year_animal, "龙");
    }

    #[test]
    fn double_ninth_2026() {
        let summary = Almanac::for_date(ymd(2026, 10, 18)).expect("supported").summary();
        assert_eq!(summary.lunar_date, "九月初九");
        assert_eq!(summary.ganzhi_day, "乙丑");
        assert_eq!(summary.ganzhi_month, "戊戌");
        assert_eq!(summary.ganzhi_year, "丙午");
        assert_eq!(summary.jianchu, "平");
        assert_eq!(summary.jianchu_trigram, "兑");
        assert_eq!(summary.lucky_times, vec!["巳时 09:00-11:00", "酉时 17:00-19:00"]);
        assert_eq!(summary.avoid_time, "未时 13:00-15:00");
        assert_eq!(summary.solar_term, "");
    }

    #[test]
    fn millennium_day() {
        let summary = Almanac::for_date(ymd(2000, 1, 1)).expect("supported").summary();
        assert_eq!(summary.lunar_date, "冬月廿五");
        assert_eq!(summary.ganzhi_day, "戊午");
        assert_eq!(summary.jianchu, "破");
        assert_eq!(summary.day_element, Element::Earth);
        assert_eq!(summary.avoid_time, "子时 23:00-01:00");
    }

    #[test]
    fn nearest_clamps_into_range() {
        assert_eq!(Almanac::nearest(ymd(1850, 6, 1)).date, ymd(1900, 1, 1));
        assert_eq!(Almanac::nearest(ymd(2300, 6, 1)).date, ymd(2100, 12, 31));
        assert_eq!(Almanac::nearest(ymd(2024, 2, 10)).jianchu, Jianchu::Man);
    }

    #[test]
    fn every_officer_has_lists() {
        for jianchu in ALL_JIANCHU {
            let profile = jianchu.profile();
            assert!(!profile.yi.is_empty());
            assert!(!profile.ji.is_empty());
        }
    }

    #[test]
    fn out_of_range_dates_have_no_almanac() {
        assert!(Almanac::for_date(ymd(1899, 12, 31)).is_none());
        assert!(Almanac::for_date(ymd(2101, 1, 1)).is_none());
    }
}
