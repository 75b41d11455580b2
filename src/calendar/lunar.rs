//! Solar to Chinese lunar conversion over the 1900-2100 bitmask table.

use chrono::{Datelike, NaiveDate};

use super::ganzhi::{Branch, Pillar};

pub const FIRST_SUPPORTED_YEAR: i32 = 1900;
pub const LAST_SUPPORTED_YEAR: i32 = 2100;

/// Per-year lunar layout starting at 1900.
///
/// Bits 0-3 hold the leap month (0 for none), bit 16 flags a 30-day leap
/// month, and bits 15 down to 4 flag 30-day regular months 1 to 12.
const LUNAR_INFO: [u32; 249] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0,
    0x09ad0, 0x055d2, 0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540,
    0x0d6a0, 0x0ada2, 0x095b0, 0x14977, 0x04970, 0x0a4b0, 0x0b4b5, 0x06a50,
    0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, 0x06566, 0x0d4a0,
    0x0ea50, 0x06e95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950,
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2,
    0x0a950, 0x0b557, 0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573,
    0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, 0x0aea6, 0x0ab50, 0x04b60, 0x0aae4,
    0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, 0x096d0, 0x04dd5,
    0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b5a0, 0x195a6,
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46,
    0x0ab60, 0x09570, 0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58,
    0x05ac0, 0x0ab60, 0x096d5, 0x092e0, 0x0c960, 0x0d954, 0x0d4a0, 0x0da50,
    0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, 0x0a950, 0x0b4a0,
    0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930,
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260,
    0x0ea65, 0x0d530, 0x05aa0, 0x076a3, 0x096d0, 0x04bd7, 0x04ad0, 0x0a4d0,
    0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, 0x0b5a0, 0x056d0, 0x055b2, 0x049b0,
    0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, 0x14b63, 0x09370,
    0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06aa0, 0x0aea4, 0x0ab50,
    0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0,
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540,
    0x0b5a0, 0x195a6, 0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50,
    0x06d40, 0x0af46, 0x0ab60, 0x09570, 0x04af5, 0x04970, 0x064b0, 0x074a3,
    0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, 0x0c960, 0x0d954,
    0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5,
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176,
    0x052b0, 0x0a930, 0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6,
    0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, 0x05aa0, 0x076a3, 0x096d0, 0x04bd7,
    0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, 0x0b5a0, 0x056d0,
    0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0,
    0x14b63,
];

const MONTH_NAMES: [&str; 12] = ["正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "冬", "腊"];

const DAY_NAMES: [&str; 30] = [
    "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十",
    "十一", "十二", "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十",
    "廿一", "廿二", "廿三", "廿四", "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

pub fn is_supported_year(year: i32) -> bool {
    (FIRST_SUPPORTED_YEAR..=LAST_SUPPORTED_YEAR).contains(&year)
}

fn info(year: i32) -> u32 {
    let idx = year - FIRST_SUPPORTED_YEAR;
    if idx < 0 {
        return 0;
    }
    LUNAR_INFO.get(idx as usize).copied().unwrap_or(0)
}

pub fn leap_month(year: i32) -> u32 {
    info(year) & 0xf
}

pub fn leap_days(year: i32) -> i64 {
    if leap_month(year) == 0 {
        return 0;
    }
    if info(year) & 0x10000 != 0 {
        30
    } else {
        29
    }
}

pub fn month_days(year: i32, month: u32) -> i64 {
    if month == 0 || month > 12 {
        return 0;
    }
    if info(year) & (0x10000 >> month) != 0 {
        30
    } else {
        29
    }
}

pub fn lunar_year_days(year: i32) -> i64 {
    let mask = info(year);
    let long_months = (4..16).filter(|bit| mask & (1 << bit) != 0).count() as i64;
    348 + long_months + leap_days(year)
}

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 31).unwrap_or(NaiveDate::MIN)
}

/// Days since 1900-01-31, plus 40 so that the epoch lands on 甲辰.
pub fn day_cycle(date: NaiveDate) -> i64 {
    date.signed_duration_since(epoch()).num_days() + 40
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub is_leap: bool,
    pub year_cycle: i64,
    pub month_cycle: i64,
    pub day_cycle: i64,
}

impl LunarDate {
    pub fn year_pillar(&self) -> Pillar {
        Pillar::from_cycle(self.year_cycle)
    }

    pub fn month_pillar(&self) -> Pillar {
        Pillar::from_cycle(self.month_cycle)
    }

    pub fn day_pillar(&self) -> Pillar {
        Pillar::from_cycle(self.day_cycle)
    }

    pub fn day_branch(&self) -> Branch {
        Branch::from_cycle(self.day_cycle)
    }

    pub fn zodiac(&self) -> &'static str {
        zodiac_of_lunar_year(self.year)
    }

    /// `闰四月初一`, `腊月廿二`
    pub fn label(&self) -> String {
        let month = MONTH_NAMES
            .get((self.month as usize).wrapping_sub(1))
            .copied()
            .unwrap_or("");
        let day = DAY_NAMES
            .get((self.day as usize).wrapping_sub(1))
            .copied()
            .unwrap_or("");
        format!("{}{}月{}", if self.is_leap { "闰" } else { "" }, month, day)
    }
}

pub fn zodiac_of_lunar_year(year: i32) -> &'static str {
    Branch::from_cycle(year as i64 - 4).zodiac()
}

/// Convert a Gregorian date to its lunar date.
///
/// Returns `None` outside 1900-2100. The thirty days of January 1900 that
/// precede the table epoch fall in the twelfth month of lunar 1899.
pub fn solar_to_lunar(date: NaiveDate) -> Option<LunarDate> {
    if !is_supported_year(date.year()) {
        return None;
    }
    Some(convert(date))
}

/// Pulls a date into 1900-01-01..=2100-12-31.
pub fn clamp_to_supported(date: NaiveDate) -> NaiveDate {
    let first = NaiveDate::from_ymd_opt(FIRST_SUPPORTED_YEAR, 1, 1).unwrap_or(NaiveDate::MIN);
    let last = NaiveDate::from_ymd_opt(LAST_SUPPORTED_YEAR, 12, 31).unwrap_or(NaiveDate::MAX);
    date.clamp(first, last)
}

/// Table walk for a date already known to be in range.
pub(crate) fn convert(date: NaiveDate) -> LunarDate {
    let day_cycle = day_cycle(date);
    let mut offset = day_cycle - 40;

    if offset < 0 {
        return LunarDate {
            year: FIRST_SUPPORTED_YEAR - 1,
            month: 12,
            day: (31 + offset) as u32,
            is_leap: false,
            year_cycle: (FIRST_SUPPORTED_YEAR - 1 - 1864) as i64,
            month_cycle: 13,
            day_cycle,
        };
    }

    let mut month_cycle: i64 = 14;
    let mut year = FIRST_SUPPORTED_YEAR;
    let mut temp: i64 = 0;
    while year <= LAST_SUPPORTED_YEAR && offset > 0 {
        temp = lunar_year_days(year);
        offset -= temp;
        month_cycle += 12;
        year += 1;
    }
    if offset < 0 {
        offset += temp;
        year -= 1;
        month_cycle -= 12;
    }

    let year_cycle = (year - 1864) as i64;
    let leap = leap_month(year);
    let mut is_leap = false;
    let mut month: u32 = 1;

    while month < 13 && offset > 0 {
        if leap > 0 && month == leap + 1 && !is_leap {
            month -= 1;
            is_leap = true;
            temp = leap_days(year);
        } else {
            temp = month_days(year, month);
        }
        if is_leap && month == leap + 1 {
            is_leap = false;
        }
        offset -= temp;
        if !is_leap {
            month_cycle += 1;
        }
        month += 1;
    }

    if offset == 0 && leap > 0 && month == leap + 1 {
        if is_leap {
            is_leap = false;
        } else {
            is_leap = true;
            month -= 1;
            month_cycle -= 1;
        }
    }

    if offset < 0 {
        offset += temp;
        month -= 1;
        month_cycle -= 1;
    }

    LunarDate {
        year,
        month,
        day: (offset + 1) as u32,
        is_leap,
        year_cycle,
        month_cycle,
        day_cycle,
    }
}
