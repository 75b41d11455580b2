use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Timelike};
use serde::Serialize;

use crate::calendar::{self, Branch, Pillar, Stem};
use crate::wuxing::{Element, ElementCounts};

/// Minutes of clock offset per degree of longitude.
const MINUTES_PER_DEGREE: f64 = 4.0;
/// Reference meridian of UTC+8.
const REFERENCE_MERIDIAN: f64 = 120.0;

#[derive(Debug, Clone, Default)]
pub struct BirthMoment {
    pub date: Option<NaiveDate>,
    pub time: Option<(u32, u32)>,
    pub longitude: Option<f64>,
}

impl BirthMoment {
    pub fn parse(date: &str, time: &str, longitude: &str) -> Self {
        Self {
            date: calendar::parse_ymd(date.trim()),
            time: calendar::parse_hm(time.trim()),
            longitude: calendar::parse_longitude(longitude),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PillarElements {
    pub year: Element,
    pub month: Element,
    pub day: Element,
    pub hour: Element,
}

#[derive(Debug, Clone, Serialize)]
pub struct TenGods {
    pub year: &'static str,
    pub month: &'static str,
    pub day: &'static str,
    pub hour: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaziChart {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
    pub hour_label: String,
    pub hour_range: &'static str,
    pub time_known: bool,
    pub time_adjusted: bool,
    pub time_offset_minutes: i64,
    pub time_hint: String,
    pub elements: PillarElements,
    pub ten_gods: TenGods,
    pub counts: ElementCounts,
    pub summary: String,
}

impl BaziChart {
    pub fn day_master(&self) -> Element {
        self.day.stem.element()
    }

    pub fn month_element(&self) -> Element {
        self.month.branch.element()
    }

    pub fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }
}

pub fn ten_god(day: Stem, target: Stem) -> &'static str {
    let day_element = day.element();
    let target_element = target.element();
    let same_polarity = day.is_yang() == target.is_yang();
    let pick = |same: &'static str, other: &'static str| if same_polarity { same } else { other };

    if day_element == target_element {
        pick("比肩", "劫财")
    } else if day_element.generates() == target_element {
        pick("食神", "伤官")
    } else if target_element.generates() == day_element {
        pick("偏印", "正印")
    } else if day_element.restrains() == target_element {
        pick("偏财", "正财")
    } else {
        pick("七杀", "正官")
    }
}

pub fn solar_offset_minutes(longitude: f64) -> i64 {
    ((longitude - REFERENCE_MERIDIAN) * MINUTES_PER_DEGREE + 0.5).floor() as i64
}

/// Build the four-pillar chart for a birth moment.
///
/// Returns `None` when the birth date is missing or outside 1900-2100.
/// A known time is shifted to true solar time when a longitude is given;
/// from 23:00 on the pillars belong to the following day.
pub fn calculate(moment: &BirthMoment) -> Option<BaziChart> {
    let date = moment.date?;
    if !calendar::is_supported_year(date.year()) {
        return None;
    }

    let time_known = moment.time.is_some();
    let (hour, minute) = moment.time.unwrap_or((0, 0));
    let mut local = date.and_time(NaiveTime::from_hms_opt(hour, minute, 0)?);

    let mut time_adjusted = false;
    let mut time_offset_minutes = 0;
    if let (true, Some(longitude)) = (time_known, moment.longitude) {
        let offset = solar_offset_minutes(longitude);
        if offset != 0 {
            local += Duration::minutes(offset);
            time_adjusted = true;
            time_offset_minutes = offset;
        }
    }

    let hour = local.hour();
    let mut base = local.date();
    if hour >= 23 {
        base = base.succ_opt()?;
    }

    let year = calendar::year_pillar(base);
    let month = calendar::month_pillar(base, year);
    let day = calendar::day_pillar(base);
    let hour_branch = Branch::from_hour(hour);
    let hour_stem = Stem::from_cycle((day.stem.index() * 2 + hour_branch.index()) as i64);
    let hour_pillar = Pillar {
        stem: hour_stem,
        branch: hour_branch,
    };

    let mut counts = ElementCounts::default();
    for pillar in [year, month, day, hour_pillar] {
        counts.add(pillar.stem.element());
        counts.add(pillar.branch.element());
    }

    let time_hint = if time_known {
        format!("{:02}:{:02}", hour, local.minute())
    } else {
        "未填时辰".to_string()
    };

    Some(BaziChart {
        year,
        month,
        day,
        hour: hour_pillar,
        hour_label: hour_branch.hour_label(),
        hour_range: hour_branch.hour_range(),
        time_known,
        time_adjusted,
        time_offset_minutes,
        time_hint,
        elements: PillarElements {
            year: year.stem_element(),
            month: month.stem_element(),
            day: day.stem_element(),
            hour: hour_pillar.stem_element(),
        },
        ten_gods: TenGods {
            year: ten_god(day.stem, year.stem),
            month: ten_god(day.stem, month.stem),
            day: "日主",
            hour: ten_god(day.stem, hour_pillar.stem),
        },
        summary: counts.summary(),
        counts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_gods_by_polarity() {
        assert_eq!(ten_god(Stem::Jia, Stem::Jia), "比肩");
        assert_eq!(ten_god(Stem::Jia, Stem::Yi), "劫财");
        assert_eq!(ten_god(Stem::Jia, Stem::Bing), "食神");
        assert_eq!(ten_god(Stem::Jia, Stem::Ding), "伤官");
        assert_eq!(ten_god(Stem::Jia, Stem::Ren), "偏印");
        assert_eq!(ten_god(Stem::Jia, Stem::Gui), "正印");
        assert_eq!(ten_god(Stem::Jia, Stem::Wu), "偏财");
        assert_eq!(ten_god(Stem::Jia, Stem::Ji), "正财");
        assert_eq!(ten_god(Stem::Jia, Stem::Geng), "七杀");
        assert_eq!(ten_god(Stem::Jia, Stem::Xin), "正官");
    }

    #[test]
    fn solar_offsets_round_half_up() {
        assert_eq!(solar_offset_minutes(120.0), 0);
        assert_eq!(solar_offset_minutes(104.06), -64);
        assert_eq!(solar_offset_minutes(119.875), 0);
        assert_eq!(solar_offset_minutes(-180.0), -1200);
    }

    #[test]
    fn missing_time_defaults_to_zi_hour() {
        let moment = BirthMoment::parse("1990-05-15", "", "");
        let chart = calculate(&moment).expect("chart");
        assert!(!chart.time_known);
        assert!(!chart.time_adjusted);
        assert_eq!(chart.hour.branch, Branch::Zi);
        assert_eq!(chart.time_hint, "未填时辰");
        assert_eq!(chart.ten_gods.day, "日主");
        assert_eq!(chart.counts.total(), 8);
    }

    #[test]
    fn longitude_without_time_is_ignored() {
        let moment = BirthMoment::parse("1990-05-15", "", "80");
        let chart = calculate(&moment).expect("chart");
        assert!(!chart.time_adjusted);
        assert_eq!(chart.time_offset_minutes, 0);
    }

    #[test]
    fn late_hour_rolls_into_next_day() {
        let evening = calculate(&BirthMoment::parse("2024-02-10", "22:59", "")).expect("chart");
        let late = calculate(&BirthMoment::parse("2024-02-10", "23:10", "")).expect("chart");
        let next = calculate(&BirthMoment::parse("2024-02-11", "00:10", "")).expect("chart");
        assert_ne!(evening.day, late.day);
        assert_eq!(late.day, next.day);
        assert_eq!(late.hour, next.hour);
    }

    #[test]
    fn unsupported_years_have_no_chart() {
        assert!(calculate(&BirthMoment::parse("1899-12-31", "", "")).is_none());
        assert!(calculate(&BirthMoment::parse("2101-01-01", "", "")).is_none());
        assert!(calculate(&BirthMoment::parse("1900-01-01", "", "")).is_some());
        assert!(calculate(&BirthMoment::parse("2100-12-31", "", "")).is_some());
    }
}
