use chrono::NaiveDate;
use mahjong_fortune::almanac::Almanac;
use mahjong_fortune::bazi::{calculate, BirthMoment};
use mahjong_fortune::calendar::{constellation, day_cycle, solar_to_lunar};
use mahjong_fortune::wuxing::Element;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn lunar_goldens() {
    let cases = [
        ((2024, 2, 10), "正月初一", "龙"),
        ((2000, 11, 1), "十月初六", "龙"),
        ((2026, 2, 9), "腊月廿二", "蛇"),
        ((2026, 10, 18), "九月初九", "马"),
    ];
    for ((y, m, d), label, zodiac) in cases {
        let lunar = solar_to_lunar(ymd(y, m, d)).expect("supported");
        assert_eq!(lunar.label(), label, "{}-{}-{}", y, m, d);
        assert_eq!(lunar.zodiac(), zodiac, "{}-{}-{}", y, m, d);
    }
    assert_eq!(day_cycle(ymd(1900, 1, 31)), 40);
}

#[test]
fn leap_month_2023() {
    let before = solar_to_lunar(ymd(2023, 3, 21)).expect("supported");
    assert_eq!(before.label(), "二月三十");
    assert!(!before.is_leap);

    let first = solar_to_lunar(ymd(2023, 3, 22)).expect("supported");
    assert_eq!((first.month, first.day), (2, 1));
    assert!(first.is_leap);
    assert_eq!(first.label(), "闰二月初一");
    assert_eq!(first.day_pillar().to_string(), "己卯");

    let last = solar_to_lunar(ymd(2023, 4, 19)).expect("supported");
    assert_eq!(last.label(), "闰二月廿九");

    let after = solar_to_lunar(ymd(2023, 4, 20)).expect("supported");
    assert_eq!(after.label(), "三月初一");
    assert!(!after.is_leap);
}

#[test]
fn month_pillar_holds_through_a_leap_month() {
    let regular = solar_to_lunar(ymd(2020, 5, 22)).expect("supported");
    assert_eq!(regular.label(), "四月三十");
    assert_eq!(regular.month_pillar().to_string(), "辛巳");

    for (m, d) in [(5, 23), (6, 20)] {
        let leap = solar_to_lunar(ymd(2020, m, d)).expect("supported");
        assert!(leap.is_leap);
        assert_eq!(leap.month, 4);
        assert_eq!(leap.month_cycle, regular.month_cycle);
        assert_eq!(leap.month_pillar().to_string(), "辛巳");
    }

    let next = solar_to_lunar(ymd(2020, 6, 21)).expect("supported");
    assert_eq!(next.label(), "五月初一");
    assert_eq!(next.month_cycle, regular.month_cycle + 1);
    assert_eq!(next.month_pillar().to_string(), "壬午");
}

#[test]
fn chart_with_true_solar_time() {
    let moment = BirthMoment::parse("2000-11-01", "18:00", "104.06");
    let chart = calculate(&moment).expect("chart");
    let pillars: Vec<String> = chart.pillars().iter().map(|p| p.to_string()).collect();
    assert_eq!(pillars, vec!["庚辰", "丙戌", "癸亥", "庚申"]);
    assert!(chart.time_known);
    assert!(chart.time_adjusted);
    assert_eq!(chart.time_offset_minutes, -64);
    assert_eq!(chart.time_hint, "16:56");
    assert_eq!(chart.hour_label, "申时");
    assert_eq!(chart.hour_range, "15:00-17:00");
    assert_eq!(chart.day_master(), Element::Water);
    assert_eq!(
        [chart.counts.wood, chart.counts.fire, chart.counts.earth, chart.counts.metal, chart.counts.water],
        [0, 1, 2, 3, 2]
    );
    assert_eq!(chart.summary, "五行偏金，木偏弱。");
    assert_eq!(
        [chart.ten_gods.year, chart.ten_gods.month, chart.ten_gods.day, chart.ten_gods.hour],
        ["正印", "正财", "日主", "正印"]
    );
}

#[test]
fn chart_east_of_reference_meridian() {
    let chart = calculate(&BirthMoment::parse("1990-05-20", "08:30", "121.47")).expect("chart");
    let pillars: Vec<String> = chart.pillars().iter().map(|p| p.to_string()).collect();
    assert_eq!(pillars, vec!["庚午", "辛巳", "乙酉", "庚辰"]);
    assert_eq!(chart.time_offset_minutes, 6);
    assert_eq!(chart.time_hint, "08:36");
    assert_eq!(chart.summary, "五行偏金，水偏弱。");
}

#[test]
fn chart_without_time_uses_midnight() {
    let chart = calculate(&BirthMoment::parse("1990-05-20", "", "")).expect("chart");
    assert_eq!(chart.hour.to_string(), "丙子");
    assert!(!chart.time_known);
    assert!(!chart.time_adjusted);
    assert_eq!(chart.time_hint, "未填时辰");
    assert_eq!(chart.summary, "五行偏火，土偏弱。");
}

#[test]
fn charts_need_a_supported_birth_date() {
    assert!(calculate(&BirthMoment::parse("1850-01-01", "08:00", "")).is_none());
    assert!(calculate(&BirthMoment::parse("1990-13-01", "08:00", "")).is_none());
    assert!(calculate(&BirthMoment::parse("", "", "")).is_none());
}

#[test]
fn constellation_boundaries() {
    assert_eq!(constellation(1, 1), "摩羯座");
    assert_eq!(constellation(5, 20), "金牛座");
    assert_eq!(constellation(11, 1), "天蝎座");
    assert_eq!(constellation(12, 22), "摩羯座");
}

#[test]
fn almanac_covers_every_supported_year_edge() {
    let first = Almanac::for_date(ymd(1900, 1, 1)).expect("first day");
    assert_eq!(first.summary().solar, "1900-01-01");
    let last = Almanac::for_date(ymd(2100, 12, 31)).expect("last day");
    assert_eq!(last.summary().solar, "2100-12-31");
    assert!(Almanac::for_date(ymd(1899, 12, 31)).is_none());
    assert!(Almanac::for_date(ymd(2101, 1, 1)).is_none());
}

#[test]
fn almanac_lucky_hours_never_include_the_clash() {
    let mut date = ymd(2026, 1, 1);
    for _ in 0..60 {
        let almanac = Almanac::for_date(date).expect("supported");
        assert_eq!(almanac.lucky_hours.len(), 2);
        assert!(!almanac.lucky_hours.contains(&almanac.avoid_hour));
        assert!(!almanac.profile().yi.is_empty());
        date = date.succ_opt().expect("next day");
    }
}
