pub mod constellation;
pub mod ganzhi;
pub mod lunar;
pub mod solar_term;

use chrono::NaiveDate;

pub use constellation::constellation;
pub use ganzhi::{Branch, Pillar, Stem, ALL_BRANCHES, ALL_STEMS};
pub use lunar::{
    clamp_to_supported, day_cycle, is_supported_year, solar_to_lunar, zodiac_of_lunar_year, LunarDate,
};
pub use solar_term::{month_branch_index, solar_term_day, solar_term_on, solar_year};

/// Strict `YYYY-MM-DD`: four, two and two ASCII digits forming a real date.
pub fn parse_ymd(text: &str) -> Option<NaiveDate> {
    let bytes = text.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(idx, b)| idx == 4 || idx == 7 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }
    let year = text[0..4].parse::<i32>().ok()?;
    let month = text[5..7].parse::<u32>().ok()?;
    let day = text[8..10].parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// `H:MM` or `HH:MM` with hour 0-23 and minute 0-59.
pub fn parse_hm(text: &str) -> Option<(u32, u32)> {
    let (hour, minute) = text.split_once(':')?;
    let well_formed = (1..=2).contains(&hour.len())
        && minute.len() == 2
        && hour.bytes().all(|b| b.is_ascii_digit())
        && minute.bytes().all(|b| b.is_ascii_digit());
    if !well_formed {
        return None;
    }
    let hour = hour.parse::<u32>().ok()?;
    let minute = minute.parse::<u32>().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour, minute))
}

/// Decimal degrees within [-180, 180]; blank text counts as absent.
pub fn parse_longitude(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value = trimmed.parse::<f64>().ok()?;
    if !value.is_finite() || !(-180.0..=180.0).contains(&value) {
        return None;
    }
    Some(value)
}

pub fn format_ymd(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `2026年10月18日`, no zero padding.
pub fn format_ymd_label(date: NaiveDate) -> String {
    date.format("%Y年%-m月%-d日").to_string()
}

/// Year pillar of the solar year containing `date` (turns at 立春).
pub fn year_pillar(date: NaiveDate) -> Pillar {
    Pillar::from_cycle(solar_year(date) as i64 - 1864)
}

pub fn month_pillar(date: NaiveDate, year: Pillar) -> Pillar {
    let month_idx = month_branch_index(date);
    let stem = Stem::from_cycle((year.stem.index() * 2 + month_idx + 2) as i64);
    let branch = Branch::from_cycle(month_idx as i64 + 2);
    Pillar { stem, branch }
}

pub fn day_pillar(date: NaiveDate) -> Pillar {
    Pillar::from_cycle(day_cycle(date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ymd_parsing_is_strict() {
        assert!(parse_ymd("2024-02-10").is_some());
        assert!(parse_ymd("2024-2-10").is_none());
        assert!(parse_ymd("2023-02-29").is_none());
        assert!(parse_ymd("2024-02-30").is_none());
        assert!(parse_ymd("２０２４-02-10").is_none());
        assert!(parse_ymd("").is_none());
    }

    #[test]
    fn label_drops_padding() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 8).expect("valid date");
        assert_eq!(format_ymd_label(date), "2026年3月8日");
    }

    #[test]
    fn hm_parsing() {
        assert_eq!(parse_hm("18:00"), Some((18, 0)));
        assert_eq!(parse_hm("7:05"), Some((7, 5)));
        assert_eq!(parse_hm("24:00"), None);
        assert_eq!(parse_hm("12:60"), None);
        assert_eq!(parse_hm("12:5"), None);
        assert_eq!(parse_hm("noon"), None);
    }

    #[test]
    fn longitude_parsing() {
        assert_eq!(parse_longitude("104.06"), Some(104.06));
        assert_eq!(parse_longitude(" -73.5 "), Some(-73.5));
        assert_eq!(parse_longitude("181"), None);
        assert_eq!(parse_longitude("east"), None);
        assert_eq!(parse_longitude(""), None);
        assert_eq!(parse_longitude("NaN"), None);
    }

    #[test]
    fn solar_pillars() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 10).expect("valid date");
        let year = year_pillar(date);
        assert_eq!(year.to_string(), "甲辰");
        assert_eq!(month_pillar(date, year).to_string(), "丙寅");
        assert_eq!(day_pillar(date).to_string(), "甲辰");
    }
}
