use chrono::{Datelike, NaiveDate};

const TROPICAL_YEAR_MS: f64 = 31_556_925_974.7;
/// 1900-01-06T02:05:00Z in unix milliseconds.
const TERM_ANCHOR_MS: f64 = -2_208_549_300_000.0;
const MS_PER_DAY: i64 = 86_400_000;
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// Minutes from the anchor to each term within a tropical year.
const TERM_OFFSETS: [i64; 24] = [
    0, 21208, 42467, 63836, 85337, 107014, 128867, 150921, 173149, 195551, 218072, 240693, 263343,
    285989, 308563, 331033, 353350, 375494, 397447, 419210, 440795, 462224, 483532, 504758,
];

pub const SOLAR_TERMS: [&str; 24] = [
    "小寒", "大寒", "立春", "雨水", "惊蛰", "春分", "清明", "谷雨", "立夏", "小满", "芒种", "夏至",
    "小暑", "大暑", "立秋", "处暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至",
];

pub const XIAOHAN: usize = 0;
pub const LICHUN: usize = 2;

/// Approximate UTC day-of-month of term `index` (0 = 小寒) in `year`.
pub fn solar_term_day(year: i32, index: usize) -> u32 {
    let offset = TERM_OFFSETS.get(index).copied().unwrap_or(0);
    let ms = TROPICAL_YEAR_MS * (year - 1900) as f64 + (offset * 60_000) as f64 + TERM_ANCHOR_MS;
    let ms = ms.trunc() as i64;
    let days = ms.div_euclid(MS_PER_DAY) + UNIX_EPOCH_DAYS_FROM_CE;
    i32::try_from(days)
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
        .map(|date| date.day())
        .unwrap_or(0)
}

/// Name of the solar term falling on `date`, if any.
///
/// Each month carries two terms: index `2(m-1)` and the one after it.
pub fn solar_term_on(date: NaiveDate) -> Option<&'static str> {
    let first = (date.month0() * 2) as usize;
    [first, first + 1]
        .into_iter()
        .find(|idx| solar_term_day(date.year(), *idx) == date.day())
        .map(|idx| SOLAR_TERMS[idx])
}

/// Index into the solar month sequence 寅卯辰巳午未申酉戌亥子丑 (0 = 寅).
///
/// Months open on the 节 terms: 立春 opens 寅, 惊蛰 opens 卯, and so on,
/// with 小寒 opening 丑 in January.
pub fn month_branch_index(date: NaiveDate) -> usize {
    let year = date.year();
    let (m, d) = (date.month(), date.day());

    if m == 1 {
        return if d >= solar_term_day(year, XIAOHAN) { 11 } else { 10 };
    }
    if m == 2 && d < solar_term_day(year, LICHUN) {
        return 11;
    }

    let mut idx = 10;
    for (start_idx, start_month) in (2..=12u32).enumerate() {
        let start_day = solar_term_day(year, LICHUN + start_idx * 2);
        if m > start_month || (m == start_month && d >= start_day) {
            idx = start_idx;
        }
    }
    idx
}

/// Solar year for pillar purposes: the year turns on the 立春 day.
pub fn solar_year(date: NaiveDate) -> i32 {
    let year = date.year();
    let (m, d) = (date.month(), date.day());
    if m < 2 || (m == 2 && d < solar_term_day(year, LICHUN)) {
        year - 1
    } else {
        year
    }
}
