use mahjong_fortune::almanac::{Almanac, AlmanacSummary};
use mahjong_fortune::calendar;
use mahjong_fortune::{FortuneInput, LongitudeInput};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiFortuneRequest {
    pub name: Option<String>,
    #[serde(alias = "birthYmd")]
    pub birth_date: Option<String>,
    pub birth_time: Option<String>,
    pub birth_longitude: Option<LongitudeInput>,
    #[serde(alias = "dateKey")]
    pub target_date_key: Option<String>,
}

impl ApiFortuneRequest {
    pub fn into_input(self) -> Result<FortuneInput, String> {
        let mut input = FortuneInput::new(
            self.name.unwrap_or_default(),
            self.birth_date.unwrap_or_default(),
        );
        input.birth_time = self.birth_time.filter(|time| !time.trim().is_empty());
        input.birth_longitude = self.birth_longitude;
        input.target_date_key = self.target_date_key.filter(|key| !key.trim().is_empty());
        input.validate()?;
        Ok(input)
    }
}

#[derive(Debug, Deserialize)]
pub struct AlmanacQuery {
    pub date: Option<String>,
}

impl AlmanacQuery {
    /// Requested day; blank means today.
    pub fn resolve(&self, today: chrono::NaiveDate) -> Result<Almanac, String> {
        match self.date.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
            Some(text) => {
                let date = calendar::parse_ymd(text)
                    .ok_or_else(|| format!("invalid date (YYYY-MM-DD): {}", text))?;
                Almanac::for_date(date).ok_or_else(|| format!("date outside 1900-2100: {}", text))
            }
            None => Ok(Almanac::nearest(today)),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTodayResponse {
    pub date_key: String,
    pub label: String,
    pub almanac: AlmanacSummary,
}

impl ApiTodayResponse {
    pub fn from_almanac(almanac: &Almanac) -> Self {
        Self {
            date_key: calendar::format_ymd(almanac.date),
            label: calendar::format_ymd_label(almanac.date),
            almanac: almanac.summary(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn request(json: &str) -> ApiFortuneRequest {
        serde_json::from_str(json).expect("valid request json")
    }

    #[test]
    fn request_accepts_numeric_longitude() {
        let input = request(
            r#"{"name":"阿明","birthYmd":"1990-05-20","birthTime":"08:30","birthLongitude":121.47}"#,
        )
        .into_input()
        .expect("valid input");
        assert_eq!(input.birth_date, "1990-05-20");
        assert_eq!(input.birth_longitude, Some(LongitudeInput::Number(121.47)));
    }

    #[test]
    fn request_rejects_missing_name() {
        let err = request(r#"{"birthDate":"1990-05-20"}"#)
            .into_input()
            .expect_err("name is required");
        assert_eq!(err, "请先填写姓名");
    }

    #[test]
    fn blank_time_is_dropped() {
        let input = request(r#"{"name":"阿明","birthDate":"1990-05-20","birthTime":"  "}"#)
            .into_input()
            .expect("valid input");
        assert_eq!(input.birth_time, None);
    }

    #[test]
    fn almanac_query_defaults_to_today() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).expect("valid date");
        let almanac = AlmanacQuery { date: None }.resolve(today).expect("today");
        assert_eq!(almanac.date, today);
        let err = AlmanacQuery {
            date: Some("2026-13-01".to_string()),
        }
        .resolve(today)
        .expect_err("bad month");
        assert!(err.starts_with("invalid date"));
    }

    #[test]
    fn today_response_labels() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).expect("valid date");
        let response = ApiTodayResponse::from_almanac(&Almanac::nearest(today));
        assert_eq!(response.date_key, "2026-10-18");
        assert_eq!(response.label, "2026年10月18日");
        assert_eq!(response.almanac.lunar_date, "九月初九");
    }
}
