use serde::Serialize;

use super::rules::LevelThresholds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FortuneLevel {
    #[serde(rename = "大吉")]
    Great,
    #[serde(rename = "中吉")]
    Good,
    #[serde(rename = "小吉")]
    Fair,
    #[serde(rename = "平")]
    Even,
    #[serde(rename = "小凶")]
    Poor,
}

impl FortuneLevel {
    pub fn from_score(score: i32, thresholds: &LevelThresholds) -> Self {
        if score >= thresholds.great {
            FortuneLevel::Great
        } else if score >= thresholds.good {
            FortuneLevel::Good
        } else if score >= thresholds.fair {
            FortuneLevel::Fair
        } else if score >= thresholds.even {
            FortuneLevel::Even
        } else {
            FortuneLevel::Poor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FortuneLevel::Great => "大吉",
            FortuneLevel::Good => "中吉",
            FortuneLevel::Fair => "小吉",
            FortuneLevel::Even => "平",
            FortuneLevel::Poor => "小凶",
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            FortuneLevel::Great => "气势正盛，宜快节奏抢先成型。",
            FortuneLevel::Good => "稳中带攻，注意节奏与安全口。",
            FortuneLevel::Fair => "小有顺风，先稳后冲更稳。",
            FortuneLevel::Even => "局势平和，稳扎稳打。",
            FortuneLevel::Poor => "谨慎为上，先保分再求胡。",
        }
    }
}

pub fn tagline(score: i32) -> &'static str {
    match score {
        s if s >= 90 => "鸿运当头",
        s if s >= 80 => "运势亨通",
        s if s >= 70 => "顺风顺水",
        s if s >= 60 => "稳中向好",
        s if s >= 50 => "平和安稳",
        _ => "需待时机",
    }
}
