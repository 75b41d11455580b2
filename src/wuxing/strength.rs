use serde::Serialize;

use super::{Element, ElementCounts};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StrengthTag {
    #[serde(rename = "偏旺")]
    Strong,
    #[serde(rename = "中和")]
    Neutral,
    #[serde(rename = "偏弱")]
    Weak,
}

impl StrengthTag {
    pub fn label(self) -> &'static str {
        match self {
            StrengthTag::Strong => "偏旺",
            StrengthTag::Neutral => "中和",
            StrengthTag::Weak => "偏弱",
        }
    }

    pub fn from_score(score: i32) -> Self {
        if score >= 4 {
            StrengthTag::Strong
        } else if score <= -4 {
            StrengthTag::Weak
        } else {
            StrengthTag::Neutral
        }
    }
}

/// Seasonal support of the month branch element for the day master.
pub fn season_delta(day_master: Element, month_element: Option<Element>) -> i32 {
    let Some(month) = month_element else {
        return 0;
    };
    if month == day_master {
        6
    } else if month.generates() == day_master {
        4
    } else if day_master.generates() == month {
        -4
    } else if day_master.restrains() == month {
        -2
    } else {
        -6
    }
}

/// Half-up rounding for the score arithmetic, so `-0.5` rounds to `0`.
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayMasterStrength {
    pub tag: StrengthTag,
    pub score: i32,
    pub support: u32,
    pub drain: u32,
    pub control: u32,
    pub season_delta: i32,
    pub explanation: String,
}

impl DayMasterStrength {
    pub fn unknown() -> Self {
        Self {
            tag: StrengthTag::Neutral,
            score: 0,
            support: 0,
            drain: 0,
            control: 0,
            season_delta: 0,
            explanation: "信息不足，按中和处理。".to_string(),
        }
    }

    pub fn assess(counts: &ElementCounts, day_master: Element, month_element: Option<Element>) -> Self {
        let same = counts.get(day_master);
        let generator = counts.get(day_master.generator());
        let output = counts.get(day_master.generates());
        let wealth = counts.get(day_master.restrains());
        let officer = counts.get(day_master.controller());

        let support = same + generator;
        let drain = output + wealth;
        let control = officer;
        let season = season_delta(day_master, month_element);

        let score = support as i32 * 2 + round_half_up(season as f64 / 2.0)
            - drain as i32
            - round_half_up(control as f64 * 1.5);
        let tag = StrengthTag::from_score(score);

        let explanation = format!(
            "助身{}、泄耗{}、克身{}，季节{}{}，判为{}。",
            support,
            drain,
            control,
            if season >= 0 { "加" } else { "减" },
            season.abs(),
            tag.label()
        );

        Self {
            tag,
            score,
            support,
            drain,
            control,
            season_delta: season,
            explanation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_table() {
        assert_eq!(season_delta(Element::Wood, Some(Element::Wood)), 6);
        assert_eq!(season_delta(Element::Wood, Some(Element::Water)), 4);
        assert_eq!(season_delta(Element::Wood, Some(Element::Fire)), -4);
        assert_eq!(season_delta(Element::Wood, Some(Element::Earth)), -2);
        assert_eq!(season_delta(Element::Wood, Some(Element::Metal)), -6);
        assert_eq!(season_delta(Element::Wood, None), 0);
    }

    #[test]
    fn half_up_rounding_matches_score_rules() {
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(-1.5), -1);
        assert_eq!(round_half_up(1.5), 2);
        assert_eq!(round_half_up(4.5), 5);
    }

    #[test]
    fn strong_day_master() {
        let counts = ElementCounts {
            wood: 4,
            fire: 0,
            earth: 1,
            metal: 1,
            water: 2,
        };
        let strength = DayMasterStrength::assess(&counts, Element::Wood, Some(Element::Wood));
        // support 6, drain 1, control 1: 12 + 3 - 1 - 2
        assert_eq!(strength.score, 12);
        assert_eq!(strength.tag, StrengthTag::Strong);
        assert_eq!(strength.explanation, "助身6、泄耗1、克身1，季节加6，判为偏旺。");
    }

    #[test]
    fn weak_day_master() {
        let counts = ElementCounts {
            wood: 1,
            fire: 2,
            earth: 2,
            metal: 3,
            water: 0,
        };
        let strength = DayMasterStrength::assess(&counts, Element::Wood, Some(Element::Metal));
        // support 1, drain 4, control 3: 2 - 3 - 4 - 5
        assert_eq!(strength.score, -10);
        assert_eq!(strength.tag, StrengthTag::Weak);
        assert!(strength.explanation.contains("季节减6"));
    }
}
