pub mod level;
pub mod rules;

pub use level::{tagline, FortuneLevel};
pub use rules::{ImpactWeights, LevelThresholds, ScoreRules};

use serde::Serialize;

use crate::almanac::{Almanac, Jianchu};
use crate::rng::FortuneRng;
use crate::wuxing::strength::round_half_up;
use crate::wuxing::{god_impact, DayMasterStrength, Element, Gods};

/// Fixed lean of each day officer before the yi/ji adjustments.
pub fn jianchu_base(jianchu: Jianchu) -> f64 {
    match jianchu {
        Jianchu::Jian => 8.0,
        Jianchu::Chu => -1.0,
        Jianchu::Man => 10.0,
        Jianchu::Ping => 2.0,
        Jianchu::Ding => 6.0,
        Jianchu::Zhi => 4.0,
        Jianchu::Po => -4.0,
        Jianchu::Wei => -3.0,
        Jianchu::Cheng => 12.0,
        Jianchu::Shou => 5.0,
        Jianchu::Kai => 10.0,
        Jianchu::Bi => -5.0,
    }
}

/// Unscaled almanac luck: officer base, plus capped boosts for yi items and lucky
/// hours, minus a capped penalty for ji items.
pub fn almanac_luck(almanac: &Almanac) -> f64 {
    let profile = almanac.profile();
    let yi_boost = (profile.yi.len() as f64 * 1.5).min(8.0);
    let ji_penalty = (profile.ji.len() as f64 * 1.2).min(6.0);
    let time_boost = (almanac.lucky_hours.len() as f64 * 3.0).min(6.0);
    jianchu_base(almanac.jianchu) + yi_boost - ji_penalty + time_boost
}

pub fn almanac_delta(almanac: &Almanac, rules: &ScoreRules) -> i32 {
    round_half_up(almanac_luck(almanac) * rules.almanac_scale)
}

pub fn roll_base(rng: &mut FortuneRng, rules: &ScoreRules) -> i32 {
    rules.base_min + rng.index(rules.base_span()) as i32
}

#[derive(Debug, Clone, Copy)]
pub struct ScoreContext<'a> {
    pub base: i32,
    pub strength: &'a DayMasterStrength,
    pub gods: &'a Gods,
    pub day_element: Element,
    pub day_branch_element: Element,
    pub flow_year_element: Element,
    pub flow_month_element: Element,
    pub almanac_delta: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub base: i32,
    pub bazi_delta: i32,
    pub season_delta: i32,
    pub strength_delta: i32,
    pub favorable_delta: i32,
    pub flow_delta: i32,
    pub almanac_delta: i32,
    pub raw: i32,
    #[serde(rename = "final")]
    pub final_score: i32,
}

#[derive(Debug, Clone, Default)]
pub struct ScoreEngine {
    rules: ScoreRules,
}

impl ScoreEngine {
    pub fn new(rules: ScoreRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ScoreRules {
        &self.rules
    }

    pub fn score(&self, ctx: &ScoreContext<'_>) -> ScoreBreakdown {
        let impact = &self.rules.impact;
        let season_delta = ctx.strength.season_delta;
        let strength_delta =
            (-round_half_up(ctx.strength.score.abs() as f64 / 2.0)).clamp(self.rules.strength_floor.min(0), 0);
        let favorable_delta = god_impact(ctx.day_element, ctx.gods, &impact.day_stem)
            + god_impact(ctx.day_branch_element, ctx.gods, &impact.day_branch);
        let flow_delta = god_impact(ctx.flow_year_element, ctx.gods, &impact.flow_year)
            + god_impact(ctx.flow_month_element, ctx.gods, &impact.flow_month);

        let bazi_delta = season_delta + strength_delta + favorable_delta + flow_delta;
        let raw = ctx.base + bazi_delta + ctx.almanac_delta;

        ScoreBreakdown {
            base: ctx.base,
            bazi_delta,
            season_delta,
            strength_delta,
            favorable_delta,
            flow_delta,
            almanac_delta: ctx.almanac_delta,
            raw,
            final_score: raw.clamp(0, 100),
        }
    }

    pub fn level(&self, score: i32) -> FortuneLevel {
        FortuneLevel::from_score(score, &self.rules.levels)
    }
}
