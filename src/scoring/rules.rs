use serde::{Deserialize, Serialize};

use crate::wuxing::GodImpactWeights;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelThresholds {
    pub great: i32,
    pub good: i32,
    pub fair: i32,
    pub even: i32,
}

impl Default for LevelThresholds {
    fn default() -> Self {
        Self {
            great: 90,
            good: 75,
            fair: 60,
            even: 45,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactWeights {
    pub day_stem: GodImpactWeights,
    pub day_branch: GodImpactWeights,
    pub flow_year: GodImpactWeights,
    pub flow_month: GodImpactWeights,
}

impl Default for ImpactWeights {
    fn default() -> Self {
        Self {
            day_stem: GodImpactWeights::new(7, 4, 6, 8),
            day_branch: GodImpactWeights::new(4, 2, 3, 4),
            flow_year: GodImpactWeights::new(2, 1, 2, 3),
            flow_month: GodImpactWeights::new(3, 2, 3, 4),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreRules {
    pub base_min: i32,
    pub base_max: i32,
    pub almanac_scale: f64,
    pub strength_floor: i32,
    pub levels: LevelThresholds,
    pub impact: ImpactWeights,
}

impl Default for ScoreRules {
    fn default() -> Self {
        Self {
            base_min: 58,
            base_max: 72,
            almanac_scale: 0.25,
            strength_floor: -4,
            levels: LevelThresholds::default(),
            impact: ImpactWeights::default(),
        }
    }
}

impl ScoreRules {
    pub fn base_span(&self) -> usize {
        (self.base_max - self.base_min + 1).max(1) as usize
    }
}
