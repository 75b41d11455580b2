use serde::{Deserialize, Serialize};

use super::strength::StrengthTag;
use super::{join_elements, Element, ElementCounts, ALL_ELEMENTS};

/// Five-way split of the elements by how they serve the day master.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gods {
    pub use_gods: Vec<Element>,
    pub joy_gods: Vec<Element>,
    pub avoid_gods: Vec<Element>,
    pub enemy_gods: Vec<Element>,
    pub idle_gods: Vec<Element>,
    pub method: &'static str,
    pub reason: String,
    pub season_note: Option<&'static str>,
    pub dominant: Element,
    pub weak: Element,
}

impl Gods {
    pub fn primary_use(&self) -> Option<Element> {
        self.use_gods.first().copied()
    }

    pub fn primary_joy(&self) -> Option<Element> {
        self.joy_gods.first().copied()
    }

    pub fn primary_avoid(&self) -> Option<Element> {
        self.avoid_gods.first().copied()
    }

    pub fn favorable(&self) -> Vec<Element> {
        self.use_gods.iter().chain(&self.joy_gods).copied().collect()
    }

    pub fn unfavorable(&self) -> Vec<Element> {
        self.avoid_gods.iter().chain(&self.enemy_gods).copied().collect()
    }
}

struct SeasonAdjust {
    use_god: Element,
    joy_god: Element,
    note: &'static str,
}

fn season_adjust(month_element: Option<Element>) -> Option<SeasonAdjust> {
    let adjust = match month_element? {
        Element::Wood => SeasonAdjust {
            use_god: Element::Metal,
            joy_god: Element::Fire,
            note: "春木旺，宜金制木、火泄木",
        },
        Element::Fire => SeasonAdjust {
            use_god: Element::Water,
            joy_god: Element::Metal,
            note: "夏火旺，宜水制火、金生水",
        },
        Element::Metal => SeasonAdjust {
            use_god: Element::Fire,
            joy_god: Element::Wood,
            note: "秋金旺，宜火制金、木生火",
        },
        Element::Water => SeasonAdjust {
            use_god: Element::Earth,
            joy_god: Element::Fire,
            note: "冬水旺，宜土制水、火暖局",
        },
        Element::Earth => SeasonAdjust {
            use_god: Element::Wood,
            joy_god: Element::Metal,
            note: "土旺之月，宜木克土、金泄土",
        },
    };
    Some(adjust)
}

fn dedup(elements: impl IntoIterator<Item = Element>) -> Vec<Element> {
    let mut out: Vec<Element> = Vec::new();
    for element in elements {
        if !out.contains(&element) {
            out.push(element);
        }
    }
    out
}

fn or_default(text: String, fallback: &str) -> String {
    if text.is_empty() {
        fallback.to_string()
    } else {
        text
    }
}

/// Split the five elements into use/joy/avoid/enemy/idle gods.
///
/// Precedence when an element lands in more than one set:
/// use > joy > avoid > enemy > idle.
pub fn resolve_gods(
    day_master: Element,
    counts: &ElementCounts,
    month_element: Option<Element>,
    strength: StrengthTag,
) -> Gods {
    let generator = day_master.generator();
    let output = day_master.generates();
    let wealth = day_master.restrains();
    let officer = day_master.controller();
    let weak = counts.weakest();
    let dominant = counts.dominant();
    let season = season_adjust(month_element);

    let mut method = "扶抑";
    let (use_gods, joy_gods, avoid_gods, reason) = match strength {
        StrengthTag::Strong => {
            let mut ranked = vec![output, officer, wealth];
            ranked.sort_by_key(|e| std::cmp::Reverse(counts.get(*e)));
            let use_gods = vec![ranked[0]];
            let joy_gods = vec![ranked[1]];
            let reason = format!(
                "日主偏旺，取{}泄制为用，喜{}调衡，忌比印助身。",
                join_elements(&use_gods, "、"),
                join_elements(&joy_gods, "、")
            );
            (use_gods, joy_gods, dedup([day_master, generator]), reason)
        }
        StrengthTag::Weak => {
            let mut ranked = vec![generator, day_master];
            ranked.sort_by_key(|e| counts.get(*e));
            let use_gods = vec![ranked[0]];
            let joy_gods = vec![ranked[1]];
            let reason = format!(
                "日主偏弱，取{}扶身为用，喜{}相助，忌食伤财官耗克。",
                join_elements(&use_gods, "、"),
                join_elements(&joy_gods, "、")
            );
            (use_gods, joy_gods, dedup([output, wealth, officer]), reason)
        }
        StrengthTag::Neutral => {
            method = "调候为主、兼顾补偏";
            let use_god = season.as_ref().map(|s| s.use_god).unwrap_or(weak);
            let use_gods = vec![use_god];
            let joy_gods: Vec<Element> = dedup(season.as_ref().map(|s| s.joy_god).into_iter().chain([weak]))
                .into_iter()
                .filter(|e| *e != use_god)
                .collect();

            let mut avoid_pick = dominant;
            if use_gods.contains(&avoid_pick) {
                let mut others: Vec<Element> = ALL_ELEMENTS
                    .into_iter()
                    .filter(|e| *e != dominant)
                    .collect();
                others.sort_by_key(|e| counts.get(*e));
                if let Some(last) = others.last() {
                    avoid_pick = *last;
                }
            }
            let avoid_gods = vec![avoid_pick];
            let reason = format!(
                "日主中和，取{}调候为用，喜{}，忌{}。",
                join_elements(&use_gods, "、"),
                or_default(join_elements(&joy_gods, "、"), "平衡"),
                join_elements(&avoid_gods, "、")
            );
            (use_gods, joy_gods, avoid_gods, reason)
        }
    };

    let enemy: Vec<Element> = dedup(use_gods.iter().map(|e| e.controller()));

    let use_gods = dedup(use_gods);
    let joy_gods: Vec<Element> = dedup(joy_gods.into_iter().filter(|e| !use_gods.contains(e)));
    let avoid_gods: Vec<Element> = dedup(
        avoid_gods
            .into_iter()
            .filter(|e| !use_gods.contains(e) && !joy_gods.contains(e)),
    );
    let enemy_gods: Vec<Element> = enemy
        .into_iter()
        .filter(|e| !use_gods.contains(e) && !joy_gods.contains(e) && !avoid_gods.contains(e))
        .collect();
    let idle_gods: Vec<Element> = ALL_ELEMENTS
        .into_iter()
        .filter(|e| {
            !use_gods.contains(e)
                && !joy_gods.contains(e)
                && !avoid_gods.contains(e)
                && !enemy_gods.contains(e)
        })
        .collect();

    let season_note = season.as_ref().map(|s| s.note);
    let reason = match season_note {
        Some(note) => format!("{}（{}）", reason, note),
        None => reason,
    };

    Gods {
        use_gods,
        joy_gods,
        avoid_gods,
        enemy_gods,
        idle_gods,
        method,
        reason,
        season_note,
        dominant,
        weak,
    }
}

/// Score weights applied when an element hits one of the god sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GodImpactWeights {
    #[serde(rename = "use")]
    pub use_god: i32,
    #[serde(rename = "joy")]
    pub joy_god: i32,
    #[serde(rename = "avoid")]
    pub avoid_god: i32,
    #[serde(rename = "enemy")]
    pub enemy_god: i32,
}

impl GodImpactWeights {
    pub const fn new(use_god: i32, joy_god: i32, avoid_god: i32, enemy_god: i32) -> Self {
        Self {
            use_god,
            joy_god,
            avoid_god,
            enemy_god,
        }
    }
}

pub fn god_impact(element: Element, gods: &Gods, weights: &GodImpactWeights) -> i32 {
    if gods.use_gods.contains(&element) {
        weights.use_god
    } else if gods.joy_gods.contains(&element) {
        weights.joy_god
    } else if gods.enemy_gods.contains(&element) {
        -weights.enemy_god
    } else if gods.avoid_gods.contains(&element) {
        -weights.avoid_god
    } else {
        0
    }
}

pub fn god_impact_label(element: Element, gods: &Gods) -> Option<&'static str> {
    if gods.use_gods.contains(&element) {
        Some("助用")
    } else if gods.joy_gods.contains(&element) {
        Some("助喜")
    } else if gods.enemy_gods.contains(&element) {
        Some("冲用")
    } else if gods.avoid_gods.contains(&element) {
        Some("犯忌")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(wood: u32, fire: u32, earth: u32, metal: u32, water: u32) -> ElementCounts {
        ElementCounts {
            wood,
            fire,
            earth,
            metal,
            water,
        }
    }

    fn assert_partition(gods: &Gods) {
        let mut all: Vec<Element> = Vec::new();
        for set in [
            &gods.use_gods,
            &gods.joy_gods,
            &gods.avoid_gods,
            &gods.enemy_gods,
            &gods.idle_gods,
        ] {
            all.extend(set.iter().copied());
        }
        assert_eq!(all.len(), 5, "{:?}", gods);
        for element in ALL_ELEMENTS {
            assert!(all.contains(&element));
        }
    }

    #[test]
    fn strong_uses_most_represented_outlet() {
        let tally = counts(4, 0, 1, 1, 2);
        let gods = resolve_gods(Element::Wood, &tally, Some(Element::Wood), StrengthTag::Strong);
        // output 火0, officer 金1, wealth 土1: 金 outranks 土 on the tie by table order
        assert_eq!(gods.use_gods, vec![Element::Metal]);
        assert_eq!(gods.joy_gods, vec![Element::Earth]);
        assert_eq!(gods.avoid_gods, vec![Element::Wood, Element::Water]);
        assert_eq!(gods.enemy_gods, vec![Element::Fire]);
        assert!(gods.idle_gods.is_empty());
        assert_eq!(gods.method, "扶抑");
        assert_eq!(
            gods.reason,
            "日主偏旺，取金泄制为用，喜土调衡，忌比印助身。（春木旺，宜金制木、火泄木）"
        );
        assert_partition(&gods);
    }

    #[test]
    fn weak_leans_on_support() {
        let tally = counts(1, 2, 2, 3, 0);
        let gods = resolve_gods(Element::Wood, &tally, Some(Element::Metal), StrengthTag::Weak);
        assert_eq!(gods.use_gods, vec![Element::Water]);
        assert_eq!(gods.joy_gods, vec![Element::Wood]);
        assert_eq!(gods.avoid_gods, vec![Element::Fire, Element::Earth, Element::Metal]);
        assert!(gods.enemy_gods.is_empty());
        assert_partition(&gods);
    }

    #[test]
    fn neutral_follows_season() {
        let tally = counts(2, 2, 1, 2, 1);
        let gods = resolve_gods(Element::Fire, &tally, Some(Element::Water), StrengthTag::Neutral);
        assert_eq!(gods.use_gods, vec![Element::Earth]);
        assert_eq!(gods.joy_gods, vec![Element::Fire]);
        assert_eq!(gods.avoid_gods, vec![Element::Wood]);
        assert_eq!(gods.enemy_gods, Vec::<Element>::new());
        assert_eq!(gods.method, "调候为主、兼顾补偏");
        assert_partition(&gods);
    }

    #[test]
    fn neutral_without_season_uses_weakest() {
        let tally = ElementCounts::default();
        let gods = resolve_gods(Element::Earth, &tally, None, StrengthTag::Neutral);
        assert_eq!(gods.use_gods, vec![Element::Wood]);
        assert!(gods.joy_gods.is_empty());
        // dominant is also 木, so the busiest of the rest is picked: 水 on ties
        assert_eq!(gods.avoid_gods, vec![Element::Water]);
        assert_eq!(gods.enemy_gods, vec![Element::Metal]);
        assert_eq!(gods.reason, "日主中和，取木调候为用，喜平衡，忌水。");
        assert_eq!(gods.season_note, None);
        assert_partition(&gods);
    }

    #[test]
    fn impacts_follow_sets() {
        let tally = counts(4, 0, 1, 1, 2);
        let gods = resolve_gods(Element::Wood, &tally, Some(Element::Wood), StrengthTag::Strong);
        let weights = GodImpactWeights::new(7, 4, 6, 8);
        assert_eq!(god_impact(Element::Metal, &gods, &weights), 7);
        assert_eq!(god_impact(Element::Earth, &gods, &weights), 4);
        assert_eq!(god_impact(Element::Wood, &gods, &weights), -6);
        assert_eq!(god_impact(Element::Fire, &gods, &weights), -8);
        assert_eq!(god_impact_label(Element::Fire, &gods), Some("冲用"));
    }
}
