pub mod gods;
pub mod relation;
pub mod strength;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use gods::{god_impact, god_impact_label, resolve_gods, GodImpactWeights, Gods};
pub use relation::{relation_between, Relation, RelationKind};
pub use strength::{season_delta, DayMasterStrength, StrengthTag};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    #[serde(rename = "木")]
    Wood,
    #[serde(rename = "火")]
    Fire,
    #[serde(rename = "土")]
    Earth,
    #[serde(rename = "金")]
    Metal,
    #[serde(rename = "水")]
    Water,
}

/// Canonical order used for tallies and tie-breaks: 木火土金水.
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Element::Wood => "木",
            Element::Fire => "火",
            Element::Earth => "土",
            Element::Metal => "金",
            Element::Water => "水",
        }
    }

    /// The element this one generates (木→火→土→金→水→木).
    pub fn generates(self) -> Element {
        match self {
            Element::Wood => Element::Fire,
            Element::Fire => Element::Earth,
            Element::Earth => Element::Metal,
            Element::Metal => Element::Water,
            Element::Water => Element::Wood,
        }
    }

    /// The element this one restrains (木→土→水→火→金→木).
    pub fn restrains(self) -> Element {
        match self {
            Element::Wood => Element::Earth,
            Element::Earth => Element::Water,
            Element::Water => Element::Fire,
            Element::Fire => Element::Metal,
            Element::Metal => Element::Wood,
        }
    }

    pub fn generator(self) -> Element {
        ALL_ELEMENTS
            .into_iter()
            .find(|e| e.generates() == self)
            .unwrap_or(self)
    }

    pub fn controller(self) -> Element {
        ALL_ELEMENTS
            .into_iter()
            .find(|e| e.restrains() == self)
            .unwrap_or(self)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn join_elements(elements: &[Element], sep: &str) -> String {
    elements
        .iter()
        .map(|e| e.name())
        .collect::<Vec<_>>()
        .join(sep)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ElementCounts {
    #[serde(rename = "木")]
    pub wood: u32,
    #[serde(rename = "火")]
    pub fire: u32,
    #[serde(rename = "土")]
    pub earth: u32,
    #[serde(rename = "金")]
    pub metal: u32,
    #[serde(rename = "水")]
    pub water: u32,
}

impl ElementCounts {
    pub fn get(&self, element: Element) -> u32 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    pub fn add(&mut self, element: Element) {
        match element {
            Element::Wood => self.wood += 1,
            Element::Fire => self.fire += 1,
            Element::Earth => self.earth += 1,
            Element::Metal => self.metal += 1,
            Element::Water => self.water += 1,
        }
    }

    pub fn total(&self) -> u32 {
        ALL_ELEMENTS.iter().map(|e| self.get(*e)).sum()
    }

    /// First element holding the highest count, in 木火土金水 order.
    pub fn dominant(&self) -> Element {
        let mut best = Element::Wood;
        for element in ALL_ELEMENTS {
            if self.get(element) > self.get(best) {
                best = element;
            }
        }
        best
    }

    /// First element holding the lowest count, in 木火土金水 order.
    pub fn weakest(&self) -> Element {
        let mut worst = Element::Wood;
        for element in ALL_ELEMENTS {
            if self.get(element) < self.get(worst) {
                worst = element;
            }
        }
        worst
    }

    /// `五行偏火，金偏弱。` / `五行略偏火。` / `五行较均衡。`
    pub fn summary(&self) -> String {
        let dominant = self.dominant();
        let weak = self.weakest();
        let diff = self.get(dominant) - self.get(weak);
        if diff >= 3 {
            format!("五行偏{}，{}偏弱。", dominant, weak)
        } else if diff >= 2 {
            format!("五行略偏{}。", dominant)
        } else {
            "五行较均衡。".to_string()
        }
    }

    /// `木2 火1 土3 金1 水1`
    pub fn text(&self) -> String {
        ALL_ELEMENTS
            .iter()
            .map(|e| format!("{}{}", e, self.get(*e)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_are_inverse() {
        for element in ALL_ELEMENTS {
            assert_eq!(element.generates().generator(), element);
            assert_eq!(element.restrains().controller(), element);
        }
        assert_eq!(Element::Wood.generator(), Element::Water);
        assert_eq!(Element::Wood.controller(), Element::Metal);
    }

    #[test]
    fn tally_summary() {
        let mut counts = ElementCounts::default();
        for element in [
            Element::Fire,
            Element::Fire,
            Element::Fire,
            Element::Fire,
            Element::Earth,
            Element::Earth,
            Element::Wood,
            Element::Water,
        ] {
            counts.add(element);
        }
        assert_eq!(counts.total(), 8);
        assert_eq!(counts.dominant(), Element::Fire);
        assert_eq!(counts.weakest(), Element::Metal);
        assert_eq!(counts.summary(), "五行偏火，金偏弱。");
        assert_eq!(counts.text(), "木1 火4 土2 金0 水1");
    }

    #[test]
    fn even_tally_is_balanced() {
        let counts = ElementCounts {
            wood: 2,
            fire: 2,
            earth: 1,
            metal: 2,
            water: 1,
        };
        assert_eq!(counts.summary(), "五行较均衡。");
        assert_eq!(counts.weakest(), Element::Earth);
    }
}
