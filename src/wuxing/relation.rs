use serde::Serialize;

use super::Element;

/// How the target day's stem element bears on the day master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    Same,
    Support,
    Drain,
    Overcome,
    OvercomeBy,
}

impl RelationKind {
    pub fn label(self) -> &'static str {
        match self {
            RelationKind::Same => "比和",
            RelationKind::Support => "得生",
            RelationKind::Drain => "泄气",
            RelationKind::Overcome => "克制",
            RelationKind::OvercomeBy => "受克",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub kind: RelationKind,
    pub text: String,
}

impl Relation {
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}

pub fn relation_between(day_master: Element, day_element: Element) -> Relation {
    let (kind, text) = if day_master == day_element {
        (RelationKind::Same, "日主与日干同气，稳中有进。".to_string())
    } else if day_element.generates() == day_master {
        (
            RelationKind::Support,
            format!("日干{}生助日主{}，顺势可进。", day_element, day_master),
        )
    } else if day_master.generates() == day_element {
        (
            RelationKind::Drain,
            format!("日主{}生{}，宜控节奏。", day_master, day_element),
        )
    } else if day_master.restrains() == day_element {
        (
            RelationKind::Overcome,
            format!("日主{}克{}，可主动但忌贪。", day_master, day_element),
        )
    } else {
        (
            RelationKind::OvercomeBy,
            format!("日干{}克日主{}，谨慎为上。", day_element, day_master),
        )
    };
    Relation { kind, text }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_pairs_classify() {
        assert_eq!(relation_between(Element::Wood, Element::Wood).kind, RelationKind::Same);
        assert_eq!(relation_between(Element::Wood, Element::Water).kind, RelationKind::Support);
        assert_eq!(relation_between(Element::Wood, Element::Fire).kind, RelationKind::Drain);
        assert_eq!(relation_between(Element::Wood, Element::Earth).kind, RelationKind::Overcome);
        assert_eq!(relation_between(Element::Wood, Element::Metal).kind, RelationKind::OvercomeBy);
    }

    #[test]
    fn texts_name_both_sides() {
        let relation = relation_between(Element::Water, Element::Earth);
        assert_eq!(relation.label(), "受克");
        assert_eq!(relation.text, "日干土克日主水，谨慎为上。");
    }
}
