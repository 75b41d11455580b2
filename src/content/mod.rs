pub mod narrative;
pub mod pools;
pub mod seeds;

pub use pools::{build_combo_pool, build_strategy_pool, merge_pool, pools, ContentPools, StrategyProfile};

use serde::Serialize;

use crate::calendar::Stem;
use crate::wuxing::{Element, RelationKind, StrengthTag};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Attack,
    Balance,
    Defend,
}

impl Style {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn key(self) -> &'static str {
        match self {
            Style::Attack => "attack",
            Style::Balance => "balance",
            Style::Defend => "defend",
        }
    }

    pub fn tone(self) -> &'static str {
        match self {
            Style::Attack => "宜快攻抢先",
            Style::Balance => "稳中求进",
            Style::Defend => "先保分后找机会",
        }
    }
}

/// Style for today's score and the day's relation to the day master.
pub fn choose_style(relation: RelationKind, score: i32) -> Style {
    if relation == RelationKind::Support && score >= 75 {
        Style::Attack
    } else if relation == RelationKind::OvercomeBy || score <= 55 {
        Style::Defend
    } else {
        Style::Balance
    }
}

pub fn relation_note(relation: RelationKind) -> &'static str {
    match relation {
        RelationKind::Support => "顺势进取，",
        RelationKind::Drain => "控速收口，",
        RelationKind::OvercomeBy => "谨慎为上，",
        RelationKind::Overcome => "可主动作战，",
        RelationKind::Same => "稳中求进，",
    }
}

pub const SUITS: [&str; 3] = ["万子", "条子", "筒子"];

pub fn suit_of(element: Element) -> &'static str {
    match element {
        Element::Wood | Element::Water => "条子",
        Element::Fire | Element::Earth => "万子",
        Element::Metal => "筒子",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuitSet {
    pub favored: String,
    pub neutral: String,
    pub avoid: String,
    pub favored_element: Element,
    pub avoid_element: Element,
}

impl SuitSet {
    /// The favored suit follows the favored element; the avoided suit follows the
    /// element it restrains.
    pub fn for_element(favored_element: Element) -> Self {
        let avoid_element = favored_element.restrains();
        let favored = suit_of(favored_element);
        let avoid = suit_of(avoid_element);
        let neutral = SUITS
            .into_iter()
            .find(|s| *s != favored && *s != avoid)
            .unwrap_or(favored);
        Self {
            favored: favored.to_string(),
            neutral: neutral.to_string(),
            avoid: avoid.to_string(),
            favored_element,
            avoid_element,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrigramStyle {
    pub trigram: &'static str,
    pub word: &'static str,
    pub style: &'static str,
    pub key: Style,
    pub desc: &'static str,
}

const QIAN: TrigramStyle = TrigramStyle {
    trigram: "乾",
    word: "健",
    style: "积极进取",
    key: Style::Attack,
    desc: "天行健，君子以自强不息",
};
const KUN: TrigramStyle = TrigramStyle {
    trigram: "坤",
    word: "顺",
    style: "稳扎稳打",
    key: Style::Balance,
    desc: "地势坤，君子以厚德载物",
};
const ZHEN: TrigramStyle = TrigramStyle {
    trigram: "震",
    word: "动",
    style: "迅速反应",
    key: Style::Attack,
    desc: "雷震，行动迅速",
};
const XUN: TrigramStyle = TrigramStyle {
    trigram: "巽",
    word: "入",
    style: "灵活变通",
    key: Style::Balance,
    desc: "风入，渗透变化",
};
const KAN: TrigramStyle = TrigramStyle {
    trigram: "坎",
    word: "陷",
    style: "谨慎小心",
    key: Style::Defend,
    desc: "水陷，小心陷阱",
};
const LI: TrigramStyle = TrigramStyle {
    trigram: "离",
    word: "丽",
    style: "光明正大",
    key: Style::Balance,
    desc: "火丽，明察秋毫",
};
const DUI: TrigramStyle = TrigramStyle {
    trigram: "兑",
    word: "悦",
    style: "和谐共赢",
    key: Style::Balance,
    desc: "泽悦，和气生财",
};

/// Trigram of the birth day stem; 坤 when there is no chart.
pub fn trigram_style(day_stem: Option<Stem>) -> TrigramStyle {
    match day_stem {
        Some(Stem::Jia) => ZHEN,
        Some(Stem::Yi) => XUN,
        Some(Stem::Bing) | Some(Stem::Ding) => LI,
        Some(Stem::Geng) => QIAN,
        Some(Stem::Xin) => DUI,
        Some(Stem::Ren) | Some(Stem::Gui) => KAN,
        Some(Stem::Wu) | Some(Stem::Ji) | None => KUN,
    }
}

fn word_joke(word: &str) -> Option<&'static str> {
    let text = match word {
        "健" => "“健”就是要积极进取，像乾卦一样自强不息，但也要注意不要过于冒进。",
        "顺" => "“顺”就是顺应时势，像坤卦一样厚德载物，以柔克刚。",
        "动" => "“动”就是行动迅速，像震卦一样雷厉风行，把握时机。",
        "入" => "“入”就是深入观察，像巽卦一样无孔不入，灵活应变。",
        "陷" => "“陷”就是小心谨慎，像坎卦一样警惕陷阱，化险为夷。",
        "丽" => "“丽”就是明察秋毫，像离卦一样光明磊落，洞察先机。",
        "止" => "“止”就是适可而止，像艮卦一样知止而后定，把握分寸。",
        "悦" => "“悦”就是和谐共处，像兑卦一样和气生财，共赢发展。",
        "冲" => "“冲”就是主动进攻，抢占先机。",
        "守" => "“守”就是稳守阵地，防守为先。",
        "稳" => "“稳”就是稳扎稳打，步步为营。",
        "变" => "“变”就是随机应变，灵活调整。",
        "审" => "“审”就是审时度势，深思熟虑。",
        "和" => "“和”就是和谐相处，互利共赢。",
        _ => return None,
    };
    Some(text)
}

pub fn element_word_explain(element: Element) -> &'static str {
    match element {
        Element::Wood => "木主生发，宜稳进慢攻，守住节奏。",
        Element::Fire => "火主迅猛，宜提速抢先，快成快胡。",
        Element::Earth => "土主厚稳，宜稳守收分，少冒进。",
        Element::Metal => "金主决断，宜控场断张，出手果断。",
        Element::Water => "水主灵动，宜藏锋回旋，伺机而动。",
    }
}

/// Explanation of a lucky word: its own entry when it has one, else the
/// favored element's reading.
pub fn word_explain(word: &str, element: Element) -> &'static str {
    word_joke(word).unwrap_or_else(|| element_word_explain(element))
}

/// Short chart tag such as `日主甲子·用金·喜火`, at most three parts.
pub fn bazi_note(
    day_pillar: Option<&str>,
    favored: Element,
    use_god: Option<Element>,
    joy_god: Option<Element>,
    avoid_god: Option<Element>,
    strength: StrengthTag,
) -> String {
    let mut parts = vec![match day_pillar {
        Some(pillar) => format!("日主{}", pillar),
        None => format!("日主{}", favored),
    }];
    parts.extend(use_god.map(|e| format!("用{}", e)));
    parts.extend(joy_god.map(|e| format!("喜{}", e)));
    parts.extend(avoid_god.map(|e| format!("忌{}", e)));
    parts.push(strength.label().to_string());
    parts.truncate(3);
    parts.join("·")
}

const NOTE_MARKERS: [&str; 4] = ["日主", "用神", "喜神", "忌神"];

/// Appends `（note）` unless the text already names the chart.
pub fn append_bazi_note(text: &str, note: &str) -> String {
    if note.is_empty() || text.is_empty() || NOTE_MARKERS.iter().any(|m| text.contains(m)) {
        return text.to_string();
    }
    format!("{}（{}）", text, note)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_rules() {
        assert_eq!(choose_style(RelationKind::Support, 75), Style::Attack);
        assert_eq!(choose_style(RelationKind::Support, 74), Style::Balance);
        assert_eq!(choose_style(RelationKind::OvercomeBy, 99), Style::Defend);
        assert_eq!(choose_style(RelationKind::Support, 55), Style::Defend);
        assert_eq!(choose_style(RelationKind::Drain, 80), Style::Balance);
        assert_eq!(choose_style(RelationKind::Overcome, 80), Style::Balance);
        assert_eq!(choose_style(RelationKind::Same, 56), Style::Balance);
    }

    #[test]
    fn suit_sets_never_collide() {
        for element in crate::wuxing::ALL_ELEMENTS {
            let suits = SuitSet::for_element(element);
            assert_ne!(suits.favored, suits.avoid);
            assert_ne!(suits.neutral, suits.favored);
            assert_ne!(suits.neutral, suits.avoid);
            assert_eq!(suits.avoid_element, element.restrains());
        }
        let wood = SuitSet::for_element(Element::Wood);
        assert_eq!((wood.favored.as_str(), wood.neutral.as_str(), wood.avoid.as_str()), ("条子", "筒子", "万子"));
    }

    #[test]
    fn trigram_by_stem() {
        assert_eq!(trigram_style(Some(Stem::Xin)).trigram, "兑");
        assert_eq!(trigram_style(Some(Stem::Xin)).word, "悦");
        assert_eq!(trigram_style(Some(Stem::Gui)).key, Style::Defend);
        assert_eq!(trigram_style(None).trigram, "坤");
    }

    #[test]
    fn word_explanations() {
        assert!(word_explain("健", Element::Fire).starts_with("“健”"));
        assert_eq!(word_explain("生发稳进", Element::Wood), "木主生发，宜稳进慢攻，守住节奏。");
    }

    #[test]
    fn notes_keep_three_parts() {
        let note = bazi_note(
            Some("甲子"),
            Element::Metal,
            Some(Element::Metal),
            Some(Element::Fire),
            Some(Element::Water),
            StrengthTag::Strong,
        );
        assert_eq!(note, "日主甲子·用金·喜火");
        let bare = bazi_note(None, Element::Earth, None, None, None, StrengthTag::Neutral);
        assert_eq!(bare, "日主土·中和");
    }

    #[test]
    fn note_is_not_repeated() {
        assert_eq!(append_bazi_note("稳住", "日主甲子"), "稳住（日主甲子）");
        assert_eq!(append_bazi_note("日主偏旺", "日主甲子"), "日主偏旺");
        assert_eq!(append_bazi_note("稳住", ""), "稳住");
        assert_eq!(append_bazi_note("", "日主甲子"), "");
    }
}
