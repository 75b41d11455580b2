//! Sentences assembled from the computed chart, gods and draws.

use super::{Style, SuitSet};
use crate::scoring::{tagline, FortuneLevel};
use crate::wuxing::{god_impact_label, join_elements, Element, Gods, Relation, StrengthTag};
use crate::{FlowInfo, FortuneResult, Strategy};

/// `日主偏旺，用神金、喜水、忌木；稳中带攻，注意节奏与安全口。`
pub fn summary(level: FortuneLevel, strength: StrengthTag, gods: &Gods) -> String {
    let mut parts = vec![format!("日主{}", strength.label())];
    if let Some(use_god) = gods.primary_use() {
        let mut god_part = format!("用神{}", use_god);
        if let Some(joy) = gods.primary_joy() {
            god_part.push_str(&format!("、喜{}", joy));
        }
        if let Some(avoid) = gods.primary_avoid() {
            god_part.push_str(&format!("、忌{}", avoid));
        }
        parts.push(god_part);
    }
    format!("{}；{}", parts.join("，"), level.advice())
}

pub fn wuxing_today_summary(gods: &Gods, favored: Element, suits: &SuitSet, style: Style) -> String {
    let mut parts = vec![format!("主用{}", gods.primary_use().unwrap_or(favored))];
    if let Some(joy) = gods.primary_joy() {
        parts.push(format!("喜{}", joy));
    }
    if let Some(avoid) = gods.primary_avoid() {
        parts.push(format!("忌{}", avoid));
    }
    format!(
        "{}；旺{}，避{}，{}。",
        parts.join("，"),
        suits.favored,
        suits.avoid,
        style.tone()
    )
}

pub fn bazi_today_summary(day_pillar: Option<&str>, score: i32, strategy_title: &str) -> String {
    let day = match day_pillar {
        Some(pillar) => format!("日主{}", pillar),
        None => "日主未明".to_string(),
    };
    format!("{}，{}，打法以{}为主。", day, tagline(score), strategy_title)
}

/// How this year's and month's stems sit with the gods; empty when neither hits.
pub fn flow_note(flow: &FlowInfo, gods: &Gods) -> String {
    let mut parts = Vec::new();
    if let Some(label) = god_impact_label(flow.year_element, gods) {
        parts.push(format!("流年{}（{}）{}", flow.year_ganzhi, flow.year_element, label));
    }
    if let Some(label) = god_impact_label(flow.month_element, gods) {
        parts.push(format!("流月{}（{}）{}", flow.month_ganzhi, flow.month_element, label));
    }
    if parts.is_empty() {
        return String::new();
    }
    format!("流年流月：{}。", parts.join("，"))
}

pub struct ReadingParts<'a> {
    pub score: i32,
    pub relation: &'a Relation,
    /// Birth day pillar and its stem element, when a chart exists.
    pub day: Option<(&'a str, Element)>,
    pub gods: &'a Gods,
    pub flow: &'a FlowInfo,
    pub suits: &'a SuitSet,
    pub strategy: &'a Strategy,
}

pub fn reading(parts: &ReadingParts<'_>) -> String {
    let gods = parts.gods;
    let mut pieces = vec![format!("手气指数{}分，{}。", parts.score, tagline(parts.score))];

    match parts.day {
        Some((pillar, element)) => pieces.push(format!(
            "日主{}（{}），{}：{}",
            pillar,
            element,
            parts.relation.label(),
            parts.relation.text
        )),
        None => pieces.push(parts.relation.text.clone()),
    }

    if !gods.use_gods.is_empty() || !gods.avoid_gods.is_empty() {
        let use_text = if gods.use_gods.is_empty() {
            "未定".to_string()
        } else {
            join_elements(&gods.use_gods, "、")
        };
        let mut line = format!("用神{}", use_text);
        for (name, list) in [("喜神", &gods.joy_gods), ("忌神", &gods.avoid_gods), ("仇神", &gods.enemy_gods)] {
            if !list.is_empty() {
                line.push_str(&format!("，{}{}", name, join_elements(list, "、")));
            }
        }
        line.push('。');
        pieces.push(line);
    }

    let flow = flow_note(parts.flow, gods);
    if !flow.is_empty() {
        pieces.push(flow);
    }
    pieces.push(format!(
        "三门局势：旺{}、平{}、忌{}。",
        parts.suits.favored, parts.suits.neutral, parts.suits.avoid
    ));
    pieces.push(format!("打法建议：{}，{}", parts.strategy.title, parts.strategy.desc));
    pieces.concat()
}

/// Plain-text card for copying or sharing a result.
pub fn share_text(result: &FortuneResult) -> String {
    let inputs = &result.inputs;
    let relation = &result.wuxing_relation;
    let mahjong = &result.mahjong;

    let mut lines = Vec::new();
    lines.push(format!("姓名：{}", inputs.name));
    if inputs.birth_time.is_empty() {
        lines.push(format!("生日：{}", inputs.birth_ymd));
    } else {
        lines.push(format!("生日：{} {}", inputs.birth_ymd, inputs.birth_time));
    }
    if !inputs.birth_longitude.is_empty() {
        lines.push(format!("经度：{}", inputs.birth_longitude));
    }

    lines.push(format!("手气指数：{}（{}）", result.score, result.level));
    lines.push(format!("字诀：{} · {}", mahjong.word, mahjong.word_joke));
    lines.push(format!("打法：{} · {}", mahjong.strategy.title, mahjong.strategy.desc));
    lines.push(format!(
        "三门：旺{} 平{} 忌{}",
        mahjong.suits.favored, mahjong.suits.neutral, mahjong.suits.avoid
    ));
    lines.push(format!("五行关系：{}", relation.text));

    let mut gods_line = format!(
        "用神喜忌：用{} 喜{} 忌{}",
        or_none(&relation.use_gods),
        or_none(&relation.joy_gods),
        or_none(&relation.avoid_gods)
    );
    if !relation.enemy_gods.is_empty() {
        gods_line.push_str(&format!(" 仇{}", join_elements(&relation.enemy_gods, "、")));
    }
    lines.push(gods_line);

    lines.push(format!("断语：{}", mahjong.reading));
    lines.push(format!("贴士：{}", mahjong.tip));
    lines.join("\n")
}

fn or_none(elements: &[Element]) -> String {
    if elements.is_empty() {
        "无".to_string()
    } else {
        join_elements(elements, "、")
    }
}
