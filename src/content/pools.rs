use std::sync::OnceLock;

use super::seeds::{
    SeedPair, HANDWRITTEN_HINTS, HANDWRITTEN_TIPS, HANDWRITTEN_WORDS, HINT_SEEDS, STRATEGY_DESCS,
    STRATEGY_TITLES, TIP_SEEDS, WORD_SEEDS,
};
use super::Style;
use crate::almanac::Jianchu;
use crate::wuxing::Element;

pub const POOL_CAP: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyProfile {
    pub title: String,
    pub desc: String,
}

/// Every `a + joiner + b` combination, first-seen order, without duplicates.
pub fn build_combo_pool(list_a: &[&str], list_b: &[&str], cap: usize, joiner: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for a in list_a {
        for b in list_b {
            let text = format!("{}{}{}", a, joiner, b);
            if !out.contains(&text) {
                out.push(text);
            }
            if out.len() >= cap {
                return out;
            }
        }
    }
    out
}

/// Pairs title combinations with description combinations index by index.
pub fn build_strategy_pool(titles: &SeedPair, descs: &SeedPair, cap: usize) -> Vec<StrategyProfile> {
    let titles = build_combo_pool(titles.a, titles.b, cap, "");
    let descs = build_combo_pool(descs.a, descs.b, cap, "，");
    titles
        .into_iter()
        .zip(descs)
        .take(cap)
        .map(|(title, desc)| StrategyProfile { title, desc })
        .collect()
}

/// Hand-written entries first, then generated ones; deduplicated and capped.
pub fn merge_pool(primary: Vec<String>, handwritten: &[&str], cap: usize) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let items = handwritten
        .iter()
        .map(|s| s.to_string())
        .chain(primary);
    for item in items {
        if !item.is_empty() && !out.contains(&item) {
            out.push(item);
        }
    }
    out.truncate(cap);
    out
}

fn combo(seed: &SeedPair, joiner: &str) -> Vec<String> {
    build_combo_pool(seed.a, seed.b, POOL_CAP, joiner)
}

#[derive(Debug)]
pub struct ContentPools {
    hints: Vec<Vec<String>>,
    strategies: Vec<Vec<StrategyProfile>>,
    words: Vec<Vec<String>>,
    tips: Vec<Vec<String>>,
}

impl ContentPools {
    pub fn build() -> Self {
        let hints = HINT_SEEDS
            .iter()
            .zip(HANDWRITTEN_HINTS)
            .map(|(seed, handwritten)| merge_pool(combo(seed, "，"), handwritten, POOL_CAP))
            .collect();
        let strategies = STRATEGY_TITLES
            .iter()
            .zip(&STRATEGY_DESCS)
            .map(|(titles, descs)| build_strategy_pool(titles, descs, POOL_CAP))
            .collect();
        let words = WORD_SEEDS
            .iter()
            .zip(HANDWRITTEN_WORDS)
            .map(|(seed, handwritten)| merge_pool(combo(seed, ""), handwritten, POOL_CAP))
            .collect();
        let tips = TIP_SEEDS
            .iter()
            .zip(HANDWRITTEN_TIPS)
            .map(|(seed, handwritten)| merge_pool(combo(seed, "，"), handwritten, POOL_CAP))
            .collect();

        Self {
            hints,
            strategies,
            words,
            tips,
        }
    }

    pub fn hints(&self, jianchu: Jianchu) -> &[String] {
        &self.hints[jianchu.index()]
    }

    pub fn strategies(&self, style: Style) -> &[StrategyProfile] {
        &self.strategies[style.index()]
    }

    pub fn words(&self, element: Element) -> &[String] {
        &self.words[element.index()]
    }

    pub fn tips(&self, style: Style) -> &[String] {
        &self.tips[style.index()]
    }
}

static POOLS: OnceLock<ContentPools> = OnceLock::new();

pub fn pools() -> &'static ContentPools {
    POOLS.get_or_init(ContentPools::build)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::almanac::ALL_JIANCHU;
    use crate::wuxing::ALL_ELEMENTS;

    #[test]
    fn combo_pool_dedups_and_caps() {
        let pool = build_combo_pool(&["a", "a", "b"], &["x", "y"], 3, "-");
        assert_eq!(pool, vec!["a-x", "a-y", "b-x"]);
    }

    #[test]
    fn merge_puts_handwritten_first() {
        let merged = merge_pool(vec!["b".into(), "c".into()], &["a", "b", ""], 10);
        assert_eq!(merged, vec!["a", "b", "c"]);
        let capped = merge_pool(vec!["b".into(), "c".into()], &["a"], 2);
        assert_eq!(capped, vec!["a", "b"]);
    }

    #[test]
    fn every_pool_is_full() {
        let pools = pools();
        for jianchu in ALL_JIANCHU {
            assert_eq!(pools.hints(jianchu).len(), POOL_CAP);
        }
        for element in ALL_ELEMENTS {
            assert_eq!(pools.words(element).len(), POOL_CAP);
        }
        for style in [Style::Attack, Style::Balance, Style::Defend] {
            assert_eq!(pools.strategies(style).len(), POOL_CAP);
            assert_eq!(pools.tips(style).len(), POOL_CAP);
        }
    }

    #[test]
    fn pool_edges() {
        let pools = pools();
        let hints = pools.hints(Jianchu::Jian);
        assert_eq!(hints[0], "今日运势向上，宜主动出击，先声夺人。");
        assert_eq!(hints[99], "开门见红，顺势提速");
        assert_eq!(pools.hints(Jianchu::Bi)[99], "起手平淡，稳守收分");

        let attack = pools.strategies(Style::Attack);
        assert_eq!(attack[0].title, "抢先成型");
        assert_eq!(attack[0].desc, "起手就抢节奏，快速成型后扩大优势");
        assert_eq!(attack[99].title, "急攻快胡");
        let defend = pools.strategies(Style::Defend);
        assert_eq!(defend[99].desc, "稳住防线，避免点炮");

        assert_eq!(pools.words(Element::Wood)[0], "生发");
        assert_eq!(pools.words(Element::Wood)[99], "柔进稳盘");
        assert_eq!(pools.words(Element::Water)[99], "藏锋守势");

        assert_eq!(pools.tips(Style::Attack)[0], "顺风多提速，逆风先止损。");
        assert_eq!(pools.tips(Style::Balance)[99], "听口一般，减少冒险");
        assert_eq!(pools.tips(Style::Defend)[99], "中盘落后，留足退路");
    }
}
