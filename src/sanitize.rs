//! Final pass over a result before it is shown: strips leaked `undefined`/`null`
//! tokens, tidies whitespace and punctuation, and fills blank text with fixed
//! fallbacks.

use crate::wuxing::Element;
use crate::FortuneResult;

const LEAKED_TOKENS: [&str; 2] = ["undefined", "null"];
const COLLAPSIBLE_PUNCTUATION: [char; 6] = ['·', '，', '、', '。', '；', '：'];

fn strip_once(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    'outer: while let Some(ch) = rest.chars().next() {
        for token in LEAKED_TOKENS {
            if rest
                .get(..token.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(token))
            {
                rest = &rest[token.len()..];
                continue 'outer;
            }
        }
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }
    out
}

/// Repeats until stable, so removals cannot splice a new token together.
fn strip_leaked_tokens(text: &str) -> String {
    let mut current = strip_once(text);
    loop {
        let next = strip_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn collapse_punctuation(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last: Option<char> = None;
    for ch in text.chars() {
        if COLLAPSIBLE_PUNCTUATION.contains(&ch) && last == Some(ch) {
            continue;
        }
        out.push(ch);
        last = Some(ch);
    }
    out
}

/// Removes leaked tokens, collapses whitespace runs and repeated separators.
pub fn scrub(text: &str) -> String {
    let stripped = strip_leaked_tokens(text);
    let spaced = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    collapse_punctuation(&spaced)
}

pub fn scrub_or(text: &str, fallback: &str) -> String {
    let cleaned = scrub(text);
    if cleaned.is_empty() {
        fallback.to_string()
    } else {
        cleaned
    }
}

fn scrub_in_place(text: &mut String, fallback: &str) {
    *text = scrub_or(text, fallback);
}

/// Scrubs each entry, drops blanks and repeats, keeps first-seen order.
pub fn scrub_list(items: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        let cleaned = scrub(item);
        if !cleaned.is_empty() && !out.contains(&cleaned) {
            out.push(cleaned);
        }
    }
    out
}

fn dedup_elements(items: &mut Vec<Element>) {
    let mut seen: Vec<Element> = Vec::new();
    items.retain(|e| {
        if seen.contains(e) {
            false
        } else {
            seen.push(*e);
            true
        }
    });
}

/// Normalizes every free-text and list field. `seed_str` and `date_key` are
/// identifiers and pass through untouched.
pub fn sanitize_result(mut result: FortuneResult) -> FortuneResult {
    scrub_in_place(&mut result.level, "平");
    scrub_in_place(&mut result.summary, "稳中求进，理性娱乐。");
    scrub_in_place(&mut result.bazi_summary, "");

    let inputs = &mut result.inputs;
    scrub_in_place(&mut inputs.name, "匿名");
    scrub_in_place(&mut inputs.mahjong_type, "四川麻将");

    let birth = &mut result.birth_info;
    scrub_in_place(&mut birth.zodiac, "未知");
    scrub_in_place(&mut birth.constellation, "未知");
    scrub_in_place(&mut birth.lunar_date, "未知");

    let mahjong = &mut result.mahjong;
    scrub_in_place(&mut mahjong.word, "稳");
    scrub_in_place(&mut mahjong.word_joke, "顺势而为，稳扎稳打。");
    scrub_in_place(&mut mahjong.reading, "今日宜稳中求进，量力而行。");
    scrub_in_place(&mut mahjong.tip, "谨慎出牌，避免急躁。");
    scrub_in_place(&mut mahjong.tagline, "平和安稳");
    scrub_in_place(&mut mahjong.style, "稳扎稳打");
    scrub_in_place(&mut mahjong.trigram, "坤");
    scrub_in_place(&mut mahjong.strategy.title, "稳扎稳打");
    scrub_in_place(&mut mahjong.strategy.desc, "控制风险，循序渐进。");
    scrub_in_place(&mut mahjong.suits.favored, "条子");
    scrub_in_place(&mut mahjong.suits.neutral, "筒子");
    scrub_in_place(&mut mahjong.suits.avoid, "万子");

    let relation = &mut result.wuxing_relation;
    scrub_in_place(&mut relation.label, "平衡");
    scrub_in_place(&mut relation.text, "五行走势平稳。");
    scrub_in_place(&mut relation.summary, "");
    scrub_in_place(&mut relation.counts_text, "");
    scrub_in_place(&mut relation.strength_tag, "中和");
    scrub_in_place(&mut relation.strength_explain, "");
    scrub_in_place(&mut relation.god_method, "");
    scrub_in_place(&mut relation.god_explain, "");
    scrub_in_place(&mut relation.today_summary, "");
    for list in [
        &mut relation.favorable_elements,
        &mut relation.unfavorable_elements,
        &mut relation.use_gods,
        &mut relation.joy_gods,
        &mut relation.avoid_gods,
        &mut relation.enemy_gods,
        &mut relation.idle_gods,
    ] {
        dedup_elements(list);
    }

    let almanac = &mut result.almanac;
    scrub_in_place(&mut almanac.jianchu, "平");
    scrub_in_place(&mut almanac.lunar_date, "");
    scrub_in_place(&mut almanac.solar_term, "");
    scrub_in_place(&mut almanac.jianchu_meaning, "");
    scrub_in_place(&mut almanac.avoid_time, "");
    almanac.yi = scrub_list(&almanac.yi);
    almanac.ji = scrub_list(&almanac.ji);
    almanac.lucky_times = scrub_list(&almanac.lucky_times);

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tokens_any_case() {
        assert_eq!(scrub("稳住undefined节奏"), "稳住节奏");
        assert_eq!(scrub("NULL先守Null后攻"), "先守后攻");
        assert_eq!(scrub("UnDeFiNeD"), "");
    }

    #[test]
    fn spliced_tokens_are_removed_too() {
        assert_eq!(scrub("nunullll"), "");
        assert_eq!(scrub("先undefinundefinededed守"), "先守");
        assert_eq!(scrub("nuNULLll稳"), "稳");
    }

    #[test]
    fn collapses_whitespace_and_separators() {
        assert_eq!(scrub("  旺门 \t 条子  "), "旺门 条子");
        assert_eq!(scrub("先稳，，，再冲。。"), "先稳，再冲。");
        assert_eq!(scrub("日主·null·用金"), "日主·用金");
        assert_eq!(scrub("先稳，。再冲"), "先稳，。再冲");
    }

    #[test]
    fn blank_text_falls_back() {
        assert_eq!(scrub_or(" null ", "稳"), "稳");
        assert_eq!(scrub_or("健", "稳"), "健");
    }

    #[test]
    fn lists_are_scrubbed_and_deduplicated() {
        let items = vec![
            "祭祀".to_string(),
            "undefined".to_string(),
            "祭祀 ".to_string(),
            "出行".to_string(),
        ];
        assert_eq!(scrub_list(&items), vec!["祭祀", "出行"]);
    }

    #[test]
    fn element_lists_keep_first_occurrence() {
        let mut list = vec![Element::Fire, Element::Wood, Element::Fire];
        dedup_elements(&mut list);
        assert_eq!(list, vec![Element::Fire, Element::Wood]);
    }
}
