pub mod almanac;
pub mod bazi;
pub mod calendar;
pub mod config;
pub mod content;
pub mod rng;
pub mod sanitize;
pub mod scoring;
pub mod wuxing;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::almanac::{Almanac, AlmanacSummary};
use crate::bazi::{BaziChart, BirthMoment};
use crate::content::{narrative, pools, Style, StrategyProfile, SuitSet};
use crate::rng::FortuneRng;
use crate::scoring::{ScoreBreakdown, ScoreContext, ScoreEngine, ScoreRules};
use crate::wuxing::{
    relation_between, resolve_gods, DayMasterStrength, Element, ElementCounts, RelationKind,
};

pub use crate::sanitize::sanitize_result;

/// The only variant the seed and inputs record.
pub const MAHJONG_TYPE: &str = "四川麻将";
/// Chance that the lucky word is replaced by the birth trigram's word.
const TRIGRAM_WORD_CHANCE: f64 = 0.15;
const UNKNOWN: &str = "未知";

/// Birth longitude as the caller sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LongitudeInput {
    Number(f64),
    Text(String),
}

impl LongitudeInput {
    /// Text form used in the seed key and echoed inputs.
    pub fn raw(&self) -> String {
        match self {
            LongitudeInput::Number(value) => value.to_string(),
            LongitudeInput::Text(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FortuneInput {
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "birthYmd")]
    pub birth_date: String,
    #[serde(default)]
    pub birth_time: Option<String>,
    #[serde(default)]
    pub birth_longitude: Option<LongitudeInput>,
    #[serde(default, alias = "dateKey")]
    pub target_date_key: Option<String>,
}

impl FortuneInput {
    pub fn new(name: impl Into<String>, birth_date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            birth_date: birth_date.into(),
            ..Self::default()
        }
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.birth_time = Some(time.into());
        self
    }

    pub fn with_longitude(mut self, longitude: LongitudeInput) -> Self {
        self.birth_longitude = Some(longitude);
        self
    }

    pub fn on_date(mut self, date_key: impl Into<String>) -> Self {
        self.target_date_key = Some(date_key.into());
        self
    }

    /// Form checks applied before a fortune is shown to a person.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("请先填写姓名".to_string());
        }
        if calendar::parse_ymd(self.birth_date.trim()).is_none() {
            return Err("请输入正确生日格式：YYYY-MM-DD".to_string());
        }
        if let Some(time) = self.birth_time.as_deref().map(str::trim) {
            if !time.is_empty() && calendar::parse_hm(time).is_none() {
                return Err("请输入正确时辰格式：HH:mm".to_string());
            }
        }
        if let Some(longitude) = &self.birth_longitude {
            let raw = longitude.raw();
            if !raw.trim().is_empty() && calendar::parse_longitude(&raw).is_none() {
                return Err("请输入有效经度（-180 到 180）".to_string());
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FortuneInputs {
    pub name: String,
    pub birth_ymd: String,
    pub birth_time: String,
    pub birth_longitude: String,
    pub mahjong_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Strategy {
    pub key: Style,
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MahjongAdvice {
    pub word: String,
    pub word_joke: String,
    pub tip: String,
    pub tagline: String,
    pub style: String,
    pub trigram: String,
    pub suits: SuitSet,
    pub strategy: Strategy,
    pub reading: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WuxingRelation {
    pub personal_element: Element,
    pub day_element: Element,
    pub label: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: RelationKind,
    pub summary: String,
    pub counts: Option<ElementCounts>,
    pub counts_text: String,
    pub strength_tag: String,
    pub strength_explain: String,
    pub favorable_elements: Vec<Element>,
    pub unfavorable_elements: Vec<Element>,
    pub use_gods: Vec<Element>,
    pub joy_gods: Vec<Element>,
    pub avoid_gods: Vec<Element>,
    pub enemy_gods: Vec<Element>,
    pub idle_gods: Vec<Element>,
    pub god_method: String,
    pub god_explain: String,
    pub today_summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthInfo {
    pub zodiac: String,
    pub constellation: String,
    pub lunar_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowInfo {
    pub year_ganzhi: String,
    pub month_ganzhi: String,
    pub year_element: Element,
    pub month_element: Element,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FortuneResult {
    pub seed_str: String,
    pub date_key: String,
    pub inputs: FortuneInputs,
    pub score: i32,
    pub level: String,
    pub score_breakdown: ScoreBreakdown,
    pub summary: String,
    pub mahjong: MahjongAdvice,
    pub wuxing_relation: WuxingRelation,
    pub almanac: AlmanacSummary,
    pub birth_info: BirthInfo,
    pub bazi_info: Option<BaziChart>,
    pub bazi_summary: String,
    pub flow_info: FlowInfo,
}

pub fn today_key() -> String {
    calendar::format_ymd(Local::now().date_naive())
}

/// Fortune for today (or the input's target date) under the default rules.
pub fn generate_fortune(input: &FortuneInput) -> FortuneResult {
    generate_fortune_at(input, Local::now().date_naive(), &ScoreRules::default())
}

/// Target date from the key, or `fallback` when the key is missing, malformed or
/// outside the supported years.
fn resolve_target(date_key: Option<&str>, fallback: NaiveDate) -> Almanac {
    date_key
        .map(str::trim)
        .and_then(calendar::parse_ymd)
        .and_then(Almanac::for_date)
        .unwrap_or_else(|| Almanac::nearest(fallback))
}

/// Deterministic core: the same input, fallback date and rules always give the
/// same result.
pub fn generate_fortune_at(input: &FortuneInput, fallback: NaiveDate, rules: &ScoreRules) -> FortuneResult {
    let name = input.name.trim().to_string();
    let birth_ymd = input.birth_date.trim().to_string();
    let birth_time = input
        .birth_time
        .as_deref()
        .map(str::trim)
        .unwrap_or_default()
        .to_string();
    let birth_longitude = input
        .birth_longitude
        .as_ref()
        .map(LongitudeInput::raw)
        .unwrap_or_default();

    let almanac = resolve_target(input.target_date_key.as_deref(), fallback);
    let target = almanac.date;
    let date_key = calendar::format_ymd(target);

    let seed_str = format!(
        "{}|{}|{}|{}|{}|{}",
        name, birth_ymd, birth_time, birth_longitude, MAHJONG_TYPE, date_key
    );
    let mut rng = FortuneRng::from_key(&seed_str);
    let pools = pools();
    let engine = ScoreEngine::new(rules.clone());

    let hint = rng
        .pick_unique(pools.hints(almanac.jianchu), 1)
        .into_iter()
        .next();
    let almanac_delta = scoring::almanac_delta(&almanac, rules);

    let moment = BirthMoment::parse(&birth_ymd, &birth_time, &birth_longitude);
    let chart = bazi::calculate(&moment);
    let birth_lunar = moment.date.and_then(calendar::solar_to_lunar);

    let personal_element = chart
        .as_ref()
        .map(BaziChart::day_master)
        .unwrap_or(Element::Earth);
    let day_element = almanac.day_element();
    let relation = relation_between(personal_element, day_element);

    let base = scoring::roll_base(&mut rng, rules);

    let month_element = chart.as_ref().map(BaziChart::month_element);
    let counts = chart.as_ref().map(|c| c.counts).unwrap_or_default();
    let strength = match &chart {
        Some(chart) => DayMasterStrength::assess(&chart.counts, personal_element, month_element),
        None => DayMasterStrength::unknown(),
    };
    let gods = resolve_gods(personal_element, &counts, month_element, strength.tag);

    let flow_year = calendar::year_pillar(target);
    let flow_month = calendar::month_pillar(target, flow_year);
    let flow = FlowInfo {
        year_ganzhi: flow_year.to_string(),
        month_ganzhi: flow_month.to_string(),
        year_element: flow_year.stem_element(),
        month_element: flow_month.stem_element(),
    };

    let breakdown = engine.score(&ScoreContext {
        base,
        strength: &strength,
        gods: &gods,
        day_element,
        day_branch_element: almanac.day_branch().element(),
        flow_year_element: flow.year_element,
        flow_month_element: flow.month_element,
        almanac_delta,
    });
    let score = breakdown.final_score;
    let level = engine.level(score);

    let day_pillar = chart.as_ref().map(|c| c.day.to_string());
    let trigram = content::trigram_style(chart.as_ref().map(|c| c.day.stem));
    let favored = gods.primary_use().unwrap_or(personal_element);
    let suits = SuitSet::for_element(favored);
    let note = content::bazi_note(
        day_pillar.as_deref(),
        favored,
        gods.primary_use(),
        gods.primary_joy(),
        gods.primary_avoid(),
        strength.tag,
    );

    let style = content::choose_style(relation.kind, score);
    let profile = rng
        .pick(pools.strategies(style))
        .cloned()
        .unwrap_or_else(|| StrategyProfile {
            title: "稳扎稳打".to_string(),
            desc: "控制风险，循序渐进。".to_string(),
        });
    let strategy = Strategy {
        key: style,
        title: profile.title,
        desc: content::append_bazi_note(
            &format!(
                "{} · {}旺门{}，忌门{}",
                profile.desc,
                content::relation_note(relation.kind),
                suits.favored,
                suits.avoid
            ),
            &note,
        ),
    };

    let mut word = rng
        .pick(pools.words(favored))
        .cloned()
        .unwrap_or_else(|| trigram.word.to_string());
    if rng.next_float() < TRIGRAM_WORD_CHANCE {
        word = trigram.word.to_string();
    }

    let mut tip_pool = rng.pick_unique(pools.tips(strategy.key), 3);
    tip_pool.extend(hint);
    let tip = rng.pick(&tip_pool).cloned().unwrap_or_default();
    let tip = content::append_bazi_note(&tip, &note);

    let word_joke = content::append_bazi_note(content::word_explain(&word, favored), &note);
    let reading = narrative::reading(&narrative::ReadingParts {
        score,
        relation: &relation,
        day: chart
            .as_ref()
            .map(|c| (day_pillar.as_deref().unwrap_or_default(), c.day.stem_element())),
        gods: &gods,
        flow: &flow,
        suits: &suits,
        strategy: &strategy,
    });

    tracing::debug!(
        seed = %seed_str,
        date = %date_key,
        base,
        score,
        level = level.label(),
        style = style.key(),
        "fortune generated"
    );

    let wuxing_relation = WuxingRelation {
        personal_element,
        day_element,
        label: relation.label().to_string(),
        text: relation.text.clone(),
        kind: relation.kind,
        summary: chart.as_ref().map(|c| c.summary.clone()).unwrap_or_default(),
        counts: chart.as_ref().map(|c| c.counts),
        counts_text: chart.as_ref().map(|c| c.counts.text()).unwrap_or_default(),
        strength_tag: strength.tag.label().to_string(),
        strength_explain: strength.explanation.clone(),
        favorable_elements: gods.favorable(),
        unfavorable_elements: gods.unfavorable(),
        use_gods: gods.use_gods.clone(),
        joy_gods: gods.joy_gods.clone(),
        avoid_gods: gods.avoid_gods.clone(),
        enemy_gods: gods.enemy_gods.clone(),
        idle_gods: gods.idle_gods.clone(),
        god_method: gods.method.to_string(),
        god_explain: gods.reason.clone(),
        today_summary: narrative::wuxing_today_summary(&gods, favored, &suits, style),
    };

    let birth_info = BirthInfo {
        zodiac: birth_lunar
            .map(|l| l.zodiac().to_string())
            .unwrap_or_else(|| UNKNOWN.to_string()),
        constellation: moment
            .date
            .map(|d| calendar::constellation(d.month(), d.day()).to_string())
            .unwrap_or_else(|| UNKNOWN.to_string()),
        lunar_date: birth_lunar
            .map(|l| l.label())
            .unwrap_or_else(|| UNKNOWN.to_string()),
    };

    FortuneResult {
        seed_str,
        date_key,
        inputs: FortuneInputs {
            name,
            birth_ymd,
            birth_time,
            birth_longitude,
            mahjong_type: MAHJONG_TYPE.to_string(),
        },
        score,
        level: level.label().to_string(),
        summary: narrative::summary(level, strength.tag, &gods),
        bazi_summary: narrative::bazi_today_summary(day_pillar.as_deref(), score, &strategy.title),
        mahjong: MahjongAdvice {
            word,
            word_joke,
            tip,
            tagline: scoring::tagline(score).to_string(),
            style: trigram.style.to_string(),
            trigram: trigram.trigram.to_string(),
            suits,
            strategy,
            reading,
        },
        score_breakdown: breakdown,
        wuxing_relation,
        almanac: almanac.summary(),
        birth_info,
        bazi_info: chart,
        flow_info: flow,
    }
}
