//! Phrase seeds for the content pools. Combination pools are expanded from the
//! `a`/`b` halves at startup; the hand-written lists are kept ahead of them.

/// Two phrase halves combined pairwise into a pool.
pub struct SeedPair {
    pub a: &'static [&'static str],
    pub b: &'static [&'static str],
}

/// Hint seeds per day officer, in 建除满平定执破危成收开闭 order.
pub const HINT_SEEDS: [SeedPair; 12] = [
    // 建
    SeedPair {
        a: &[
            "建日开局", "宜开局抢势", "适合早听", "起手易成型", "先手有利", "顺势开张", "先攻占位", "主动推进", "抢先布局",
            "开门见红",
        ],
        b: &[
            "先声夺人", "快成快胡", "先做顺牌", "提速推进", "抓住先机", "顺势提速", "多看进张", "先稳后攻", "压制对手", "抢先成势",
        ],
    },
    // 除
    SeedPair {
        a: &[
            "除日宜清理", "先弃杂牌", "去旧换新", "手牌混杂需清理", "宜去破张", "先整理牌型", "清除累赘", "收敛杂张", "先断废牌",
            "去散归整",
        ],
        b: &[
            "集中成型", "稳住节奏", "再寻冲击", "减少冒进", "以稳为主", "避免贪番", "听口更清晰", "收窄牌路", "守住安全口",
            "循序渐进",
        ],
    },
    // 满
    SeedPair {
        a: &[
            "满日气盛", "手牌较顺", "成型机会多", "进张顺畅", "牌势饱满", "场面顺风", "起手顺利", "运势充足", "节奏容易带起",
            "领先机会多",
        ],
        b: &[
            "稳中求胜", "见好就收", "避免贪大", "小胡稳分", "快成快收", "控制风险", "稳住优势", "别过满则溢", "适度提速", "锁定优势",
        ],
    },
    // 平
    SeedPair {
        a: &[
            "平日平稳", "局势均衡", "场面胶着", "手牌一般", "进张普通", "对手相当", "牌河复杂", "中盘拉锯", "节奏平缓", "优势不明",
        ],
        b: &[
            "稳扎稳打", "守中求进", "控制节奏", "小胡积累", "先稳后冲", "稳听为先", "观察再动", "别急冒进", "保持均衡", "稳分为上",
        ],
    },
    // 定
    SeedPair {
        a: &[
            "定日宜定策", "稳定心态", "确定打法", "牌型稳定", "不宜频变", "布局清晰", "节奏可控", "稳听为主", "手牌规整", "路线明确",
        ],
        b: &[
            "坚持执行", "稳住牌型", "少改牌路", "稳步推进", "守住节奏", "稳听到胡", "稳中求胜", "按计划推进", "先稳后动", "守成不乱",
        ],
    },
    // 执
    SeedPair {
        a: &[
            "执日重执行", "执行力强", "遵循计划", "按牌型推进", "坚持策略", "稳住思路", "牌路清晰", "起手成型", "进张可期",
            "稳步推进",
        ],
        b: &[
            "少犹豫", "果断出手", "按既定走", "持续推进", "听牌即守", "稳扎稳打", "不轻易改", "稳步收分", "保持节奏", "抓住时机",
        ],
    },
    // 破
    SeedPair {
        a: &[
            "破日宜破局", "旧路不通", "需打破常规", "手牌受阻", "易有变数", "局势波动", "牌型易碎", "节奏易乱", "对手压制",
            "进张受阻",
        ],
        b: &[
            "调整思路", "果断变张", "大胆拆牌", "寻找新路", "敢于求变", "以变应变", "小心冒进", "先稳后破", "破而后立", "抓住转机",
        ],
    },
    // 危
    SeedPair {
        a: &[
            "危日宜谨慎", "风险较大", "危险牌多", "点炮风险高", "对手有压", "局势偏险", "进张不稳", "牌河凶", "起手不顺", "中盘受制",
        ],
        b: &[
            "先保分", "稳守安全口", "少碰少杠", "避免冒险", "稳住节奏", "守住牌型", "慢打等机", "留足退路", "先防后攻", "谨慎推进",
        ],
    },
    // 成
    SeedPair {
        a: &[
            "成日易有成果", "成型机会多", "手气顺", "进张连上", "牌型易成", "局势向好", "起手见喜", "对手易漏", "节奏领先",
            "运势高涨",
        ],
        b: &[
            "抓住胜机", "顺势收分", "快成快胡", "稳住优势", "乘胜追击", "稳收分差", "见好就收", "不贪冒进", "锁定优势", "稳中快攻",
        ],
    },
    // 收
    SeedPair {
        a: &[
            "收日宜收敛", "适合收分", "局势可控", "牌型稳固", "中盘见利", "节奏偏稳", "进张尚可", "优势可守", "手牌成型", "稳局可收",
        ],
        b: &[
            "稳收分差", "减少冒险", "见好就收", "稳听收口", "守住优势", "慢打稳胡", "小胡积累", "把握收益", "稳中收势", "收拢战线",
        ],
    },
    // 开
    SeedPair {
        a: &[
            "开日气开", "利开局", "起手顺畅", "先手有利", "节奏易起", "牌势可开", "进张开门", "容易成型", "场面向上", "先发优势",
        ],
        b: &[
            "主动出击", "抢先成型", "提速推进", "敢于进攻", "快胡抢势", "先攻后守", "稳中提速", "抓住先机", "加压压场", "冲分拉开",
        ],
    },
    // 闭
    SeedPair {
        a: &[
            "闭日宜守", "收敛为主", "局势偏稳", "进张偏慢", "牌路宜缩", "手牌偏散", "对手压制", "节奏放缓", "不宜冒进", "起手平淡",
        ],
        b: &[
            "先稳后动", "保安全口", "少碰少杠", "稳听待机", "收缩牌型", "稳守收分", "慢打防炮", "守住节奏", "留好退路", "谨慎推进",
        ],
    },
];

pub const HANDWRITTEN_HINTS: [&[&str]; 12] = [
    // 建
    &[
        "今日运势向上，宜主动出击，先声夺人。", "适合快节奏打法，抢占先机。", "开局宜快速组牌，建立优势。", "积极听牌，把握时机胡牌。",
    ],
    // 除
    &[
        "今日宜去除杂念，专注牌局。", "清理手中废牌，集中精力。", "适时改变策略，灵活应变。", "放下包袱，轻松应对。",
    ],
    // 满
    &[
        "运势饱满，宜稳中求胜。", "手中牌型丰富，可适当提高目标。", "注意不要贪大牌而错失良机。", "见好就收，避免因满而溢。",
    ],
    // 平
    &[
        "今日平和，以稳健为主。", "不宜冒险，稳扎稳打。", "保持平常心，避免情绪波动。", "防守为先，伺机而动。",
    ],
    // 定
    &[
        "运势稳定，宜定下心神。", "确定策略后不要轻易更改。", "稳中求进，步步为营。", "定下目标，坚定执行。",
    ],
    // 执
    &[
        "执行力强，按计划行事。", "坚持既定策略，不轻易动摇。", "抓住机会，果断行动。", "执行到位，功到自然成。",
    ],
    // 破
    &[
        "破而后立，可打破常规。", "旧策略不灵，需创新思维。", "破除固有思维，寻找新机会。", "敢于冒险，或有意外收获。",
    ],
    // 危
    &[
        "小心谨慎，防范风险。", "注意安全牌，避免点炮。", "形势复杂，需多加思考。", "稳中求存，等待转机。",
    ],
    // 成
    &[
        "事半功倍，易获成功。", "牌运亨通，宜抓住机会。", "成功率高，可适当进取。", "乘势而上，扩大战果。",
    ],
    // 收
    &[
        "宜收敛锋芒，低调行事。", "见好就收，积少成多。", "注重防守，稳中求胜。", "积累实力，蓄势待发。",
    ],
    // 开
    &[
        "开门红，万事顺利。", "新开局必胜，宜积极进取。", "机会来临，当仁不让。", "开门见山，直奔主题。",
    ],
    // 闭
    &[
        "宜静不宜动，保守为上。", "不宜久战，速战速决。", "收敛锋芒，避免冲突。", "休养生息，来日再战。",
    ],
];

/// Strategy title halves per style: attack, balance, defend.
pub const STRATEGY_TITLES: [SeedPair; 3] = [
    SeedPair {
        a: &[
            "抢先", "提速", "直进", "快打", "连动", "压制", "强攻", "破局", "急攻", "猛冲", "破阵", "冲锋",
        ],
        b: &[
            "成型", "抢势", "强听", "快胡", "压场", "逼张", "抢先", "快成", "突进", "冲分", "立势", "提分",
        ],
    },
    SeedPair {
        a: &[
            "稳进", "中速", "控场", "稳盘", "续航", "节奏", "均衡", "稳听", "持稳", "慢进", "稳控", "慢稳",
        ],
        b: &[
            "求稳", "控势", "稳分", "守听", "稳线", "调速", "稳打", "稳收", "稳局", "稳形", "续势", "稳场",
        ],
    },
    SeedPair {
        a: &[
            "稳守", "收口", "低调", "护盘", "避锋", "缓守", "收缩", "稳防", "回守", "慎守", "封口", "守底",
        ],
        b: &[
            "保分", "护势", "稳口", "避险", "守分", "缓进", "收势", "稳听", "封口", "退守", "守局", "退控",
        ],
    },
];

pub const STRATEGY_DESCS: [SeedPair; 3] = [
    SeedPair {
        a: &[
            "起手就抢节奏", "有利即推", "牌型成则提速", "场面顺就加压", "听牌就施压", "顺手就进攻", "强听优先", "上手就推进", "抢先成型",
            "快攻见好", "手顺就提速", "先动压场",
        ],
        b: &[
            "快速成型后扩大优势", "抢先听牌再择机胡", "进张到位就果断冲", "适度冒险争取高效", "趁势扩大领先", "牌顺就加速收割",
            "对手慢就持续压制", "手顺时多胡几口", "抢先听口锁定", "先攻后守见机收", "连续压制锁定局面", "领先时稳收优势",
        ],
    },
    SeedPair {
        a: &[
            "先稳后进", "节奏为先", "听牌不乱改", "稳住牌形", "进退有度", "控场不冒险", "以稳为主", "稳中求进", "张力适中",
            "稳听保底", "牌势平稳先守", "稳住牌河",
        ],
        b: &[
            "控制风险再争番", "稳住节奏再提速", "中盘保持稳定", "场面清晰再发力", "稳中拿分更安全", "听牌即守不冒险", "小胡不断稳分差",
            "循序渐进不急躁", "稳局为主再找机会", "注意牌河保持节奏", "稳中抓机会提速", "保持均衡不贪大",
        ],
    },
    SeedPair {
        a: &[
            "先保安全口", "少碰少杠", "危险张回避", "守牌优先", "别硬追", "能胡就收", "先稳分差", "低番快胡", "稳住防线", "别贪大牌",
            "手弱就先缩线", "对手强就稳住",
        ],
        b: &[
            "先守分再找机会", "减少冲动碰杠", "守住安全牌", "避免点炮", "低风险推进", "局势不明先看牌", "控风险再进张", "留后路防反击",
            "守住节奏慢慢转", "先稳后动更稳", "守好安全口再寻张", "避险为先慢慢翻",
        ],
    },
];

/// Lucky word halves per element, in 木火土金水 order.
pub const WORD_SEEDS: [SeedPair; 5] = [
    // 木
    SeedPair {
        a: &[
            "生发", "舒展", "连枝", "顺藤", "护势", "养势", "清润", "柔进", "长线", "合围",
        ],
        b: &[
            "稳进", "缓攻", "守势", "稳听", "成型", "续航", "进张", "聚势", "收分", "稳盘",
        ],
    },
    // 火
    SeedPair {
        a: &[
            "火势", "急攻", "快打", "热手", "强冲", "直进", "连胡", "提速", "点火", "爆发",
        ],
        b: &[
            "快成", "猛进", "抢势", "冲分", "强听", "压场", "速胡", "连动", "急张", "逼张",
        ],
    },
    // 土
    SeedPair {
        a: &[
            "稳扎", "厚守", "固盘", "收分", "稳局", "厚势", "沉稳", "守成", "安盘", "稳听",
        ],
        b: &[
            "缓进", "稳守", "护口", "固守", "收势", "稳收", "续航", "稳盘", "稳压", "缓打",
        ],
    },
    // 金
    SeedPair {
        a: &[
            "精准", "决断", "控场", "断张", "破势", "快切", "利落", "收割", "冷切", "斩张",
        ],
        b: &[
            "稳削", "直取", "快断", "压制", "封口", "锁势", "切换", "定势", "准进", "制胜",
        ],
    },
    // 水
    SeedPair {
        a: &[
            "潜行", "暗藏", "回旋", "渗透", "灵动", "转势", "顺流", "藏锋", "迂回", "静听",
        ],
        b: &[
            "缓行", "柔守", "避锋", "化势", "引流", "稳转", "轻守", "顺波", "回收", "守势",
        ],
    },
];

pub const HANDWRITTEN_WORDS: [&[&str]; 5] = [
    // 木
    &[
        "生发", "抽枝", "舒展", "进张", "连枝", "成型", "护势", "缓进", "稳进", "柔进", "聚木", "顺藤", "续势", "养势",
        "清润", "合围", "平展", "长线", "轻进", "守序",
    ],
    // 火
    &[
        "火势", "速攻", "连胡", "抢势", "快打", "热手", "强冲", "直进", "急张", "闪攻", "提速", "燃势", "点火", "爆发",
        "烈进", "快成", "强听", "抢先", "急变", "冲刺",
    ],
    // 土
    &[
        "稳扎", "厚守", "固盘", "收分", "稳局", "厚势", "沉稳", "盘活", "守成", "稳收", "缓守", "稳听", "厚积", "稳落",
        "安盘", "守势", "稳压", "稳守", "固守", "稳盘",
    ],
    // 金
    &[
        "精准", "决断", "控场", "破势", "断张", "收割", "明打", "快断", "稳削", "铁守", "快切", "准进", "斩张", "直取",
        "利落", "果断", "切换", "凝势", "冷切", "击中",
    ],
    // 水
    &[
        "潜行", "暗藏", "回旋", "渗透", "灵动", "巧避", "转势", "顺流", "缓行", "静听", "迂回", "藏锋", "引流", "避锋",
        "回收", "柔守", "流转", "轻守", "顺波", "化势",
    ],
];

pub const TIP_SEEDS: [SeedPair; 3] = [
    SeedPair {
        a: &[
            "起手顺", "摸牌流畅", "牌型成势", "场面顺风", "对手节奏慢", "进张连上", "早早听牌", "手气偏热", "连摸成型", "领先优势",
        ],
        b: &[
            "加速推进", "抢先成型", "持续施压", "果断冲刺", "连胡拉开", "先攻后收", "快胡止盈", "逼张压场", "提速抢势", "锁定先机",
        ],
    },
    SeedPair {
        a: &[
            "起手平稳", "摸牌一般", "场面胶着", "手牌杂散", "进张尚可", "对手有威胁", "中盘未明", "牌河复杂", "局势均衡", "听口一般",
        ],
        b: &[
            "先稳后进", "控制节奏", "稳听保底", "小胡拿分", "守听等牌", "减少冒险", "稳住牌型", "择机加速", "观察再动", "守中求进",
        ],
    },
    SeedPair {
        a: &[
            "起手偏烂", "摸牌不顺", "场面逆风", "对手压制", "危险张多", "点炮风险高", "听口过窄", "失张连连", "牌势偏冷", "中盘落后",
        ],
        b: &[
            "先保安全口", "少碰少杠", "稳收分差", "先防后攻", "保分止损", "留足退路", "控制风险", "慢打等机", "避开危险张",
            "守牌为上",
        ],
    },
];

pub const HANDWRITTEN_TIPS: [&[&str]; 3] = [
    &[
        "顺风多提速，逆风先止损。", "有机会就收番，别在好牌上犹豫。", "手顺时多胡几口，拉开分差。", "积极主动，把握先机。",
    ],
    &[
        "先防守再进攻，手顺时再加速。", "中盘别恋清一色，稳定听牌更重要。", "稳住节奏比追番更重要。", "因势利导，随机应变。",
    ],
    &[
        "谨慎碰杠，守住安全牌再找机会。", "局势不明就先看牌，别急着碰。", "听牌后先稳守，别为了快胡乱打危险牌。", "知进退，明得失。",
    ],
];
