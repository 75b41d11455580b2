pub const UNKNOWN: &str = "未知";

struct Range {
    name: &'static str,
    from: (u32, u32),
    to: (u32, u32),
}

const CONSTELLATIONS: [Range; 12] = [
    Range { name: "摩羯座", from: (12, 22), to: (1, 19) },
    Range { name: "水瓶座", from: (1, 20), to: (2, 18) },
    Range { name: "双鱼座", from: (2, 19), to: (3, 20) },
    Range { name: "白羊座", from: (3, 21), to: (4, 19) },
    Range { name: "金牛座", from: (4, 20), to: (5, 20) },
    Range { name: "双子座", from: (5, 21), to: (6, 21) },
    Range { name: "巨蟹座", from: (6, 22), to: (7, 22) },
    Range { name: "狮子座", from: (7, 23), to: (8, 22) },
    Range { name: "处女座", from: (8, 23), to: (9, 22) },
    Range { name: "天秤座", from: (9, 23), to: (10, 23) },
    Range { name: "天蝎座", from: (10, 24), to: (11, 22) },
    Range { name: "射手座", from: (11, 23), to: (12, 21) },
];

/// Western sun sign for a month/day pair, `未知` when nothing matches.
pub fn constellation(month: u32, day: u32) -> &'static str {
    for range in CONSTELLATIONS.iter() {
        let (fm, fd) = range.from;
        let (tm, td) = range.to;
        if month == fm && day >= fd {
            return range.name;
        }
        if month == tm && day <= td {
            return range.name;
        }
        let between = if fm <= tm {
            month > fm && month < tm
        } else {
            month > fm || month < tm
        };
        if between {
            return range.name;
        }
    }
    UNKNOWN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert_eq!(constellation(12, 22), "摩羯座");
        assert_eq!(constellation(1, 19), "摩羯座");
        assert_eq!(constellation(1, 20), "水瓶座");
        assert_eq!(constellation(11, 1), "天蝎座");
        assert_eq!(constellation(3, 21), "白羊座");
    }
}
