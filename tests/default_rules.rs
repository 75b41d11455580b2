use mahjong_fortune::{generate_fortune, FortuneInput, LongitudeInput};

#[test]
fn scoring_env_vars_do_not_reach_the_engine() {
    let input = FortuneInput::new("罗达", "2000-11-01")
        .with_time("18:00")
        .with_longitude(LongitudeInput::Text("104.06".to_string()))
        .on_date("2026-02-09");
    let before = generate_fortune(&input);

    std::env::set_var("FORTUNE_BASE_MIN", "-500");
    std::env::set_var("FORTUNE_BASE_MAX", "-500");
    std::env::set_var("FORTUNE_ALMANAC_SCALE", "40");
    let after = generate_fortune(&input);
    std::env::remove_var("FORTUNE_BASE_MIN");
    std::env::remove_var("FORTUNE_BASE_MAX");
    std::env::remove_var("FORTUNE_ALMANAC_SCALE");

    assert_eq!(
        serde_json::to_string(&before).expect("serialize"),
        serde_json::to_string(&after).expect("serialize")
    );
    assert!((58..=72).contains(&after.score_breakdown.base));
}
