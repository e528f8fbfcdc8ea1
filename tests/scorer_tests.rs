use digitforge::config::{LengthMultipliers, ScoringConfig};
use digitforge::number::DigitString;
use digitforge::scorer::{score, score_details, Shortcut};
use rstest::rstest;

fn num(s: &str) -> DigitString {
    DigitString::parse(s).unwrap()
}

fn empty_tokens() -> ScoringConfig {
    ScoringConfig::default().apply_tokens(Vec::<&str>::new(), Vec::<&str>::new(), "none")
}

#[rstest]
#[case("0000", 100)]
#[case("7777", 100)]
#[case("99999999", 100)]
#[case("1234", 95)]
#[case("4321", 95)]
#[case("98765", 95)]
#[case("23456789", 95)]
fn test_shortcut_scores(#[case] input: &str, #[case] expected: u8) {
    assert_eq!(score(&num(input), &ScoringConfig::default()), expected);
}

#[rstest]
#[case("1212", 91)]
#[case("1313", 91)]
#[case("5050", 91)]
#[case("1221", 77)]
#[case("1122", 100)]
#[case("3141", 10)]
#[case("2580", 17)]
#[case("13579", 18)]
#[case("90210", 39)]
#[case("867530", 23)]
#[case("13571357", 57)]
#[case("11223344", 94)]
#[case("12341234", 100)]
#[case("73915284", 24)]
fn test_default_config_scores(#[case] input: &str, #[case] expected: u8) {
    assert_eq!(score(&num(input), &ScoringConfig::default()), expected, "{}", input);
}

#[rstest]
#[case("2580", 7)]
#[case("13579", 8)]
#[case("13571357", 47)]
fn test_scores_without_tokens(#[case] input: &str, #[case] expected: u8) {
    assert_eq!(score(&num(input), &empty_tokens()), expected, "{}", input);
}

#[test]
fn test_lucky_digit_bonus_counts_once() {
    // "7" is both a token and a lucky digit: +5 for the token, +5 for the digit set,
    // no matter how many sevens appear.
    let base = empty_tokens();
    let lucky = base.apply_tokens(["7"], Vec::<&str>::new(), "custom");

    let d = score_details(&num("1727"), &lucky);
    assert!((d.cultural - 10.0).abs() < 1e-9);
    let d = score_details(&num("1747"), &lucky);
    assert!((d.cultural - 10.0).abs() < 1e-9);
}

#[test]
fn test_multi_digit_token_counted_per_distinct_token() {
    let cfg = empty_tokens().apply_tokens(Vec::<&str>::new(), ["13", "666"], "custom");
    let d = score_details(&num("13136660"), &cfg);
    // Two distinct tokens match; "13" twice still counts once.
    assert!((d.cultural - (-20.0)).abs() < 1e-9);
}

#[test]
fn test_score_clamps_to_zero() {
    let cfg = empty_tokens().apply_tokens(
        Vec::<&str>::new(),
        ["3", "1", "4", "31", "14", "41"],
        "custom",
    );
    assert_eq!(score(&num("3141"), &cfg), 0);
}

#[test]
fn test_flat_multipliers_change_weighting() {
    let mut cfg = ScoringConfig::default();
    let before = score(&num("1221"), &cfg);
    cfg.length_multipliers = LengthMultipliers::flat();
    let after = score(&num("1221"), &cfg);
    assert_eq!((before, after), (77, 65));
}

#[test]
fn test_details_report_shortcut() {
    let d = score_details(&num("5678"), &ScoringConfig::default());
    assert_eq!(d.shortcut, Some(Shortcut::Sequential));
    assert_eq!(d.score, 95);
    assert_eq!(d.cultural, 0.0);
}

#[test]
fn test_leading_zero_scored_as_digits() {
    // Scored as the palindrome "0770", not as the integer 770.
    assert_eq!(score(&num("0770"), &ScoringConfig::default()), 87);
}
