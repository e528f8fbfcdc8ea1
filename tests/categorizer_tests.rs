use digitforge::categorizer::{tier_for_score, CategorizationResult, Categorizer, Tier};
use digitforge::config::ScoringConfig;
use digitforge::DigitForgeError;
use rstest::rstest;
use std::str::FromStr;

#[rstest]
#[case("7777", Tier::Premium, 100)]
#[case("1234", Tier::Premium, 95)]
#[case("1212", Tier::Platinum, 91)]
#[case("11223344", Tier::Platinum, 94)]
#[case("1221", Tier::Gold, 77)]
#[case("13571357", Tier::Silver, 57)]
#[case("3141", Tier::Bronze, 10)]
fn test_categorize(#[case] input: &str, #[case] tier: Tier, #[case] score: u8) {
    let c = Categorizer::default();
    let r = c.categorize(input).unwrap();
    assert_eq!(
        r,
        CategorizationResult {
            number: input.to_string(),
            digit_category: format!("{}-digit", input.len()),
            subcategory: tier,
            score,
        }
    );
}

#[rstest]
#[case("123")]
#[case("123456789")]
#[case("")]
#[case("12a4")]
#[case("12 34")]
#[case("-1234")]
fn test_invalid_input(#[case] input: &str) {
    let c = Categorizer::default();
    assert!(matches!(
        c.categorize(input),
        Err(DigitForgeError::InvalidInput(_))
    ));
}

#[test]
fn test_leading_zero_accepted() {
    let r = Categorizer::default().categorize("0042").unwrap();
    assert_eq!(r.number, "0042");
    assert_eq!(r.digit_category, "4-digit");
}

#[test]
fn test_categorize_is_pure() {
    let c = Categorizer::default();
    for n in ["90210", "867530", "73915284"] {
        assert_eq!(c.categorize(n).unwrap(), c.categorize(n).unwrap());
    }
}

#[test]
fn test_batch_keeps_order_and_errors() {
    let c = Categorizer::default();
    let inputs = vec!["1212", "12", "7777", "abcd", "3141"];
    let out = c.categorize_batch(&inputs);

    assert_eq!(out.len(), 5);
    assert_eq!(out[0].as_ref().unwrap().number, "1212");
    assert!(out[1].is_err());
    assert_eq!(out[2].as_ref().unwrap().subcategory, Tier::Premium);
    assert!(out[3].is_err());
    assert_eq!(out[4].as_ref().unwrap().score, 10);
}

#[test]
fn test_tier_labels() {
    assert_eq!(Tier::Premium.to_string(), "Premium");
    assert_eq!(Tier::from_str("gold").unwrap(), Tier::Gold);
    assert!(Tier::Bronze < Tier::Silver && Tier::Platinum < Tier::Premium);
    assert_eq!(tier_for_score(74), Tier::Silver);
}

#[test]
fn test_json_shape() {
    let r = Categorizer::new(ScoringConfig::default())
        .categorize("1221")
        .unwrap();
    let v: serde_json::Value = serde_json::to_value(&r).unwrap();
    assert_eq!(
        v,
        serde_json::json!({
            "number": "1221",
            "digit_category": "4-digit",
            "subcategory": "Gold",
            "score": 77
        })
    );
}
