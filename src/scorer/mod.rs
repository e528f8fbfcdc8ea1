pub mod cultural;
pub mod features;
pub mod types;

pub use self::cultural::matched_tokens;
pub use self::types::{FeatureScores, ScoreDetails, Shortcut, TokenHits};

use crate::config::{Feature, ScoringConfig};
use crate::consts::{SEQUENTIAL_SCORE, UNIFORM_SCORE};
use crate::number::DigitString;
use strum::IntoEnumIterator;

/// Memorability score in `0..=100` under `cfg`.
pub fn score(number: &DigitString, cfg: &ScoringConfig) -> u8 {
    score_digits(number.as_bytes(), cfg)
}

#[inline]
fn shortcut(d: &[u8]) -> Option<Shortcut> {
    if features::is_uniform(d) {
        Some(Shortcut::Uniform)
    } else if features::is_consecutive_run(d) {
        Some(Shortcut::Sequential)
    } else {
        None
    }
}

#[inline]
fn shortcut_score(s: Shortcut) -> u8 {
    match s {
        Shortcut::Uniform => UNIFORM_SCORE,
        Shortcut::Sequential => SEQUENTIAL_SCORE,
    }
}

#[inline]
fn finalize(raw: f64) -> u8 {
    // Clamp before rounding; NaN cannot occur with validated weights.
    raw.clamp(0.0, 100.0).round() as u8
}

fn weighted(raw: &FeatureScores, length: usize, cfg: &ScoringConfig) -> FeatureScores {
    let mut out = FeatureScores::default();
    for feature in Feature::iter() {
        out.set(feature, raw.get(feature) * cfg.effective_weight(feature, length));
    }
    out
}

fn weighted_sum(w: &FeatureScores) -> f64 {
    Feature::iter().map(|f| w.get(f)).sum()
}

/// Hot path for callers that already hold validated ASCII digits
/// (generator buffers, batch scoring).
pub(crate) fn score_digits(d: &[u8], cfg: &ScoringConfig) -> u8 {
    if let Some(s) = shortcut(d) {
        return shortcut_score(s);
    }

    let raw = features::extract(d);
    let total = weighted_sum(&weighted(&raw, d.len(), cfg));

    // Digits are ASCII, so the byte slice is valid UTF-8.
    let text = std::str::from_utf8(d).unwrap_or_default();
    finalize(total + cultural::adjustment(text, cfg))
}

pub fn score_details(number: &DigitString, cfg: &ScoringConfig) -> ScoreDetails {
    let d = number.as_bytes();

    if let Some(s) = shortcut(d) {
        let value = shortcut_score(s);
        return ScoreDetails {
            number: number.to_string(),
            shortcut: Some(s),
            features: FeatureScores::default(),
            weighted: FeatureScores::default(),
            cultural: 0.0,
            raw_total: value as f64,
            score: value,
        };
    }

    let features = features::extract(d);
    let weighted = weighted(&features, d.len(), cfg);
    let cultural = cultural::adjustment(number.as_str(), cfg);
    let raw_total = weighted_sum(&weighted) + cultural;

    ScoreDetails {
        number: number.to_string(),
        shortcut: None,
        features,
        weighted,
        cultural,
        raw_total,
        score: finalize(raw_total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(s: &str) -> DigitString {
        DigitString::parse(s).unwrap()
    }

    #[test]
    fn test_shortcuts_skip_cultural() {
        let cfg = ScoringConfig::default().apply_tokens(Vec::<&str>::new(), ["1"], "custom");
        assert_eq!(score(&n("1111"), &cfg), 100);
        assert_eq!(score(&n("1234"), &cfg), 95);
    }

    #[test]
    fn test_details_agree_with_score() {
        let cfg = ScoringConfig::default();
        for s in ["1221", "3141", "13571357", "90210", "7777", "98765"] {
            let num = n(s);
            let details = score_details(&num, &cfg);
            assert_eq!(details.score, score(&num, &cfg), "{}", s);
        }
    }

    #[test]
    fn test_details_shortcut_marker() {
        let cfg = ScoringConfig::default();
        assert_eq!(score_details(&n("0000"), &cfg).shortcut, Some(Shortcut::Uniform));
        assert_eq!(score_details(&n("43210"), &cfg).shortcut, Some(Shortcut::Sequential));
        assert_eq!(score_details(&n("1212"), &cfg).shortcut, None);
    }
}
