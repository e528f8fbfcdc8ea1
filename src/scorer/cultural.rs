use super::types::TokenHits;
use crate::config::ScoringConfig;

/// Bonus/penalty from the configured tokens.
///
/// Each distinct token found as a substring counts once. The legacy digit sets
/// add one more bonus (or penalty) if any of their digits appears at all.
pub fn adjustment(number: &str, cfg: &ScoringConfig) -> f64 {
    let bonus = cfg.weights.lucky_bonus;
    let penalty = cfg.weights.unlucky_penalty;
    let mut score = 0.0;

    for token in &cfg.lucky_tokens {
        if !token.is_empty() && number.contains(token.as_str()) {
            score += bonus;
        }
    }
    for token in &cfg.unlucky_tokens {
        if !token.is_empty() && number.contains(token.as_str()) {
            score += penalty;
        }
    }

    if number.chars().any(|c| cfg.lucky_digits.contains(&c)) {
        score += bonus;
    }
    if number.chars().any(|c| cfg.unlucky_digits.contains(&c)) {
        score += penalty;
    }

    score
}

pub fn matched_tokens(number: &str, cfg: &ScoringConfig) -> TokenHits {
    let hits = |tokens: &std::collections::BTreeSet<String>| {
        tokens
            .iter()
            .filter(|t| !t.is_empty() && number.contains(t.as_str()))
            .cloned()
            .collect()
    };
    TokenHits {
        lucky: hits(&cfg.lucky_tokens),
        unlucky: hits(&cfg.unlucky_tokens),
    }
}
