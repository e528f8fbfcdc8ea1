use crate::consts::{FEATURE_COUNT, LENGTH_COUNT, MAX_DIGITS, MIN_DIGITS};
use crate::error::{DfResult, DigitForgeError};
use crate::presets::CulturalPreset;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::warn;

/// The seven weighted features, in table column order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Repetition,
    Sequence,
    Pattern,
    Periodic,
    Alternation,
    Rhythm,
    UniqueDigit,
}

impl Feature {
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    // === FEATURE BASE WEIGHTS ===
    #[arg(long, default_value_t = 1.8)]
    pub repetition_weight: f64,
    #[arg(long, default_value_t = 1.6)]
    pub sequence_weight: f64,
    #[arg(long, default_value_t = 1.5)]
    pub pattern_weight: f64,
    #[arg(long, default_value_t = 1.3)]
    pub periodic_weight: f64,
    #[arg(long, default_value_t = 1.4)]
    pub alternation_weight: f64,
    #[arg(long, default_value_t = 1.2)]
    pub rhythm_weight: f64,
    #[arg(long, default_value_t = 0.8)]
    pub unique_digit_weight: f64,

    // === CULTURAL ===
    // Applied once per distinct matching token, plus once for the legacy digit sets.
    #[arg(long, default_value_t = 5.0, allow_negative_numbers = true)]
    pub lucky_bonus: f64,
    #[arg(long, default_value_t = -10.0, allow_negative_numbers = true)]
    pub unlucky_penalty: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            repetition_weight: 1.8,
            sequence_weight: 1.6,
            pattern_weight: 1.5,
            periodic_weight: 1.3,
            alternation_weight: 1.4,
            rhythm_weight: 1.2,
            unique_digit_weight: 0.8,
            lucky_bonus: 5.0,
            unlucky_penalty: -10.0,
        }
    }
}

impl ScoringWeights {
    #[inline(always)]
    pub fn base(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Repetition => self.repetition_weight,
            Feature::Sequence => self.sequence_weight,
            Feature::Pattern => self.pattern_weight,
            Feature::Periodic => self.periodic_weight,
            Feature::Alternation => self.alternation_weight,
            Feature::Rhythm => self.rhythm_weight,
            Feature::UniqueDigit => self.unique_digit_weight,
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> DfResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Copies only the values the user typed on the command line, so a loaded
    /// file keeps every weight that was not explicitly overridden.
    pub fn merge_from_cli(&mut self, cli_weights: &ScoringWeights, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_weights.$field;
                }
            };
        }

        update_if_present!(repetition_weight, "repetition_weight");
        update_if_present!(sequence_weight, "sequence_weight");
        update_if_present!(pattern_weight, "pattern_weight");
        update_if_present!(periodic_weight, "periodic_weight");
        update_if_present!(alternation_weight, "alternation_weight");
        update_if_present!(rhythm_weight, "rhythm_weight");
        update_if_present!(unique_digit_weight, "unique_digit_weight");

        update_if_present!(lucky_bonus, "lucky_bonus");
        update_if_present!(unlucky_penalty, "unlucky_penalty");
    }
}

/// Per-length multipliers, one row per supported length (4..=8), one column per [`Feature`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LengthMultipliers([[f64; FEATURE_COUNT]; LENGTH_COUNT]);

impl Default for LengthMultipliers {
    fn default() -> Self {
        // Short numbers favour visible shapes, long ones favour rhythm and periodicity.
        Self([
            [1.20, 1.20, 1.30, 1.00, 1.10, 1.00, 0.80],
            [1.15, 1.15, 1.20, 1.00, 1.05, 1.05, 0.90],
            [1.00, 1.00, 1.10, 1.10, 1.00, 1.10, 1.00],
            [0.95, 0.95, 1.00, 1.15, 1.00, 1.15, 1.10],
            [0.90, 0.90, 1.00, 1.20, 1.00, 1.20, 1.20],
        ])
    }
}

impl LengthMultipliers {
    /// All multipliers set to 1.0.
    pub fn flat() -> Self {
        Self([[1.0; FEATURE_COUNT]; LENGTH_COUNT])
    }

    #[inline(always)]
    fn row_index(length: usize) -> usize {
        length.clamp(MIN_DIGITS, MAX_DIGITS) - MIN_DIGITS
    }

    #[inline(always)]
    pub fn get(&self, length: usize, feature: Feature) -> f64 {
        self.0[Self::row_index(length)][feature.index()]
    }

    pub fn set(&mut self, length: usize, feature: Feature, value: f64) {
        self.0[Self::row_index(length)][feature.index()] = value;
    }

    pub fn row(&self, length: usize) -> &[f64; FEATURE_COUNT] {
        &self.0[Self::row_index(length)]
    }
}

/// Everything the scorer reads. Treated as an immutable snapshot: changes go
/// through [`ScoringConfig::apply_tokens`] / [`ScoringConfig::apply_preset`],
/// which return a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: ScoringWeights,
    pub length_multipliers: LengthMultipliers,
    pub lucky_tokens: BTreeSet<String>,
    pub unlucky_tokens: BTreeSet<String>,
    // Legacy single-digit sets, kept in sync with single-character tokens.
    pub lucky_digits: BTreeSet<char>,
    pub unlucky_digits: BTreeSet<char>,
    pub profile_name: String,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            length_multipliers: LengthMultipliers::default(),
            lucky_tokens: ["7", "8"].iter().map(|s| s.to_string()).collect(),
            unlucky_tokens: BTreeSet::new(),
            lucky_digits: ['7', '8'].into_iter().collect(),
            unlucky_digits: BTreeSet::new(),
            profile_name: "none".to_string(),
        }
    }
}

impl ScoringConfig {
    /// Base weight times the multiplier for `length`.
    #[inline(always)]
    pub fn effective_weight(&self, feature: Feature, length: usize) -> f64 {
        self.weights.base(feature) * self.length_multipliers.get(length, feature)
    }

    /// Returns a copy with the token sets replaced and the legacy digit sets
    /// rebuilt from the single-digit tokens.
    pub fn apply_tokens<L, U, S, T>(&self, lucky: L, unlucky: U, profile_name: &str) -> Self
    where
        L: IntoIterator<Item = S>,
        U: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let lucky_tokens = normalize_tokens(lucky);
        let unlucky_tokens = normalize_tokens(unlucky);

        Self {
            weights: self.weights.clone(),
            length_multipliers: self.length_multipliers.clone(),
            lucky_digits: single_digits(&lucky_tokens),
            unlucky_digits: single_digits(&unlucky_tokens),
            lucky_tokens,
            unlucky_tokens,
            profile_name: profile_name.to_string(),
        }
    }

    pub fn apply_preset(&self, preset: CulturalPreset) -> Self {
        self.apply_tokens(
            preset.lucky_tokens().iter().copied(),
            preset.unlucky_tokens().iter().copied(),
            &preset.to_string(),
        )
    }

    /// Lucky tokens usable as generation seeds: non-empty and digit-only.
    pub fn seed_tokens(&self) -> impl Iterator<Item = &str> {
        self.lucky_tokens
            .iter()
            .map(String::as_str)
            .filter(|t| is_digit_token(t))
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> DfResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&content)?;
        config.validated()
    }

    /// Drops unusable tokens, rebuilds the legacy digit sets from the
    /// single-digit tokens and rejects non-finite weights.
    pub fn validated(self) -> DfResult<Self> {
        let w = &self.weights;
        let values = [
            w.repetition_weight,
            w.sequence_weight,
            w.pattern_weight,
            w.periodic_weight,
            w.alternation_weight,
            w.rhythm_weight,
            w.unique_digit_weight,
            w.lucky_bonus,
            w.unlucky_penalty,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(DigitForgeError::Config(
                "weights must be finite numbers".to_string(),
            ));
        }
        for length in MIN_DIGITS..=MAX_DIGITS {
            if self.length_multipliers.row(length).iter().any(|v| !v.is_finite()) {
                return Err(DigitForgeError::Config(format!(
                    "length multipliers for {} digits must be finite",
                    length
                )));
            }
        }

        // Digit sets always follow the tokens, whatever the file said.
        let lucky_tokens = normalize_tokens(self.lucky_tokens);
        let unlucky_tokens = normalize_tokens(self.unlucky_tokens);

        Ok(Self {
            lucky_digits: single_digits(&lucky_tokens),
            unlucky_digits: single_digits(&unlucky_tokens),
            lucky_tokens,
            unlucky_tokens,
            ..self
        })
    }
}

/// Splits a comma separated token list ("13, 666,7").
pub fn parse_token_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

fn is_digit_token(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

fn normalize_tokens<I, S>(tokens: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = BTreeSet::new();
    for token in tokens {
        let token = token.as_ref().trim();
        if token.is_empty() {
            continue;
        }
        if !is_digit_token(token) {
            warn!("Ignoring non-digit token '{}'", token);
            continue;
        }
        out.insert(token.to_string());
    }
    out
}

fn single_digits(tokens: &BTreeSet<String>) -> BTreeSet<char> {
    tokens
        .iter()
        .filter(|t| t.len() == 1)
        .filter_map(|t| t.chars().next())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_weight_uses_length_row() {
        let cfg = ScoringConfig::default();
        let w = cfg.effective_weight(Feature::Pattern, 4);
        assert!((w - 1.5 * 1.3).abs() < 1e-12);
        let w = cfg.effective_weight(Feature::UniqueDigit, 8);
        assert!((w - 0.8 * 1.2).abs() < 1e-12);

        let mut cfg = cfg;
        cfg.length_multipliers.set(5, Feature::Rhythm, 2.0);
        assert!((cfg.effective_weight(Feature::Rhythm, 5) - 1.2 * 2.0).abs() < 1e-12);
        // Out-of-range lengths clamp to the nearest row.
        assert_eq!(cfg.length_multipliers.row(3), cfg.length_multipliers.row(4));
    }

    #[test]
    fn test_apply_tokens_syncs_digit_sets() {
        let cfg = ScoringConfig::default().apply_tokens(["13", " 7 ", "", "x9"], ["4"], "custom");
        assert_eq!(
            cfg.lucky_tokens.iter().collect::<Vec<_>>(),
            vec!["13", "7"]
        );
        assert_eq!(cfg.lucky_digits.iter().collect::<Vec<_>>(), vec![&'7']);
        assert_eq!(cfg.unlucky_digits.iter().collect::<Vec<_>>(), vec![&'4']);
        assert_eq!(cfg.profile_name, "custom");
    }

    #[test]
    fn test_parse_token_list() {
        assert_eq!(parse_token_list(" 13, 666,,7 "), vec!["13", "666", "7"]);
        assert!(parse_token_list("").is_empty());
    }
}
