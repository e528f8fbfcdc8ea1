use crate::config::Feature;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureScores {
    pub repetition: f64,
    pub sequence: f64,
    pub pattern: f64,
    pub periodic: f64,
    pub alternation: f64,
    pub rhythm: f64,
    pub unique_digit: f64,
}

impl FeatureScores {
    #[inline(always)]
    pub fn get(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Repetition => self.repetition,
            Feature::Sequence => self.sequence,
            Feature::Pattern => self.pattern,
            Feature::Periodic => self.periodic,
            Feature::Alternation => self.alternation,
            Feature::Rhythm => self.rhythm,
            Feature::UniqueDigit => self.unique_digit,
        }
    }

    pub fn set(&mut self, feature: Feature, value: f64) {
        match feature {
            Feature::Repetition => self.repetition = value,
            Feature::Sequence => self.sequence = value,
            Feature::Pattern => self.pattern = value,
            Feature::Periodic => self.periodic = value,
            Feature::Alternation => self.alternation = value,
            Feature::Rhythm => self.rhythm = value,
            Feature::UniqueDigit => self.unique_digit = value,
        }
    }
}

/// Structural cases that bypass the weighted model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shortcut {
    /// Every digit identical.
    Uniform,
    /// Whole string ascends or descends by one.
    Sequential,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenHits {
    pub lucky: Vec<String>,
    pub unlucky: Vec<String>,
}

impl TokenHits {
    pub fn is_empty(&self) -> bool {
        self.lucky.is_empty() && self.unlucky.is_empty()
    }
}

/// Full breakdown of a score, for reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetails {
    pub number: String,
    pub shortcut: Option<Shortcut>,

    // Raw feature values and the same values after length-aware weighting.
    // Both stay zero when a shortcut applies.
    pub features: FeatureScores,
    pub weighted: FeatureScores,

    pub cultural: f64,
    pub raw_total: f64,
    pub score: u8,
}
