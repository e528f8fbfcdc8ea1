use crate::config::ScoringConfig;
use crate::error::DfResult;
use crate::generator::GeneratedNumber;
use crate::number::DigitString;
use crate::scorer;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Quality tiers, ordered from lowest to highest.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Premium,
}

impl Tier {
    pub fn for_score(score: u8) -> Self {
        match score {
            95.. => Self::Premium,
            90..=94 => Self::Platinum,
            75..=89 => Self::Gold,
            50..=74 => Self::Silver,
            _ => Self::Bronze,
        }
    }

    /// Lowest score that maps to this tier.
    pub fn min_score(self) -> u8 {
        match self {
            Self::Premium => 95,
            Self::Platinum => 90,
            Self::Gold => 75,
            Self::Silver => 50,
            Self::Bronze => 0,
        }
    }
}

/// Score to tier boundary table.
#[inline]
pub fn tier_for_score(score: u8) -> Tier {
    Tier::for_score(score)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizationResult {
    pub number: String,
    pub digit_category: String,
    pub subcategory: Tier,
    pub score: u8,
}

impl CategorizationResult {
    pub fn new(number: &DigitString, score: u8) -> Self {
        Self {
            number: number.to_string(),
            digit_category: number.digit_category(),
            subcategory: Tier::for_score(score),
            score,
        }
    }

    pub fn from_generated(generated: &GeneratedNumber) -> Self {
        Self {
            number: generated.number.clone(),
            digit_category: format!("{}-digit", generated.number.len()),
            subcategory: Tier::for_score(generated.score),
            score: generated.score,
        }
    }
}

/// Scores and tiers numbers against one configuration snapshot.
#[derive(Debug, Clone, Default)]
pub struct Categorizer {
    config: ScoringConfig,
}

impl Categorizer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn categorize(&self, number: &str) -> DfResult<CategorizationResult> {
        let number = DigitString::parse(number)?;
        let score = scorer::score(&number, &self.config);
        Ok(CategorizationResult::new(&number, score))
    }

    /// Parallel [`Categorizer::categorize`]; output order matches input order.
    pub fn categorize_batch<S>(&self, numbers: &[S]) -> Vec<DfResult<CategorizationResult>>
    where
        S: AsRef<str> + Sync,
    {
        numbers
            .par_iter()
            .map(|n| self.categorize(n.as_ref()))
            .collect()
    }
}
