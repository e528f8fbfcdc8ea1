use crate::categorizer::Tier;
use crate::config::ScoringConfig;
use crate::error::DfResult;
use crate::number::{encode_digits, space_size, validate_length};
use crate::scorer;
use rayon::prelude::*;
use serde::Serialize;
use strum::IntoEnumIterator;

const TIER_COUNT: usize = 5;

/// How many digit strings of one length fall into each tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierCensus {
    pub length: usize,
    counts: [u64; TIER_COUNT],
}

impl TierCensus {
    pub fn count(&self, tier: Tier) -> u64 {
        self.counts[tier as usize]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// `(tier, count, share of total)`, highest tier first.
    pub fn rows(&self) -> Vec<(Tier, u64, f64)> {
        let total = self.total().max(1) as f64;
        Tier::iter()
            .rev()
            .map(|t| (t, self.count(t), self.count(t) as f64 / total))
            .collect()
    }
}

/// Scores the whole space of `length`-digit strings. 10^8 strings at length 8,
/// so this is a batch job, not an interactive call.
pub fn tier_census(length: usize, cfg: &ScoringConfig) -> DfResult<TierCensus> {
    validate_length(length)?;

    let counts = (0..space_size(length))
        .into_par_iter()
        .fold(
            || ([0u64; TIER_COUNT], vec![0u8; length]),
            |(mut counts, mut buf), value| {
                encode_digits(value, &mut buf);
                let tier = Tier::for_score(scorer::score_digits(&buf, cfg));
                counts[tier as usize] += 1;
                (counts, buf)
            },
        )
        .map(|(counts, _)| counts)
        .reduce(
            || [0u64; TIER_COUNT],
            |mut a, b| {
                for (x, y) in a.iter_mut().zip(b) {
                    *x += y;
                }
                a
            },
        );

    Ok(TierCensus { length, counts })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_census_covers_space() {
        let census = tier_census(4, &ScoringConfig::default()).unwrap();
        assert_eq!(census.total(), 10_000);
        // Uniform strings alone guarantee ten premiums.
        assert!(census.count(Tier::Premium) >= 10);
        assert_eq!(census.rows()[0].0, Tier::Premium);
    }

    #[test]
    fn test_census_rejects_bad_length() {
        assert!(tier_census(3, &ScoringConfig::default()).is_err());
    }
}
