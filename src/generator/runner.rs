use super::control::{Progress, SearchControl, SearchEvent, SearchPhase, SearchSink};
use super::templates;
use super::GeneratedNumber;
use crate::categorizer::Tier;
use crate::config::ScoringConfig;
use crate::consts::{DEFAULT_MAX_ATTEMPTS, RANDOM_PROGRESS_EVERY, TEMPLATE_PROGRESS_EVERY};
use crate::error::{DfResult, DigitForgeError};
use crate::number::{encode_digits, space_size, validate_length};
use crate::scorer;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::{Duration, Instant};
use strum_macros::Display;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub length: usize,
    pub tier: Tier,
    pub limit: usize,
    /// Seeds the random phase. `None` draws from entropy.
    pub seed: Option<u64>,
    pub max_attempts: u64,
}

impl SearchRequest {
    pub fn new(length: usize, tier: Tier, limit: usize) -> Self {
        Self {
            length,
            tier,
            limit,
            seed: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn validate(&self) -> DfResult<()> {
        validate_length(self.length)?;
        if self.limit == 0 {
            return Err(DigitForgeError::InvalidInput(
                "limit must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum SearchOutcome {
    /// `limit` matches were found.
    Satisfied,
    /// Both phases ran out of candidates first. Partial results are still valid.
    Exhausted,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSummary {
    pub found: usize,
    pub limit: usize,
    pub templates_scored: u64,
    pub random_attempts: u64,
    pub outcome: SearchOutcome,
    pub elapsed: Duration,
}

/// Per-run state threaded through both phases.
struct Run<'a, S: SearchSink + ?Sized> {
    cfg: &'a ScoringConfig,
    req: &'a SearchRequest,
    control: &'a SearchControl,
    sink: &'a mut S,
    started: Instant,
    // Every value scored so far, template or random, keyed by its numeric value.
    seen: HashSet<u64>,
    found: usize,
    cancelled: bool,
}

impl<S: SearchSink + ?Sized> Run<'_, S> {
    fn satisfied(&self) -> bool {
        self.found >= self.req.limit
    }

    /// Scores `digits` unless already seen; emits it on a tier match.
    fn consider(&mut self, value: u64, digits: &[u8]) {
        if !self.seen.insert(value) {
            return;
        }
        let score = scorer::score_digits(digits, self.cfg);
        if Tier::for_score(score) == self.req.tier {
            self.found += 1;
            self.sink.emit(SearchEvent::Found(GeneratedNumber {
                number: String::from_utf8_lossy(digits).into_owned(),
                score,
            }));
        }
    }

    fn progress(&mut self, phase: SearchPhase, processed: u64, total: u64) {
        let p = Progress::new(
            phase,
            processed,
            total,
            self.found,
            self.req.limit,
            self.started.elapsed(),
        );
        self.sink.emit(SearchEvent::Progress(p));
    }

    fn templates(&mut self) -> DfResult<u64> {
        let candidates = templates::build_candidates(self.req.length, self.cfg)?;
        let total = candidates.len() as u64;
        debug!(
            "Template phase: {} candidates for length {}",
            total, self.req.length
        );

        let mut processed = 0u64;
        for digits in candidates.iter() {
            if !self.control.checkpoint() {
                self.cancelled = true;
                break;
            }
            self.consider(digit_value(digits), digits);
            processed += 1;

            if self.satisfied() {
                break;
            }
            if processed % TEMPLATE_PROGRESS_EVERY == 0 {
                self.progress(SearchPhase::Templates, processed, total);
            }
        }
        Ok(processed)
    }

    fn random(&mut self) -> u64 {
        let mut rng = if let Some(s) = self.req.seed {
            fastrand::Rng::with_seed(s)
        } else {
            fastrand::Rng::new()
        };

        let length = self.req.length;
        let space = space_size(length);
        let cap = self.req.max_attempts;
        let mut buf = vec![0u8; length];
        debug!(
            "Random phase: up to {} draws, {} already found",
            cap, self.found
        );

        let mut attempts = 0u64;
        while attempts < cap {
            if !self.control.checkpoint() {
                self.cancelled = true;
                break;
            }
            // Nothing left to draw.
            if self.seen.len() as u64 >= space {
                break;
            }

            let value = rng.u64(0..space);
            attempts += 1;
            encode_digits(value, &mut buf);
            self.consider(value, &buf);

            if self.satisfied() {
                break;
            }
            if attempts % RANDOM_PROGRESS_EVERY == 0 {
                self.progress(SearchPhase::Random, attempts, cap);
            }
        }
        attempts
    }
}

#[inline]
fn digit_value(digits: &[u8]) -> u64 {
    digits
        .iter()
        .fold(0u64, |acc, &b| acc * 10 + u64::from(b - b'0'))
}

/// Runs both phases on the calling thread. The last event emitted is always
/// [`SearchEvent::Completed`].
pub fn run_search<S: SearchSink + ?Sized>(
    cfg: &ScoringConfig,
    req: &SearchRequest,
    control: &SearchControl,
    sink: &mut S,
) -> DfResult<SearchSummary> {
    req.validate()?;

    let mut run = Run {
        cfg,
        req,
        control,
        sink,
        started: Instant::now(),
        seen: HashSet::new(),
        found: 0,
        cancelled: false,
    };

    let templates_scored = run.templates()?;
    let random_attempts = if !run.cancelled && !run.satisfied() {
        run.random()
    } else {
        0
    };

    let outcome = if run.cancelled {
        SearchOutcome::Cancelled
    } else if run.satisfied() {
        SearchOutcome::Satisfied
    } else {
        SearchOutcome::Exhausted
    };

    let summary = SearchSummary {
        found: run.found,
        limit: req.limit,
        templates_scored,
        random_attempts,
        outcome,
        elapsed: run.started.elapsed(),
    };

    info!(
        "Search finished: {}/{} {} numbers of length {} ({}, {} templates, {} random draws, {:.2?})",
        summary.found,
        summary.limit,
        req.tier,
        req.length,
        summary.outcome,
        summary.templates_scored,
        summary.random_attempts,
        summary.elapsed
    );

    run.sink.emit(SearchEvent::Completed(summary.clone()));
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_value() {
        assert_eq!(digit_value(b"0042"), 42);
        assert_eq!(digit_value(b"00420"), 420);
    }

    #[test]
    fn test_zero_limit_rejected() {
        let req = SearchRequest::new(4, Tier::Gold, 0);
        assert!(req.validate().is_err());
        let req = SearchRequest::new(9, Tier::Gold, 1);
        assert!(req.validate().is_err());
    }
}
