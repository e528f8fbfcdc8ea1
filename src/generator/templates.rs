//! Phase 1 candidates: structural templates plus lucky-token seeds.
//!
//! Enumeration order is part of the contract. When several candidates share a
//! score, the one enumerated first is emitted first.

use crate::config::ScoringConfig;
use crate::error::DfResult;
use crate::number::{encode_digits, space_size, validate_length};
use std::collections::HashSet;

/// Ordered, duplicate-free list of candidate digit strings of one length.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    items: Vec<Vec<u8>>,
    seen: HashSet<Vec<u8>>,
}

impl CandidateSet {
    pub fn push(&mut self, digits: Vec<u8>) {
        if self.seen.insert(digits.clone()) {
            self.items.push(digits);
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.items.iter().map(Vec::as_slice)
    }
}

#[inline(always)]
fn ascii(d: u8) -> u8 {
    b'0' + d
}

fn uniform(length: usize, set: &mut CandidateSet) {
    for d in 0..10 {
        set.push(vec![ascii(d); length]);
    }
}

fn palindromes(length: usize, set: &mut CandidateSet) {
    let half = length.div_ceil(2);
    let mut buf = vec![0u8; length];
    for value in 0..space_size(half) {
        encode_digits(value, &mut buf[..half]);
        for i in 0..length / 2 {
            buf[length - 1 - i] = buf[i];
        }
        set.push(buf.clone());
    }
}

fn consecutive_runs(length: usize, set: &mut CandidateSet) {
    let top = 10 - length as u8;
    for start in 0..=top {
        set.push((0..length as u8).map(|k| ascii(start + k)).collect());
        set.push((0..length as u8).rev().map(|k| ascii(start + k)).collect());
    }
}

fn alternations(length: usize, set: &mut CandidateSet) {
    for a in 0..10 {
        for b in 0..10 {
            if a == b {
                continue;
            }
            let pair = [ascii(a), ascii(b)];
            set.push((0..length).map(|k| pair[k % 2]).collect());
        }
    }
}

fn triples(length: usize, set: &mut CandidateSet) {
    if length % 3 != 0 {
        return;
    }
    for a in 0..10 {
        for b in 0..10 {
            for c in 0..10 {
                if a == b || b == c || a == c {
                    continue;
                }
                let block = [ascii(a), ascii(b), ascii(c)];
                set.push((0..length).map(|k| block[k % 3]).collect());
            }
        }
    }
}

// Only 2 and 3 pair-groups ("aabb", "aabbcc").
fn pair_blocks(length: usize, set: &mut CandidateSet) {
    if length % 2 != 0 {
        return;
    }
    match length / 2 {
        2 => {
            for a in 0..10 {
                for b in 0..10 {
                    set.push(vec![ascii(a), ascii(a), ascii(b), ascii(b)]);
                }
            }
        }
        3 => {
            for a in 0..10 {
                for b in 0..10 {
                    for c in 0..10 {
                        if c == a || c == b {
                            continue;
                        }
                        set.push(vec![
                            ascii(a),
                            ascii(a),
                            ascii(b),
                            ascii(b),
                            ascii(c),
                            ascii(c),
                        ]);
                    }
                }
            }
        }
        _ => {}
    }
}

/// Token placed at the start, end and centre of a filler run, in that order.
fn token_seeds(length: usize, cfg: &ScoringConfig, set: &mut CandidateSet) {
    for token in cfg.seed_tokens().filter(|t| t.len() <= length) {
        let token = token.as_bytes();
        let rest = length - token.len();
        for d in 0..10 {
            let fill = vec![ascii(d); rest];
            let fill = fill.as_slice();
            let left = rest / 2;

            set.push([token, fill].concat());
            set.push([fill, token].concat());
            set.push([&fill[..left], token, &fill[left..]].concat());
        }
    }
}

/// Fails with `InvalidInput` for lengths outside 4..=8.
pub fn build_candidates(length: usize, cfg: &ScoringConfig) -> DfResult<CandidateSet> {
    validate_length(length)?;
    let mut set = CandidateSet::default();
    uniform(length, &mut set);
    palindromes(length, &mut set);
    consecutive_runs(length, &mut set);
    alternations(length, &mut set);
    triples(length, &mut set);
    pair_blocks(length, &mut set);
    token_seeds(length, cfg, &mut set);
    Ok(set)
}
