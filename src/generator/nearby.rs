use super::GeneratedNumber;
use crate::config::ScoringConfig;
use crate::number::DigitString;
use crate::scorer;
use std::collections::HashSet;

/// Small edits of `d`, in the order they are tried. May contain duplicates.
fn variants(d: &[u8], cfg: &ScoringConfig) -> Vec<Vec<u8>> {
    let n = d.len();
    let mut out = Vec::new();

    // Mirror the first half.
    let mut mirrored = d.to_vec();
    for i in 0..n / 2 {
        mirrored[n - 1 - i] = d[i];
    }
    if mirrored != d {
        out.push(mirrored);
    }

    for i in 1..n {
        let mut v = d.to_vec();
        v[i] = d[i - 1];
        out.push(v);
    }

    if d[0] != d[1] {
        out.push((0..n).map(|k| d[k % 2]).collect());
    }

    for token in cfg.seed_tokens().filter(|t| t.len() <= n) {
        let token = token.as_bytes();
        let rest = n - token.len();
        let fill = vec![d[0]; rest];
        let fill = fill.as_slice();
        let left = rest / 2;

        out.push([token, fill].concat());
        out.push([&fill[..left], token, &fill[left..]].concat());
        out.push([fill, token].concat());
    }

    out
}

/// Variants of `number` scoring strictly higher, best first, at most `count`.
pub fn suggest_nearby(
    number: &DigitString,
    count: usize,
    cfg: &ScoringConfig,
) -> Vec<GeneratedNumber> {
    let base = scorer::score(number, cfg);
    let mut seen = HashSet::new();

    let mut better: Vec<GeneratedNumber> = variants(number.as_bytes(), cfg)
        .into_iter()
        .filter(|v| seen.insert(v.clone()))
        .filter_map(|v| {
            let score = scorer::score_digits(&v, cfg);
            (score > base).then(|| GeneratedNumber {
                number: String::from_utf8_lossy(&v).into_owned(),
                score,
            })
        })
        .collect();

    // Stable: equal scores keep the order they were generated in.
    better.sort_by(|a, b| b.score.cmp(&a.score));
    better.truncate(count);
    better
}
