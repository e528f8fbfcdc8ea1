//! Raw feature extraction. Every function takes the ASCII digits of an
//! already-validated number.

use super::types::FeatureScores;

#[inline(always)]
fn digit(b: u8) -> i8 {
    (b - b'0') as i8
}

pub fn is_uniform(d: &[u8]) -> bool {
    d.iter().all(|&b| b == d[0])
}

/// True when each digit is the previous one +1 (or each is -1) across the whole string.
pub fn is_consecutive_run(d: &[u8]) -> bool {
    let steps = || d.windows(2).map(|w| digit(w[1]) - digit(w[0]));
    steps().all(|s| s == 1) || steps().all(|s| s == -1)
}

/// Lengths of the maximal equal-digit runs, left to right.
pub fn run_lengths(d: &[u8]) -> Vec<usize> {
    d.chunk_by(|a, b| a == b).map(<[u8]>::len).collect()
}

/// Smallest p dividing the length such that the string is its first p digits repeated.
pub fn minimal_period(d: &[u8]) -> usize {
    let len = d.len();
    (1..len)
        .filter(|p| len % p == 0)
        .find(|&p| d.chunks(p).all(|c| c == &d[..p]))
        .unwrap_or(len)
}

pub fn repetition(runs: &[usize]) -> f64 {
    runs.iter()
        .filter(|&&r| r >= 2)
        .map(|&r| (r as f64).powf(2.5))
        .sum()
}

pub fn sequence(d: &[u8]) -> f64 {
    let mut sum = 0.0;
    for w in d.windows(3) {
        let (a, b, c) = (digit(w[0]), digit(w[1]), digit(w[2]));
        if b - a == 1 && c - b == 1 {
            sum += 15.0;
        }
        if a - b == 1 && b - c == 1 {
            sum += 15.0;
        }
    }
    sum
}

pub fn pattern(d: &[u8]) -> f64 {
    let mut score = 0.0;
    if d.iter().eq(d.iter().rev()) {
        score += 25.0;
    }
    if d.len() == 4 {
        // AABB
        if d[0] == d[1] && d[2] == d[3] {
            score += 20.0;
        }
        // ABAB
        if d[0] == d[2] && d[1] == d[3] {
            score += 20.0;
        }
    }
    if d.len() % 2 == 0 && d.chunks(2).all(|pair| pair[0] == pair[1]) {
        score += 14.0;
    }
    score
}

pub fn periodic(len: usize, period: usize) -> f64 {
    if period < len {
        (len as f64 / period as f64 - 1.0) * 12.0
    } else {
        0.0
    }
}

pub fn alternation(d: &[u8], period: usize) -> f64 {
    if period == 2 && d[0] != d[1] {
        15.0
    } else {
        0.0
    }
}

pub fn rhythm(len: usize, run_count: usize) -> f64 {
    (len as f64 / run_count as f64) * 6.0
}

pub fn unique_digit(d: &[u8]) -> f64 {
    let mut seen = [false; 10];
    let mut unique = 0;
    for &b in d {
        let i = (b - b'0') as usize;
        if !seen[i] {
            seen[i] = true;
            unique += 1;
        }
    }
    ((d.len() - unique) * 5) as f64
}

pub fn extract(d: &[u8]) -> FeatureScores {
    let runs = run_lengths(d);
    let period = minimal_period(d);
    FeatureScores {
        repetition: repetition(&runs),
        sequence: sequence(d),
        pattern: pattern(d),
        periodic: periodic(d.len(), period),
        alternation: alternation(d, period),
        rhythm: rhythm(d.len(), runs.len()),
        unique_digit: unique_digit(d),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_and_period() {
        assert_eq!(run_lengths(b"112223"), vec![2, 3, 1]);
        assert_eq!(minimal_period(b"121212"), 2);
        assert_eq!(minimal_period(b"123123"), 3);
        assert_eq!(minimal_period(b"12341235"), 8);
        assert_eq!(minimal_period(b"5555"), 1);
    }

    #[test]
    fn test_consecutive_run() {
        assert!(is_consecutive_run(b"3456"));
        assert!(is_consecutive_run(b"87654"));
        assert!(!is_consecutive_run(b"1235"));
        assert!(!is_consecutive_run(b"9012"));
    }

    #[test]
    fn test_pattern_shapes() {
        // palindrome only
        assert_eq!(pattern(b"1221"), 25.0);
        // AABB + pairs
        assert_eq!(pattern(b"1122"), 34.0);
        // ABAB only
        assert_eq!(pattern(b"1212"), 20.0);
        assert_eq!(pattern(b"112233"), 14.0);
    }

    #[test]
    fn test_sequence_windows() {
        assert_eq!(sequence(b"12398"), 15.0);
        assert_eq!(sequence(b"1234"), 30.0);
        assert_eq!(sequence(b"3210"), 30.0);
        assert_eq!(sequence(b"1357"), 0.0);
    }

    #[test]
    fn test_repetition_power() {
        let r = repetition(&run_lengths(b"1112"));
        assert!((r - 3f64.powf(2.5)).abs() < 1e-9);
    }
}
