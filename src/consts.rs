use std::time::Duration;

/// Shortest digit string the scorer accepts.
pub const MIN_DIGITS: usize = 4;

/// Longest digit string the scorer accepts.
pub const MAX_DIGITS: usize = 8;

/// Number of supported lengths (4..=8), i.e. rows in the multiplier table.
pub const LENGTH_COUNT: usize = MAX_DIGITS - MIN_DIGITS + 1;

/// Number of weighted features.
pub const FEATURE_COUNT: usize = 7;

/// Score returned when every digit is identical.
pub const UNIFORM_SCORE: u8 = 100;

/// Score returned for a full-length run of consecutive digits (1234, 98765).
pub const SEQUENTIAL_SCORE: u8 = 95;

/// Safety bound on random draws in phase 2 of a search.
pub const DEFAULT_MAX_ATTEMPTS: u64 = 300_000;

/// Phase 1 reports progress every this many candidates.
pub const TEMPLATE_PROGRESS_EVERY: u64 = 128;

/// Phase 2 reports progress every this many draws.
pub const RANDOM_PROGRESS_EVERY: u64 = 512;

/// Wake-up granularity while a search is paused.
pub const PAUSE_POLL: Duration = Duration::from_millis(40);
