pub mod categorize;
pub mod census;
pub mod generate;
pub mod nearby;

/// Exit status for rejected input (bad number, bad length).
pub const EXIT_INVALID_INPUT: i32 = 2;
