pub mod categorizer;
pub mod census;
pub mod config;
pub mod consts;
pub mod error;
pub mod export;
pub mod generator;
pub mod number;
pub mod presets;
pub mod scorer;

pub use categorizer::{tier_for_score, CategorizationResult, Categorizer, Tier};
pub use config::ScoringConfig;
pub use error::{DfResult, DigitForgeError};
pub use generator::{GeneratedNumber, Generator};
pub use number::DigitString;
// cmd and reports belong to the binary (main.rs).
