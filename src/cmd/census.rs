use super::EXIT_INVALID_INPUT;
use crate::reports;
use clap::Args;
use digitforge::census;
use digitforge::config::{ScoringConfig, ScoringWeights};
use std::process;
use std::time::Instant;
use tracing::{error, info};

#[derive(Args, Debug, Clone)]
pub struct CensusArgs {
    #[arg(short = 'L', long)]
    pub length: usize,

    #[command(flatten)]
    pub weights: ScoringWeights,
}

pub fn run(args: CensusArgs, config: ScoringConfig) {
    let start = Instant::now();
    match census::tier_census(args.length, &config) {
        Ok(c) => {
            info!("📊 Scored {} numbers in {:.2?}", c.total(), start.elapsed());
            reports::print_census(&c);
        }
        Err(e) => {
            error!("❌ {}", e);
            process::exit(EXIT_INVALID_INPUT);
        }
    }
}
