use super::EXIT_INVALID_INPUT;
use crate::reports;
use clap::Args;
use digitforge::config::{ScoringConfig, ScoringWeights};
use digitforge::Generator;
use std::process;
use tracing::{error, info};

#[derive(Args, Debug, Clone)]
pub struct NearbyArgs {
    pub number: String,

    #[arg(short = 'c', long, default_value_t = 10)]
    pub count: usize,

    #[command(flatten)]
    pub weights: ScoringWeights,
}

pub fn run(args: NearbyArgs, config: ScoringConfig) {
    let generator = Generator::new(config);

    match generator.suggest_nearby(&args.number, args.count) {
        Ok(suggestions) if suggestions.is_empty() => {
            info!("No higher scoring variant of {} found.", args.number);
        }
        Ok(suggestions) => reports::print_generated(&suggestions),
        Err(e) => {
            error!("'{}': {}", args.number, e);
            process::exit(EXIT_INVALID_INPUT);
        }
    }
}
