use super::EXIT_INVALID_INPUT;
use crate::reports;
use clap::Args;
use digitforge::config::{ScoringConfig, ScoringWeights};
use digitforge::number::DigitString;
use digitforge::scorer;
use digitforge::{export, Categorizer};
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

#[derive(Args, Debug, Clone)]
pub struct CategorizeArgs {
    /// Numbers to score (4 to 8 digits each).
    #[arg(required = true)]
    pub numbers: Vec<String>,

    #[command(flatten)]
    pub weights: ScoringWeights,

    /// Print results as JSON instead of a table.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Also write results to this CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Show the per-feature breakdown of each score.
    #[arg(long, default_value_t = false)]
    pub explain: bool,
}

pub fn run(args: CategorizeArgs, config: ScoringConfig) {
    let categorizer = Categorizer::new(config);

    let mut results = Vec::new();
    let mut invalid = false;
    for (input, outcome) in args
        .numbers
        .iter()
        .zip(categorizer.categorize_batch(args.numbers.as_slice()))
    {
        match outcome {
            Ok(r) => results.push(r),
            Err(e) => {
                error!("'{}': {}", input, e);
                invalid = true;
            }
        }
    }

    if args.json {
        match export::to_json(&results) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                error!("❌ {}", e);
                process::exit(1);
            }
        }
    } else if !results.is_empty() {
        reports::print_categorization_table(&results);
    }

    if args.explain {
        for r in &results {
            // Already validated by the categorizer.
            if let Ok(number) = DigitString::parse(&r.number) {
                let details = scorer::score_details(&number, categorizer.config());
                let hits = scorer::matched_tokens(&r.number, categorizer.config());
                reports::print_score_details(&details, &hits);
            }
        }
    }

    if let Some(path) = &args.csv {
        if let Err(e) = export::write_csv_file(path, &results) {
            error!("❌ Failed to write '{}': {}", path.display(), e);
            process::exit(1);
        }
        info!("💾 Wrote {} rows to {}", results.len(), path.display());
    }

    if invalid {
        process::exit(EXIT_INVALID_INPUT);
    }
}
