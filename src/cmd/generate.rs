use super::EXIT_INVALID_INPUT;
use crate::reports;
use clap::Args;
use digitforge::categorizer::{CategorizationResult, Tier};
use digitforge::config::{ScoringConfig, ScoringWeights};
use digitforge::consts::DEFAULT_MAX_ATTEMPTS;
use digitforge::export;
use digitforge::generator::{
    GeneratedNumber, Generator, SearchControl, SearchEvent, SearchOutcome, SearchRequest,
};
use std::path::PathBuf;
use std::process;
use std::str::FromStr;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, error, info, warn};

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[arg(short = 'L', long, default_value_t = 6)]
    pub length: usize,

    #[arg(short = 't', long, default_value = "Gold", value_parser = Tier::from_str)]
    pub tier: Tier,

    #[arg(short = 'n', long, default_value_t = 10)]
    pub limit: usize,

    /// Seed for the random phase (reproducible runs).
    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u64,

    /// Cancel the search after this many seconds.
    #[arg(short = 'T', long)]
    pub time: Option<u64>,

    #[command(flatten)]
    pub weights: ScoringWeights,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long)]
    pub csv: Option<PathBuf>,
}

pub fn run(args: GenerateArgs, config: ScoringConfig) {
    let generator = Generator::new(config);

    let mut req = SearchRequest::new(args.length, args.tier, args.limit)
        .with_max_attempts(args.max_attempts);
    if let Some(seed) = args.seed {
        req = req.with_seed(seed);
    }

    let control = Arc::new(SearchControl::new());
    let handle = match generator.spawn_with_control(req, Arc::clone(&control)) {
        Ok(h) => h,
        Err(e) => {
            error!("❌ {}", e);
            process::exit(EXIT_INVALID_INPUT);
        }
    };

    if let Some(secs) = args.time {
        let timer = Arc::clone(&control);
        thread::spawn(move || {
            thread::sleep(Duration::from_secs(secs));
            timer.cancel();
        });
    }

    info!(
        "🔎 Searching {} numbers of length {} (limit {})",
        args.tier, args.length, args.limit
    );

    let mut found: Vec<GeneratedNumber> = Vec::new();
    for event in handle.events().iter() {
        match event {
            SearchEvent::Found(n) => {
                if !args.json {
                    println!("{}  {}", n.number, n.score);
                }
                found.push(n);
            }
            SearchEvent::Progress(p) => {
                debug!(
                    "{} {:>5.1}% | found {}/{} | eta {:?}",
                    p.phase,
                    p.fraction * 100.0,
                    p.found,
                    p.limit,
                    p.eta
                );
            }
            SearchEvent::Completed(_) => {}
        }
    }

    let summary = match handle.join() {
        Ok(s) => s,
        Err(e) => {
            error!("❌ {}", e);
            process::exit(1);
        }
    };

    match summary.outcome {
        SearchOutcome::Exhausted => warn!(
            "Search exhausted after {} random draws: found {} of {}",
            summary.random_attempts, summary.found, summary.limit
        ),
        SearchOutcome::Cancelled => warn!("Search cancelled: found {} of {}", summary.found, summary.limit),
        SearchOutcome::Satisfied => {}
    }

    let results: Vec<CategorizationResult> =
        found.iter().map(CategorizationResult::from_generated).collect();

    if args.json {
        match export::to_json(&results) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                error!("❌ {}", e);
                process::exit(1);
            }
        }
    } else {
        reports::print_search_summary(&summary);
    }

    if let Some(path) = &args.csv {
        if let Err(e) = export::write_csv_file(path, &results) {
            error!("❌ Failed to write '{}': {}", path.display(), e);
            process::exit(1);
        }
        info!("💾 Wrote {} rows to {}", results.len(), path.display());
    }
}
