use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use digitforge::config::{parse_token_list, ScoringConfig, ScoringWeights};
use digitforge::presets::CulturalPreset;
use std::process;
use std::str::FromStr;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON scoring config (weights, multipliers, tokens).
    #[arg(global = true, long)]
    config: Option<String>,

    /// Cultural preset to apply on top of the config.
    #[arg(global = true, long, value_parser = CulturalPreset::from_str)]
    preset: Option<CulturalPreset>,

    /// Comma separated lucky tokens, e.g. "8,88,168".
    #[arg(global = true, long)]
    lucky: Option<String>,

    /// Comma separated unlucky tokens, e.g. "4,13".
    #[arg(global = true, long)]
    unlucky: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score and tier one or more numbers.
    Categorize(cmd::categorize::CategorizeArgs),
    /// Search for numbers of a given tier.
    Generate(cmd::generate::GenerateArgs),
    /// Suggest higher scoring edits of a number.
    Nearby(cmd::nearby::NearbyArgs),
    /// List the cultural presets.
    Presets,
    /// Count how many numbers of a length fall into each tier.
    Census(cmd::census::CensusArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let cli_weights: Option<(&ScoringWeights, &str)> = match &cli.command {
        Commands::Categorize(args) => Some((&args.weights, "categorize")),
        Commands::Generate(args) => Some((&args.weights, "generate")),
        Commands::Nearby(args) => Some((&args.weights, "nearby")),
        Commands::Census(args) => Some((&args.weights, "census")),
        Commands::Presets => None,
    };

    let mut config = match &cli.config {
        Some(path) => {
            info!("⚖️  Loading scoring config from: {}", path);
            ScoringConfig::load_from_file(path).unwrap_or_else(|e| {
                error!("❌ Failed to load config '{}': {}", path, e);
                process::exit(1);
            })
        }
        None => ScoringConfig::default(),
    };

    // Weight flags live on the subcommand, so merge using its matches.
    if let Some((weights, name)) = cli_weights {
        if let Some(sub_matches) = matches.subcommand_matches(name) {
            config.weights.merge_from_cli(weights, sub_matches);
        }
    }

    if let Some(preset) = cli.preset {
        info!("🌏 Applying preset: {}", preset);
        config = config.apply_preset(preset);
    }

    if cli.lucky.is_some() || cli.unlucky.is_some() {
        let lucky = match &cli.lucky {
            Some(s) => parse_token_list(s),
            None => config.lucky_tokens.iter().cloned().collect(),
        };
        let unlucky = match &cli.unlucky {
            Some(s) => parse_token_list(s),
            None => config.unlucky_tokens.iter().cloned().collect(),
        };
        config = config.apply_tokens(lucky, unlucky, "custom");
    }

    let config = config.validated().unwrap_or_else(|e| {
        error!("❌ {}", e);
        process::exit(1);
    });

    match cli.command {
        Commands::Categorize(args) => cmd::categorize::run(args, config),
        Commands::Generate(args) => cmd::generate::run(args, config),
        Commands::Nearby(args) => cmd::nearby::run(args, config),
        Commands::Presets => reports::print_presets(),
        Commands::Census(args) => cmd::census::run(args, config),
    }
}
