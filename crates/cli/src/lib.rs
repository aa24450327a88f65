pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use flavorforge_core::config::{ConfigOverrides, LoadOptions};
use flavorforge_core::domain::concept::ProductConcept;

#[derive(Debug, Parser)]
#[command(
    name = "flavorforge",
    about = "FlavorForge operator CLI",
    long_about = "Inspect configuration, check data readiness, and run the market scoring engine against the configured CSV tables.",
    after_help = "Examples:\n  flavorforge doctor --json\n  flavorforge score --ingredients \"Mango, Chili\" --category Snacks --region Asia --demographic 18-25\n  flavorforge classify --market-share 16 --average-score 90 --growth-trend 2"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to a flavorforge.toml config file")]
    config: Option<PathBuf>,
    #[arg(long, global = true, help = "Override the data directory holding the CSV tables")]
    data_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
    #[command(about = "Validate config and check that every data table is present")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Compute the single market score for an ingredient list")]
    Score {
        #[arg(long)]
        ingredients: String,
        #[arg(long, default_value = "")]
        category: String,
        #[arg(long, default_value = "")]
        region: String,
        #[arg(long, default_value = "")]
        demographic: String,
    },
    #[command(about = "Run the full concept analysis and print the report")]
    Analyze {
        #[arg(long)]
        name: String,
        #[arg(long)]
        ingredients: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        region: String,
        #[arg(long, default_value = "")]
        demographic: String,
        #[arg(long)]
        flavor_profile: Option<String>,
    },
    #[command(about = "Classify a competitor's market position")]
    Classify {
        #[arg(long, allow_hyphen_values = true)]
        market_share: f64,
        #[arg(long, allow_hyphen_values = true)]
        average_score: f64,
        #[arg(long, allow_hyphen_values = true)]
        growth_trend: f64,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let options = LoadOptions {
        config_path: cli.config,
        require_file: false,
        overrides: ConfigOverrides { data_dir: cli.data_dir, ..ConfigOverrides::default() },
    };

    let result = match cli.command {
        Command::Config => commands::config::run(options),
        Command::Doctor { json } => commands::doctor::run(json, options),
        Command::Score { ingredients, category, region, demographic } => commands::score::run(
            &commands::score::ScoreArgs { ingredients, category, region, demographic },
            options,
        ),
        Command::Analyze { name, ingredients, category, region, demographic, flavor_profile } => {
            let concept = ProductConcept {
                name,
                category,
                ingredients,
                target_demographics: demographic,
                region,
                flavor_profile,
                description: None,
            };
            commands::analyze::run(&concept, options)
        }
        Command::Classify { market_share, average_score, growth_trend } => {
            commands::classify::run(market_share, average_score, growth_trend)
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
