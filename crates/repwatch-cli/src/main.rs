mod analyze;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::analyze::InputFormat;

#[derive(Debug, Parser)]
#[command(name = "repwatch-cli")]
#[command(about = "Brand mention analysis from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyze a batch of mentions read from a JSON or CSV file
    Analyze {
        /// A batch request object, a bare array of mention records, or scraper CSV rows
        #[arg(long, short)]
        input: PathBuf,

        /// Input format; `auto` picks CSV for a `.csv` extension and JSON otherwise
        #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
        format: InputFormat,

        /// Brand name used in reply drafts (overrides the file)
        #[arg(long)]
        brand: Option<String>,

        /// Historical negative ratio in [0, 1] for spike detection
        #[arg(long, requires = "historical_window")]
        historical_ratio: Option<f64>,

        /// Number of mentions the historical ratio was measured over
        #[arg(long, requires = "historical_ratio")]
        historical_window: Option<i64>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Score a single text
    Score {
        text: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = repwatch_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Analyze {
            input,
            format,
            brand,
            historical_ratio,
            historical_window,
            pretty,
        }) => {
            let overrides = analyze::Overrides {
                brand,
                historical_ratio,
                historical_window,
            };
            analyze::run_analyze(&config, &input, format, overrides, pretty).await?;
        }
        Some(Commands::Score { text }) => analyze::run_score(&text)?,
        None => println!("repwatch-cli: use `analyze` or `score` (see --help)"),
    }

    Ok(())
}
