use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing::info;

use yt_sample_data::config::{AcquireConfig, DataConfig};
use yt_sample_data::constants::DEFAULT_RECORD_LIMIT;
use yt_sample_data::logging;
use yt_sample_data::tasks::{self, EXIT_FAILURE, EXIT_SUCCESS};

#[derive(Parser)]
#[command(name = "yt-sample-data")]
#[command(about = "Download and normalize the YouTube comment sample data")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download a bounded sample into youtube-comments-raw.csv
    Download {
        /// Number of records to request from the source
        #[arg(long, default_value_t = DEFAULT_RECORD_LIMIT, value_parser = parse_limit)]
        limit: usize,
    },
    /// Split youtube-comments-raw.csv into videos.csv, users.csv and comments.csv
    Normalize,
    /// Run download and normalize sequentially
    Run {
        /// Number of records to request from the source
        #[arg(long, default_value_t = DEFAULT_RECORD_LIMIT, value_parser = parse_limit)]
        limit: usize,
    },
}

fn parse_limit(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("limit must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let _guard = logging::init_logging();

    let cli = Cli::parse();

    let data = match DataConfig::from_env() {
        Ok(data) => data,
        Err(e) => {
            eprintln!("✗ {}", e);
            return ExitCode::from(EXIT_FAILURE);
        }
    };
    info!("Using sample data directory {}", data.data_dir().display());

    let code = match cli.command {
        Commands::Download { limit } => {
            tasks::run_download_stage(&data, AcquireConfig::default().with_limit(limit))
        }
        Commands::Normalize => tasks::run_normalize_stage(&data),
        Commands::Run { limit } => {
            println!("🚀 Running full preparation (download + normalize)...");
            match tasks::run_download_stage(&data, AcquireConfig::default().with_limit(limit)) {
                EXIT_SUCCESS => tasks::run_normalize_stage(&data),
                failed => failed,
            }
        }
    };

    ExitCode::from(code)
}
