use std::process::ExitCode;
use yt_sample_data::config::DataConfig;
use yt_sample_data::logging;
use yt_sample_data::tasks::{self, EXIT_FAILURE};

/// Normalize stage on its own.
fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let _guard = logging::init_logging();

    let code = match DataConfig::from_env() {
        Ok(data) => tasks::run_normalize_stage(&data),
        Err(e) => {
            eprintln!("✗ {}", e);
            EXIT_FAILURE
        }
    };
    ExitCode::from(code)
}
