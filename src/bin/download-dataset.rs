use std::process::ExitCode;
use yt_sample_data::config::{AcquireConfig, DataConfig};
use yt_sample_data::logging;
use yt_sample_data::tasks::{self, EXIT_FAILURE};

/// Download stage on its own, with the default record limit.
fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let _guard = logging::init_logging();

    let code = match DataConfig::from_env() {
        Ok(data) => tasks::run_download_stage(&data, AcquireConfig::default()),
        Err(e) => {
            eprintln!("✗ {}", e);
            EXIT_FAILURE
        }
    };
    ExitCode::from(code)
}
