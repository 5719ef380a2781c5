use crate::app::acquire_use_case::{AcquireSummary, AcquireUseCase};
use crate::app::normalize_use_case::{NormalizeSummary, NormalizeUseCase};
use crate::config::{AcquireConfig, DataConfig};
use crate::error::{Result, SampleDataError};
use crate::infra::{CsvSampleStore, HuggingFaceRowsSource};
use tracing::error;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Fetches the sample and writes the raw CSV into the data directory
pub fn download(data: &DataConfig, acquire: AcquireConfig) -> Result<AcquireSummary> {
    let limit = acquire.limit;
    let source = HuggingFaceRowsSource::new(acquire)?;
    let store = CsvSampleStore::new(data.clone());
    AcquireUseCase::new(Box::new(source), Box::new(store)).run(limit)
}

/// Splits the raw CSV in the data directory into videos, users and comments
pub fn normalize(data: &DataConfig) -> Result<NormalizeSummary> {
    let input = CsvSampleStore::new(data.clone());
    let output = CsvSampleStore::new(data.clone());
    NormalizeUseCase::new(Box::new(input), Box::new(output)).run()
}

/// Download stage with progress on stdout and failures on stderr. Returns the exit code.
pub fn run_download_stage(data: &DataConfig, acquire: AcquireConfig) -> u8 {
    println!("📥 Downloading YouTube comment sentiment dataset...");
    println!("   Dataset: {}", acquire.dataset);

    match download(data, acquire) {
        Ok(summary) => {
            println!("✓ Dataset downloaded and saved to: {}", summary.output_path.display());
            println!("  Rows: {}", summary.rows);
            println!("  Columns: {:?}", summary.columns);
            EXIT_SUCCESS
        }
        Err(e) => {
            error!("Download failed: {}", e);
            eprintln!("✗ Error downloading dataset: {}", e);
            EXIT_FAILURE
        }
    }
}

/// Normalize stage. On failure the whole error chain is printed to stderr.
pub fn run_normalize_stage(data: &DataConfig) -> u8 {
    println!("🔨 Normalizing dataset into videos, users and comments...");

    match normalize(data) {
        Ok(summary) => {
            print_normalize_summary(&summary);
            EXIT_SUCCESS
        }
        Err(e) => {
            error!("Normalization failed: {}", e);
            eprintln!("{}", failure_report("Error normalizing data", e));
            EXIT_FAILURE
        }
    }
}

/// One stderr block: the message once, followed by its `Caused by` chain
fn failure_report(context: &str, error: SampleDataError) -> String {
    format!("✗ {}: {:?}", context, anyhow::Error::new(error))
}

fn print_normalize_summary(summary: &NormalizeSummary) {
    let stats = &summary.stats;
    println!("Loaded {} raw records", stats.raw_rows);
    println!("  Found {} unique videos", stats.videos);
    println!("  Found {} unique users/channels", stats.channels);
    if stats.duplicate_comments > 0 {
        println!("  Removed {} duplicate comments", stats.duplicate_comments);
    }
    println!(
        "  Found {} valid comments (removed {} orphaned records)",
        stats.comments,
        stats.removed_comments()
    );
    println!();
    println!("✓ Normalization complete!");
    println!("  Videos: {} rows → {}", stats.videos, summary.videos_path.display());
    println!("  Users: {} rows → {}", stats.channels, summary.users_path.display());
    println!("  Comments: {} rows → {}", stats.comments, summary.comments_path.display());
    println!("  Total: {} rows", summary.total_rows());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_failure_report_states_message_once() {
        let report = failure_report(
            "Error normalizing data",
            SampleDataError::MissingInput {
                path: PathBuf::from("/data/youtube-comments-raw.csv"),
            },
        );

        assert!(report.starts_with("✗ Error normalizing data: Input file not found"));
        assert_eq!(report.matches("Input file not found").count(), 1);
    }

    #[test]
    fn test_failure_report_includes_cause_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let report = failure_report("Error normalizing data", SampleDataError::Io(io));

        assert!(report.contains("I/O error: read-only"));
        assert!(report.contains("Caused by"));
        assert_eq!(report.matches("I/O error").count(), 1);
    }
}
