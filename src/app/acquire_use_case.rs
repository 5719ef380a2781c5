use crate::app::ports::{DatasetSourcePort, RawSinkPort};
use crate::error::{Result, SampleDataError};
use std::path::PathBuf;
use tracing::{info, instrument, warn};

/// Outcome of one download run
#[derive(Debug, Clone, PartialEq)]
pub struct AcquireSummary {
    pub rows: usize,
    pub columns: Vec<String>,
    pub output_path: PathBuf,
}

/// Use case for fetching a bounded sample and storing it as the raw artifact
pub struct AcquireUseCase {
    source: Box<dyn DatasetSourcePort>,
    sink: Box<dyn RawSinkPort>,
}

impl AcquireUseCase {
    pub fn new(source: Box<dyn DatasetSourcePort>, sink: Box<dyn RawSinkPort>) -> Self {
        Self { source, sink }
    }

    #[instrument(skip(self))]
    pub fn run(&self, limit: usize) -> Result<AcquireSummary> {
        if limit == 0 {
            return Err(SampleDataError::Config(
                "record limit must be a positive integer".into(),
            ));
        }

        let table = self.source.fetch_rows(limit)?;
        info!("Downloaded {} records", table.len());
        if table.len() < limit {
            warn!(
                "Source returned {} of {} requested records",
                table.len(),
                limit
            );
        }

        let output_path = self.sink.write_raw(&table)?;
        info!("Raw sample saved to {}", output_path.display());

        Ok(AcquireSummary {
            rows: table.len(),
            columns: table.columns,
            output_path,
        })
    }
}
