use crate::constants::{
    COMMENTS_FILE, DATASET_CONFIG, DATASET_ID, DATASET_SPLIT, DEFAULT_RECORD_LIMIT,
    DEFAULT_SAMPLE_DATA_DIR, MAX_PAGE_SIZE, RAW_FILE, ROWS_ENDPOINT, SAMPLE_DATA_DIR_ENV,
    USERS_FILE, VIDEOS_FILE,
};
use crate::error::{Result, SampleDataError};
use std::path::{Path, PathBuf};

/// Location of the shared sample-data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataConfig {
    pub data_dir: PathBuf,
}

impl DataConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Reads `SAMPLE_DATA_DIR`, falling back to the container default.
    /// Only the binaries call this; library code takes a `DataConfig`.
    pub fn from_env() -> Result<Self> {
        match std::env::var(SAMPLE_DATA_DIR_ENV) {
            Ok(dir) if !dir.trim().is_empty() => Ok(Self::new(dir)),
            Ok(_) | Err(std::env::VarError::NotPresent) => Ok(Self::new(DEFAULT_SAMPLE_DATA_DIR)),
            Err(std::env::VarError::NotUnicode(_)) => Err(SampleDataError::Config(format!(
                "{} is not valid unicode",
                SAMPLE_DATA_DIR_ENV
            ))),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn raw_path(&self) -> PathBuf {
        self.data_dir.join(RAW_FILE)
    }

    pub fn videos_path(&self) -> PathBuf {
        self.data_dir.join(VIDEOS_FILE)
    }

    pub fn users_path(&self) -> PathBuf {
        self.data_dir.join(USERS_FILE)
    }

    pub fn comments_path(&self) -> PathBuf {
        self.data_dir.join(COMMENTS_FILE)
    }
}

/// What to fetch from the dataset viewer and how much of it.
#[derive(Debug, Clone)]
pub struct AcquireConfig {
    pub dataset: String,
    pub config: String,
    pub split: String,
    pub limit: usize,
    pub page_size: usize,
    pub endpoint: String,
}

impl Default for AcquireConfig {
    fn default() -> Self {
        Self {
            dataset: DATASET_ID.to_string(),
            config: DATASET_CONFIG.to_string(),
            split: DATASET_SPLIT.to_string(),
            limit: DEFAULT_RECORD_LIMIT,
            page_size: MAX_PAGE_SIZE,
            endpoint: ROWS_ENDPOINT.to_string(),
        }
    }
}

impl AcquireConfig {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 {
            return Err(SampleDataError::Config(
                "record limit must be a positive integer".into(),
            ));
        }
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(SampleDataError::Config(format!(
                "page size must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }
        Ok(())
    }
}
