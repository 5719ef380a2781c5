use crate::domain::{Channel, Comment, RawComment, RawTable, Video};
use crate::error::Result;
use std::path::PathBuf;

/// Where the raw sample comes from
pub trait DatasetSourcePort {
    /// Fetches at most `limit` rows in source order. Returning fewer is not an error.
    fn fetch_rows(&self, limit: usize) -> Result<RawTable>;
}

/// Destination of the raw sample
pub trait RawSinkPort {
    fn write_raw(&self, table: &RawTable) -> Result<PathBuf>;
}

/// Reader for the raw sample written by the acquire stage
pub trait RawSourcePort {
    fn read_raw(&self) -> Result<Vec<RawComment>>;
}

/// Destination of the three normalized tables. Each call overwrites its table.
pub trait NormalizeOutputPort {
    fn write_videos(&self, videos: &[Video]) -> Result<PathBuf>;
    fn write_channels(&self, channels: &[Channel]) -> Result<PathBuf>;
    fn write_comments(&self, comments: &[Comment]) -> Result<PathBuf>;
}
