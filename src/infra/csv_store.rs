use crate::app::ports::{NormalizeOutputPort, RawSinkPort, RawSourcePort};
use crate::config::DataConfig;
use crate::constants::is_missing;
use crate::domain::{raw_columns, Channel, Comment, CsvTable, RawComment, RawTable, Video};
use crate::error::{Result, SampleDataError};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// CSV files in the shared sample-data directory.
/// Every write truncates the target file.
pub struct CsvSampleStore {
    config: DataConfig,
}

impl CsvSampleStore {
    pub fn new(config: DataConfig) -> Self {
        Self { config }
    }

    fn write_table<T: CsvTable>(&self, path: PathBuf, rows: &[T]) -> Result<PathBuf> {
        fs::create_dir_all(self.config.data_dir())?;
        // Header is written by hand so an empty table still gets one
        let mut writer = WriterBuilder::new().has_headers(false).from_path(&path)?;
        writer.write_record(T::HEADERS)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        info!("Wrote {} rows to {}", rows.len(), path.display());
        Ok(path)
    }
}

impl RawSinkPort for CsvSampleStore {
    fn write_raw(&self, table: &RawTable) -> Result<PathBuf> {
        fs::create_dir_all(self.config.data_dir())?;
        let path = self.config.raw_path();
        let mut writer = WriterBuilder::new().from_path(&path)?;
        writer.write_record(&table.columns)?;
        for row in &table.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        info!("Wrote {} raw rows to {}", table.len(), path.display());
        Ok(path)
    }
}

impl RawSourcePort for CsvSampleStore {
    fn read_raw(&self) -> Result<Vec<RawComment>> {
        let path = self.config.raw_path();
        let file = File::open(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SampleDataError::MissingInput { path: path.clone() },
            _ => SampleDataError::Io(e),
        })?;

        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);
        let columns = RawColumnIndex::from_headers(reader.headers()?, &path)?;
        debug!("Resolved raw columns: {:?}", columns);

        let mut rows = Vec::new();
        for record in reader.records() {
            rows.push(columns.parse(&record?)?);
        }
        Ok(rows)
    }
}

impl NormalizeOutputPort for CsvSampleStore {
    fn write_videos(&self, videos: &[Video]) -> Result<PathBuf> {
        self.write_table(self.config.videos_path(), videos)
    }

    fn write_channels(&self, channels: &[Channel]) -> Result<PathBuf> {
        self.write_table(self.config.users_path(), channels)
    }

    fn write_comments(&self, comments: &[Comment]) -> Result<PathBuf> {
        self.write_table(self.config.comments_path(), comments)
    }
}

/// Positions of the required raw columns within the file's header
#[derive(Debug)]
struct RawColumnIndex {
    comment_id: usize,
    video_id: usize,
    video_title: usize,
    author_name: usize,
    author_channel_id: usize,
    comment_text: usize,
    sentiment: usize,
    likes: usize,
    replies: usize,
    published_at: usize,
    country_code: usize,
    category_id: usize,
}

impl RawColumnIndex {
    fn from_headers(headers: &StringRecord, path: &Path) -> Result<Self> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| SampleDataError::MissingColumn {
                    column: column.to_string(),
                    path: path.to_path_buf(),
                })
        };

        Ok(Self {
            comment_id: find(raw_columns::COMMENT_ID)?,
            video_id: find(raw_columns::VIDEO_ID)?,
            video_title: find(raw_columns::VIDEO_TITLE)?,
            author_name: find(raw_columns::AUTHOR_NAME)?,
            author_channel_id: find(raw_columns::AUTHOR_CHANNEL_ID)?,
            comment_text: find(raw_columns::COMMENT_TEXT)?,
            sentiment: find(raw_columns::SENTIMENT)?,
            likes: find(raw_columns::LIKES)?,
            replies: find(raw_columns::REPLIES)?,
            published_at: find(raw_columns::PUBLISHED_AT)?,
            country_code: find(raw_columns::COUNTRY_CODE)?,
            category_id: find(raw_columns::CATEGORY_ID)?,
        })
    }

    fn parse(&self, record: &StringRecord) -> Result<RawComment> {
        let text = |idx: usize| {
            record
                .get(idx)
                .filter(|cell| !is_missing(cell))
                .map(str::to_string)
        };

        Ok(RawComment {
            comment_id: text(self.comment_id),
            video_id: text(self.video_id),
            video_title: text(self.video_title),
            author_name: text(self.author_name),
            author_channel_id: text(self.author_channel_id),
            comment_text: text(self.comment_text),
            sentiment: text(self.sentiment),
            likes: text(self.likes),
            replies: text(self.replies),
            published_at: text(self.published_at),
            country_code: text(self.country_code),
            category_id: text(self.category_id),
        })
    }
}
