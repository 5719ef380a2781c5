use crate::app::ports::{NormalizeOutputPort, RawSourcePort};
use crate::error::Result;
use crate::normalize::{normalize_rows, NormalizeStats};
use std::path::PathBuf;
use tracing::{info, instrument};

/// Outcome of one normalize run
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeSummary {
    pub stats: NormalizeStats,
    pub videos_path: PathBuf,
    pub users_path: PathBuf,
    pub comments_path: PathBuf,
}

impl NormalizeSummary {
    pub fn total_rows(&self) -> usize {
        self.stats.videos + self.stats.channels + self.stats.comments
    }
}

/// Use case for splitting the raw sample into videos, users and comments
pub struct NormalizeUseCase {
    input: Box<dyn RawSourcePort>,
    output: Box<dyn NormalizeOutputPort>,
}

impl NormalizeUseCase {
    pub fn new(input: Box<dyn RawSourcePort>, output: Box<dyn NormalizeOutputPort>) -> Self {
        Self { input, output }
    }

    /// Loads, normalizes and writes the three tables in order: videos, users, comments.
    /// Tables written before a failure are left in place.
    #[instrument(skip(self))]
    pub fn run(&self) -> Result<NormalizeSummary> {
        let rows = self.input.read_raw()?;
        info!("Loaded {} raw records", rows.len());

        let (tables, stats) = normalize_rows(&rows);
        info!(
            videos = stats.videos,
            channels = stats.channels,
            duplicates = stats.duplicate_comments,
            missing_keys = stats.missing_key_comments,
            orphans = stats.orphaned_comments,
            comments = stats.comments,
            "Normalized raw records"
        );

        let videos_path = self.output.write_videos(&tables.videos)?;
        let users_path = self.output.write_channels(&tables.channels)?;
        let comments_path = self.output.write_comments(&tables.comments)?;

        Ok(NormalizeSummary {
            stats,
            videos_path,
            users_path,
            comments_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Channel, Comment, RawComment, Video};
    use crate::error::SampleDataError;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct MockInput {
        rows: Vec<RawComment>,
    }

    impl RawSourcePort for MockInput {
        fn read_raw(&self) -> Result<Vec<RawComment>> {
            Ok(self.rows.clone())
        }
    }

    #[derive(Default)]
    struct MockOutput {
        written: Rc<RefCell<Vec<(&'static str, usize)>>>,
        fail_comments: bool,
    }

    impl NormalizeOutputPort for MockOutput {
        fn write_videos(&self, videos: &[Video]) -> Result<PathBuf> {
            self.written.borrow_mut().push(("videos", videos.len()));
            Ok(PathBuf::from("videos.csv"))
        }

        fn write_channels(&self, channels: &[Channel]) -> Result<PathBuf> {
            self.written.borrow_mut().push(("users", channels.len()));
            Ok(PathBuf::from("users.csv"))
        }

        fn write_comments(&self, comments: &[Comment]) -> Result<PathBuf> {
            if self.fail_comments {
                return Err(SampleDataError::Io(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "read-only directory",
                )));
            }
            self.written.borrow_mut().push(("comments", comments.len()));
            Ok(PathBuf::from("comments.csv"))
        }
    }

    fn row(comment: &str, video: &str, channel: &str) -> RawComment {
        RawComment {
            comment_id: Some(comment.to_string()),
            video_id: Some(video.to_string()),
            author_channel_id: Some(channel.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_normalize_use_case_writes_all_tables() {
        let output = MockOutput::default();
        let written = output.written.clone();
        let input = MockInput {
            rows: vec![row("c1", "v1", "u1"), row("c2", "v1", "u2"), row("c1", "v2", "u1")],
        };
        let use_case = NormalizeUseCase::new(Box::new(input), Box::new(output));

        let summary = use_case.run().unwrap();

        assert_eq!(
            *written.borrow(),
            vec![("videos", 2), ("users", 2), ("comments", 2)]
        );
        assert_eq!(summary.stats.duplicate_comments, 1);
        assert_eq!(summary.total_rows(), 6);
        assert_eq!(summary.comments_path, PathBuf::from("comments.csv"));
    }

    #[test]
    fn test_failure_keeps_earlier_tables() {
        let output = MockOutput {
            fail_comments: true,
            ..Default::default()
        };
        let written = output.written.clone();
        let input = MockInput {
            rows: vec![row("c1", "v1", "u1")],
        };
        let use_case = NormalizeUseCase::new(Box::new(input), Box::new(output));

        assert!(matches!(use_case.run(), Err(SampleDataError::Io(_))));
        assert_eq!(*written.borrow(), vec![("videos", 1), ("users", 1)]);
    }
}
