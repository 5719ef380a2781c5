//! Splits the flat comment sample into videos, channels and comments.
//!
//! Every deduplication step is a first-occurrence scan: rows are visited in load
//! order, a seen-set decides membership, and survivors keep their original order.

use crate::constants::UNKNOWN_USER;
use crate::domain::{Channel, Comment, RawComment, Video};
use std::collections::HashSet;
use std::hash::Hash;
use tracing::debug;

/// The three related tables produced from one raw sample
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedTables {
    pub videos: Vec<Video>,
    pub channels: Vec<Channel>,
    pub comments: Vec<Comment>,
}

/// Row counts gathered while normalizing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    pub raw_rows: usize,
    pub videos: usize,
    pub channels: usize,
    pub duplicate_comments: usize,
    pub missing_key_comments: usize,
    pub orphaned_comments: usize,
    pub comments: usize,
}

impl NormalizeStats {
    /// Raw rows that did not become a comment, for any reason
    pub fn removed_comments(&self) -> usize {
        self.raw_rows - self.comments
    }
}

/// Keeps the first item for every key, in input order.
/// A missing key (`None`) is a key like any other, so only one such row passes.
fn first_by_key<'a, T, K, F>(items: &'a [T], key: F) -> Vec<&'a T>
where
    K: Eq + Hash,
    F: Fn(&'a T) -> K,
{
    let mut seen = HashSet::new();
    items.iter().filter(|item| seen.insert(key(*item))).collect()
}

/// One video per distinct non-missing `VideoID`, titled from its first row
pub fn extract_videos(rows: &[RawComment]) -> Vec<Video> {
    first_by_key(rows, |row| row.video_id.as_deref())
        .into_iter()
        .filter_map(|row| {
            row.video_id.clone().map(|video_id| Video {
                video_id,
                title: row.video_title.clone(),
                category: row.category_id.clone(),
            })
        })
        .collect()
}

/// One channel per distinct non-missing `AuthorChannelID`; unnamed channels get the sentinel name
pub fn extract_channels(rows: &[RawComment]) -> Vec<Channel> {
    first_by_key(rows, |row| row.author_channel_id.as_deref())
        .into_iter()
        .filter_map(|row| {
            row.author_channel_id.clone().map(|channel_id| Channel {
                channel_id,
                channel_name: row
                    .author_name
                    .clone()
                    .unwrap_or_else(|| UNKNOWN_USER.to_string()),
            })
        })
        .collect()
}

/// Deduplicates by comment id, then drops rows missing any of the three keys.
/// Returns the comments with the duplicate and missing-key counts.
pub fn extract_comments(rows: &[RawComment]) -> (Vec<Comment>, usize, usize) {
    let unique = first_by_key(rows, |row| row.comment_id.as_deref());
    let duplicates = rows.len() - unique.len();

    let comments: Vec<Comment> = unique
        .into_iter()
        .filter_map(|row| {
            Some(Comment {
                comment_id: row.comment_id.clone()?,
                video_id: row.video_id.clone()?,
                channel_id: row.author_channel_id.clone()?,
                comment_text: row.comment_text.clone(),
                likes: row.likes.clone(),
                replies: row.replies.clone(),
                published_at: row.published_at.clone(),
                sentiment_label: row.sentiment.clone(),
                country_code: row.country_code.clone(),
            })
        })
        .collect();

    let missing = rows.len() - duplicates - comments.len();
    (comments, duplicates, missing)
}

/// Keeps comments whose video and channel both exist. Returns survivors and the number removed.
pub fn filter_orphans(
    comments: Vec<Comment>,
    videos: &[Video],
    channels: &[Channel],
) -> (Vec<Comment>, usize) {
    let video_ids: HashSet<&str> = videos.iter().map(|v| v.video_id.as_str()).collect();
    let channel_ids: HashSet<&str> = channels.iter().map(|c| c.channel_id.as_str()).collect();

    let before = comments.len();
    let kept: Vec<Comment> = comments
        .into_iter()
        .filter(|comment| {
            video_ids.contains(comment.video_id.as_str())
                && channel_ids.contains(comment.channel_id.as_str())
        })
        .collect();
    let removed = before - kept.len();
    (kept, removed)
}

/// Runs the full split over rows in load order
pub fn normalize_rows(rows: &[RawComment]) -> (NormalizedTables, NormalizeStats) {
    let videos = extract_videos(rows);
    debug!("Extracted {} unique videos", videos.len());

    let channels = extract_channels(rows);
    debug!("Extracted {} unique channels", channels.len());

    let (comments, duplicate_comments, missing_key_comments) = extract_comments(rows);
    let (comments, orphaned_comments) = filter_orphans(comments, &videos, &channels);

    let stats = NormalizeStats {
        raw_rows: rows.len(),
        videos: videos.len(),
        channels: channels.len(),
        duplicate_comments,
        missing_key_comments,
        orphaned_comments,
        comments: comments.len(),
    };

    (
        NormalizedTables {
            videos,
            channels,
            comments,
        },
        stats,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(comment: &str, video: Option<&str>, channel: Option<&str>) -> RawComment {
        RawComment {
            comment_id: Some(comment.to_string()),
            video_id: video.map(str::to_string),
            video_title: video.map(|v| format!("Title {}", v)),
            author_name: channel.map(|c| format!("Name {}", c)),
            author_channel_id: channel.map(str::to_string),
            comment_text: Some(format!("text of {}", comment)),
            sentiment: Some("Positive".to_string()),
            likes: Some("1".to_string()),
            replies: Some("0".to_string()),
            published_at: Some("2024-01-01T00:00:00Z".to_string()),
            country_code: Some("US".to_string()),
            category_id: Some("10".to_string()),
        }
    }

    fn ids(comments: &[Comment]) -> Vec<&str> {
        comments.iter().map(|c| c.comment_id.as_str()).collect()
    }

    #[test]
    fn test_shared_and_null_video_ids() {
        let rows = vec![
            raw("c1", Some("v1"), Some("u1")),
            raw("c2", Some("v1"), Some("u2")),
            raw("c3", None, Some("u3")),
        ];

        let (tables, stats) = normalize_rows(&rows);

        assert_eq!(tables.videos.len(), 1);
        assert_eq!(tables.videos[0].video_id, "v1");
        assert_eq!(ids(&tables.comments), vec!["c1", "c2"]);
        assert_eq!(stats.missing_key_comments, 1);
        assert_eq!(stats.removed_comments(), 1);
    }

    #[test]
    fn test_first_video_row_wins() {
        let mut second = raw("c2", Some("v1"), Some("u1"));
        second.video_title = Some("Later title".to_string());
        let rows = vec![raw("c1", Some("v1"), Some("u1")), second];

        let videos = extract_videos(&rows);
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].title.as_deref(), Some("Title v1"));
        assert_eq!(videos[0].category.as_deref(), Some("10"));
    }

    #[test]
    fn test_missing_channel_name_gets_sentinel() {
        let mut row = raw("c1", Some("v1"), Some("u1"));
        row.author_name = None;
        let rows = vec![row, raw("c2", Some("v1"), Some("u2"))];

        let channels = extract_channels(&rows);
        assert_eq!(channels[0].channel_name, "Unknown User");
        assert_eq!(channels[1].channel_name, "Name u2");
        assert!(channels.iter().all(|c| !c.channel_name.is_empty()));
    }

    #[test]
    fn test_rows_without_channel_id_are_not_channels() {
        let rows = vec![raw("c1", Some("v1"), None), raw("c2", Some("v1"), Some("u1"))];
        let channels = extract_channels(&rows);
        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0].channel_id, "u1");
    }

    #[test]
    fn test_duplicate_comment_keeps_first_occurrence() {
        let mut dup = raw("c1", Some("v2"), Some("u2"));
        dup.comment_text = Some("second copy".to_string());
        let rows = vec![
            raw("c1", Some("v1"), Some("u1")),
            raw("c2", Some("v1"), Some("u1")),
            dup,
        ];

        let (tables, stats) = normalize_rows(&rows);

        assert_eq!(ids(&tables.comments), vec!["c1", "c2"]);
        assert_eq!(tables.comments[0].video_id, "v1");
        assert_eq!(tables.comments[0].comment_text.as_deref(), Some("text of c1"));
        assert_eq!(stats.duplicate_comments, 1);
    }

    #[test]
    fn test_dedup_runs_before_null_key_drop() {
        // The first copy of c1 has no video, so c1 is lost entirely
        let rows = vec![
            raw("c1", None, Some("u1")),
            raw("c1", Some("v1"), Some("u1")),
        ];

        let (comments, duplicates, missing) = extract_comments(&rows);
        assert!(comments.is_empty());
        assert_eq!(duplicates, 1);
        assert_eq!(missing, 1);
    }

    #[test]
    fn test_missing_comment_ids_are_dropped() {
        let mut a = raw("x", Some("v1"), Some("u1"));
        a.comment_id = None;
        let mut b = raw("y", Some("v1"), Some("u1"));
        b.comment_id = None;
        let rows = vec![a, b, raw("c1", Some("v1"), Some("u1"))];

        let (comments, duplicates, missing) = extract_comments(&rows);
        assert_eq!(ids(&comments), vec!["c1"]);
        assert_eq!(duplicates, 1);
        assert_eq!(missing, 1);
    }

    #[test]
    fn test_orphan_filter_drops_unknown_video() {
        let rows = vec![raw("c1", Some("v1"), Some("u1")), raw("c2", Some("v2"), Some("u1"))];
        let (comments, _, _) = extract_comments(&rows);
        let videos = vec![Video {
            video_id: "v1".to_string(),
            title: None,
            category: None,
        }];
        let channels = extract_channels(&rows);

        let (kept, removed) = filter_orphans(comments, &videos, &channels);
        assert_eq!(ids(&kept), vec!["c1"]);
        assert_eq!(removed, 1);
    }

    #[test]
    fn test_orphan_filter_drops_unknown_channel() {
        let rows = vec![raw("c1", Some("v1"), Some("u1")), raw("c2", Some("v1"), Some("u9"))];
        let (comments, _, _) = extract_comments(&rows);
        let videos = extract_videos(&rows);
        let channels = vec![Channel {
            channel_id: "u1".to_string(),
            channel_name: "Name u1".to_string(),
        }];

        let (kept, removed) = filter_orphans(comments, &videos, &channels);
        assert_eq!(ids(&kept), vec!["c1"]);
        assert_eq!(removed, 1);
    }

    #[test]
    fn test_all_orphaned_keeps_videos_and_channels() {
        let rows = vec![raw("c1", Some("v1"), Some("u1")), raw("c2", Some("v2"), Some("u2"))];
        let (comments, _, _) = extract_comments(&rows);
        let videos = extract_videos(&rows);
        let channels = extract_channels(&rows);

        let (kept, removed) = filter_orphans(comments, &[], &channels);
        assert!(kept.is_empty());
        assert_eq!(removed, 2);
        assert_eq!(videos.len(), 2);
        assert_eq!(channels.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        let (tables, stats) = normalize_rows(&[]);
        assert_eq!(tables, NormalizedTables::default());
        assert_eq!(stats, NormalizeStats::default());
    }

    #[test]
    fn test_output_closure_and_uniqueness() {
        let rows = vec![
            raw("c1", Some("v1"), Some("u1")),
            raw("c2", Some("v2"), None),
            raw("c3", Some("v1"), Some("u2")),
            raw("c1", Some("v3"), Some("u3")),
            raw("c4", None, None),
            raw("c5", Some("v2"), Some("u1")),
        ];

        let (tables, _) = normalize_rows(&rows);

        let video_ids: HashSet<&str> = tables.videos.iter().map(|v| v.video_id.as_str()).collect();
        let channel_ids: HashSet<&str> =
            tables.channels.iter().map(|c| c.channel_id.as_str()).collect();
        for comment in &tables.comments {
            assert!(video_ids.contains(comment.video_id.as_str()));
            assert!(channel_ids.contains(comment.channel_id.as_str()));
        }

        let unique: HashSet<&str> = tables.comments.iter().map(|c| c.comment_id.as_str()).collect();
        assert_eq!(unique.len(), tables.comments.len());
        assert_eq!(ids(&tables.comments), vec!["c1", "c3", "c5"]);
        assert_eq!(tables.videos.len(), 3);
    }
}
