//! Row shapes for the raw sample and the three normalized tables.

use serde::Serialize;

/// Columns the raw CSV must carry, as published by the source dataset
pub mod raw_columns {
    pub const COMMENT_ID: &str = "CommentID";
    pub const VIDEO_ID: &str = "VideoID";
    pub const VIDEO_TITLE: &str = "VideoTitle";
    pub const AUTHOR_NAME: &str = "AuthorName";
    pub const AUTHOR_CHANNEL_ID: &str = "AuthorChannelID";
    pub const COMMENT_TEXT: &str = "CommentText";
    pub const SENTIMENT: &str = "Sentiment";
    pub const LIKES: &str = "Likes";
    pub const REPLIES: &str = "Replies";
    pub const PUBLISHED_AT: &str = "PublishedAt";
    pub const COUNTRY_CODE: &str = "CountryCode";
    pub const CATEGORY_ID: &str = "CategoryID";

    pub const REQUIRED: &[&str] = &[
        COMMENT_ID,
        VIDEO_ID,
        VIDEO_TITLE,
        AUTHOR_NAME,
        AUTHOR_CHANNEL_ID,
        COMMENT_TEXT,
        SENTIMENT,
        LIKES,
        REPLIES,
        PUBLISHED_AT,
        COUNTRY_CODE,
        CATEGORY_ID,
    ];
}

/// Sample rows exactly as the source served them, in source order.
/// Cells are already rendered to CSV text; the header follows the source schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One comment row of the raw sample. Every cell may be missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawComment {
    pub comment_id: Option<String>,
    pub video_id: Option<String>,
    pub video_title: Option<String>,
    pub author_name: Option<String>,
    pub author_channel_id: Option<String>,
    pub comment_text: Option<String>,
    pub sentiment: Option<String>,
    pub likes: Option<String>,
    pub replies: Option<String>,
    pub published_at: Option<String>,
    pub country_code: Option<String>,
    pub category_id: Option<String>,
}

/// A normalized table with a fixed header, written even when there are no rows
pub trait CsvTable: Serialize {
    const HEADERS: &'static [&'static str];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Video {
    pub video_id: String,
    pub title: Option<String>,
    pub category: Option<String>,
}

impl CsvTable for Video {
    const HEADERS: &'static [&'static str] = &["video_id", "title", "category"];
}

/// Comment author. `channel_name` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Channel {
    pub channel_id: String,
    pub channel_name: String,
}

impl CsvTable for Channel {
    const HEADERS: &'static [&'static str] = &["channel_id", "channel_name"];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub comment_id: String,
    pub video_id: String,
    pub channel_id: String,
    pub comment_text: Option<String>,
    pub likes: Option<String>,
    pub replies: Option<String>,
    pub published_at: Option<String>,
    pub sentiment_label: Option<String>,
    pub country_code: Option<String>,
}

impl CsvTable for Comment {
    const HEADERS: &'static [&'static str] = &[
        "comment_id",
        "video_id",
        "channel_id",
        "comment_text",
        "likes",
        "replies",
        "published_at",
        "sentiment_label",
        "country_code",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_match_field_order() {
        assert_eq!(Video::HEADERS.len(), 3);
        assert_eq!(Channel::HEADERS, &["channel_id", "channel_name"]);
        assert_eq!(Comment::HEADERS.first(), Some(&"comment_id"));
        assert_eq!(Comment::HEADERS.len(), 9);
    }
}
