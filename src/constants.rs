/// Names shared by the download and normalize stages.

// Source dataset
pub const DATASET_ID: &str = "AmaanP314/youtube-comment-sentiment";
pub const DATASET_CONFIG: &str = "default";
pub const DATASET_SPLIT: &str = "train";
pub const ROWS_ENDPOINT: &str = "https://datasets-server.huggingface.co/rows";

/// Rows requested when no limit is given; keeps the sample well below the full 1M+ rows
pub const DEFAULT_RECORD_LIMIT: usize = 30_000;

/// Largest page the dataset viewer's rows endpoint will serve
pub const MAX_PAGE_SIZE: usize = 100;

// Data directory
pub const SAMPLE_DATA_DIR_ENV: &str = "SAMPLE_DATA_DIR";
pub const DEFAULT_SAMPLE_DATA_DIR: &str = "/var/lib/postgresql/sample-data";

// Artifacts
pub const RAW_FILE: &str = "youtube-comments-raw.csv";
pub const VIDEOS_FILE: &str = "videos.csv";
pub const USERS_FILE: &str = "users.csv";
pub const COMMENTS_FILE: &str = "comments.csv";

/// Display name used for channels that arrive without one
pub const UNKNOWN_USER: &str = "Unknown User";

/// Cell values read as missing (the usual dataframe NA spellings)
pub const MISSING_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Returns true when a raw cell should be treated as absent
pub fn is_missing(cell: &str) -> bool {
    cell.is_empty() || MISSING_MARKERS.contains(&cell)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_markers() {
        assert!(is_missing(""));
        assert!(is_missing("NaN"));
        assert!(is_missing("null"));
        assert!(!is_missing(" "));
        assert!(!is_missing("Unknown User"));
        assert!(!is_missing("0"));
    }
}
