//! Error types for treedoc

use thiserror::Error;

/// Main error type for documentation generation
#[derive(Error, Debug)]
pub enum DocError {
    #[error("didn't find command for {0:?}\n\n  Every generated page needs collected command details")]
    MissingDetails(String),

    #[error("internal error: failed to find cut points in {name}: startCut = {}, endCut = {}", offset(.start), offset(.end))]
    CutPoints {
        name: String,
        start: Option<usize>,
        end: Option<usize>,
    },

    #[error("couldn't find flag group {0:?} in command annotation")]
    UnknownFlagGroup(String),

    #[error("invalid flag filter: {0}")]
    Regex(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("walking output directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("invalid config file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Marker offsets are reported the way a string search reports them: -1 when absent.
fn offset(pos: &Option<usize>) -> String {
    match pos {
        Some(p) => p.to_string(),
        None => "-1".to_string(),
    }
}

/// Result type alias for treedoc operations
pub type Result<T> = std::result::Result<T, DocError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cut_points_message_reports_offsets() {
        let err = DocError::CutPoints {
            name: "app_sub.md".to_string(),
            start: None,
            end: Some(42),
        };
        let msg = err.to_string();
        assert!(msg.contains("app_sub.md"));
        assert!(msg.contains("startCut = -1"));
        assert!(msg.contains("endCut = 42"));
    }
}
