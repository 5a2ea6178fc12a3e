//! Core data models for the MP3 downloader

use serde::{Deserialize, Serialize};

/// Result of a single download run, printed as one JSON line.
///
/// Exactly one of `path` or `error` is present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DownloadOutcome {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DownloadOutcome {
    pub fn succeeded(path: impl Into<String>) -> Self {
        Self {
            success: true,
            path: Some(path.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            path: None,
            error: Some(error.into()),
        }
    }

    /// Serialize as a single JSON line.
    pub fn to_json_line(&self) -> String {
        // A struct of bool and strings always serializes.
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"success":false,"error":"failed to encode result"}"#.to_string()
        })
    }
}

/// Application error types

#[derive(Debug, thiserror::Error)]

pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    Youtube(String),

    #[error("{0}")]
    Usage(String),
}

/// Result type alias for application operations

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_outcome_json() {
        let outcome = DownloadOutcome::succeeded("/tmp/song.mp3");
        assert_eq!(
            outcome.to_json_line(),
            r#"{"success":true,"path":"/tmp/song.mp3"}"#
        );
    }

    #[test]
    fn test_failure_outcome_json() {
        let outcome = DownloadOutcome::failed("Video unavailable");
        let value: serde_json::Value = serde_json::from_str(&outcome.to_json_line()).unwrap();

        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "Video unavailable");
        assert!(value.get("path").is_none());
    }

    #[test]
    fn test_outcome_is_single_line() {
        let outcome = DownloadOutcome::failed("ERROR: first line\nsecond line");
        assert!(!outcome.to_json_line().contains('\n'));
    }

    #[test]
    fn test_youtube_error_display_is_raw_message() {
        let err = AppError::Youtube("ERROR: [youtube] abc: Video unavailable".to_string());
        assert_eq!(err.to_string(), "ERROR: [youtube] abc: Video unavailable");
    }
}
