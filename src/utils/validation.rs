//! Input validation utilities

use crate::core::models::{AppError, AppResult};

/// Trim the video reference handed to yt-dlp. Anything non-empty is passed
/// through untouched: yt-dlp accepts page URLs, bare video IDs and search
/// prefixes such as `ytsearch1:`.
pub fn validate_video_input(input: &str) -> AppResult<&str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(
            "Video URL must not be empty".to_string(),
        ));
    }
    Ok(trimmed)
}

/// Reject an empty or whitespace-only output stem
pub fn validate_output_stem(stem: &str) -> AppResult<()> {
    if stem.trim().is_empty() {
        return Err(AppError::Validation(
            "Output path must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_input_passes_through_trimmed() {
        assert_eq!(
            validate_video_input("  https://youtu.be/dQw4w9WgXcQ\n").unwrap(),
            "https://youtu.be/dQw4w9WgXcQ"
        );
        assert_eq!(validate_video_input("dQw4w9WgXcQ").unwrap(), "dQw4w9WgXcQ");
        assert_eq!(
            validate_video_input("ytsearch1:never gonna give you up").unwrap(),
            "ytsearch1:never gonna give you up"
        );
    }

    #[test]
    fn test_empty_video_input() {
        assert!(validate_video_input("").is_err());
        let err = validate_video_input(" \t ").unwrap_err();
        assert!(err.to_string().contains("Video URL must not be empty"));
    }

    #[test]
    fn test_output_stem() {
        assert!(validate_output_stem("/tmp/song").is_ok());
        assert!(validate_output_stem("-song").is_ok());
        assert!(validate_output_stem("").is_err());
        assert!(validate_output_stem("   ").is_err());
    }
}
