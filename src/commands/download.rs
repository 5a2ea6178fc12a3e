//! Download command handler
//!
//! Runs one extraction and folds every failure into a `DownloadOutcome`, the
//! same way the rest of the application turns `AppError` into a message.

use std::path::PathBuf;
use tracing::{error, info};

use crate::core::models::{AppResult, DownloadOutcome};
use crate::core::youtube_downloader::AudioExtractor;
use crate::utils::validation::{validate_output_stem, validate_video_input};

/// Download `video_url` as `<output_stem>.mp3` and report the outcome
pub async fn download_mp3_command(
    extractor: &dyn AudioExtractor,
    video_url: &str,
    output_stem: &str,
) -> DownloadOutcome {
    info!("🎵 Downloading audio for: {}", video_url);

    match download_mp3_impl(extractor, video_url, output_stem).await {
        Ok(path) => {
            info!("✅ Saved MP3 to {}", path.display());
            DownloadOutcome::succeeded(path.display().to_string())
        }
        Err(e) => {
            error!("❌ Audio download failed: {}", e);
            let message = e.to_string();
            if message.trim().is_empty() {
                DownloadOutcome::failed("Unknown download error")
            } else {
                DownloadOutcome::failed(message)
            }
        }
    }
}

async fn download_mp3_impl(
    extractor: &dyn AudioExtractor,
    video_url: &str,
    output_stem: &str,
) -> AppResult<PathBuf> {
    let video = validate_video_input(video_url)?;
    validate_output_stem(output_stem)?;

    extractor.extract_mp3(video, output_stem).await
}
