//! YouTube Downloader Module
//!
//! Drives the external `yt-dlp` tool to fetch a video's best audio stream and
//! transcode it to MP3. Format selection, fragment download and the ffmpeg
//! post-processing all happen inside yt-dlp; this module only builds the
//! invocation, waits for it and checks for the resulting file.

use async_trait::async_trait;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Stdio;
use tracing::{debug, info, warn};

use crate::core::config::AudioDownloadConfig;
use crate::core::models::{AppError, AppResult};
use crate::utils::file_utils::{final_audio_path, output_template};

/// Anything that can turn a video URL into an MP3 file on disk.
#[async_trait]
pub trait AudioExtractor: Send + Sync {
    /// Download `url` and write `<output_stem>.mp3`, returning its path.
    async fn extract_mp3(&self, url: &str, output_stem: &str) -> AppResult<PathBuf>;
}

/// yt-dlp backed audio downloader
#[derive(Debug, Clone)]
pub struct YoutubeDownloader {
    config: AudioDownloadConfig,
}

impl YoutubeDownloader {
    /// Create a new downloader instance
    pub fn new(config: AudioDownloadConfig) -> AppResult<Self> {
        if config.yt_dlp_path.as_os_str().is_empty() {
            return Err(AppError::Config("yt-dlp path must not be empty".to_string()));
        }

        if config.audio_codec.is_empty() {
            return Err(AppError::Config("audio codec must not be empty".to_string()));
        }

        Ok(Self { config })
    }

    /// Command-line arguments for one download of `url` into `output_stem`
    pub fn build_args(&self, url: &str, output_stem: &str) -> Vec<OsString> {
        let cfg = &self.config;
        let mut args: Vec<OsString> = Vec::with_capacity(32);

        let mut push = |arg: &str| args.push(OsString::from(arg));

        push("--format");
        push(&cfg.format);
        push("--extract-audio");
        push("--audio-format");
        push(&cfg.audio_codec);
        push("--audio-quality");
        push(&format!("{}K", cfg.audio_quality_kbps));
        push("--output");
        push(&output_template(output_stem));

        if cfg.quiet {
            push("--quiet");
            push("--no-progress");
            push("--no-warnings");
        }
        if cfg.force_ipv4 {
            push("--force-ipv4");
        }

        push("--extractor-retries");
        push(&cfg.extractor_retries.to_string());
        push("--fragment-retries");
        push(&cfg.fragment_retries.to_string());
        push("--socket-timeout");
        push(&cfg.socket_timeout_secs.to_string());

        if cfg.no_check_formats {
            push("--no-check-formats");
        }
        if cfg.no_cache_dir {
            push("--no-cache-dir");
        }
        if cfg.no_playlist {
            push("--no-playlist");
        }
        if cfg.strip_title_metadata {
            push("--postprocessor-args");
            push("ExtractAudio:-metadata title=");
        }

        if let Some(ffmpeg) = &cfg.ffmpeg_location {
            args.push(OsString::from("--ffmpeg-location"));
            args.push(ffmpeg.as_os_str().to_owned());
        }

        args.push(OsString::from("--"));
        args.push(OsString::from(url));
        args
    }

    /// Download the audio of `url` as `<output_stem>.mp3`
    pub async fn download_mp3(&self, url: &str, output_stem: &str) -> AppResult<PathBuf> {
        let args = self.build_args(url, output_stem);
        let final_path = final_audio_path(output_stem, &self.config.audio_codec);

        info!("Starting audio download: {} -> {}", url, final_path.display());
        debug!("Running {:?} with args {:?}", self.config.yt_dlp_path, args);

        let output = tokio::process::Command::new(&self.config.yt_dlp_path)
            .args(&args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| AppError::Youtube(format!("Failed to run yt-dlp: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            warn!("yt-dlp failed with {}: {}", output.status, stderr);

            let message = if !stderr.is_empty() {
                stderr.to_string()
            } else if let Some(code) = output.status.code() {
                format!("yt-dlp exited with status {}", code)
            } else {
                format!("yt-dlp terminated without an exit code ({})", output.status)
            };
            return Err(AppError::Youtube(message));
        }

        if !tokio::fs::try_exists(&final_path).await? {
            return Err(AppError::Youtube(format!(
                "MP3 file not found after download: {}",
                final_path.display()
            )));
        }

        info!("Audio download completed: {}", final_path.display());
        Ok(final_path)
    }
}

#[async_trait]
impl AudioExtractor for YoutubeDownloader {
    async fn extract_mp3(&self, url: &str, output_stem: &str) -> AppResult<PathBuf> {
        self.download_mp3(url, output_stem).await
    }
}
