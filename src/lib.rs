//! yt-mp3 - Core Library
//!
//! Downloads the audio track of a video as MP3 by delegating to yt-dlp and
//! reports the outcome as a single JSON line.

pub mod commands;
pub mod core;
pub mod utils;

// Re-export commonly used types
pub use commands::download::download_mp3_command;
pub use crate::core::{
    config::{AppConfig, AudioDownloadConfig},
    models::{AppError, AppResult, DownloadOutcome},
    youtube_downloader::{AudioExtractor, YoutubeDownloader},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Message reported when the command line cannot be parsed
pub const USAGE: &str = "Usage: yt-mp3 <video_url> <output_path_without_extension>";
