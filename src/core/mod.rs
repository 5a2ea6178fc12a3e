//! Core business logic module
//!
//! This module contains the domain models, configuration and the yt-dlp
//! backed downloader.

pub mod config;
pub mod models;
pub mod youtube_downloader;

// Re-export commonly used types
pub use config::AppConfig;
pub use youtube_downloader::{AudioExtractor, YoutubeDownloader};
