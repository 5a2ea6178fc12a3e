//! Application configuration management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub downloader: AudioDownloadConfig,
    pub logging: LoggingConfig,
}

/// Settings forwarded to yt-dlp for a single audio download
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AudioDownloadConfig {
    /// yt-dlp executable, looked up on PATH when not absolute
    pub yt_dlp_path: PathBuf,
    /// Directory or binary path handed to `--ffmpeg-location`
    pub ffmpeg_location: Option<PathBuf>,
    /// Format selector
    pub format: String,
    pub audio_codec: String,
    /// Target bitrate in kbps
    pub audio_quality_kbps: u32,
    pub force_ipv4: bool,
    pub extractor_retries: u32,
    pub fragment_retries: u32,
    pub socket_timeout_secs: u64,
    pub quiet: bool,
    pub no_check_formats: bool,
    pub no_cache_dir: bool,
    /// Blank out the title tag written by the audio post-processor
    pub strip_title_metadata: bool,
    /// Only fetch the referenced video even if the URL also names a playlist
    pub no_playlist: bool,
}

impl Default for AudioDownloadConfig {
    fn default() -> Self {
        Self {
            yt_dlp_path: PathBuf::from("yt-dlp"),
            ffmpeg_location: None,
            format: "bestaudio/best".to_string(),
            audio_codec: "mp3".to_string(),
            audio_quality_kbps: 192,
            force_ipv4: true,
            extractor_retries: 3,
            fragment_retries: 3,
            socket_timeout_secs: 30,
            quiet: true,
            no_check_formats: true,
            no_cache_dir: true,
            strip_title_metadata: true,
            no_playlist: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_level: String, // "error", "warn", "info", "debug", "trace"
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

const SUPPORTED_CODECS: [&str; 1] = ["mp3"];
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

impl AppConfig {
    /// Load configuration from an explicit file, or from the default location
    /// when it exists. A missing default file yields the built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match Self::get_config_path() {
            Ok(path) if path.exists() => Self::load_from(&path),
            Ok(_) => Ok(Self::default()),
            Err(err) => {
                tracing::debug!("No config directory available ({}), using defaults", err);
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a JSON file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: AppConfig =
            serde_json::from_str(&content).with_context(|| "Failed to parse config file")?;

        tracing::debug!("Loaded configuration from: {:?}", path);
        Ok(config)
    }

    /// Get the path to the configuration file
    pub fn get_config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "videodownloader", "yt-mp3")
            .with_context(|| "Failed to get project directories")?;

        Ok(project_dirs.config_dir().join("config.json"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let downloader = &self.downloader;

        if downloader.yt_dlp_path.as_os_str().is_empty() {
            anyhow::bail!("yt-dlp path must not be empty");
        }

        if downloader.format.trim().is_empty() {
            anyhow::bail!("Format selector must not be empty");
        }

        if !SUPPORTED_CODECS.contains(&downloader.audio_codec.as_str()) {
            anyhow::bail!("Invalid audio codec: {}", downloader.audio_codec);
        }

        if !(32..=320).contains(&downloader.audio_quality_kbps) {
            anyhow::bail!("Audio quality should be between 32 and 320 kbps");
        }

        if downloader.extractor_retries > 10 || downloader.fragment_retries > 10 {
            anyhow::bail!("Retry attempts should not exceed 10");
        }

        if downloader.socket_timeout_secs == 0 || downloader.socket_timeout_secs > 300 {
            anyhow::bail!("Socket timeout should be between 1 and 300 seconds");
        }

        if !LOG_LEVELS.contains(&self.logging.log_level.as_str()) {
            anyhow::bail!(
                "Invalid log level: must be 'error', 'warn', 'info', 'debug', or 'trace'"
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_validation() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_match_download_profile() {
        let downloader = AudioDownloadConfig::default();
        assert_eq!(downloader.format, "bestaudio/best");
        assert_eq!(downloader.audio_codec, "mp3");
        assert_eq!(downloader.audio_quality_kbps, 192);
        assert_eq!(downloader.extractor_retries, 3);
        assert_eq!(downloader.fragment_retries, 3);
        assert_eq!(downloader.socket_timeout_secs, 30);
        assert!(downloader.force_ipv4);
        assert!(downloader.strip_title_metadata);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"downloader": {{"socket_timeout_secs": 60, "ffmpeg_location": "/opt/ffmpeg"}}}}"#
        )
        .unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.downloader.socket_timeout_secs, 60);
        assert_eq!(
            config.downloader.ffmpeg_location,
            Some(PathBuf::from("/opt/ffmpeg"))
        );
        assert_eq!(config.downloader.audio_quality_kbps, 192);
        assert_eq!(config.logging.log_level, "warn");
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load(Some(&dir.path().join("absent.json")));
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = AppConfig::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_config_validation() {
        let mut config = AppConfig::default();
        config.downloader.socket_timeout_secs = 0;
        assert!(config.validate().is_err());

        config = AppConfig::default();
        config.downloader.audio_quality_kbps = 999;
        assert!(config.validate().is_err());

        config = AppConfig::default();
        config.downloader.audio_codec = "opus".to_string();
        assert!(config.validate().is_err());

        config = AppConfig::default();
        config.downloader.fragment_retries = 11;
        assert!(config.validate().is_err());

        config = AppConfig::default();
        config.downloader.format = "  ".to_string();
        assert!(config.validate().is_err());

        config = AppConfig::default();
        config.logging.log_level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_saved_config_round_trips_through_load() {
        let mut config = AppConfig::default();
        config.downloader.no_playlist = false;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string_pretty(&config).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(loaded.downloader, config.downloader);
    }
}
