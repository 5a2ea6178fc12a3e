use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::{debug, error};

use yt_mp3::utils::logging::init_tracing;
use yt_mp3::{
    download_mp3_command, AppConfig, AppError, DownloadOutcome, YoutubeDownloader, USAGE,
};

/// Download a video's audio track as MP3 and print the result as JSON
#[derive(Parser, Debug)]
#[command(name = "yt-mp3", version)]
struct Cli {
    /// Video page URL
    video_url: String,

    /// Output path without extension; `.mp3` is appended
    #[arg(allow_hyphen_values = true)]
    output_path: String,

    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// yt-dlp executable
    #[arg(long = "yt-dlp", env = "YT_MP3_YTDLP", value_name = "PATH")]
    yt_dlp: Option<PathBuf>,

    /// ffmpeg binary or directory passed through to yt-dlp
    #[arg(long, env = "YT_MP3_FFMPEG", value_name = "PATH")]
    ffmpeg_location: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // stdout carries the JSON line only
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                eprint!("{}", err.render());
            }
            let usage = AppError::Usage(USAGE.to_string());
            return report(DownloadOutcome::failed(usage.to_string()), ExitCode::from(1));
        }
    };

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            init_tracing(if cli.verbose { "debug" } else { "warn" });
            error!("Configuration rejected: {:#}", err);
            return report(
                DownloadOutcome::failed(format!("{:#}", err)),
                ExitCode::from(1),
            );
        }
    };

    init_tracing(if cli.verbose {
        "debug"
    } else {
        config.logging.log_level.as_str()
    });
    debug!("Effective configuration: {:?}", config);

    let downloader = match YoutubeDownloader::new(config.downloader) {
        Ok(downloader) => downloader,
        Err(err) => return report(DownloadOutcome::failed(err.to_string()), ExitCode::from(1)),
    };

    let outcome = download_mp3_command(&downloader, &cli.video_url, &cli.output_path).await;
    report(outcome, ExitCode::SUCCESS)
}

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = AppConfig::load(cli.config.as_deref())?;

    if let Some(path) = &cli.yt_dlp {
        config.downloader.yt_dlp_path = path.clone();
    }
    if let Some(path) = &cli.ffmpeg_location {
        config.downloader.ffmpeg_location = Some(path.clone());
    }

    config.validate()?;
    Ok(config)
}

fn report(outcome: DownloadOutcome, code: ExitCode) -> ExitCode {
    println!("{}", outcome.to_json_line());
    code
}
