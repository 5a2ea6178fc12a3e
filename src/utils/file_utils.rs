//! File system utilities

use std::path::PathBuf;

/// Path of the artifact the audio post-processor leaves behind for `stem`.
///
/// The extension is appended rather than substituted, so `song.v2` becomes
/// `song.v2.mp3`.
pub fn final_audio_path(stem: &str, codec: &str) -> PathBuf {
    PathBuf::from(format!("{stem}.{codec}"))
}

/// yt-dlp output template for `stem`. `%` starts a template field, so
/// literal percent signs are doubled.
pub fn output_template(stem: &str) -> String {
    format!("{}.%(ext)s", stem.replace('%', "%%"))
}
