//! Type-safe default values using const functions.

use crate::schema::*;
use std::path::PathBuf;
use streamstats_common::LoggingConfig;

/// Default number of entries in the top artists and top tracks views.
pub const fn default_top_tracks_limit() -> usize {
    20
}

/// Default number of entries in the top podcasts view.
pub const fn default_top_podcasts_limit() -> usize {
    5
}

/// Default chart size in pixels.
pub const fn default_chart_size() -> (u32, u32) {
    (1200, 600)
}

/// Default music export file names.
pub const DEFAULT_MUSIC_FILES: [&str; 2] = [
    "StreamingHistory_music_0.json",
    "StreamingHistory_music_1.json",
];

/// Default podcast export file names.
pub const DEFAULT_PODCAST_FILES: [&str; 1] = ["StreamingHistory_podcast_0.json"];

/// Default catalog language.
pub const DEFAULT_LANGUAGE: &str = "en-US";

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            views: ViewsConfig::default(),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            music_files: DEFAULT_MUSIC_FILES.iter().map(PathBuf::from).collect(),
            podcast_files: DEFAULT_PODCAST_FILES.iter().map(PathBuf::from).collect(),
        }
    }
}

impl Default for ViewsConfig {
    fn default() -> Self {
        Self {
            top_artists_limit: default_top_tracks_limit(),
            top_tracks_limit: default_top_tracks_limit(),
            top_podcasts_limit: default_top_podcasts_limit(),
            zero_fill_hours: false,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        let (width, height) = default_chart_size();
        Self {
            directory: PathBuf::from("charts"),
            render_charts: true,
            width,
            height,
        }
    }
}
