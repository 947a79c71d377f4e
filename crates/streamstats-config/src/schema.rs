//! Configuration schema definitions using serde.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use streamstats_common::LoggingConfig;

/// Main configuration structure for streamstats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input files.
    pub data: DataConfig,
    /// Per-view settings.
    pub views: ViewsConfig,
    /// Chart output.
    pub output: OutputConfig,
    /// Logging.
    pub logging: LoggingConfig,
}

/// Streaming history export files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Music history files, concatenated in this order.
    pub music_files: Vec<PathBuf>,
    /// Podcast history files, concatenated in this order.
    pub podcast_files: Vec<PathBuf>,
}

/// Settings for the individual views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewsConfig {
    /// Number of artists in "Top Artists".
    pub top_artists_limit: usize,
    /// Number of tracks in "Top Tracks".
    pub top_tracks_limit: usize,
    /// Number of shows in "Top Podcasts".
    pub top_podcasts_limit: usize,
    /// Report hours without plays as zero in "Listening by Hour".
    pub zero_fill_hours: bool,
    /// Language of chart titles and labels.
    pub language: String,
}

/// Chart image output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory that receives `<view>.png` files.
    pub directory: PathBuf,
    /// Whether chart images are written at all.
    pub render_charts: bool,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), crate::ConfigError> {
        crate::ConfigValidator::validate(self)
    }
}
