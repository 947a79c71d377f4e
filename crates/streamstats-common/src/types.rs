//! Play event records as found in a Spotify streaming history export.

use crate::utils::{deserialize_end_time, serialize_end_time};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which export file family a play event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventSource {
    /// `StreamingHistory_music_*.json`
    Music,
    /// `StreamingHistory_podcast_*.json`
    Podcast,
}

impl fmt::Display for EventSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Music => write!(f, "music"),
            Self::Podcast => write!(f, "podcast"),
        }
    }
}

/// Fields shared by every play event regardless of its source.
pub trait PlayEvent {
    /// The file family this event belongs to.
    const SOURCE: EventSource;

    /// When playback ended.
    fn end_time(&self) -> NaiveDateTime;

    /// Milliseconds of playback.
    fn ms_played(&self) -> u64;
}

/// One streamed track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicPlay {
    /// When playback ended.
    #[serde(
        deserialize_with = "deserialize_end_time",
        serialize_with = "serialize_end_time"
    )]
    pub end_time: NaiveDateTime,
    /// Performing artist.
    pub artist_name: String,
    /// Track title.
    pub track_name: String,
    /// Milliseconds of playback.
    pub ms_played: u64,
}

impl PlayEvent for MusicPlay {
    const SOURCE: EventSource = EventSource::Music;

    fn end_time(&self) -> NaiveDateTime {
        self.end_time
    }

    fn ms_played(&self) -> u64 {
        self.ms_played
    }
}

/// One streamed podcast episode. Episode-level fields of the export are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodcastPlay {
    /// When playback ended.
    #[serde(
        deserialize_with = "deserialize_end_time",
        serialize_with = "serialize_end_time"
    )]
    pub end_time: NaiveDateTime,
    /// Show name.
    pub podcast_name: String,
    /// Milliseconds of playback.
    pub ms_played: u64,
}

impl PlayEvent for PodcastPlay {
    const SOURCE: EventSource = EventSource::Podcast;

    fn end_time(&self) -> NaiveDateTime {
        self.end_time
    }

    fn ms_played(&self) -> u64 {
        self.ms_played
    }
}
