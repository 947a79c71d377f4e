//! Test utilities and shared test helpers for streamstats.
//!
//! Fixtures for play events, temporary export files and proptest strategies
//! used by the unit and integration tests of every crate in the workspace.

use crate::{MusicPlay, PodcastPlay};
use chrono::{NaiveDate, NaiveDateTime};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Test fixture for creating an `endTime` value.
pub fn mock_end_time(year: i32, month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, min, 0))
        .expect("valid fixture timestamp")
}

/// Assert that two floating point numbers are approximately equal within a tolerance.
pub fn assert_approx_eq(left: f64, right: f64, tolerance: f64) {
    let diff = (left - right).abs();
    assert!(
        diff <= tolerance,
        "assertion failed: `{left}` is not approximately equal to `{right}` (tolerance: {tolerance}, diff: {diff})"
    );
}

/// Play event fixtures.
pub mod history_fixtures {
    use super::*;

    /// A music play ending at `end_time`.
    pub fn music_play(artist: &str, track: &str, end_time: NaiveDateTime, ms_played: u64) -> MusicPlay {
        MusicPlay {
            end_time,
            artist_name: artist.to_string(),
            track_name: track.to_string(),
            ms_played,
        }
    }

    /// A podcast play ending at `end_time`.
    pub fn podcast_play(podcast: &str, end_time: NaiveDateTime, ms_played: u64) -> PodcastPlay {
        PodcastPlay {
            end_time,
            podcast_name: podcast.to_string(),
            ms_played,
        }
    }

    /// Seven plays over three artists and two months.
    ///
    /// Counts: Radiohead 3, Björk 2, Massive Attack 2. Radiohead is seen first.
    pub fn sample_music_history() -> Vec<MusicPlay> {
        vec![
            music_play("Radiohead", "Reckoner", mock_end_time(2023, 1, 5, 8, 30), 290_000),
            music_play("Björk", "Jóga", mock_end_time(2023, 1, 5, 9, 10), 305_000),
            music_play("Radiohead", "Nude", mock_end_time(2023, 1, 6, 21, 0), 255_000),
            music_play("Massive Attack", "Teardrop", mock_end_time(2023, 2, 1, 21, 45), 330_000),
            music_play("Radiohead", "Reckoner", mock_end_time(2023, 2, 2, 8, 5), 290_000),
            music_play("Björk", "Hyperballad", mock_end_time(2023, 2, 3, 23, 59), 321_000),
            music_play("Massive Attack", "Angel", mock_end_time(2023, 2, 4, 0, 15), 379_000),
        ]
    }

    /// Three podcast plays over two shows.
    pub fn sample_podcast_history() -> Vec<PodcastPlay> {
        vec![
            podcast_play("The Daily", mock_end_time(2023, 1, 9, 7, 30), 600_000),
            podcast_play("Hardcore History", mock_end_time(2023, 1, 9, 18, 0), 3_600_000),
            podcast_play("The Daily", mock_end_time(2023, 1, 10, 7, 30), 1_200_000),
        ]
    }

    /// The sample music history as an export-style JSON document.
    pub fn sample_music_json() -> String {
        serde_json::to_string_pretty(&sample_music_history()).expect("fixtures serialize")
    }

    /// The sample podcast history as an export-style JSON document.
    pub fn sample_podcast_json() -> String {
        serde_json::to_string_pretty(&sample_podcast_history()).expect("fixtures serialize")
    }
}

/// Temporary export files.
#[cfg(feature = "tempfile")]
pub mod file_fixtures {
    use std::path::PathBuf;

    /// Create a temporary directory for tests that automatically cleans up.
    pub fn create_temp_dir() -> tempfile::TempDir {
        tempfile::tempdir().expect("Failed to create temporary directory")
    }

    /// Writes `contents` to `name` inside `dir` and returns the full path.
    pub fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).expect("Failed to write fixture file");
        path
    }
}

/// Property-based testing utilities using proptest.
#[cfg(feature = "proptest")]
pub mod property_testing {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for `endTime` values across one calendar year.
    pub fn end_time_strategy() -> impl Strategy<Value = NaiveDateTime> {
        (1u32..=12, 1u32..=28, 0u32..24, 0u32..60)
            .prop_map(|(month, day, hour, min)| mock_end_time(2023, month, day, hour, min))
    }

    /// Strategy for music plays drawn from a small pool of artists and tracks so
    /// that groups collide.
    pub fn music_play_strategy() -> impl Strategy<Value = MusicPlay> {
        (
            prop::sample::select(vec!["A", "B", "C", "D", "E"]),
            prop::sample::select(vec!["t1", "t2", "t3", "t4"]),
            end_time_strategy(),
            0u64..600_000,
        )
            .prop_map(|(artist, track, end_time, ms_played)| MusicPlay {
                end_time,
                artist_name: artist.to_string(),
                track_name: track.to_string(),
                ms_played,
            })
    }

    /// Strategy for podcast plays drawn from a small pool of shows.
    pub fn podcast_play_strategy() -> impl Strategy<Value = PodcastPlay> {
        (
            prop::sample::select(vec!["P1", "P2", "P3", "P4", "P5", "P6", "P7"]),
            end_time_strategy(),
            0u64..7_200_000,
        )
            .prop_map(|(podcast, end_time, ms_played)| PodcastPlay {
                end_time,
                podcast_name: podcast.to_string(),
                ms_played,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::history_fixtures::*;
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_init_logging_multiple_calls() {
        init_test_logging();
        init_test_logging();
    }

    #[test]
    fn test_mock_end_time() {
        let end_time = mock_end_time(2024, 1, 1, 12, 30);
        assert_eq!(end_time.year(), 2024);
        assert_eq!(end_time.month(), 1);
        assert_eq!(end_time.hour(), 12);
        assert_eq!(end_time.minute(), 30);
    }

    #[test]
    fn test_assert_approx_eq() {
        assert_approx_eq(1.0, 1.0001, 0.001);
        assert_approx_eq(1.0, 0.9999, 0.001);
    }

    #[test]
    #[should_panic]
    fn test_assert_approx_eq_fails() {
        assert_approx_eq(1.0, 1.1, 0.05);
    }

    #[test]
    fn test_sample_json_round_trips_through_export_format() {
        let decoded: Vec<MusicPlay> = serde_json::from_str(&sample_music_json()).unwrap();
        assert_eq!(decoded, sample_music_history());

        let decoded: Vec<PodcastPlay> = serde_json::from_str(&sample_podcast_json()).unwrap();
        assert_eq!(decoded, sample_podcast_history());
    }
}
