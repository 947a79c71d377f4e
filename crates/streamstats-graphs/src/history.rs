//! Loading streaming history exports and keeping them for the session.

use arc_swap::ArcSwapOption;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use streamstats_common::{format_timestamp, MusicPlay, PlayEvent, PodcastPlay, Result, StatsError};
use streamstats_config::DataConfig;
use tracing::{debug, info, instrument};

/// The loaded event collection. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryStore {
    music: Vec<MusicPlay>,
    podcasts: Vec<PodcastPlay>,
}

impl HistoryStore {
    /// Wraps already-loaded plays.
    #[must_use]
    pub const fn new(music: Vec<MusicPlay>, podcasts: Vec<PodcastPlay>) -> Self {
        Self { music, podcasts }
    }

    /// Music plays in file order.
    #[must_use]
    pub fn music(&self) -> &[MusicPlay] {
        &self.music
    }

    /// Podcast plays in file order.
    #[must_use]
    pub fn podcasts(&self) -> &[PodcastPlay] {
        &self.podcasts
    }

    /// Whether neither collection holds any play.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.music.is_empty() && self.podcasts.is_empty()
    }
}

/// Anything that can produce a [`HistoryStore`].
#[cfg_attr(test, mockall::automock)]
pub trait HistorySource {
    /// Reads and decodes the whole history.
    fn load(&self) -> Result<HistoryStore>;
}

/// Reads export files from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryLoader {
    music_files: Vec<PathBuf>,
    podcast_files: Vec<PathBuf>,
}

impl HistoryLoader {
    /// Loader for explicit file lists.
    #[must_use]
    pub const fn new(music_files: Vec<PathBuf>, podcast_files: Vec<PathBuf>) -> Self {
        Self {
            music_files,
            podcast_files,
        }
    }

    /// Loader for the files named in the `data` config section.
    #[must_use]
    pub fn from_config(config: &DataConfig) -> Self {
        Self::new(config.music_files.clone(), config.podcast_files.clone())
    }

    fn read_all<T: DeserializeOwned + PlayEvent>(files: &[PathBuf]) -> Result<Vec<T>> {
        let mut records = Vec::new();
        for path in files {
            records.extend(read_file::<T>(path)?);
        }

        let first = records.iter().map(PlayEvent::end_time).min();
        let last = records.iter().map(PlayEvent::end_time).max();
        if let (Some(first), Some(last)) = (first, last) {
            let source = T::SOURCE;
            debug!(
                source = %source,
                from = %format_timestamp(first),
                to = %format_timestamp(last),
                "History time range"
            );
        }
        Ok(records)
    }
}

impl HistorySource for HistoryLoader {
    #[instrument(skip(self), fields(music_files = self.music_files.len(), podcast_files = self.podcast_files.len()))]
    fn load(&self) -> Result<HistoryStore> {
        let music = Self::read_all::<MusicPlay>(&self.music_files)?;
        let podcasts = Self::read_all::<PodcastPlay>(&self.podcast_files)?;

        info!(
            music = music.len(),
            podcasts = podcasts.len(),
            "Loaded streaming history"
        );
        Ok(HistoryStore::new(music, podcasts))
    }
}

/// Decodes one export file, a JSON array of play records.
pub fn read_file<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).map_err(|e| StatsError::load_with_source(path, "cannot open file", e))?;

    let records: Vec<T> = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        let message = format!(
            "invalid history data at line {} column {}",
            e.line(),
            e.column()
        );
        StatsError::load_with_source(path, message, e)
    })?;

    debug!(path = %path.display(), records = records.len(), "Read history file");
    Ok(records)
}

/// Load-once holder for the session's [`HistoryStore`].
#[derive(Debug, Default)]
pub struct HistoryCache {
    store: ArcSwapOption<HistoryStore>,
}

impl HistoryCache {
    /// An empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached store, loading it from `source` on first use.
    ///
    /// A failed load leaves the cache empty.
    pub fn get_or_load(&self, source: &dyn HistorySource) -> Result<Arc<HistoryStore>> {
        if let Some(store) = self.store.load_full() {
            return Ok(store);
        }

        let store = Arc::new(source.load()?);
        self.store.store(Some(Arc::clone(&store)));
        Ok(store)
    }

    /// Whether a store is cached.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.store.load().is_some()
    }

    /// Drops the cached store so the next access reloads.
    pub fn clear(&self) {
        if self.store.swap(None).is_some() {
            debug!("History cache cleared");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use streamstats_common::test_utils::file_fixtures::{create_temp_dir, write_file};
    use streamstats_common::test_utils::history_fixtures::{
        sample_music_history, sample_music_json, sample_podcast_history, sample_podcast_json,
    };

    fn sample_store() -> HistoryStore {
        HistoryStore::new(sample_music_history(), sample_podcast_history())
    }

    #[test]
    fn test_loads_files_in_order() {
        let dir = create_temp_dir();
        let first = write_file(&dir, "StreamingHistory_music_0.json", &sample_music_json());
        let second = write_file(
            &dir,
            "StreamingHistory_music_1.json",
            r#"[{"endTime":"2023-03-01 10:00","artistName":"Portishead","trackName":"Roads","msPlayed":300000}]"#,
        );
        let podcasts = write_file(&dir, "StreamingHistory_podcast_0.json", &sample_podcast_json());

        let loader = HistoryLoader::new(vec![first, second], vec![podcasts]);
        let store = loader.load().unwrap();

        assert_eq!(store.music().len(), 8);
        assert_eq!(store.music()[0].artist_name, "Radiohead");
        assert_eq!(store.music()[7].artist_name, "Portishead");
        assert_eq!(store.podcasts(), sample_podcast_history().as_slice());
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let dir = create_temp_dir();
        let path = write_file(
            &dir,
            "podcast.json",
            r#"[{"endTime":"2023-01-01 07:00","podcastName":"The Daily","episodeName":"Monday","msPlayed":1000}]"#,
        );

        let records: Vec<PodcastPlay> = read_file(&path).unwrap();
        assert_eq!(records[0].podcast_name, "The Daily");
    }

    #[test]
    fn test_missing_file_names_the_path() {
        let loader = HistoryLoader::new(vec![PathBuf::from("definitely/not/here.json")], vec![]);
        let err = loader.load().unwrap_err();

        assert!(matches!(err, StatsError::Load { .. }));
        assert!(err.to_string().contains("definitely/not/here.json"));
    }

    #[test]
    fn test_negative_ms_played_is_a_load_error() {
        let dir = create_temp_dir();
        let path = write_file(
            &dir,
            "music.json",
            r#"[{"endTime":"2023-01-01 07:00","artistName":"A","trackName":"t","msPlayed":-5}]"#,
        );

        let err = read_file::<MusicPlay>(&path).unwrap_err();
        assert!(err.to_string().contains("music.json"));
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_bad_timestamp_is_a_load_error() {
        let dir = create_temp_dir();
        let path = write_file(
            &dir,
            "music.json",
            r#"[{"endTime":"last tuesday","artistName":"A","trackName":"t","msPlayed":5}]"#,
        );

        assert!(matches!(
            read_file::<MusicPlay>(&path),
            Err(StatsError::Load { .. })
        ));
    }

    #[test]
    fn test_from_config_uses_configured_files() {
        let config = DataConfig {
            music_files: vec![PathBuf::from("a.json"), PathBuf::from("b.json")],
            podcast_files: vec![PathBuf::from("p.json")],
        };
        assert_eq!(
            HistoryLoader::from_config(&config),
            HistoryLoader::new(config.music_files.clone(), config.podcast_files.clone())
        );
    }

    #[test]
    fn test_cache_loads_once() {
        let mut source = MockHistorySource::new();
        source.expect_load().times(1).returning(|| Ok(sample_store()));

        let cache = HistoryCache::new();
        let first = cache.get_or_load(&source).unwrap();
        let second = cache.get_or_load(&source).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert!(cache.is_loaded());
    }

    #[test]
    fn test_cache_clear_forces_reload() {
        let mut source = MockHistorySource::new();
        source.expect_load().times(2).returning(|| Ok(sample_store()));

        let cache = HistoryCache::new();
        let first = cache.get_or_load(&source).unwrap();
        cache.clear();
        assert!(!cache.is_loaded());
        let second = cache.get_or_load(&source).unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(*first, *second);
    }

    #[test]
    fn test_failed_load_is_not_cached() {
        let mut source = MockHistorySource::new();
        let mut calls = 0;
        source.expect_load().times(2).returning(move || {
            calls += 1;
            if calls == 1 {
                Err(StatsError::load("music.json", "truncated"))
            } else {
                Ok(HistoryStore::default())
            }
        });

        let cache = HistoryCache::new();
        assert!(cache.get_or_load(&source).is_err());
        assert!(!cache.is_loaded());
        assert!(cache.get_or_load(&source).unwrap().is_empty());
    }
}
