//! Integration tests for streamstats-config crate.

use std::path::PathBuf;
use streamstats_common::test_utils::file_fixtures::{create_temp_dir, write_file};
use streamstats_common::LogFormat;
use streamstats_config::{Config, ConfigError, ConfigLoader};

#[test]
fn test_load_yaml_file() {
    let dir = create_temp_dir();
    let path = write_file(
        &dir,
        "streamstats.yaml",
        r#"
data:
  music_files:
    - exports/StreamingHistory_music_0.json
  podcast_files: []
views:
  top_artists_limit: 10
  zero_fill_hours: true
output:
  directory: out
  width: 800
  height: 400
logging:
  level: debug
  format: compact
"#,
    );

    let config = ConfigLoader::load_from_file(&path).unwrap();

    assert_eq!(
        config.data.music_files,
        vec![PathBuf::from("exports/StreamingHistory_music_0.json")]
    );
    assert!(config.data.podcast_files.is_empty());
    assert_eq!(config.views.top_artists_limit, 10);
    assert_eq!(config.views.top_tracks_limit, 20);
    assert!(config.views.zero_fill_hours);
    assert_eq!(config.output.directory, PathBuf::from("out"));
    assert_eq!(config.logging.format, LogFormat::Compact);
}

#[test]
fn test_load_toml_file() {
    let dir = create_temp_dir();
    let path = write_file(
        &dir,
        "streamstats.toml",
        r#"
[views]
top_podcasts_limit = 3
language = "de-DE"

[output]
render_charts = false
"#,
    );

    let config = ConfigLoader::load_from_file(&path).unwrap();
    assert_eq!(config.views.top_podcasts_limit, 3);
    assert_eq!(config.views.language, "de-DE");
    assert!(!config.output.render_charts);
    assert_eq!(config.output.width, 1200);
}

#[test]
fn test_invalid_values_are_rejected() {
    let dir = create_temp_dir();
    let path = write_file(&dir, "bad.yaml", "views:\n  top_tracks_limit: 0\n");

    let err = ConfigLoader::load_from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Validation { .. }));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = create_temp_dir();
    let err = ConfigLoader::load_from_file(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_malformed_yaml_is_a_parse_error() {
    let dir = create_temp_dir();
    let path = write_file(&dir, "broken.yaml", "views: [unclosed\n");

    let err = ConfigLoader::load_from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Yaml(_)));
}

#[test]
fn test_save_and_reload_each_format() {
    let dir = create_temp_dir();
    let mut config = Config::default();
    config.views.top_artists_limit = 7;
    config.output.directory = PathBuf::from("rendered");

    for name in ["saved.yaml", "saved.toml", "saved.json"] {
        let path = dir.path().join(name);
        ConfigLoader::save(&path, &config).unwrap();
        let reloaded = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(reloaded, config, "format {name}");
    }
}

#[test]
fn test_config_error_converts_to_stats_error() {
    let err = ConfigError::Validation {
        field: "output.width".to_string(),
        message: "too small".to_string(),
    };
    let stats: streamstats_common::StatsError = err.into();
    assert!(stats.to_string().contains("Configuration error"));
}
