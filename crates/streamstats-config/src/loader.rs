//! Configuration loading and persistence with atomic file operations.

use crate::schema::Config;
use std::env;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "STREAMSTATS_CONFIG_PATH";

/// File names probed in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILES: [&str; 3] =
    ["streamstats.yaml", "streamstats.yml", "streamstats.toml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading or writing a configuration file
    #[error("Failed to access configuration file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("Failed to parse TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("Failed to write TOML configuration: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// File extension not mapped to a format
    #[error("Unsupported configuration format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {message}")]
    EnvParse { var: String, message: String },

    /// Configuration validation error
    #[error("Invalid configuration value for '{field}': {message}")]
    Validation { field: String, message: String },
}

impl From<ConfigError> for streamstats_common::StatsError {
    fn from(err: ConfigError) -> Self {
        Self::config_with_source("configuration could not be loaded", err)
    }
}

/// Serialization formats recognised by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.yaml` / `.yml`
    Yaml,
    /// `.toml`
    Toml,
    /// `.json`
    Json,
}

impl ConfigFormat {
    /// Picks the format for `path` from its extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Parses `content` in this format.
    pub fn parse(self, content: &str) -> Result<Config, ConfigError> {
        Ok(match self {
            Self::Yaml => serde_yaml::from_str(content)?,
            Self::Toml => toml::from_str(content)?,
            Self::Json => serde_json::from_str(content)?,
        })
    }

    /// Serializes `config` in this format.
    pub fn render(self, config: &Config) -> Result<String, ConfigError> {
        Ok(match self {
            Self::Yaml => serde_yaml::to_string(config)?,
            Self::Toml => toml::to_string_pretty(config)?,
            Self::Json => serde_json::to_string_pretty(config)?,
        })
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration: explicit path, then `STREAMSTATS_CONFIG_PATH`, then
    /// the default file names in the working directory, then built-in defaults.
    /// Environment overrides are applied last and the result is validated.
    pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
            .or_else(|| {
                DEFAULT_CONFIG_FILES
                    .iter()
                    .map(PathBuf::from)
                    .find(|candidate| candidate.exists())
            });

        let mut config = match path {
            Some(path) => Self::read_file(&path)?,
            None => {
                debug!("No configuration file found, using defaults");
                Config::default()
            }
        };

        Self::apply_env_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a specific file without environment overrides.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let config = Self::read_file(path.as_ref())?;
        config.validate()?;
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<Config, ConfigError> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = format.parse(&content)?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Saves configuration to file atomically.
    pub fn save(path: impl AsRef<Path>, config: &Config) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let io_err = |source: std::io::Error| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        let rendered = ConfigFormat::from_path(path)?.render(config)?;
        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut staged = tempfile::NamedTempFile::new_in(directory).map_err(io_err)?;
        staged.write_all(rendered.as_bytes()).map_err(io_err)?;
        staged.persist(path).map_err(|e| io_err(e.error))?;

        info!(path = %path.display(), "Saved configuration");
        Ok(())
    }

    /// Apply environment variable overrides to configuration
    pub fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        Self::apply_overrides(config, |var| env::var(var).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(files) = lookup("STREAMSTATS_MUSIC_FILES") {
            config.data.music_files = split_paths(&files);
        }

        if let Some(files) = lookup("STREAMSTATS_PODCAST_FILES") {
            config.data.podcast_files = split_paths(&files);
        }

        if let Some(dir) = lookup("STREAMSTATS_OUTPUT_DIR") {
            config.output.directory = PathBuf::from(dir);
        }

        if let Some(language) = lookup("STREAMSTATS_LANGUAGE") {
            config.views.language = language;
        }

        if let Some(level) = lookup("STREAMSTATS_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(value) = lookup("STREAMSTATS_LOG_FORMAT") {
            config.logging.format = parse_var("STREAMSTATS_LOG_FORMAT", &value)?;
        }

        if let Some(value) = lookup("STREAMSTATS_TOP_ARTISTS_LIMIT") {
            config.views.top_artists_limit = parse_var("STREAMSTATS_TOP_ARTISTS_LIMIT", &value)?;
        }

        if let Some(value) = lookup("STREAMSTATS_TOP_TRACKS_LIMIT") {
            config.views.top_tracks_limit = parse_var("STREAMSTATS_TOP_TRACKS_LIMIT", &value)?;
        }

        if let Some(value) = lookup("STREAMSTATS_TOP_PODCASTS_LIMIT") {
            config.views.top_podcasts_limit = parse_var("STREAMSTATS_TOP_PODCASTS_LIMIT", &value)?;
        }

        if let Some(value) = lookup("STREAMSTATS_ZERO_FILL_HOURS") {
            config.views.zero_fill_hours = parse_var("STREAMSTATS_ZERO_FILL_HOURS", &value)?;
        }

        Ok(())
    }
}

fn split_paths(value: &str) -> Vec<PathBuf> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .collect()
}

fn parse_var<T>(var: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::EnvParse {
        var: var.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("a.yaml")).unwrap(), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.YML")).unwrap(), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.toml")).unwrap(), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.json")).unwrap(), ConfigFormat::Json);
        assert!(ConfigFormat::from_path(Path::new("a.ini")).is_err());
        assert!(ConfigFormat::from_path(Path::new("config")).is_err());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = ConfigFormat::Yaml
            .parse("views:\n  top_podcasts_limit: 3\n")
            .unwrap();

        assert_eq!(config.views.top_podcasts_limit, 3);
        assert_eq!(config.views.top_artists_limit, 20);
        assert_eq!(config.data, crate::DataConfig::default());
    }

    #[test]
    fn test_overrides_apply() {
        let mut config = Config::default();
        let lookup = lookup_from(&[
            ("STREAMSTATS_MUSIC_FILES", "a.json, b.json,,"),
            ("STREAMSTATS_PODCAST_FILES", ""),
            ("STREAMSTATS_TOP_ARTISTS_LIMIT", "10"),
            ("STREAMSTATS_ZERO_FILL_HOURS", "true"),
            ("STREAMSTATS_LANGUAGE", "de-DE"),
        ]);

        ConfigLoader::apply_overrides(&mut config, lookup).unwrap();

        assert_eq!(
            config.data.music_files,
            vec![PathBuf::from("a.json"), PathBuf::from("b.json")]
        );
        assert!(config.data.podcast_files.is_empty());
        assert_eq!(config.views.top_artists_limit, 10);
        assert!(config.views.zero_fill_hours);
        assert_eq!(config.views.language, "de-DE");
    }

    #[test]
    fn test_bad_numeric_override_is_an_error() {
        let mut config = Config::default();
        let lookup = lookup_from(&[("STREAMSTATS_TOP_TRACKS_LIMIT", "many")]);

        let err = ConfigLoader::apply_overrides(&mut config, lookup).unwrap_err();
        assert!(matches!(err, ConfigError::EnvParse { ref var, .. } if var == "STREAMSTATS_TOP_TRACKS_LIMIT"));
    }

    #[test]
    fn test_log_format_override() {
        let mut config = Config::default();
        let lookup = lookup_from(&[("STREAMSTATS_LOG_FORMAT", "JSON")]);
        ConfigLoader::apply_overrides(&mut config, lookup).unwrap();
        assert_eq!(config.logging.format, streamstats_common::LogFormat::Json);

        let lookup = lookup_from(&[("STREAMSTATS_LOG_FORMAT", "xml")]);
        let err = ConfigLoader::apply_overrides(&mut config, lookup).unwrap_err();
        assert!(matches!(err, ConfigError::EnvParse { ref var, .. } if var == "STREAMSTATS_LOG_FORMAT"));
    }

    #[test]
    fn test_no_overrides_leaves_config_untouched() {
        let mut config = Config::default();
        ConfigLoader::apply_overrides(&mut config, |_| None).unwrap();
        assert_eq!(config, Config::default());
    }
}
