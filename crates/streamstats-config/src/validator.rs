//! Runtime validation of loaded configuration.

use crate::loader::ConfigError;
use crate::schema::Config;
use std::ops::RangeInclusive;

/// Accepted chart width and height in pixels.
pub const CHART_SIZE_RANGE: RangeInclusive<u32> = 200..=8000;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, reporting the first offending field.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.data.music_files.is_empty() {
            return Err(invalid("data.music_files", "at least one music file is required"));
        }

        if let Some(empty) = config
            .data
            .music_files
            .iter()
            .chain(&config.data.podcast_files)
            .find(|path| path.as_os_str().is_empty())
        {
            return Err(invalid("data", format!("empty file path {empty:?}")));
        }

        for (field, limit) in [
            ("views.top_artists_limit", config.views.top_artists_limit),
            ("views.top_tracks_limit", config.views.top_tracks_limit),
            ("views.top_podcasts_limit", config.views.top_podcasts_limit),
        ] {
            if limit == 0 {
                return Err(invalid(field, "must be at least 1"));
            }
        }

        if config.views.language.trim().is_empty() {
            return Err(invalid("views.language", "cannot be empty"));
        }

        for (field, size) in [
            ("output.width", config.output.width),
            ("output.height", config.output.height),
        ] {
            if !CHART_SIZE_RANGE.contains(&size) {
                return Err(invalid(
                    field,
                    format!(
                        "{size} is outside {}..={}",
                        CHART_SIZE_RANGE.start(),
                        CHART_SIZE_RANGE.end()
                    ),
                ));
            }
        }

        if config.logging.level.trim().is_empty() {
            return Err(invalid("logging.level", "cannot be empty"));
        }

        Ok(())
    }
}

fn invalid(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::Validation {
        field: field.to_string(),
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConfigValidator::validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_requires_music_file() {
        let mut config = Config::default();
        config.data.music_files.clear();

        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(err.to_string().contains("data.music_files"));
    }

    #[test]
    fn test_podcast_files_may_be_empty() {
        let mut config = Config::default();
        config.data.podcast_files.clear();
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_rejects_empty_path() {
        let mut config = Config::default();
        config.data.podcast_files.push(PathBuf::new());
        assert!(ConfigValidator::validate(&config).is_err());
    }

    #[test]
    fn test_rejects_zero_limit() {
        let mut config = Config::default();
        config.views.top_podcasts_limit = 0;

        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(err.to_string().contains("views.top_podcasts_limit"));
    }

    #[test]
    fn test_rejects_chart_size_out_of_range() {
        let mut config = Config::default();
        config.output.width = 50;
        assert!(ConfigValidator::validate(&config).is_err());

        config.output.width = 800;
        config.output.height = 10_000;
        assert!(ConfigValidator::validate(&config).is_err());
    }
}
