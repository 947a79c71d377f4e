//! Error types and utilities for streamstats

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Boxed error used as the `source` of wrapped failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias for streamstats operations
pub type Result<T> = std::result::Result<T, StatsError>;

/// Main error type for streamstats operations
#[derive(Error, Debug)]
pub enum StatsError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A streaming history file could not be read or decoded
    #[error("Failed to load {}: {message}", .path.display())]
    Load {
        /// File being read
        path: PathBuf,
        /// What went wrong
        message: String,
        /// Underlying error
        #[source]
        source: Option<BoxError>,
    },

    /// An `endTime` value that matches none of the accepted formats
    #[error("Unparseable timestamp: {value:?}")]
    Timestamp {
        /// The raw value as found in the export
        value: String,
    },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
        /// Underlying error
        #[source]
        source: Option<BoxError>,
    },

    /// Chart rendering errors
    #[error("Graph error: {message}")]
    Graph {
        /// Error message
        message: String,
        /// Underlying error
        #[source]
        source: Option<BoxError>,
    },

    /// Message catalog errors
    #[error("Localization error: {message}")]
    Localization {
        /// Error message
        message: String,
        /// Locale involved, if known
        locale: Option<String>,
    },

    /// Validation errors for user input or data
    #[error("Validation error: {message}")]
    Validation {
        /// Error message
        message: String,
        /// Offending field, if any
        field: Option<String>,
    },
}

impl StatsError {
    /// Create a new load error for `path`
    pub fn load(path: impl AsRef<Path>, msg: impl Into<String>) -> Self {
        Self::Load {
            path: path.as_ref().to_path_buf(),
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new load error for `path` with source
    pub fn load_with_source(
        path: impl AsRef<Path>,
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Load {
            path: path.as_ref().to_path_buf(),
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new timestamp error
    pub fn timestamp(value: impl Into<String>) -> Self {
        Self::Timestamp {
            value: value.into(),
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new graph error
    pub fn graph(msg: impl Into<String>) -> Self {
        Self::Graph {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new graph error with source
    pub fn graph_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Graph {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new localization error
    pub fn localization(msg: impl Into<String>) -> Self {
        Self::Localization {
            message: msg.into(),
            locale: None,
        }
    }

    /// Create a new localization error with locale
    pub fn localization_with_locale(msg: impl Into<String>, locale: impl Into<String>) -> Self {
        Self::Localization {
            message: msg.into(),
            locale: Some(locale.into()),
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to StatsError
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for StatsError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::graph_with_source("Graph rendering failed", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_messages() {
        let config_error = StatsError::config_with_source(
            "invalid log level 'loud'",
            io::Error::new(io::ErrorKind::InvalidInput, "unknown directive"),
        );
        assert_eq!(config_error.to_string(), "Configuration error: invalid log level 'loud'");

        let validation_error = StatsError::validation_field("must be positive", "top_artists_limit");
        assert!(validation_error.to_string().contains("Validation error"));
        assert!(validation_error.to_string().contains("must be positive"));

        let localization_error = StatsError::localization_with_locale("Message missing", "de-DE");
        assert!(localization_error.to_string().contains("Localization error"));
    }

    #[test]
    fn test_load_error_names_the_file() {
        let error = StatsError::load("StreamingHistory_music_0.json", "not a JSON array");
        assert_eq!(
            error.to_string(),
            "Failed to load StreamingHistory_music_0.json: not a JSON array"
        );
    }

    #[test]
    fn test_error_with_source() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let wrapped = StatsError::load_with_source("missing.json", "cannot open", io_error);

        assert!(wrapped.to_string().contains("missing.json"));
        assert!(wrapped.source().is_some());
    }

    #[test]
    fn test_timestamp_error_display() {
        let error = StatsError::timestamp("yesterday-ish");
        assert_eq!(error.to_string(), "Unparseable timestamp: \"yesterday-ish\"");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let stats_error: StatsError = io_error.into();

        assert!(stats_error.to_string().contains("I/O error"));
        assert!(stats_error.source().is_some());
    }

    #[test]
    fn test_serde_error_conversion() {
        let serde_error = serde_json::from_str::<serde_json::Value>(r#"{"invalid": json}"#)
            .unwrap_err();
        let stats_error: StatsError = serde_error.into();

        assert!(stats_error.to_string().contains("Serialization error"));
    }
}
