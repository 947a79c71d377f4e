//! Application-wide error types using thiserror.

use streamstats_common::StatsError;
use streamstats_config::ConfigError;
use streamstats_i18n::I18nError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Loading, aggregation or rendering failed.
    #[error(transparent)]
    Stats(#[from] StatsError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The configured language cannot be used.
    #[error("Localization error: {0}")]
    Localization(#[from] I18nError),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output could not be produced.
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Whether the error only affects the chart of the current view.
    #[must_use]
    pub const fn is_render_error(&self) -> bool {
        matches!(self, Self::Stats(StatsError::Graph { .. }))
    }
}

/// Result type for the application.
pub type AppResult<T> = Result<T, AppError>;
