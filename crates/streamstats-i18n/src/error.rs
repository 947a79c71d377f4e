//! Error types for message catalog operations

use streamstats_common::StatsError;
use thiserror::Error;

/// Errors that can occur while building or querying a [`Catalog`](crate::Catalog)
#[derive(Error, Debug)]
pub enum I18nError {
    /// The configured language has no bundled locale
    #[error("Unsupported language: {code:?}")]
    UnsupportedLocale {
        /// Requested language code
        code: String,
    },

    /// Failed to parse a language identifier
    #[error("Invalid language identifier: {0}")]
    InvalidLanguageId(String),

    /// A bundled Fluent resource failed to parse or register
    #[error("Failed to load Fluent resource for {locale}: {errors:?}")]
    Resource {
        /// Locale of the resource
        locale: String,
        /// Parse or registration errors
        errors: Vec<String>,
    },

    /// Message not found in any bundle
    #[error("Message not found: {key}")]
    MessageNotFound {
        /// Message id
        key: String,
    },

    /// Failed to format a message
    #[error("Failed to format message '{key}': {errors:?}")]
    MessageFormat {
        /// Message id
        key: String,
        /// Fluent formatting errors
        errors: Vec<String>,
    },
}

/// Result type for catalog operations
pub type I18nResult<T> = Result<T, I18nError>;

impl From<I18nError> for StatsError {
    fn from(err: I18nError) -> Self {
        match &err {
            I18nError::UnsupportedLocale { code } | I18nError::InvalidLanguageId(code) => {
                Self::localization_with_locale(err.to_string(), code.clone())
            }
            I18nError::Resource { locale, .. } => {
                Self::localization_with_locale(err.to_string(), locale.clone())
            }
            I18nError::MessageNotFound { .. } | I18nError::MessageFormat { .. } => {
                Self::localization(err.to_string())
            }
        }
    }
}
