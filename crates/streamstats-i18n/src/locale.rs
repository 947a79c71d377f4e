//! Supported locales and their bundled Fluent resources

use crate::error::{I18nError, I18nResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// Locales shipped with the crate
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Locale {
    /// `en-US`, also the fallback for missing messages
    #[default]
    English,
    /// `de-DE`
    German,
}

impl Locale {
    /// Every supported locale
    pub const ALL: [Self; 2] = [Self::English, Self::German];

    /// Full language tag
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en-US",
            Self::German => "de-DE",
        }
    }

    /// Two-letter language code
    #[must_use]
    pub const fn short_code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::German => "de",
        }
    }

    /// Parse a locale from a language code, ignoring case and accepting `_` as separator
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let normalized = code.trim().replace('_', "-").to_ascii_lowercase();
        Self::ALL.into_iter().find(|locale| {
            normalized == locale.short_code() || normalized == locale.code().to_ascii_lowercase()
        })
    }

    /// Convert to a Fluent `LanguageIdentifier`
    pub fn to_language_identifier(self) -> I18nResult<LanguageIdentifier> {
        self.code()
            .parse()
            .map_err(|_| I18nError::InvalidLanguageId(self.code().to_string()))
    }

    /// Fluent source compiled into the binary for this locale
    #[must_use]
    pub const fn resource(self) -> &'static str {
        match self {
            Self::English => include_str!("../locales/en-US/main.ftl"),
            Self::German => include_str!("../locales/de-DE/main.ftl"),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| I18nError::UnsupportedLocale {
            code: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_variants() {
        assert_eq!(Locale::from_code("en"), Some(Locale::English));
        assert_eq!(Locale::from_code("en-US"), Some(Locale::English));
        assert_eq!(Locale::from_code("EN_us"), Some(Locale::English));
        assert_eq!(Locale::from_code("de"), Some(Locale::German));
        assert_eq!(Locale::from_code(" de-DE "), Some(Locale::German));
        assert_eq!(Locale::from_code("fr-FR"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "pt-BR".parse::<Locale>().unwrap_err();
        assert!(matches!(err, I18nError::UnsupportedLocale { code } if code == "pt-BR"));
    }

    #[test]
    fn test_language_identifiers_parse() {
        for locale in Locale::ALL {
            let id = locale.to_language_identifier().unwrap();
            assert_eq!(id.to_string(), locale.code());
        }
    }

    #[test]
    fn test_resources_are_bundled() {
        for locale in Locale::ALL {
            assert!(locale.resource().contains("view-top-artists"));
        }
    }
}
