//! Fluent bundles for one locale plus the English fallback

use crate::error::{I18nError, I18nResult};
use crate::locale::Locale;
use crate::messages::MessageKey;
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource, FluentValue};
use std::fmt;
use tracing::{debug, warn};

type Bundle = FluentBundle<FluentResource>;

/// Resolves chart and selector text for the configured language.
///
/// Messages missing from the selected locale are looked up in `en-US`.
pub struct Catalog {
    locale: Locale,
    bundle: Bundle,
    fallback: Option<Bundle>,
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("locale", &self.locale)
            .field("fallback", &self.fallback.is_some())
            .finish_non_exhaustive()
    }
}

impl Catalog {
    /// Build the catalog for `locale`
    pub fn new(locale: Locale) -> I18nResult<Self> {
        let bundle = build_bundle(locale)?;
        let fallback = if locale == Locale::English {
            None
        } else {
            Some(build_bundle(Locale::English)?)
        };

        debug!(locale = %locale, "Message catalog ready");
        Ok(Self {
            locale,
            bundle,
            fallback,
        })
    }

    /// Build the catalog for a configured language code such as `de-DE`
    pub fn for_language(code: &str) -> I18nResult<Self> {
        let locale = code.parse::<Locale>()?;
        Self::new(locale)
    }

    /// Selected locale
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Whether the selected locale itself defines `id`
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.bundle.has_message(id)
    }

    /// Format message `id`, falling back to `en-US`
    pub fn format(&self, id: &str, args: Option<&FluentArgs>) -> I18nResult<String> {
        if self.bundle.has_message(id) {
            return format_in(&self.bundle, id, args);
        }

        if let Some(fallback) = &self.fallback {
            if fallback.has_message(id) {
                warn!(key = id, locale = %self.locale, "Message missing, using en-US");
                return format_in(fallback, id, args);
            }
        }

        Err(I18nError::MessageNotFound {
            key: id.to_string(),
        })
    }

    /// Text for `key`. Unresolvable messages render as their id.
    #[must_use]
    pub fn text(&self, key: MessageKey) -> String {
        self.text_with_args(key, &[])
    }

    /// Text for `key` with Fluent variables
    #[must_use]
    pub fn text_with_args(&self, key: MessageKey, args: &[(&str, FluentValue<'_>)]) -> String {
        let fluent_args = if args.is_empty() {
            None
        } else {
            Some(fluent_args(args))
        };

        self.format(key.id(), fluent_args.as_ref())
            .unwrap_or_else(|err| {
                warn!(key = key.id(), error = %err, "Falling back to message id");
                key.id().to_string()
            })
    }
}

/// Collect `(name, value)` pairs into `FluentArgs`
#[must_use]
pub fn fluent_args<'a>(args: &[(&'a str, FluentValue<'a>)]) -> FluentArgs<'a> {
    let mut fluent_args = FluentArgs::new();
    for (name, value) in args {
        fluent_args.set(*name, value.clone());
    }
    fluent_args
}

fn build_bundle(locale: Locale) -> I18nResult<Bundle> {
    let resource = FluentResource::try_new(locale.resource().to_string()).map_err(|(_, errors)| {
        I18nError::Resource {
            locale: locale.code().to_string(),
            errors: errors.iter().map(|e| format!("{e:?}")).collect(),
        }
    })?;

    let mut bundle = Bundle::new_concurrent(vec![locale.to_language_identifier()?]);
    bundle.set_use_isolating(false);
    bundle
        .add_resource(resource)
        .map_err(|errors| I18nError::Resource {
            locale: locale.code().to_string(),
            errors: errors.iter().map(|e| format!("{e:?}")).collect(),
        })?;

    Ok(bundle)
}

fn format_in(bundle: &Bundle, id: &str, args: Option<&FluentArgs>) -> I18nResult<String> {
    let pattern = bundle
        .get_message(id)
        .and_then(|message| message.value())
        .ok_or_else(|| I18nError::MessageNotFound {
            key: id.to_string(),
        })?;

    let mut errors = Vec::new();
    let formatted = bundle.format_pattern(pattern, args, &mut errors);
    if !errors.is_empty() {
        return Err(I18nError::MessageFormat {
            key: id.to_string(),
            errors: errors.iter().map(|e| format!("{e:?}")).collect(),
        });
    }

    Ok(formatted.into_owned())
}
