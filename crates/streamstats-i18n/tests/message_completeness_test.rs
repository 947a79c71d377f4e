//! Every typed message key must resolve in every bundled locale.

use streamstats_common::test_utils::init_test_logging;
use streamstats_i18n::{Catalog, FluentValue, Locale, MessageKey};

fn args_for(key: MessageKey) -> Vec<(&'static str, FluentValue<'static>)> {
    match key {
        MessageKey::TitleTopArtists | MessageKey::TitleTopTracks | MessageKey::TitleTopPodcasts => {
            vec![("count", 5_usize.into())]
        }
        MessageKey::MetricHours => vec![("hours", "1.25".into())],
        _ => Vec::new(),
    }
}

#[test]
fn test_every_key_defined_in_every_locale() {
    init_test_logging();

    for locale in Locale::ALL {
        let catalog = Catalog::new(locale).unwrap();
        for key in MessageKey::ALL {
            assert!(
                catalog.contains(key.id()),
                "{} is missing from {locale}",
                key.id()
            );
        }
    }
}

#[test]
fn test_every_key_formats_without_errors() {
    for locale in Locale::ALL {
        let catalog = Catalog::new(locale).unwrap();
        for key in MessageKey::ALL {
            let args = streamstats_i18n::fluent_args(&args_for(key));
            let text = catalog
                .format(key.id(), Some(&args))
                .unwrap_or_else(|e| panic!("{} in {locale}: {e}", key.id()));
            assert!(!text.trim().is_empty());
        }
    }
}

#[test]
fn test_arguments_are_substituted() {
    let english = Catalog::new(Locale::English).unwrap();
    let german = Catalog::new(Locale::German).unwrap();

    let hours = [("hours", FluentValue::from("12.5"))];
    assert_eq!(english.text_with_args(MessageKey::MetricHours, &hours), "12.5 hours");
    assert_eq!(german.text_with_args(MessageKey::MetricHours, &hours), "12.5 Stunden");
}
