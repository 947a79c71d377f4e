//! Music vs podcast time, shown as three labelled metrics instead of a chart.

use crate::aggregator::ListeningTime;
use streamstats_common::round_to;
use streamstats_i18n::{Catalog, MessageKey};

/// One labelled value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    /// Localized label.
    pub label: String,
    /// Localized value text such as `1.5 hours`.
    pub value: String,
}

/// Formats hours rounded to two decimals, keeping a trailing `.0` on whole numbers.
#[must_use]
pub fn format_hours(hours: f64) -> String {
    format!("{:?}", round_to(hours, 2))
}

/// Builds the localized metrics of the listening time view.
#[derive(Debug, Clone, Copy)]
pub struct ListeningTimeMetrics<'a> {
    catalog: &'a Catalog,
}

impl<'a> ListeningTimeMetrics<'a> {
    /// Metrics labelled from `catalog`.
    #[must_use]
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Music, podcast and total metrics in that order.
    #[must_use]
    pub fn metrics(&self, time: &ListeningTime) -> Vec<Metric> {
        [
            (MessageKey::MetricMusic, time.music_hours),
            (MessageKey::MetricPodcasts, time.podcast_hours),
            (MessageKey::MetricTotal, time.total_hours),
        ]
        .into_iter()
        .map(|(key, hours)| Metric {
            label: self.catalog.text(key),
            value: self
                .catalog
                .text_with_args(MessageKey::MetricHours, &[("hours", format_hours(hours).into())]),
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use streamstats_common::{ms_to_seconds, seconds_to_hours};
    use streamstats_i18n::Locale;

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(1.5), "1.5");
        assert_eq!(format_hours(2.0), "2.0");
        assert_eq!(format_hours(0.602_777), "0.6");
        assert_eq!(format_hours(0.0), "0.0");
        assert_eq!(format_hours(12.345_6), "12.35");
    }

    #[test]
    fn test_format_hours_rounds_ties_to_even() {
        let hours = |ms: u64| seconds_to_hours(ms_to_seconds(ms));
        assert_eq!(format_hours(hours(450_000)), "0.12");
        assert_eq!(format_hours(hours(2_250_000)), "0.62");
    }

    #[test]
    fn test_tied_music_hours_in_metrics() {
        let catalog = Catalog::new(Locale::English).unwrap();
        let time = ListeningTime {
            music_hours: 0.125,
            podcast_hours: 0.5,
            total_hours: 0.625,
        };

        let values: Vec<String> = ListeningTimeMetrics::new(&catalog)
            .metrics(&time)
            .into_iter()
            .map(|metric| metric.value)
            .collect();
        assert_eq!(values, ["0.12 hours", "0.5 hours", "0.62 hours"]);
    }

    #[test]
    fn test_metrics_are_labelled() {
        let catalog = Catalog::new(Locale::English).unwrap();
        let time = ListeningTime {
            music_hours: 0.602_777,
            podcast_hours: 1.5,
            total_hours: 2.102_777,
        };

        let metrics = ListeningTimeMetrics::new(&catalog).metrics(&time);
        let rendered: Vec<(&str, &str)> = metrics
            .iter()
            .map(|m| (m.label.as_str(), m.value.as_str()))
            .collect();
        assert_eq!(
            rendered,
            vec![
                ("Music", "0.6 hours"),
                ("Podcasts", "1.5 hours"),
                ("Total", "2.1 hours"),
            ]
        );
    }
}
