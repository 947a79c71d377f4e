//! Text rendering of aggregation results.

use crate::error::AppResult;
use streamstats_graphs::{AggregateResult, ListeningTimeMetrics, View};
use streamstats_i18n::{Catalog, MessageKey};

/// Title of `view`, using `limit` for the ranked views.
#[must_use]
pub fn view_title(catalog: &Catalog, view: View, limit: Option<usize>) -> String {
    match limit {
        Some(limit) => catalog.text_with_args(view.title_key(), &[("count", limit.into())]),
        None => catalog.text(view.title_key()),
    }
}

/// Formats `result` as a titled two-column table.
///
/// Ranked views print one row per entry, the hour and month views one row per
/// slot, and the listening time view its three labelled metrics.
#[must_use]
pub fn format_table(catalog: &Catalog, result: &AggregateResult, limit: Option<usize>) -> String {
    let title = view_title(catalog, result.view(), limit);
    if result.is_empty() {
        return format!("{title}\n\n{}\n", catalog.text(MessageKey::NoData));
    }

    match result {
        AggregateResult::TopArtists(entries) | AggregateResult::TopTracks(entries) => {
            let category = if matches!(result, AggregateResult::TopArtists(_)) {
                MessageKey::AxisArtist
            } else {
                MessageKey::AxisTrack
            };
            let rows = entries
                .iter()
                .map(|entry| (entry.name.clone(), entry.count.to_string()))
                .collect();
            table(&title, (catalog.text(category), catalog.text(MessageKey::AxisPlayCount)), rows)
        }
        AggregateResult::TopPodcasts(entries) => {
            let rows = entries
                .iter()
                .map(|entry| (entry.name.clone(), format!("{:.2}", entry.minutes)))
                .collect();
            table(&title, minutes_header(catalog, MessageKey::AxisPodcast), rows)
        }
        AggregateResult::ListeningByHour(entries) => {
            let rows = entries
                .iter()
                .map(|entry| (format!("{:02}:00", entry.hour), format!("{:.2}", entry.minutes)))
                .collect();
            table(&title, minutes_header(catalog, MessageKey::AxisHourOfDay), rows)
        }
        AggregateResult::ListeningByMonth(entries) => {
            let rows = entries
                .iter()
                .map(|entry| {
                    let minutes = entry
                        .minutes
                        .map_or_else(|| "-".to_string(), |minutes| format!("{minutes:.2}"));
                    (entry.name().to_string(), minutes)
                })
                .collect();
            table(&title, minutes_header(catalog, MessageKey::AxisMonth), rows)
        }
        AggregateResult::ListeningTime(time) => {
            let metrics = ListeningTimeMetrics::new(catalog).metrics(time);
            let width = metrics
                .iter()
                .map(|metric| metric.label.chars().count())
                .max()
                .unwrap_or_default();

            let mut out = format!("{title}\n\n");
            for metric in metrics {
                out.push_str(&format!("{:<width$}  {}\n", metric.label, metric.value));
            }
            out
        }
    }
}

/// Serializes `result` as pretty-printed JSON tagged with its view.
pub fn format_json(result: &AggregateResult) -> AppResult<String> {
    let mut json = serde_json::to_string_pretty(result)?;
    json.push('\n');
    Ok(json)
}

fn minutes_header(catalog: &Catalog, category: MessageKey) -> (String, String) {
    (catalog.text(category), catalog.text(MessageKey::AxisMinutesPlayed))
}

fn table(title: &str, header: (String, String), rows: Vec<(String, String)>) -> String {
    let width = |cell: &String| cell.chars().count();
    let left = rows.iter().map(|(name, _)| width(name)).fold(width(&header.0), usize::max);
    let right = rows.iter().map(|(_, value)| width(value)).fold(width(&header.1), usize::max);

    let mut out = format!("{title}\n\n");
    out.push_str(&format!("{:<left$}  {:>right$}\n", header.0, header.1));
    out.push_str(&"-".repeat(left + 2 + right));
    out.push('\n');
    for (name, value) in rows {
        out.push_str(&format!("{name:<left$}  {value:>right$}\n"));
    }
    out
}
