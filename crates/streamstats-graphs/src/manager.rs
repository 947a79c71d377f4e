//! Graph manager tying aggregation results to their chart renderers.

use crate::aggregator::{AggregateResult, Aggregator};
use crate::history::HistoryStore;
use crate::listening_by_hour::ListeningByHourGraph;
use crate::listening_by_month::ListeningByMonthGraph;
use crate::renderer::ChartStyle;
use crate::top_artists::TopArtistsGraph;
use crate::top_podcasts::TopPodcastsGraph;
use crate::top_tracks::TopTracksGraph;
use crate::traits::GraphRenderer;
use crate::view::View;
use std::fs;
use std::path::{Path, PathBuf};
use streamstats_common::{Result, StatsError};
use streamstats_i18n::Catalog;
use tracing::{info, instrument};

/// Computes views and renders their charts.
#[derive(Debug)]
pub struct GraphManager {
    aggregator: Aggregator,
    catalog: Catalog,
    style: ChartStyle,
}

impl GraphManager {
    /// Creates a new graph manager.
    #[must_use]
    pub const fn new(aggregator: Aggregator, catalog: Catalog, style: ChartStyle) -> Self {
        Self {
            aggregator,
            catalog,
            style,
        }
    }

    /// The aggregator used for [`compute`](Self::compute).
    #[must_use]
    pub const fn aggregator(&self) -> &Aggregator {
        &self.aggregator
    }

    /// The message catalog for chart and display text.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Computes `view` over `store`.
    #[must_use]
    pub fn compute(&self, view: View, store: &HistoryStore) -> AggregateResult {
        self.aggregator.compute(view, store)
    }

    /// Renders the chart of `result` as PNG bytes, `None` for metric-only views.
    pub fn render(&self, result: &AggregateResult) -> Result<Option<Vec<u8>>> {
        let view = result.view();
        let limit = self.aggregator.limit(view).unwrap_or_default();

        let png = match result {
            AggregateResult::TopArtists(entries) => {
                TopArtistsGraph::new(&self.catalog, limit).render(entries, &self.style)?
            }
            AggregateResult::TopTracks(entries) => {
                TopTracksGraph::new(&self.catalog, limit).render(entries, &self.style)?
            }
            AggregateResult::TopPodcasts(entries) => {
                TopPodcastsGraph::new(&self.catalog, limit).render(entries, &self.style)?
            }
            AggregateResult::ListeningByHour(entries) => {
                ListeningByHourGraph::new(&self.catalog).render(entries, &self.style)?
            }
            AggregateResult::ListeningByMonth(entries) => {
                ListeningByMonthGraph::new(&self.catalog).render(entries, &self.style)?
            }
            AggregateResult::ListeningTime(_) => return Ok(None),
        };

        Ok(Some(png))
    }

    /// Renders `result` to `<dir>/<slug>.png` and returns the path written.
    #[instrument(skip(self, result), fields(view = %result.view()))]
    pub fn write_chart(&self, result: &AggregateResult, dir: &Path) -> Result<Option<PathBuf>> {
        let Some(png) = self.render(result)? else {
            return Ok(None);
        };

        fs::create_dir_all(dir).map_err(|e| {
            StatsError::graph_with_source(format!("cannot create {}", dir.display()), e)
        })?;
        let path = chart_path(dir, result.view());
        fs::write(&path, png)
            .map_err(|e| StatsError::graph_with_source(format!("cannot write {}", path.display()), e))?;

        info!(path = %path.display(), "Chart written");
        Ok(Some(path))
    }
}

/// Where the chart of `view` is written inside `dir`.
#[must_use]
pub fn chart_path(dir: &Path, view: View) -> PathBuf {
    dir.join(format!("{}.png", view.slug()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use streamstats_common::test_utils::file_fixtures::create_temp_dir;
    use streamstats_common::test_utils::history_fixtures::{sample_music_history, sample_podcast_history};
    use streamstats_i18n::Locale;

    fn manager() -> GraphManager {
        let style = ChartStyle {
            width: 480,
            height: 320,
            ..ChartStyle::default()
        };
        GraphManager::new(Aggregator::default(), Catalog::new(Locale::English).unwrap(), style)
    }

    #[test]
    fn test_listening_time_has_no_chart() {
        let manager = manager();
        let store = HistoryStore::new(sample_music_history(), sample_podcast_history());
        let result = manager.compute(View::ListeningTime, &store);
        assert!(manager.render(&result).unwrap().is_none());
    }

    #[test]
    fn test_writes_every_chart_view() {
        let manager = manager();
        let store = HistoryStore::new(sample_music_history(), sample_podcast_history());
        let dir = create_temp_dir();

        for view in View::ALL {
            let result = manager.compute(view, &store);
            let written = manager.write_chart(&result, dir.path()).unwrap();
            assert_eq!(written.is_some(), view.has_chart());
            if let Some(path) = written {
                assert_eq!(path, chart_path(dir.path(), view));
                assert!(fs::metadata(&path).unwrap().len() > 0);
            }
        }
    }

    #[test]
    fn test_chart_path_uses_slug() {
        assert_eq!(
            chart_path(Path::new("charts"), View::ListeningByHour),
            PathBuf::from("charts/listening-by-hour.png")
        );
    }
}
