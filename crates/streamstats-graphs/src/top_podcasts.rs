//! Top podcasts bar chart.

use crate::aggregator::DurationEntry;
use crate::renderer::{render_bar_chart, Bar, ChartStyle, ChartText, ColorScheme};
use crate::traits::GraphRenderer;
use streamstats_common::Result;
use streamstats_i18n::{Catalog, MessageKey};

/// Podcasts by minutes streamed.
#[derive(Debug, Clone)]
pub struct TopPodcastsGraph {
    text: ChartText,
}

impl TopPodcastsGraph {
    /// Chart titled for the top `limit` podcasts.
    #[must_use]
    pub fn new(catalog: &Catalog, limit: usize) -> Self {
        let title = catalog.text_with_args(MessageKey::TitleTopPodcasts, &[("count", limit.into())]);
        Self {
            text: ChartText::localized(catalog, title, MessageKey::AxisPodcast, MessageKey::AxisMinutesPlayed),
        }
    }

    /// Title and axis text.
    #[must_use]
    pub const fn text(&self) -> &ChartText {
        &self.text
    }
}

impl GraphRenderer for TopPodcastsGraph {
    type Data = [DurationEntry];

    fn render(&self, data: &Self::Data, style: &ChartStyle) -> Result<Vec<u8>> {
        let bars: Vec<Bar> = data
            .iter()
            .map(|entry| Bar::new(entry.name.as_str(), entry.minutes))
            .collect();
        render_bar_chart(style, &self.text, &bars, ColorScheme::Muted)
    }

    fn name(&self) -> &'static str {
        "top_podcasts"
    }

    fn description(&self) -> &'static str {
        "Podcasts by time streamed in minutes"
    }
}
