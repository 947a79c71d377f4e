//! Top tracks bar chart.

use crate::aggregator::CountEntry;
use crate::renderer::{render_bar_chart, Bar, ChartStyle, ChartText, ColorScheme};
use crate::traits::GraphRenderer;
use streamstats_common::Result;
use streamstats_i18n::{Catalog, MessageKey};

/// Tracks by number of streams.
#[derive(Debug, Clone)]
pub struct TopTracksGraph {
    text: ChartText,
}

impl TopTracksGraph {
    /// Chart titled for the top `limit` tracks.
    #[must_use]
    pub fn new(catalog: &Catalog, limit: usize) -> Self {
        let title = catalog.text_with_args(MessageKey::TitleTopTracks, &[("count", limit.into())]);
        Self {
            text: ChartText::localized(catalog, title, MessageKey::AxisTrack, MessageKey::AxisPlayCount),
        }
    }

    /// Title and axis text.
    #[must_use]
    pub const fn text(&self) -> &ChartText {
        &self.text
    }
}

impl GraphRenderer for TopTracksGraph {
    type Data = [CountEntry];

    #[allow(clippy::cast_precision_loss)]
    fn render(&self, data: &Self::Data, style: &ChartStyle) -> Result<Vec<u8>> {
        let bars: Vec<Bar> = data
            .iter()
            .map(|entry| Bar::new(entry.name.as_str(), entry.count as f64))
            .collect();
        render_bar_chart(style, &self.text, &bars, ColorScheme::Set3)
    }

    fn name(&self) -> &'static str {
        "top_tracks"
    }

    fn description(&self) -> &'static str {
        "Tracks by number of streams"
    }
}
