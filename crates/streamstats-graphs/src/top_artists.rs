//! Top artists bar chart.

use crate::aggregator::CountEntry;
use crate::renderer::{render_bar_chart, Bar, ChartStyle, ChartText, ColorScheme};
use crate::traits::GraphRenderer;
use streamstats_common::Result;
use streamstats_i18n::{Catalog, MessageKey};

/// Artists by number of songs streamed.
#[derive(Debug, Clone)]
pub struct TopArtistsGraph {
    text: ChartText,
}

impl TopArtistsGraph {
    /// Chart titled for the top `limit` artists.
    #[must_use]
    pub fn new(catalog: &Catalog, limit: usize) -> Self {
        let title = catalog.text_with_args(MessageKey::TitleTopArtists, &[("count", limit.into())]);
        Self {
            text: ChartText::localized(catalog, title, MessageKey::AxisArtist, MessageKey::AxisPlayCount),
        }
    }

    /// Title and axis text.
    #[must_use]
    pub const fn text(&self) -> &ChartText {
        &self.text
    }
}

impl GraphRenderer for TopArtistsGraph {
    type Data = [CountEntry];

    #[allow(clippy::cast_precision_loss)]
    fn render(&self, data: &Self::Data, style: &ChartStyle) -> Result<Vec<u8>> {
        let bars: Vec<Bar> = data
            .iter()
            .map(|entry| Bar::new(entry.name.as_str(), entry.count as f64))
            .collect();
        render_bar_chart(style, &self.text, &bars, ColorScheme::Set2)
    }

    fn name(&self) -> &'static str {
        "top_artists"
    }

    fn description(&self) -> &'static str {
        "Artists by number of songs streamed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use streamstats_i18n::Locale;

    #[test]
    fn test_title_uses_limit() {
        let catalog = Catalog::new(Locale::English).unwrap();
        let graph = TopArtistsGraph::new(&catalog, 20);
        assert_eq!(graph.text().title, "Top 20 Artists by Number of Songs Streamed");
        assert_eq!(graph.text().x_desc, "Artist");
        assert_eq!(graph.name(), "top_artists");
    }
}
