//! Listening time by hour of day, drawn as a line with markers.

use crate::aggregator::HourEntry;
use crate::renderer::{render_line_chart, ChartStyle, ChartText};
use crate::traits::GraphRenderer;
use streamstats_common::Result;
use streamstats_i18n::{Catalog, MessageKey};

/// Minutes played per hour of day.
#[derive(Debug, Clone)]
pub struct ListeningByHourGraph {
    text: ChartText,
}

impl ListeningByHourGraph {
    /// Chart with localized title and axes.
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        let title = catalog.text(MessageKey::TitleListeningByHour);
        Self {
            text: ChartText::localized(catalog, title, MessageKey::AxisHourOfDay, MessageKey::AxisMinutesPlayed),
        }
    }

    /// Title and axis text.
    #[must_use]
    pub const fn text(&self) -> &ChartText {
        &self.text
    }
}

impl GraphRenderer for ListeningByHourGraph {
    type Data = [HourEntry];

    fn render(&self, data: &Self::Data, style: &ChartStyle) -> Result<Vec<u8>> {
        let points: Vec<(u32, f64)> = data.iter().map(|entry| (entry.hour, entry.minutes)).collect();
        render_line_chart(style, &self.text, &points)
    }

    fn name(&self) -> &'static str {
        "listening_by_hour"
    }

    fn description(&self) -> &'static str {
        "Listening time by hour of day"
    }
}
