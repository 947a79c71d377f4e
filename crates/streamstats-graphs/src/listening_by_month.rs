//! Listening time by calendar month.

use crate::aggregator::MonthEntry;
use crate::renderer::{render_bar_chart, Bar, ChartStyle, ChartText, ColorScheme};
use crate::traits::GraphRenderer;
use streamstats_common::Result;
use streamstats_i18n::{Catalog, MessageKey};

/// Minutes played per month, January to December.
#[derive(Debug, Clone)]
pub struct ListeningByMonthGraph {
    text: ChartText,
}

impl ListeningByMonthGraph {
    /// Chart with localized title and axes.
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        let title = catalog.text(MessageKey::TitleListeningByMonth);
        Self {
            text: ChartText::localized(catalog, title, MessageKey::AxisMonth, MessageKey::AxisMinutesPlayed),
        }
    }

    /// Title and axis text.
    #[must_use]
    pub const fn text(&self) -> &ChartText {
        &self.text
    }
}

impl GraphRenderer for ListeningByMonthGraph {
    type Data = [MonthEntry];

    /// Months without plays get a zero-height bar.
    fn render(&self, data: &Self::Data, style: &ChartStyle) -> Result<Vec<u8>> {
        let bars: Vec<Bar> = data
            .iter()
            .map(|entry| Bar::new(entry.name(), entry.minutes.unwrap_or(0.0)))
            .collect();
        render_bar_chart(style, &self.text, &bars, ColorScheme::CoolWarm)
    }

    fn name(&self) -> &'static str {
        "listening_by_month"
    }

    fn description(&self) -> &'static str {
        "Total listening time by month"
    }
}
