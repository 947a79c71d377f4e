//! The six dashboard views and how they are selected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use streamstats_common::StatsError;
use streamstats_i18n::MessageKey;

/// A selectable view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    /// Artists by number of songs streamed.
    TopArtists,
    /// Tracks by number of streams.
    TopTracks,
    /// Music hours against podcast hours.
    ListeningTime,
    /// Podcasts by time streamed.
    TopPodcasts,
    /// Minutes played per hour of day.
    ListeningByHour,
    /// Minutes played per calendar month.
    ListeningByMonth,
}

impl View {
    /// Every view in selector order.
    pub const ALL: [Self; 6] = [
        Self::TopArtists,
        Self::TopTracks,
        Self::ListeningTime,
        Self::TopPodcasts,
        Self::ListeningByHour,
        Self::ListeningByMonth,
    ];

    /// Selector label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TopArtists => "Top Artists",
            Self::TopTracks => "Top Tracks",
            Self::ListeningTime => "Music vs Podcast Time",
            Self::TopPodcasts => "Top Podcasts",
            Self::ListeningByHour => "Listening by Hour",
            Self::ListeningByMonth => "Listening by Month",
        }
    }

    /// Kebab-case identifier, also the chart file stem.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::TopArtists => "top-artists",
            Self::TopTracks => "top-tracks",
            Self::ListeningTime => "listening-time",
            Self::TopPodcasts => "top-podcasts",
            Self::ListeningByHour => "listening-by-hour",
            Self::ListeningByMonth => "listening-by-month",
        }
    }

    /// Localized selector label.
    #[must_use]
    pub const fn label_key(self) -> MessageKey {
        match self {
            Self::TopArtists => MessageKey::ViewTopArtists,
            Self::TopTracks => MessageKey::ViewTopTracks,
            Self::ListeningTime => MessageKey::ViewListeningTime,
            Self::TopPodcasts => MessageKey::ViewTopPodcasts,
            Self::ListeningByHour => MessageKey::ViewListeningByHour,
            Self::ListeningByMonth => MessageKey::ViewListeningByMonth,
        }
    }

    /// Localized chart or metrics title.
    #[must_use]
    pub const fn title_key(self) -> MessageKey {
        match self {
            Self::TopArtists => MessageKey::TitleTopArtists,
            Self::TopTracks => MessageKey::TitleTopTracks,
            Self::ListeningTime => MessageKey::TitleListeningTime,
            Self::TopPodcasts => MessageKey::TitleTopPodcasts,
            Self::ListeningByHour => MessageKey::TitleListeningByHour,
            Self::ListeningByMonth => MessageKey::TitleListeningByMonth,
        }
    }

    /// Whether the view is drawn as a chart rather than shown as metrics.
    #[must_use]
    pub const fn has_chart(self) -> bool {
        !matches!(self, Self::ListeningTime)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for View {
    type Err = StatsError;

    /// Accepts the label in any case or the slug.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|view| view.label().eq_ignore_ascii_case(wanted) || view.slug().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| StatsError::validation_field(format!("unknown view {wanted:?}"), "view"))
    }
}
