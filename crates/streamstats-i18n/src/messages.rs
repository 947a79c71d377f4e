//! Typed message identifiers.

/// Every message id present in the bundled locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// Selector label for Top Artists
    ViewTopArtists,
    /// Selector label for Top Tracks
    ViewTopTracks,
    /// Selector label for Music vs Podcast Time
    ViewListeningTime,
    /// Selector label for Top Podcasts
    ViewTopPodcasts,
    /// Selector label for Listening by Hour
    ViewListeningByHour,
    /// Selector label for Listening by Month
    ViewListeningByMonth,
    /// Chart title, takes `$count`
    TitleTopArtists,
    /// Chart title, takes `$count`
    TitleTopTracks,
    /// Chart title
    TitleListeningTime,
    /// Chart title, takes `$count`
    TitleTopPodcasts,
    /// Chart title
    TitleListeningByHour,
    /// Chart title
    TitleListeningByMonth,
    /// Axis label
    AxisArtist,
    /// Axis label
    AxisTrack,
    /// Axis label
    AxisPodcast,
    /// Axis label
    AxisPlayCount,
    /// Axis label
    AxisMinutesPlayed,
    /// Axis label
    AxisHourOfDay,
    /// Axis label
    AxisMonth,
    /// Metric label
    MetricMusic,
    /// Metric label
    MetricPodcasts,
    /// Metric label
    MetricTotal,
    /// Metric value, takes `$hours`
    MetricHours,
    /// Placeholder for empty charts
    NoData,
}

impl MessageKey {
    /// All keys, in catalog order
    pub const ALL: [Self; 24] = [
        Self::ViewTopArtists,
        Self::ViewTopTracks,
        Self::ViewListeningTime,
        Self::ViewTopPodcasts,
        Self::ViewListeningByHour,
        Self::ViewListeningByMonth,
        Self::TitleTopArtists,
        Self::TitleTopTracks,
        Self::TitleListeningTime,
        Self::TitleTopPodcasts,
        Self::TitleListeningByHour,
        Self::TitleListeningByMonth,
        Self::AxisArtist,
        Self::AxisTrack,
        Self::AxisPodcast,
        Self::AxisPlayCount,
        Self::AxisMinutesPlayed,
        Self::AxisHourOfDay,
        Self::AxisMonth,
        Self::MetricMusic,
        Self::MetricPodcasts,
        Self::MetricTotal,
        Self::MetricHours,
        Self::NoData,
    ];

    /// Fluent message id
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::ViewTopArtists => "view-top-artists",
            Self::ViewTopTracks => "view-top-tracks",
            Self::ViewListeningTime => "view-listening-time",
            Self::ViewTopPodcasts => "view-top-podcasts",
            Self::ViewListeningByHour => "view-listening-by-hour",
            Self::ViewListeningByMonth => "view-listening-by-month",
            Self::TitleTopArtists => "title-top-artists",
            Self::TitleTopTracks => "title-top-tracks",
            Self::TitleListeningTime => "title-listening-time",
            Self::TitleTopPodcasts => "title-top-podcasts",
            Self::TitleListeningByHour => "title-listening-by-hour",
            Self::TitleListeningByMonth => "title-listening-by-month",
            Self::AxisArtist => "axis-artist",
            Self::AxisTrack => "axis-track",
            Self::AxisPodcast => "axis-podcast",
            Self::AxisPlayCount => "axis-play-count",
            Self::AxisMinutesPlayed => "axis-minutes-played",
            Self::AxisHourOfDay => "axis-hour-of-day",
            Self::AxisMonth => "axis-month",
            Self::MetricMusic => "metric-music",
            Self::MetricPodcasts => "metric-podcasts",
            Self::MetricTotal => "metric-total",
            Self::MetricHours => "metric-hours",
            Self::NoData => "no-data",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = MessageKey::ALL.iter().map(|key| key.id()).collect();
        assert_eq!(ids.len(), MessageKey::ALL.len());
    }
}
