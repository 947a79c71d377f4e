//! Aggregation of play events into the six dashboard views.
//!
//! Every function here is a pure function of the event slices it is given.
//! Rankings use a stable sort, so entries with equal values keep the order in
//! which their key was first seen.

use crate::history::HistoryStore;
use crate::view::View;
use chrono::{Datelike, Month, Timelike};
use serde::Serialize;
use std::collections::HashMap;
use streamstats_common::{ms_to_minutes, ms_to_seconds, seconds_to_hours, MusicPlay, PlayEvent, PodcastPlay};
use streamstats_config::ViewsConfig;
use tracing::{debug, instrument};

/// Hours in a day.
pub const HOURS_PER_DAY: usize = 24;

/// Calendar months, January first.
pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// A key ranked by number of plays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountEntry {
    /// Artist or track name.
    pub name: String,
    /// Number of plays.
    pub count: u64,
}

/// A key ranked by listening time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationEntry {
    /// Podcast name.
    pub name: String,
    /// Minutes played.
    pub minutes: f64,
}

/// Minutes played in one hour of the day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourEntry {
    /// Hour of `endTime`, 0 to 23.
    pub hour: u32,
    /// Minutes played.
    pub minutes: f64,
}

/// Minutes played in one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthEntry {
    /// Calendar month.
    #[serde(serialize_with = "serialize_month")]
    pub month: Month,
    /// Minutes played, `None` when the month has no plays.
    pub minutes: Option<f64>,
}

impl MonthEntry {
    /// English month name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.month.name()
    }
}

fn serialize_month<S: serde::Serializer>(month: &Month, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(month.name())
}

/// Total listening time split by source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ListeningTime {
    /// Hours of music.
    pub music_hours: f64,
    /// Hours of podcasts.
    pub podcast_hours: f64,
    /// Hours of both.
    pub total_hours: f64,
}

/// The computed data behind one view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", content = "data", rename_all = "kebab-case")]
pub enum AggregateResult {
    /// Artists by play count.
    TopArtists(Vec<CountEntry>),
    /// Tracks by play count.
    TopTracks(Vec<CountEntry>),
    /// Music and podcast hours.
    ListeningTime(ListeningTime),
    /// Podcasts by minutes played.
    TopPodcasts(Vec<DurationEntry>),
    /// Minutes per hour of day.
    ListeningByHour(Vec<HourEntry>),
    /// Minutes per calendar month.
    ListeningByMonth(Vec<MonthEntry>),
}

impl AggregateResult {
    /// The view this result belongs to.
    #[must_use]
    pub const fn view(&self) -> View {
        match self {
            Self::TopArtists(_) => View::TopArtists,
            Self::TopTracks(_) => View::TopTracks,
            Self::ListeningTime(_) => View::ListeningTime,
            Self::TopPodcasts(_) => View::TopPodcasts,
            Self::ListeningByHour(_) => View::ListeningByHour,
            Self::ListeningByMonth(_) => View::ListeningByMonth,
        }
    }

    /// Whether there is nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::TopArtists(entries) | Self::TopTracks(entries) => entries.is_empty(),
            Self::ListeningTime(time) => time.total_hours <= 0.0,
            Self::TopPodcasts(entries) => entries.is_empty(),
            Self::ListeningByHour(entries) => entries.is_empty(),
            Self::ListeningByMonth(entries) => entries.iter().all(|entry| entry.minutes.is_none()),
        }
    }
}

/// Groups `keys`, counts them and keeps the `limit` most frequent.
pub fn top_n_by_count<'a, I>(keys: I, limit: usize) -> Vec<CountEntry>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut ranked = group_first_seen(keys.into_iter().map(|key| (key, 1u64)));
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);

    ranked
        .into_iter()
        .map(|(name, count)| CountEntry {
            name: name.to_string(),
            count,
        })
        .collect()
}

/// Groups `(key, ms)` pairs, sums the milliseconds and keeps the `limit`
/// longest, reported in minutes.
pub fn top_n_by_duration<'a, I>(entries: I, limit: usize) -> Vec<DurationEntry>
where
    I: IntoIterator<Item = (&'a str, u64)>,
{
    let mut ranked = group_first_seen(entries);
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);

    ranked
        .into_iter()
        .map(|(name, ms)| DurationEntry {
            name: name.to_string(),
            minutes: ms_to_minutes(ms),
        })
        .collect()
}

/// Sums values per key, keeping keys in first-seen order.
fn group_first_seen<'a, I>(entries: I) -> Vec<(&'a str, u64)>
where
    I: IntoIterator<Item = (&'a str, u64)>,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut groups: Vec<(&'a str, u64)> = Vec::new();

    for (key, value) in entries {
        match index.get(key) {
            Some(&slot) => groups[slot].1 += value,
            None => {
                index.insert(key, groups.len());
                groups.push((key, value));
            }
        }
    }

    groups
}

/// Artists ranked by number of plays.
pub fn top_artists(music: &[MusicPlay], limit: usize) -> Vec<CountEntry> {
    top_n_by_count(music.iter().map(|play| play.artist_name.as_str()), limit)
}

/// Tracks ranked by number of plays.
pub fn top_tracks(music: &[MusicPlay], limit: usize) -> Vec<CountEntry> {
    top_n_by_count(music.iter().map(|play| play.track_name.as_str()), limit)
}

/// Podcasts ranked by minutes played.
pub fn top_podcasts(podcasts: &[PodcastPlay], limit: usize) -> Vec<DurationEntry> {
    top_n_by_duration(
        podcasts
            .iter()
            .map(|play| (play.podcast_name.as_str(), play.ms_played)),
        limit,
    )
}

/// Music, podcast and total listening hours.
pub fn listening_time(music: &[MusicPlay], podcasts: &[PodcastPlay]) -> ListeningTime {
    let music_seconds = ms_to_seconds(total_ms(music));
    let podcast_seconds = ms_to_seconds(total_ms(podcasts));

    ListeningTime {
        music_hours: seconds_to_hours(music_seconds),
        podcast_hours: seconds_to_hours(podcast_seconds),
        total_hours: seconds_to_hours(music_seconds + podcast_seconds),
    }
}

fn total_ms<E: PlayEvent>(events: &[E]) -> u64 {
    events.iter().map(PlayEvent::ms_played).sum()
}

/// Minutes of music per hour of day, ascending.
///
/// Hours without plays are left out unless `zero_fill` is set.
pub fn listening_by_hour(music: &[MusicPlay], zero_fill: bool) -> Vec<HourEntry> {
    let mut totals: [Option<u64>; HOURS_PER_DAY] = [None; HOURS_PER_DAY];
    for play in music {
        let slot = &mut totals[play.end_time.hour() as usize];
        *slot = Some(slot.unwrap_or(0) + play.ms_played);
    }

    (0u32..)
        .zip(totals)
        .filter_map(|(hour, total)| match total {
            Some(ms) => Some(HourEntry {
                hour,
                minutes: ms_to_minutes(ms),
            }),
            None if zero_fill => Some(HourEntry { hour, minutes: 0.0 }),
            None => None,
        })
        .collect()
}

/// Minutes of music per calendar month, always January to December.
pub fn listening_by_month(music: &[MusicPlay]) -> Vec<MonthEntry> {
    let mut totals: [Option<u64>; 12] = [None; 12];
    for play in music {
        let slot = &mut totals[play.end_time.month0() as usize];
        *slot = Some(slot.unwrap_or(0) + play.ms_played);
    }

    MONTHS
        .into_iter()
        .zip(totals)
        .map(|(month, total)| MonthEntry {
            month,
            minutes: total.map(ms_to_minutes),
        })
        .collect()
}

/// Computes views with the configured limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregator {
    top_artists_limit: usize,
    top_tracks_limit: usize,
    top_podcasts_limit: usize,
    zero_fill_hours: bool,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(&ViewsConfig::default())
    }
}

impl Aggregator {
    /// Aggregator using the limits of the `views` config section.
    #[must_use]
    pub const fn new(config: &ViewsConfig) -> Self {
        Self {
            top_artists_limit: config.top_artists_limit,
            top_tracks_limit: config.top_tracks_limit,
            top_podcasts_limit: config.top_podcasts_limit,
            zero_fill_hours: config.zero_fill_hours,
        }
    }

    /// Number of entries a ranked view shows, `None` for the other views.
    #[must_use]
    pub const fn limit(&self, view: View) -> Option<usize> {
        match view {
            View::TopArtists => Some(self.top_artists_limit),
            View::TopTracks => Some(self.top_tracks_limit),
            View::TopPodcasts => Some(self.top_podcasts_limit),
            View::ListeningTime | View::ListeningByHour | View::ListeningByMonth => None,
        }
    }

    /// Computes `view` over `store`.
    #[instrument(skip(self, store), fields(music = store.music().len(), podcasts = store.podcasts().len()))]
    pub fn compute(&self, view: View, store: &HistoryStore) -> AggregateResult {
        let result = match view {
            View::TopArtists => {
                AggregateResult::TopArtists(top_artists(store.music(), self.top_artists_limit))
            }
            View::TopTracks => {
                AggregateResult::TopTracks(top_tracks(store.music(), self.top_tracks_limit))
            }
            View::ListeningTime => {
                AggregateResult::ListeningTime(listening_time(store.music(), store.podcasts()))
            }
            View::TopPodcasts => {
                AggregateResult::TopPodcasts(top_podcasts(store.podcasts(), self.top_podcasts_limit))
            }
            View::ListeningByHour => {
                AggregateResult::ListeningByHour(listening_by_hour(store.music(), self.zero_fill_hours))
            }
            View::ListeningByMonth => AggregateResult::ListeningByMonth(listening_by_month(store.music())),
        };

        debug!(view = %view, empty = result.is_empty(), "Aggregated view");
        result
    }
}
