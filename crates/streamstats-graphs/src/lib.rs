//! # streamstats graphs
//!
//! Turns Spotify streaming history exports into the six dashboard views.
//!
//! - [`history`] loads export files once per session
//! - [`aggregator`] groups, counts and time-buckets play events
//! - [`view`] names the views and parses selections
//! - [`renderer`] and the per-view graph modules draw PNG charts with plotters

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregator;
pub mod history;
pub mod manager;
pub mod renderer;
pub mod traits;
pub mod view;

// Graph implementations
pub mod listening_by_hour;
pub mod listening_by_month;
pub mod listening_time;
pub mod top_artists;
pub mod top_podcasts;
pub mod top_tracks;

pub use aggregator::*;
pub use history::*;
pub use manager::*;
pub use renderer::*;
pub use traits::*;
pub use view::*;

pub use listening_by_hour::ListeningByHourGraph;
pub use listening_by_month::ListeningByMonthGraph;
pub use listening_time::{format_hours, ListeningTimeMetrics, Metric};
pub use top_artists::TopArtistsGraph;
pub use top_podcasts::TopPodcastsGraph;
pub use top_tracks::TopTracksGraph;
