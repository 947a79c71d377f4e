//! Decoding export records the way the history loader sees them.

use chrono::{Datelike, Timelike};
use proptest::prelude::*;
use streamstats_common::{parse_end_time, EventSource, MusicPlay, PlayEvent, PodcastPlay, StatsError};

#[test]
fn spotify_export_records() {
    let music: Vec<MusicPlay> = serde_json::from_str(
        r#"[
            {"endTime":"2023-01-05 08:30","artistName":"Radiohead","trackName":"Reckoner","msPlayed":290000},
            {"endTime":"2023-01-05 09:10","artistName":"Björk","trackName":"Jóga","msPlayed":305000}
        ]"#,
    )
    .unwrap();
    let podcasts: Vec<PodcastPlay> = serde_json::from_str(
        r#"[{"endTime":"2023-01-09 07:30","podcastName":"The Daily","episodeName":"Monday","msPlayed":600000}]"#,
    )
    .unwrap();

    assert_eq!(music.len(), 2);
    assert_eq!(music[1].artist_name, "Björk");
    assert_eq!(music[0].end_time().hour(), 8);
    assert_eq!(podcasts[0].podcast_name, "The Daily");
    assert_eq!(podcasts[0].ms_played(), 600_000);
}

#[test]
fn accepted_end_time_forms() {
    let cases = [
        ("2023-03-06 22:15", (2023, 3, 6, 22, 15)),
        ("2023-03-06 22:15:30", (2023, 3, 6, 22, 15)),
        ("2023-03-06T22:15:00", (2023, 3, 6, 22, 15)),
        ("2023-03-06T22:15:00.250", (2023, 3, 6, 22, 15)),
        ("2023-03-06T22:15:00+02:00", (2023, 3, 6, 22, 15)),
        ("2023-03-06", (2023, 3, 6, 0, 0)),
    ];

    for (raw, (year, month, day, hour, minute)) in cases {
        let parsed = parse_end_time(raw).unwrap_or_else(|e| panic!("{raw}: {e}"));
        assert_eq!(
            (parsed.year(), parsed.month(), parsed.day(), parsed.hour(), parsed.minute()),
            (year, month, day, hour, minute),
            "{raw}"
        );
    }
}

#[test]
fn rejected_end_time_is_named() {
    let err = parse_end_time("06/03/2023 10pm").unwrap_err();
    assert!(matches!(err, StatsError::Timestamp { .. }));
    assert!(err.to_string().contains("06/03/2023 10pm"));
}

#[test]
fn missing_ms_played_is_rejected() {
    let json = r#"[{"endTime":"2023-03-06 22:15","artistName":"Air","trackName":"La femme d'argent"}]"#;
    assert!(serde_json::from_str::<Vec<MusicPlay>>(json).is_err());
}

#[test]
fn event_sources() {
    assert_eq!(MusicPlay::SOURCE, EventSource::Music);
    assert_eq!(PodcastPlay::SOURCE, EventSource::Podcast);
}

proptest! {
    #[test]
    fn export_minutes_parse_to_wall_clock(minute in 0u32..1440) {
        let raw = format!("2023-06-01 {:02}:{:02}", minute / 60, minute % 60);
        let parsed = parse_end_time(&raw).unwrap();
        prop_assert_eq!(parsed.hour() * 60 + parsed.minute(), minute);
        prop_assert_eq!(parsed.day(), 1);
    }
}
