//! Fixtures shared by the data-layer unit tests.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::model::{Cell, Dataset, Song};

pub(crate) fn song(year: i32, genre: &str, danceability: f64) -> Song {
    Song {
        year,
        title: format!("t{year}"),
        artist: "a".into(),
        genre: genre.into(),
        danceability,
        energy: 50.0,
        valence: None,
        acousticness: None,
        speechiness: None,
        liveness: None,
        loudness: Some(-5.0),
        duration_ms: 180_000,
        duration_min: 3.0,
        popularity: 70.0,
        extra: BTreeMap::from([("bpm".to_string(), Cell::Integer(120))]),
    }
}

pub(crate) fn dataset(songs: Vec<Song>) -> Arc<Dataset> {
    let columns = [
        "title",
        "artist",
        "genre",
        "year",
        "bpm",
        "energy",
        "danceability",
        "loudness",
        "valence",
        "duration_ms",
        "popularity",
        "duration_min",
    ]
    .iter()
    .map(|c| c.to_string())
    .collect();
    Arc::new(Dataset::new(songs, columns))
}
