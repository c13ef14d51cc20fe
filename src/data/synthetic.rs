use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::model::{Dataset, Song};

pub const FIRST_YEAR: i32 = 2010;
pub const LAST_YEAR: i32 = 2019;
pub const SONGS_PER_YEAR: usize = 100;
pub const GENRES: [&str; 5] = ["Pop", "Rock", "Hip-Hop", "Electronic", "R&B"];

const COLUMNS: [&str; 9] = [
    "year",
    "title",
    "artist",
    "genre",
    "danceability",
    "energy",
    "duration_ms",
    "popularity",
    "duration_min",
];

/// Build a sample dataset for when no data file is available.
///
/// The same seed always produces the same dataset: `SONGS_PER_YEAR` songs for
/// every year in `FIRST_YEAR..=LAST_YEAR`, genres drawn uniformly from
/// [`GENRES`], and uniformly distributed scores in realistic ranges.
pub fn generate_synthetic(seed: u64) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);
    let years = (LAST_YEAR - FIRST_YEAR + 1) as usize;

    let songs: Vec<Song> = (0..years * SONGS_PER_YEAR)
        .map(|i| {
            let year = FIRST_YEAR + (i / SONGS_PER_YEAR) as i32;
            let genre = GENRES[rng.random_range(0..GENRES.len())];
            let duration_ms: i64 = rng.random_range(180_000..300_000);
            Song {
                year,
                title: format!("Song_{i}"),
                artist: format!("Artist_{}", i % 100),
                genre: genre.to_string(),
                danceability: rng.random_range(30.0..90.0),
                energy: rng.random_range(30.0..90.0),
                valence: None,
                acousticness: None,
                speechiness: None,
                liveness: None,
                loudness: None,
                duration_ms,
                duration_min: duration_ms as f64 / 60_000.0,
                popularity: rng.random_range(50.0..100.0),
                extra: BTreeMap::new(),
            }
        })
        .collect();

    log::info!("Generated {} sample songs (seed {seed})", songs.len());
    Dataset::new(songs, COLUMNS.iter().map(|c| c.to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_dataset() {
        assert_eq!(generate_synthetic(42), generate_synthetic(42));
        assert_ne!(generate_synthetic(42), generate_synthetic(43));
    }

    #[test]
    fn covers_the_fixed_year_span_and_genres() {
        let ds = generate_synthetic(1);
        assert_eq!(ds.len(), 1000);
        assert_eq!(ds.year_bounds(), Some((FIRST_YEAR, LAST_YEAR)));
        for year in FIRST_YEAR..=LAST_YEAR {
            assert_eq!(ds.songs.iter().filter(|s| s.year == year).count(), SONGS_PER_YEAR);
        }
        assert!(ds.genres().iter().all(|g| GENRES.contains(&g.as_str())));
    }

    #[test]
    fn scores_stay_in_range_and_durations_are_derived() {
        for s in &generate_synthetic(9).songs {
            assert!((30.0..90.0).contains(&s.danceability));
            assert!((30.0..90.0).contains(&s.energy));
            assert!((50.0..100.0).contains(&s.popularity));
            assert!((180_000..300_000).contains(&s.duration_ms));
            assert!((s.duration_min - s.duration_ms as f64 / 60_000.0).abs() < 1e-9);
        }
    }
}
