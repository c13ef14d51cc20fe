use std::collections::BTreeSet;
use std::sync::Arc;

use thiserror::Error;

use super::model::{Dataset, Song};

// ---------------------------------------------------------------------------
// Filter predicate: inclusive year range plus selected genres
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("year range {year_min}..={year_max} is inverted")]
    InvertedYearRange { year_min: i32, year_max: i32 },
}

/// The user's current selection. Rebuilt on every interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    pub year_min: i32,
    pub year_max: i32,
    pub genres: BTreeSet<String>,
}

impl FilterSpec {
    pub fn new(
        year_min: i32,
        year_max: i32,
        genres: impl IntoIterator<Item = String>,
    ) -> Result<Self, FilterError> {
        if year_min > year_max {
            return Err(FilterError::InvertedYearRange { year_min, year_max });
        }
        Ok(FilterSpec {
            year_min,
            year_max,
            genres: genres.into_iter().collect(),
        })
    }

    /// Whether a song passes both the year range and the genre selection.
    /// An empty genre set matches nothing.
    pub fn matches(&self, song: &Song) -> bool {
        (self.year_min..=self.year_max).contains(&song.year) && self.genres.contains(&song.genre)
    }

    /// Number of years covered by the range, both ends included.
    pub fn year_span(&self) -> i32 {
        self.year_max - self.year_min + 1
    }
}

// ---------------------------------------------------------------------------
// FilteredView
// ---------------------------------------------------------------------------

/// The songs of a dataset that satisfy a [`FilterSpec`], in dataset order.
/// Holds indices only; the dataset itself is never copied or mutated.
#[derive(Debug, Clone)]
pub struct FilteredView {
    dataset: Arc<Dataset>,
    indices: Vec<usize>,
}

impl FilteredView {
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Song> + '_ {
        self.indices.iter().map(|&i| &self.dataset.songs[i])
    }

    pub fn get(&self, position: usize) -> Option<&Song> {
        self.indices
            .get(position)
            .and_then(|&i| self.dataset.songs.get(i))
    }
}

/// Select the songs matching `spec`. Never fails: an empty dataset, an empty
/// genre set or an inverted range all produce an empty view.
pub fn filter(dataset: &Arc<Dataset>, spec: &FilterSpec) -> FilteredView {
    let indices = dataset
        .songs
        .iter()
        .enumerate()
        .filter(|(_, song)| spec.matches(song))
        .map(|(i, _)| i)
        .collect();

    FilteredView {
        dataset: Arc::clone(dataset),
        indices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::testing::{dataset, song};

    fn genres(names: &[&str]) -> Vec<String> {
        names.iter().map(|g| g.to_string()).collect()
    }

    fn sample() -> Arc<Dataset> {
        dataset(vec![
            song(2010, "pop", 60.0),
            song(2012, "rock", 61.0),
            song(2015, "pop", 62.0),
            song(2017, "hip hop", 63.0),
            song(2019, "pop", 64.0),
        ])
    }

    #[test]
    fn inverted_range_is_rejected() {
        assert_eq!(
            FilterSpec::new(2019, 2010, genres(&["pop"])),
            Err(FilterError::InvertedYearRange {
                year_min: 2019,
                year_max: 2010
            })
        );
    }

    #[test]
    fn bounds_are_inclusive() {
        let ds = sample();
        let spec = FilterSpec::new(2010, 2015, genres(&["pop"])).unwrap();
        let view = filter(&ds, &spec);
        assert_eq!(view.indices(), &[0, 2]);
        assert_eq!(spec.year_span(), 6);
    }

    #[test]
    fn empty_genre_set_gives_empty_view() {
        let spec = FilterSpec::new(2000, 2030, Vec::new()).unwrap();
        assert!(filter(&sample(), &spec).is_empty());
    }

    #[test]
    fn empty_dataset_gives_empty_view() {
        let spec = FilterSpec::new(2000, 2030, genres(&["pop"])).unwrap();
        assert!(filter(&dataset(vec![]), &spec).is_empty());
    }

    #[test]
    fn view_is_sound_and_complete() {
        let ds = sample();
        let spec = FilterSpec::new(2011, 2019, genres(&["pop", "hip hop"])).unwrap();
        let view = filter(&ds, &spec);

        assert!(view.iter().all(|s| spec.matches(s)));
        let expected = ds.songs.iter().filter(|s| spec.matches(s)).count();
        assert_eq!(view.len(), expected);
        assert_eq!(view.len(), 3);
        assert_eq!(view.get(0).map(|s| s.year), Some(2015));
        assert_eq!(ds.len(), 5, "dataset must be untouched");
    }
}
