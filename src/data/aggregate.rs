use std::collections::{BTreeMap, HashMap};

use super::filter::FilteredView;
use super::model::NumericColumn;
use super::stats::{self, BoxSummary};

/// Points sampled along each violin outline.
const DENSITY_POINTS: usize = 64;

// ---------------------------------------------------------------------------
// Per-year means
// ---------------------------------------------------------------------------

/// Means of the requested columns for one year. `means[i]` belongs to the
/// i-th requested column and is `None` only when no song of that year has a
/// value for it.
#[derive(Debug, Clone, PartialEq)]
pub struct YearlyMeans {
    pub year: i32,
    pub means: Vec<Option<f64>>,
}

/// Group by year (ascending) and average each column. Years without songs
/// in the view do not appear.
pub fn yearly_means(view: &FilteredView, columns: &[NumericColumn]) -> Vec<YearlyMeans> {
    let mut groups: BTreeMap<i32, Vec<(f64, usize)>> = BTreeMap::new();
    for song in view.iter() {
        let acc = groups
            .entry(song.year)
            .or_insert_with(|| vec![(0.0, 0); columns.len()]);
        for (slot, col) in acc.iter_mut().zip(columns) {
            if let Some(v) = song.value(*col) {
                slot.0 += v;
                slot.1 += 1;
            }
        }
    }

    groups
        .into_iter()
        .map(|(year, acc)| YearlyMeans {
            year,
            means: acc
                .into_iter()
                .map(|(sum, n)| (n > 0).then(|| sum / n as f64))
                .collect(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Genre counts
// ---------------------------------------------------------------------------

/// Song count per genre, kept in order of first appearance in the view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenreCounts {
    entries: Vec<(String, usize)>,
}

impl GenreCounts {
    /// Entries in first-appearance order.
    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    pub fn get(&self, genre: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(g, _)| g == genre)
            .map(|(_, n)| *n)
    }

    /// Sum of all counts; equals the length of the view it came from.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// Entries by descending count. Ties keep first-appearance order.
    pub fn ranked(&self) -> Vec<(String, usize)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

pub fn genre_counts(view: &FilteredView) -> GenreCounts {
    let mut position: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<(String, usize)> = Vec::new();
    for song in view.iter() {
        match position.get(song.genre.as_str()) {
            Some(&i) => entries[i].1 += 1,
            None => {
                position.insert(song.genre.as_str(), entries.len());
                entries.push((song.genre.clone(), 1));
            }
        }
    }
    GenreCounts { entries }
}

/// Share of `count` in `total` as a percentage. `None` for an empty total.
pub fn genre_proportion(count: usize, total: usize) -> Option<f64> {
    (total > 0).then(|| count as f64 / total as f64 * 100.0)
}

/// One segment of the stacked per-year genre chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreYearCount {
    pub year: i32,
    pub genre: String,
    pub count: usize,
}

/// Song counts per (year, genre): years ascending, genres within a year in
/// order of first appearance in the view.
pub fn genre_year_counts(view: &FilteredView) -> Vec<GenreYearCount> {
    let mut by_year: BTreeMap<i32, Vec<(String, usize)>> = BTreeMap::new();
    for song in view.iter() {
        let genres = by_year.entry(song.year).or_default();
        match genres.iter_mut().find(|(g, _)| *g == song.genre) {
            Some(entry) => entry.1 += 1,
            None => genres.push((song.genre.clone(), 1)),
        }
    }
    by_year
        .into_iter()
        .flat_map(|(year, genres)| {
            genres
                .into_iter()
                .map(move |(genre, count)| GenreYearCount { year, genre, count })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Distributions
// ---------------------------------------------------------------------------

/// Distribution of one column within one genre, for box and violin plots.
#[derive(Debug, Clone, PartialEq)]
pub struct GenreDistribution {
    pub genre: String,
    pub count: usize,
    pub summary: BoxSummary,
    /// `(value, density)` pairs; empty when the genre has fewer than two
    /// distinct values.
    pub density: Vec<(f64, f64)>,
}

/// Per-genre distribution of `column`, genres in first-appearance order.
/// Genres with no values for the column are omitted.
pub fn genre_distributions(view: &FilteredView, column: NumericColumn) -> Vec<GenreDistribution> {
    let mut groups: Vec<(String, Vec<f64>)> = Vec::new();
    for song in view.iter() {
        let Some(v) = song.value(column) else {
            continue;
        };
        match groups.iter_mut().find(|(g, _)| *g == song.genre) {
            Some((_, values)) => values.push(v),
            None => groups.push((song.genre.clone(), vec![v])),
        }
    }

    groups
        .into_iter()
        .filter_map(|(genre, values)| {
            let summary = stats::box_summary(&values)?;
            Some(GenreDistribution {
                genre,
                count: values.len(),
                summary,
                density: stats::kernel_density(&values, DENSITY_POINTS),
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Column extraction & completeness
// ---------------------------------------------------------------------------

/// Paired values of two columns over the songs that have both.
pub fn paired_values(
    view: &FilteredView,
    x: NumericColumn,
    y: NumericColumn,
) -> (Vec<f64>, Vec<f64>) {
    view.iter()
        .filter_map(|s| Some((s.value(x)?, s.value(y)?)))
        .unzip()
}

/// Percentage of non-null cells over the view's rows and the dataset's
/// columns. `None` for an empty view.
pub fn completeness(view: &FilteredView) -> Option<f64> {
    let columns = &view.dataset().columns;
    let cells = view.len() * columns.len();
    if cells == 0 {
        return None;
    }
    let nulls: usize = view
        .iter()
        .map(|song| columns.iter().filter(|c| song.cell(c).is_null()).count())
        .sum();
    Some((1.0 - nulls as f64 / cells as f64) * 100.0)
}
