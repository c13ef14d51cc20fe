use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use hitscope::config::DashboardConfig;
use hitscope::data::cache::{DatasetCache, Source};
use hitscope::data::export;
use hitscope::data::filter::{FilterSpec, FilteredView, filter};
use hitscope::data::model::Dataset;
use hitscope::data::summary::DashboardSummary;

use crate::color::GenreColors;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which chart pair the genre section shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenreTab {
    Popularity,
    DurationAndRating,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// Loaded datasets, keyed by source.
    cache: DatasetCache,

    /// Source of the dataset currently shown.
    pub source: Option<Source>,

    /// Current dataset (None until a load succeeds).
    pub dataset: Option<Arc<Dataset>>,

    /// Every genre of the dataset, sorted.
    pub all_genres: Vec<String>,

    /// Full year range of the dataset; the slider limits.
    pub year_bounds: (i32, i32),

    pub year_min: i32,
    pub year_max: i32,
    pub selected_genres: BTreeSet<String>,

    /// Filter and view for the current selection (cached).
    pub spec: Option<FilterSpec>,
    pub view: Option<FilteredView>,
    pub summary: Option<DashboardSummary>,

    pub genre_colors: Option<GenreColors>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// The data file was missing; offer generated sample data.
    pub offer_synthetic: bool,

    pub genre_tab: GenreTab,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            cache: DatasetCache::new(),
            source: None,
            dataset: None,
            all_genres: Vec::new(),
            year_bounds: (0, 0),
            year_min: 0,
            year_max: 0,
            selected_genres: BTreeSet::new(),
            spec: None,
            view: None,
            summary: None,
            genre_colors: None,
            status_message: None,
            offer_synthetic: false,
            genre_tab: GenreTab::Popularity,
        }
    }

    /// Load (or fetch from cache) and display a source. Failures are
    /// reported in the status line; a missing file enables the sample-data
    /// offer.
    pub fn open(&mut self, source: Source) {
        match self.cache.get_or_load(&source) {
            Ok(dataset) => {
                log::info!("Showing {} songs from {source}", dataset.len());
                self.offer_synthetic = false;
                self.source = Some(source);
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load {source}: {e}");
                self.offer_synthetic = e.is_unavailable();
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    pub fn open_configured_file(&mut self) {
        self.open(Source::File(self.config.data_path.clone()));
    }

    pub fn open_synthetic(&mut self) {
        self.open(Source::Synthetic {
            seed: self.config.synthetic_seed,
        });
    }

    /// Drop the cached copy of the current source and read it again.
    pub fn reload(&mut self) {
        if let Some(source) = self.source.clone() {
            self.cache.invalidate(&source);
            self.open(source);
        }
    }

    /// Ingest a dataset: reset the year range to its bounds and preselect
    /// the first genres alphabetically.
    pub fn set_dataset(&mut self, dataset: Arc<Dataset>) {
        self.all_genres = dataset.genres().into_iter().collect();
        self.year_bounds = dataset.year_bounds().unwrap_or((0, 0));
        (self.year_min, self.year_max) = self.year_bounds;
        self.selected_genres = self
            .all_genres
            .iter()
            .take(self.config.default_genre_count.max(1))
            .cloned()
            .collect();
        self.genre_colors = Some(GenreColors::new(&self.all_genres));

        self.dataset = Some(dataset);
        self.status_message = None;
        self.refilter();
    }

    /// Recompute the view and every aggregate after a selection change.
    pub fn refilter(&mut self) {
        let Some(ds) = &self.dataset else {
            return;
        };
        match FilterSpec::new(self.year_min, self.year_max, self.selected_genres.iter().cloned()) {
            Ok(spec) => {
                let view = filter(ds, &spec);
                self.summary = Some(DashboardSummary::compute(
                    &view,
                    &spec,
                    &self.config.thresholds(),
                ));
                self.view = Some(view);
                self.spec = Some(spec);
                self.status_message = None;
            }
            Err(e) => {
                self.status_message = Some(e.to_string());
                self.spec = None;
                self.view = None;
                self.summary = None;
            }
        }
    }

    /// Move the year range, keeping `year_min <= year_max` inside the
    /// dataset bounds.
    pub fn set_year_range(&mut self, year_min: i32, year_max: i32) {
        let (lo, hi) = self.year_bounds;
        let year_min = year_min.clamp(lo, hi);
        let year_max = year_max.clamp(lo, hi);
        let (year_min, year_max) = if year_min <= year_max {
            (year_min, year_max)
        } else {
            (year_max, year_min)
        };
        if (year_min, year_max) != (self.year_min, self.year_max) {
            self.year_min = year_min;
            self.year_max = year_max;
            self.refilter();
        }
    }

    /// Toggle a single genre in the selection.
    pub fn toggle_genre(&mut self, genre: &str) {
        if !self.selected_genres.remove(genre) {
            self.selected_genres.insert(genre.to_string());
        }
        self.refilter();
    }

    /// Select all genres.
    pub fn select_all_genres(&mut self) {
        self.selected_genres = self.all_genres.iter().cloned().collect();
        self.refilter();
    }

    /// Deselect all genres.
    pub fn select_no_genres(&mut self) {
        self.selected_genres.clear();
        self.refilter();
    }

    /// Suggested file name for exporting the current view.
    pub fn export_file_name(&self) -> Option<String> {
        let spec = self.spec.as_ref()?;
        Some(export::export_file_name(&self.config.export_prefix, spec))
    }

    pub fn export_to(&mut self, path: &Path) {
        let Some(view) = &self.view else {
            return;
        };
        match export::save_csv(view, path) {
            Ok(()) => {
                self.status_message = Some(format!(
                    "Exported {} songs to {}",
                    view.len(),
                    path.display()
                ));
            }
            Err(e) => {
                log::error!("Export failed: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
