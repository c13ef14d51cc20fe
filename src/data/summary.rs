use serde::{Deserialize, Serialize};

use super::aggregate::{
    self, GenreCounts, GenreDistribution, GenreYearCount, YearlyMeans,
};
use super::filter::{FilterSpec, FilteredView};
use super::model::NumericColumn;
use super::stats::{self, Correlation, LinearTrend};

/// Columns plotted against each other in the relationship section.
pub const RELATION_X: NumericColumn = NumericColumn::Danceability;
pub const RELATION_Y: NumericColumn = NumericColumn::Energy;

/// Columns of the annual-average trend chart.
pub const TREND_COLUMNS: [NumericColumn; 2] = [RELATION_X, RELATION_Y];

/// Cut-offs used when turning a correlation into prose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// A correlation is significant when its p-value is below this.
    pub significance_level: f64,
    /// Coefficients above this read as "both growing simultaneously".
    pub strong_correlation: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            significance_level: 0.05,
            strong_correlation: 0.5,
        }
    }
}

/// Qualitative reading of a [`Correlation`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrelationInsight {
    pub correlation: Correlation,
    pub significant: bool,
    pub positive: bool,
    pub strong: bool,
}

impl CorrelationInsight {
    pub fn new(correlation: Correlation, thresholds: &Thresholds) -> Self {
        Self {
            correlation,
            significant: correlation.p_value < thresholds.significance_level,
            positive: correlation.coefficient > 0.0,
            strong: correlation.coefficient > thresholds.strong_correlation,
        }
    }

    pub fn significance_label(&self) -> &'static str {
        if self.significant {
            "Significant"
        } else {
            "Not Significant"
        }
    }

    pub fn direction_label(&self) -> &'static str {
        if self.positive {
            "positive correlation"
        } else {
            "negative correlation"
        }
    }

    pub fn tendency_label(&self) -> &'static str {
        if self.positive {
            "stronger"
        } else {
            "weaker"
        }
    }

    pub fn trend_label(&self) -> &'static str {
        if self.strong {
            "both growing simultaneously"
        } else {
            "relatively weak relationship"
        }
    }
}

/// Everything the dashboard shows for one filter selection.
#[derive(Debug, Clone)]
pub struct DashboardSummary {
    pub total_songs: usize,
    pub year_span: i32,
    pub selected_genres: usize,
    pub completeness: Option<f64>,
    pub trend: Option<LinearTrend>,
    pub insight: Option<CorrelationInsight>,
    pub yearly: Vec<YearlyMeans>,
    pub genre_counts: GenreCounts,
    pub genre_years: Vec<GenreYearCount>,
    pub durations: Vec<GenreDistribution>,
    pub popularity: Vec<GenreDistribution>,
}

impl DashboardSummary {
    pub fn compute(view: &FilteredView, spec: &FilterSpec, thresholds: &Thresholds) -> Self {
        let (xs, ys) = aggregate::paired_values(view, RELATION_X, RELATION_Y);
        let insight = stats::pearson_correlation(&xs, &ys)
            .map(|c| CorrelationInsight::new(c, thresholds));

        Self {
            total_songs: view.len(),
            year_span: spec.year_span(),
            selected_genres: spec.genres.len(),
            completeness: aggregate::completeness(view),
            trend: stats::linear_trend(&xs, &ys),
            insight,
            yearly: aggregate::yearly_means(view, &TREND_COLUMNS),
            genre_counts: aggregate::genre_counts(view),
            genre_years: aggregate::genre_year_counts(view),
            durations: aggregate::genre_distributions(view, NumericColumn::DurationMin),
            popularity: aggregate::genre_distributions(view, NumericColumn::Popularity),
        }
    }

    /// Top `n` genres with their share of the view in percent.
    pub fn top_genres(&self, n: usize) -> Vec<(String, usize, Option<f64>)> {
        self.genre_counts
            .ranked()
            .into_iter()
            .take(n)
            .map(|(genre, count)| {
                let share = aggregate::genre_proportion(count, self.total_songs);
                (genre, count, share)
            })
            .collect()
    }
}
