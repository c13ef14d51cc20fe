use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use eframe::egui::{self, Color32, RichText, Ui};
use egui_plot::{
    Bar, BarChart, BoxElem, BoxPlot, BoxSpread, GridMark, Legend, Line, LineStyle, MarkerShape, Plot,
    PlotPoints, Points,
};
use hitscope::data::aggregate::GenreDistribution;
use hitscope::data::model::NumericColumn;
use hitscope::data::summary::{RELATION_X, RELATION_Y, TREND_COLUMNS};

use crate::color::{self, GenreColors};
use crate::state::{AppState, GenreTab};
use crate::ui::panels::metric;

/// Popularity is binned into this many marker sizes on the scatter plot.
const SIZE_BINS: usize = 4;
const TREND_SAMPLES: usize = 100;

// ---------------------------------------------------------------------------
// Question 1: danceability vs energy
// ---------------------------------------------------------------------------

pub fn relationship_section(ui: &mut Ui, state: &AppState) {
    ui.heading("Question 1: Relationship Evolution of Danceability and Energy");
    ui.add_space(4.0);

    ui.columns(2, |cols: &mut [Ui]| {
        scatter_plot(&mut cols[0], state);
        key_findings(&mut cols[1], state);
        annual_trend_plot(&mut cols[1], state);
    });
}

/// Danceability vs energy, coloured by year, marker size by popularity,
/// with the least-squares trend line.
fn scatter_plot(ui: &mut Ui, state: &AppState) {
    let (Some(view), Some(summary)) = (&state.view, &state.summary) else {
        return;
    };
    let (year_lo, year_hi) = state.year_bounds;

    let (pop_min, pop_max) = view.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |acc, s| {
        (acc.0.min(s.popularity), acc.1.max(s.popularity))
    });
    let size_bin = |popularity: f64| -> usize {
        if pop_max <= pop_min {
            return SIZE_BINS / 2;
        }
        let t = (popularity - pop_min) / (pop_max - pop_min);
        ((t * SIZE_BINS as f64) as usize).min(SIZE_BINS - 1)
    };

    // (year, size bin) → points
    let mut groups: BTreeMap<(i32, usize), Vec<[f64; 2]>> = BTreeMap::new();
    for song in view.iter() {
        let (Some(x), Some(y)) = (song.value(RELATION_X), song.value(RELATION_Y)) else {
            continue;
        };
        groups
            .entry((song.year, size_bin(song.popularity)))
            .or_default()
            .push([x, y]);
    }

    let x_range = view
        .iter()
        .filter_map(|s| s.value(RELATION_X))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |acc, x| (acc.0.min(x), acc.1.max(x)));

    ui.label(RichText::new("Danceability vs Energy (marker size represents popularity)").strong());
    Plot::new("relationship_scatter")
        .legend(Legend::default())
        .height(420.0)
        .x_axis_label(RELATION_X.label())
        .y_axis_label(RELATION_Y.label())
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for ((year, bin), points) in groups {
                let marker = Points::new(PlotPoints::from(points))
                    .name(year.to_string())
                    .color(color::year_color(year, year_lo, year_hi))
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(2.0 + bin as f32 * 1.5);
                plot_ui.points(marker);
            }

            if let Some(trend) = summary.trend {
                let (x0, x1) = x_range;
                let step = (x1 - x0) / (TREND_SAMPLES - 1) as f64;
                let line: PlotPoints = (0..TREND_SAMPLES)
                    .map(|i| {
                        let x = x0 + step * i as f64;
                        [x, trend.at(x)]
                    })
                    .collect();
                plot_ui.line(
                    Line::new(line)
                        .name("Trend Line")
                        .color(Color32::from_rgb(0xef, 0x44, 0x44))
                        .style(LineStyle::dashed_loose())
                        .width(2.0),
                );
            }
        });
}

fn key_findings(ui: &mut Ui, state: &AppState) {
    let Some(summary) = &state.summary else {
        return;
    };
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.heading("Key Findings");
        let Some(insight) = summary.insight else {
            ui.label("Correlation is not computable for the current selection (needs at least two songs with varying scores).");
            return;
        };
        let r = insight.correlation.coefficient;
        ui.horizontal(|ui: &mut Ui| {
            metric(ui, "Correlation", format!("{r:.3}"));
            ui.add_space(24.0);
            metric(ui, "Significance", insight.significance_label().to_string());
        });
        ui.add_space(6.0);
        ui.strong("Trend Interpretation:");
        ui.label(format!(
            "Correlation coefficient is {r:.3}, indicating {}",
            insight.direction_label()
        ));
        ui.label(format!(
            "Songs with higher energy values have {} danceability",
            insight.tendency_label()
        ));
        ui.label(format!("Recent trend: {}", insight.trend_label()));
        ui.label(
            RichText::new(format!(
                "p = {:.4}, n = {}",
                insight.correlation.p_value, insight.correlation.sample_size
            ))
            .small()
            .weak(),
        );
    });
}

fn annual_trend_plot(ui: &mut Ui, state: &AppState) {
    let Some(summary) = &state.summary else {
        return;
    };
    let palette = [Color32::from_rgb(0x66, 0x7e, 0xea), Color32::from_rgb(0x76, 0x4b, 0xa2)];

    ui.add_space(6.0);
    ui.label(RichText::new("Annual Average Trend").strong());
    Plot::new("annual_trend")
        .legend(Legend::default())
        .height(220.0)
        .allow_scroll(false)
        .x_axis_label("Year")
        .show(ui, |plot_ui| {
            for (i, column) in TREND_COLUMNS.iter().enumerate() {
                let points: PlotPoints = summary
                    .yearly
                    .iter()
                    .filter_map(|y| Some([f64::from(y.year), y.means[i]?]))
                    .collect();
                plot_ui.line(
                    Line::new(points)
                        .name(column.label())
                        .color(palette[i % palette.len()])
                        .width(3.0),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Question 2: genres
// ---------------------------------------------------------------------------

pub fn genre_section(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Question 2: Characteristic Comparison Across Genres");
    ui.horizontal(|ui: &mut Ui| {
        ui.selectable_value(&mut state.genre_tab, GenreTab::Popularity, "Genre Popularity Evolution");
        ui.selectable_value(
            &mut state.genre_tab,
            GenreTab::DurationAndRating,
            "Genre Duration & Rating Analysis",
        );
    });
    ui.add_space(4.0);

    let (Some(summary), Some(colors)) = (&state.summary, &state.genre_colors) else {
        return;
    };

    match state.genre_tab {
        GenreTab::Popularity => {
            stacked_genre_plot(ui, state, colors);
            genre_rankings(ui, state);
        }
        GenreTab::DurationAndRating => {
            ui.columns(2, |cols: &mut [Ui]| {
                box_plot(
                    &mut cols[0],
                    "duration_box",
                    "Song Duration Distribution by Genre",
                    NumericColumn::DurationMin,
                    &summary.durations,
                    colors,
                );
                violin_plot(
                    &mut cols[1],
                    "popularity_violin",
                    "Popularity Distribution by Genre",
                    NumericColumn::Popularity,
                    &summary.popularity,
                    colors,
                );
            });
        }
    }
}

/// Per-year song counts stacked by genre.
fn stacked_genre_plot(ui: &mut Ui, state: &AppState, colors: &GenreColors) {
    let Some(summary) = &state.summary else {
        return;
    };

    let mut per_genre: Vec<(String, Vec<Bar>)> = Vec::new();
    for entry in &summary.genre_years {
        let bar = Bar::new(f64::from(entry.year), entry.count as f64).width(0.7);
        match per_genre.iter_mut().find(|(g, _)| *g == entry.genre) {
            Some((_, bars)) => bars.push(bar),
            None => per_genre.push((entry.genre.clone(), vec![bar])),
        }
    }

    let mut charts: Vec<BarChart> = Vec::with_capacity(per_genre.len());
    for (genre, bars) in per_genre {
        let below: Vec<&BarChart> = charts.iter().collect();
        let chart = BarChart::new(bars)
            .name(&genre)
            .color(colors.color_for(&genre))
            .stack_on(&below);
        charts.push(chart);
    }

    ui.label(RichText::new("Annual Song Count Change by Genre (Stacked View)").strong());
    Plot::new("genre_stacked")
        .legend(Legend::default())
        .height(380.0)
        .allow_scroll(false)
        .x_axis_label("Year")
        .y_axis_label("Song Count")
        .x_axis_formatter(|mark, _range| {
            if mark.value.fract() == 0.0 {
                format!("{}", mark.value as i64)
            } else {
                String::new()
            }
        })
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

fn genre_rankings(ui: &mut Ui, state: &AppState) {
    let Some(summary) = &state.summary else {
        return;
    };
    ui.add_space(8.0);
    ui.heading("Genre Rankings");
    let top = summary.top_genres(3);
    if top.is_empty() {
        ui.label("No songs match the current filters.");
        return;
    }
    ui.horizontal(|ui: &mut Ui| {
        for (rank, (genre, count, share)) in top.into_iter().enumerate() {
            egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
                ui.set_min_width(160.0);
                ui.vertical_centered(|ui: &mut Ui| {
                    ui.label(RichText::new(format!("TOP {}", rank + 1)).small().weak());
                    ui.label(RichText::new(count.to_string()).size(28.0).strong());
                    let share = share.map_or_else(|| "–".to_string(), |p| format!("{p:.1}%"));
                    ui.label(format!("{genre} ({share})"));
                });
            });
        }
    });
}

/// Axis formatter that labels integer positions with genre names.
fn genre_axis(labels: Vec<String>) -> impl Fn(GridMark, &RangeInclusive<f64>) -> String {
    move |mark: GridMark, _range: &RangeInclusive<f64>| {
        let idx = mark.value.round();
        if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
            return String::new();
        }
        labels.get(idx as usize).cloned().unwrap_or_default()
    }
}

fn box_elem(position: f64, dist: &GenreDistribution, width: f64) -> BoxElem {
    let s = dist.summary;
    BoxElem::new(
        position,
        BoxSpread::new(s.lower_whisker, s.q1, s.median, s.q3, s.upper_whisker),
    )
    .name(&dist.genre)
    .box_width(width)
    .whisker_width(width * 0.6)
}

fn box_plot(
    ui: &mut Ui,
    id: &str,
    title: &str,
    column: NumericColumn,
    distributions: &[GenreDistribution],
    colors: &GenreColors,
) {
    let labels: Vec<String> = distributions.iter().map(|d| d.genre.clone()).collect();
    ui.label(RichText::new(title).strong());
    Plot::new(id)
        .height(360.0)
        .allow_scroll(false)
        .y_axis_label(column.label())
        .x_axis_formatter(genre_axis(labels))
        .show(ui, |plot_ui| {
            for (i, dist) in distributions.iter().enumerate() {
                plot_ui.box_plot(
                    BoxPlot::new(vec![box_elem(i as f64, dist, 0.5)])
                        .name(&dist.genre)
                        .color(colors.color_for(&dist.genre)),
                );
            }
        });
}

/// Mirrored density outline per genre with a narrow box plot inside.
fn violin_plot(
    ui: &mut Ui,
    id: &str,
    title: &str,
    column: NumericColumn,
    distributions: &[GenreDistribution],
    colors: &GenreColors,
) {
    let labels: Vec<String> = distributions.iter().map(|d| d.genre.clone()).collect();
    ui.label(RichText::new(title).strong());
    Plot::new(id)
        .height(360.0)
        .allow_scroll(false)
        .y_axis_label(column.label())
        .x_axis_formatter(genre_axis(labels))
        .show(ui, |plot_ui| {
            for (i, dist) in distributions.iter().enumerate() {
                let center = i as f64;
                let color = colors.color_for(&dist.genre);
                let peak = dist.density.iter().map(|(_, d)| *d).fold(0.0, f64::max);
                if peak > 0.0 {
                    let half = |d: f64| d / peak * 0.4;
                    let outline: PlotPoints = dist
                        .density
                        .iter()
                        .map(|&(y, d)| [center + half(d), y])
                        .chain(dist.density.iter().rev().map(|&(y, d)| [center - half(d), y]))
                        .chain(dist.density.first().map(|&(y, d)| [center + half(d), y]))
                        .collect();
                    plot_ui.line(
                        Line::new(outline)
                            .name(&dist.genre)
                            .color(color)
                            .width(1.5),
                    );
                }
                plot_ui.box_plot(
                    BoxPlot::new(vec![box_elem(center, dist, 0.12)])
                        .name(&dist.genre)
                        .color(color),
                );
            }
        });
}
