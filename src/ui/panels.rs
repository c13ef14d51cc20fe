use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use hitscope::data::cache::Source;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets and overview
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Data Filters");
    ui.label("Adjust parameters to customize analysis scope");
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Year range ----
            ui.strong("Select Year Range");
            let (lo, hi) = state.year_bounds;
            let mut year_min = state.year_min;
            let mut year_max = state.year_max;
            ui.add(egui::Slider::new(&mut year_min, lo..=hi).text("from"));
            ui.add(egui::Slider::new(&mut year_max, lo..=hi).text("to"));
            if year_min > year_max {
                // Dragging one end past the other pushes the other along.
                if year_min != state.year_min {
                    year_max = year_min;
                } else {
                    year_min = year_max;
                }
            }
            state.set_year_range(year_min, year_max);
            ui.separator();

            // ---- Genre selection ----
            let n_selected = state.selected_genres.len();
            let n_total = state.all_genres.len();
            ui.strong(format!("Select Music Genres  ({n_selected}/{n_total})"));
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all_genres();
                }
                if ui.small_button("None").clicked() {
                    state.select_no_genres();
                }
            });

            let mut toggled: Option<String> = None;
            for genre in &state.all_genres {
                let mut checked = state.selected_genres.contains(genre);
                let mut text = RichText::new(genre);
                if let Some(colors) = &state.genre_colors {
                    text = text.color(colors.color_for(genre));
                }
                if ui.checkbox(&mut checked, text).changed() {
                    toggled = Some(genre.clone());
                }
            }
            if let Some(genre) = toggled {
                state.toggle_genre(&genre);
            }

            ui.separator();
            overview(ui, state);
        });
}

fn overview(ui: &mut Ui, state: &AppState) {
    ui.strong("Data Overview");
    let Some(summary) = &state.summary else {
        return;
    };
    egui::Grid::new("overview_grid")
        .num_columns(2)
        .spacing([16.0, 6.0])
        .show(ui, |ui: &mut Ui| {
            metric(ui, "Total Songs", summary.total_songs.to_string());
            metric(ui, "Genre Count", summary.selected_genres.to_string());
            ui.end_row();
            metric(ui, "Year Span", format!("{} years", summary.year_span));
            let completeness = summary
                .completeness
                .map_or_else(|| "–".to_string(), |pct| format!("{pct:.1}%"));
            metric(ui, "Data Completeness", completeness);
            ui.end_row();
        });
}

/// A label over a large value, in the style of a dashboard metric tile.
pub fn metric(ui: &mut Ui, label: &str, value: String) {
    ui.vertical(|ui: &mut Ui| {
        ui.label(RichText::new(label).small().weak());
        ui.label(RichText::new(value).size(20.0).strong());
    });
}

// ---------------------------------------------------------------------------
// Central panel placeholder
// ---------------------------------------------------------------------------

/// Shown while no dataset is loaded.
pub fn empty_state(ui: &mut Ui, state: &mut AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(80.0);
        ui.heading("Spotify Music Trends Analysis");
        ui.add_space(12.0);
        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
        if state.offer_synthetic {
            ui.label("Please ensure the CSV file is in the working directory, or continue with sample data.");
            if ui.button("Generate sample data").clicked() {
                state.open_synthetic();
            }
        } else {
            ui.label("Open a song table to begin  (File → Open…)");
        }
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(state.source.is_some(), egui::Button::new("Reload"))
                .clicked()
            {
                state.reload();
                ui.close_menu();
            }
            if ui.button("Use sample data").clicked() {
                state.open_synthetic();
                ui.close_menu();
            }
            ui.separator();
            if ui
                .add_enabled(state.view.is_some(), egui::Button::new("Export filtered CSV…"))
                .clicked()
            {
                export_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let (Some(ds), Some(view)) = (&state.dataset, &state.view) {
            let source = state
                .source
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default();
            ui.label(format!(
                "{source}: {} songs loaded, {} visible",
                ds.len(),
                view.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            let color = if msg.starts_with("Error") {
                Color32::RED
            } else {
                ui.visuals().text_color()
            };
            ui.label(RichText::new(msg).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open song table")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.open(Source::File(path));
    }
}

pub fn export_file_dialog(state: &mut AppState) {
    let Some(file_name) = state.export_file_name() else {
        return;
    };
    let target = rfd::FileDialog::new()
        .set_title("Download Filtered Data (CSV)")
        .set_file_name(&file_name)
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = target {
        state.export_to(&path);
    }
}
