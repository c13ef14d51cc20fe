use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;
use crate::ui::panels::export_file_dialog;

/// Columns shown in the raw-data table; the export carries every column.
const TABLE_COLUMNS: [&str; 8] = [
    "year",
    "title",
    "artist",
    "genre",
    "danceability",
    "energy",
    "duration_min",
    "popularity",
];

const ROW_HEIGHT: f32 = 18.0;

// ---------------------------------------------------------------------------
// Raw data (collapsible)
// ---------------------------------------------------------------------------

pub fn raw_data_section(ui: &mut Ui, state: &mut AppState) {
    egui::CollapsingHeader::new("View Filtered Raw Data")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            let Some(view) = &state.view else {
                return;
            };

            TableBuilder::new(ui)
                .striped(true)
                .max_scroll_height(360.0)
                .columns(Column::auto().resizable(true), TABLE_COLUMNS.len())
                .header(20.0, |mut header| {
                    for name in TABLE_COLUMNS {
                        header.col(|ui| {
                            ui.strong(name);
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_HEIGHT, view.len(), |mut row| {
                        let Some(song) = view.get(row.index()) else {
                            return;
                        };
                        for name in TABLE_COLUMNS {
                            let text = match name {
                                "duration_min" => format!("{:.2}", song.duration_min),
                                other => song.cell(other).to_string(),
                            };
                            row.col(|ui| {
                                ui.label(text);
                            });
                        }
                    });
                });

            ui.add_space(6.0);
            if ui.button("Download Filtered Data (CSV)").clicked() {
                export_file_dialog(state);
            }
        });
}
