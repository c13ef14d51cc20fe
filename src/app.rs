use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct HitscopeApp {
    pub state: AppState,
}

impl HitscopeApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for HitscopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters and overview ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: charts and raw data ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.dataset.is_none() {
                panels::empty_state(ui, &mut self.state);
                return;
            }
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    plot::relationship_section(ui, &self.state);
                    ui.separator();
                    plot::genre_section(ui, &mut self.state);
                    ui.separator();
                    table::raw_data_section(ui, &mut self.state);
                });
        });
    }
}
