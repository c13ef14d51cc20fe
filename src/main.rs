mod app;
mod cli;
mod color;
mod state;
mod ui;

use app::HitscopeApp;
use clap::Parser;
use eframe::egui;

use cli::Cli;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    let mut state = AppState::new(config);
    if cli.synthetic {
        state.open_synthetic();
    } else {
        state.open_configured_file();
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Hitscope – Music Trends Analysis",
        options,
        Box::new(|_cc| Ok(Box::new(HitscopeApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running the window failed: {e}"))
}
