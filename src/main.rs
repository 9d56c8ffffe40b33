mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::ExplorerApp;
use clap::Parser;
use config::{Cli, DashboardConfig};
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = DashboardConfig::resolve(&cli)?;
    log::info!("Starting with dataset {}", config.data_path.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Explorador de Sindicatos",
        options,
        Box::new(|_cc| Ok(Box::new(ExplorerApp::new(config)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
