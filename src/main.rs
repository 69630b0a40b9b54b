mod app;
mod color;
mod config;
mod dashboard;
mod data;
mod error;
mod metrics;
mod state;
mod ui;
mod view;

use std::path::Path;

use anyhow::{Context, Result};
use app::DashboardApp;
use config::{CONFIG_FILE_NAME, DashboardConfig};
use eframe::egui;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DashboardConfig::load_or_default(Path::new(CONFIG_FILE_NAME))
        .context("loading dashboard configuration")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Interactive Dashboard for Alien Mission Data",
        options,
        Box::new(move |_cc| Ok(Box::new(DashboardApp::new(config)))),
    )
    .map_err(|e| anyhow::anyhow!("running the dashboard window: {e}"))
}
