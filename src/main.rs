mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use eframe::egui;

use app::LaunchDashApp;
use config::DashboardConfig;
use data::loader::load_file;
use state::DashboardState;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DashboardConfig::default();
    let path = resolve_data_file(&config)?;

    // The dashboard cannot start without its data.
    let dataset = load_file(&path)
        .inspect_err(|e| log::error!("Failed to load {}: {e}", path.display()))
        .with_context(|| format!("loading launch records from {}", path.display()))?;
    log::info!(
        "Loaded {} launches ({} successful) from {}, payload bounds {:?}",
        dataset.len(),
        dataset.success_count(),
        path.display(),
        dataset.payload_bounds()
    );

    if dataset.is_empty() {
        log::warn!("{} has no launch rows; charts will be empty", path.display());
    }

    let state = DashboardState::new(Arc::new(dataset), path, &config);
    log::info!("Sites: {:?}", state.catalog.sites());
    let app = LaunchDashApp::new(state, &config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        &config.window_title,
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("running dashboard window: {e}"))
}

/// The configured file if it exists, otherwise whatever the user picks.
fn resolve_data_file(config: &DashboardConfig) -> Result<PathBuf> {
    if config.data_file.exists() {
        return Ok(config.data_file.clone());
    }
    log::warn!(
        "{} not found in the working directory; asking for a launch table",
        config.data_file.display()
    );
    ui::panels::pick_dataset_file().context("no launch table selected")
}
