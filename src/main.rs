use airline_sentiment_dashboard::app::DashboardApp;
use airline_sentiment_dashboard::config::DashboardConfig;
use airline_sentiment_dashboard::state::AppState;
use anyhow::{Context, Result};
use eframe::egui;

fn main() -> Result<()> {
    env_logger::init();

    let config = DashboardConfig::load()?;
    log::info!("Using {config:?}");

    // The dataset is loaded exactly once, before any window opens.
    let state = match AppState::load(config.clone()) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Failed to load {}: {e}", config.data_path.display());
            return Err(e).context("cannot start the dashboard without its dataset");
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 860.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Airline Sentiment Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(DashboardApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
