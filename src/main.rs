mod app;
mod app_data;
mod cli;
mod config;
mod countries;
mod prefs;
mod state;
mod task;
mod ui;
mod util;
mod weather;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::config::Config;
use crate::countries::CountryTable;
use crate::prefs::{FilePreferences, MemoryPreferences, PreferenceStore};
use crate::state::ThemeController;
use crate::weather::WeatherClient;

/// Log filter used when `RUST_LOG` is unset
fn default_filter(cli: &Cli) -> &'static str {
    match (&cli.command, cli.output.verbose) {
        (_, true) => "breezy=debug,info",
        (Some(_), false) => "warn",
        (None, false) => "breezy=debug,info",
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter(&cli).into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(command) = cli.command {
        if let Err(e) = cli::run(command, &cli.output).await {
            cli::print_error(&format!("{:#}", e));
            std::process::exit(1);
        }
        return Ok(());
    }

    run_dashboard()
}

/// Open the dashboard window
fn run_dashboard() -> Result<()> {
    tracing::info!("Starting Breezy");

    let config = Config::load().unwrap_or_else(|e| {
        tracing::error!("Failed to load config, using defaults: {:#}", e);
        Config::default()
    });

    let store: Box<dyn PreferenceStore> = match FilePreferences::open() {
        Ok(prefs) => Box::new(prefs),
        Err(e) => {
            tracing::error!("Failed to open preferences, theme will not persist: {:#}", e);
            Box::new(MemoryPreferences::default())
        }
    };
    let theme = ThemeController::load(store);
    let countries = CountryTable::embedded();
    let client = WeatherClient::from_config(&config.api)?;
    tracing::debug!("Weather service at {}", client.base_url());

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([config.window.width, config.window.height])
        .with_min_inner_size([480.0, 560.0])
        .with_title("Breezy 2.0");

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Breezy",
        native_options,
        Box::new(|_cc| Ok(Box::new(app::BreezyApp::new(client, countries, theme)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))?;

    Ok(())
}
