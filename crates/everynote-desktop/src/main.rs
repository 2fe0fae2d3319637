//! EveryNote Desktop Application
//!
//! Capture your thoughts, your way.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod services;
mod state;
mod theme;
mod views;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use everynote_core::config::AppConfig;
use tracing_subscriber::EnvFilter;

use crate::services::{default_data_dir, open_storage};

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env(default_data_dir());
    init_logging(&config);

    tracing::info!("Starting EveryNote...");

    let storage = match open_storage(&config) {
        Ok(storage) => storage,
        Err(e) => {
            tracing::error!(
                "Failed to open local storage at {}: {}",
                config.storage_path().display(),
                e
            );
            std::process::exit(1);
        }
    };

    let window = WindowBuilder::new()
        .with_title("EveryNote")
        .with_inner_size(LogicalSize::new(1280.0, 820.0));
    let desktop_config = Config::new().with_window(window);

    dioxus::LaunchBuilder::new()
        .with_cfg(desktop_config)
        .with_context(storage)
        .launch(app::App);
}

fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::from_default_env();
    let (filter, invalid_directive) = match config.log_directive.parse() {
        Ok(directive) => (filter.add_directive(directive), None),
        Err(e) => (filter, Some(e)),
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Some(e) = invalid_directive {
        tracing::warn!("Ignoring log directive {:?}: {}", config.log_directive, e);
    }
}
