// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Image Marker
//!
//! A desktop application for dropping color-tagged markers on an image,
//! with zoom toward the cursor while Z is held.

mod app;
mod config;
mod controller;
mod io;
mod models;
mod ui;
mod util;

use anyhow::Result;
use app::MarkerApp;
use config::Settings;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let settings = Settings::load().unwrap_or_else(|e| {
        log::warn!("{:#}; using default settings", e);
        Settings::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Image Marker"),
        ..Default::default()
    };

    eframe::run_native(
        "Image Marker",
        options,
        Box::new(move |_cc| Ok(Box::new(MarkerApp::new(settings)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
