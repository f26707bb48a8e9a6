//! RegSweep -- folder inventory and PDF clean-up tool.
//!
//! Thin binary entry point. All logic lives in the `regsweep-core`
//! and `regsweep-gui` crates.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use regsweep_core::config::CONFIG_FILE_NAME;
use regsweep_core::SweepConfig;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("RegSweep starting");

    let config = load_config();
    let icon = regsweep_gui::icon::generate_icon(64);

    // Build application state *before* opening the window so the first
    // rendered frame arrives immediately.
    let state = regsweep_gui::RegSweepState::build(config);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("RegSweep -- Select Directory")
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([600.0, 420.0])
            .with_icon(icon),
        ..Default::default()
    };

    eframe::run_native(
        "RegSweep",
        options,
        Box::new(|cc| Ok(Box::new(regsweep_gui::RegSweepApp::with_state(cc, state)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}

/// Read `regsweep.json` from beside the executable. A missing file means
/// defaults; a broken one is reported and ignored.
fn load_config() -> SweepConfig {
    let path = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(CONFIG_FILE_NAME)))
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
    match SweepConfig::load_or_default(&path) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("{err}; using default settings");
            SweepConfig::default()
        }
    }
}
