#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

mod app;
mod convert;
mod launcher;
mod messages;
mod panels;
mod states;

use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use syncords_core::config::{executable_dir, SynCordsConfig};
use tracing::{info, warn};

use crate::launcher::InstanceGuard;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            launcher::report_fatal(&err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let exe_dir = executable_dir().context("Cannot locate the executable directory")?;

    let Some(_guard) = InstanceGuard::acquire().context("Cannot create the instance lock")? else {
        info!("SynCords is already running, not starting a second window");
        launcher::report_already_running();
        return Ok(());
    };

    let config = SynCordsConfig::load_beside_executable().unwrap_or_else(|err| {
        warn!(error = %err, "Ignoring unreadable settings file, using defaults");
        SynCordsConfig::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Coordinate Logger"),
        ..Default::default()
    };

    eframe::run_native(
        "SynCords",
        options,
        Box::new(move |cc| Ok(Box::new(app::SynCordsApp::new(&cc.egui_ctx, config, exe_dir)))),
    )
    .map_err(|e| anyhow!("The window could not be opened: {e}"))
}
