//! StepMotion - gallery of animated stepper widgets
//! Built with iced, every variant follows one shared step index

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;

use anyhow::Context;
use stepmotion::{features, stepper, ui};

fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    // Run as a daemon so the window is opened from `App::new`
    iced::daemon(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .antialiasing(true)
        .run()
        .context("Failed to run the stepper gallery")
}
