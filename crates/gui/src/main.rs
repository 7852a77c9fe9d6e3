//! Match tracker GUI application
//!
//! A graphical interface for:
//! - Recording match results
//! - Browsing and filtering the match history
//! - Charting wins per map

mod app;
mod chart_view;
mod history_view;
mod record_view;
mod styles;

use app::TrackerApp;
use iced::application;
use styles::{WINDOW_HEIGHT, WINDOW_WIDTH};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> iced::Result {
    setup_tracing_subscriber();

    application("CS2 Premier Match Tracker", TrackerApp::update, TrackerApp::view)
        .theme(TrackerApp::theme)
        .window_size((WINDOW_WIDTH, WINDOW_HEIGHT))
        .run_with(TrackerApp::new)
}

fn setup_tracing_subscriber() {
    let layer = fmt::layer()
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .init();
}
