//! Veriquote - social feed demo with quote verification
//!
//! Renders a feed of sample posts and checks any single-quoted text in them
//! against locally bundled verified source documents.

mod app;
mod core;
mod ui;

use app::VeriquoteApp;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    tracing::info!("Starting Veriquote...");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 760.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Veriquote"),
        ..Default::default()
    };

    eframe::run_native(
        "Veriquote",
        native_options,
        Box::new(|cc| Ok(Box::new(VeriquoteApp::new(cc)))),
    )
}
