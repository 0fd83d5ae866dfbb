//! Native portfolio app
//!
//! A single-page desktop portfolio: hero, about, skills, projects,
//! experience and contact sections rendered from a static dataset.

mod app;
mod content;
mod media;
mod perf;
mod sections;
mod settings;
mod theme;
mod viewport;

#[cfg(test)]
mod app_tests;

use eframe::egui;
use tracing_subscriber;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 860.0])
            .with_title("Ravi Ranjan — Portfolio"),
        persist_window: true, // Persist window state and egui memory between sessions
        ..Default::default()
    };

    eframe::run_native(
        "Ravi Ranjan — Portfolio",
        options,
        Box::new(|cc| Ok(Box::new(app::PortfolioApp::new(cc)))),
    )
}
