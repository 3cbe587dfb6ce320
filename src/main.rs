use tracing_subscriber;

mod app;
mod artifact;
mod candidate;
mod config;
mod constants;
mod convert;
mod state;
mod ui;

use app::ConverterApp;
use constants::APP_NAME;

fn main() -> Result<(), eframe::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    tracing::info!("Starting {}", APP_NAME);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 560.0])
            .with_min_inner_size([560.0, 440.0])
            .with_title(APP_NAME)
            .with_resizable(true)
            .with_drag_and_drop(true),
        ..Default::default()
    };

    let app_creator = move |_cc: &eframe::CreationContext| -> Box<dyn eframe::App> {
        let app = ConverterApp::new().expect("Failed to start application");
        Box::new(app)
    };

    let result = eframe::run_native(APP_NAME, options, Box::new(app_creator));

    tracing::info!("Application shutting down");
    result
}
