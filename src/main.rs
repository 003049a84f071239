use eframe::{egui, NativeOptions};
use egui::ViewportBuilder;
use std::error::Error;

// Module declarations
mod models;
mod parsing;
mod gui;
mod utils;

use gui::DpsCalculatorApp;

fn main() -> Result<(), Box<dyn Error>> {
    // Configure the native window options.
    let native_options = NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([560.0, 620.0])
            .with_min_inner_size([400.0, 420.0])
            .with_resizable(true),
        ..Default::default()
    };

    let app = DpsCalculatorApp::new();

    eframe::run_native(
        "PoE DPS Calculator",
        native_options,
        Box::new(|cc| {
            // Set up dark theme consistently across platforms
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(app))
        }),
    )?;

    Ok(())
}
