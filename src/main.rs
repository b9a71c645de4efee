mod app;
mod color;
mod data;
mod outputs;
mod state;
mod ui;

use app::IrisDashApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // Missing columns or an empty table in the bundled data are a build
    // problem; abort before any window opens.
    let dataset = match data::loader::load_embedded() {
        Ok(ds) => ds,
        Err(e) => {
            log::error!("failed to load bundled iris data: {e:#}");
            eprintln!("failed to load bundled iris data: {e:#}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Iris Dash – Reactive Iris Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(IrisDashApp::new(dataset)))),
    )
}
