mod app;
mod ui;

use eframe::egui;

use app::GalleryApp;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional initial visualization id, e.g. `algo-gallery svm`.
    let initial = std::env::args().nth(1);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 760.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Algorithm Gallery",
        options,
        Box::new(move |cc| Ok(Box::new(GalleryApp::new(cc, initial.as_deref())))),
    )
}
