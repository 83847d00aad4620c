//! Interactive explorer for the finite-screen slit bench.

mod app;
mod panels;

fn main() -> eframe::Result {
    env_logger::init();
    log::info!("starting edgewave explorer");

    let viewport = eframe::egui::ViewportBuilder::default()
        .with_title("edgewave: finite-screen diffraction")
        .with_inner_size([1200.0, 760.0])
        .with_min_inner_size([900.0, 600.0]);

    eframe::run_native(
        "edgewave",
        eframe::NativeOptions { viewport, ..Default::default() },
        Box::new(|cc| Ok(Box::new(app::EdgewaveApp::new(cc)))),
    )
}
