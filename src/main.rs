//! Native desktop runner
//!
//! Run with: cargo run --features native

fn main() -> eframe::Result {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(true).init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("folio"),
        ..Default::default()
    };

    eframe::run_native(
        "folio",
        options,
        Box::new(|cc| Ok(Box::new(folio::FolioApp::new(cc)))),
    )
}
