use eframe::egui;
use tracing_subscriber::EnvFilter;

use w5h1_writer::ui::app::WriterApp;
use w5h1_writer::ui::settings_io::load_settings;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("w5h1_writer=info")),
        )
        .init();

    let settings = load_settings();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([760.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Five Ws Writer",
        options,
        Box::new(move |_cc| {
            let app = WriterApp::new(settings)?;
            Ok(Box::new(app))
        }),
    )
}
