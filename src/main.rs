use adaptive_quiz::QuizApp;
use adaptive_quiz::data::{QuizConfig, load_config};
use log::{error, info, warn};

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let config = load_config().unwrap_or_else(|err| {
        warn!("configuración embebida inválida ({err}); se usan valores por defecto");
        QuizConfig::default()
    });
    info!("servidor del quiz: {}", config.endpoint);

    let app = QuizApp::new(config).map_err(|err| {
        error!("no se pudo crear el cliente HTTP: {err}");
        eframe::Error::AppCreation(Box::new(err))
    })?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([760.0, 620.0]),
        ..Default::default()
    };
    eframe::run_native(
        "C++ Quiz Adaptativo",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
