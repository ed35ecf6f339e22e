use crate::QuizApp;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText, Spinner};

pub fn ui_loading(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 200.0, 400.0, |ui| {
        ui.add_space(40.0);
        let text = if app.session.message().is_empty() {
            "Cargando..."
        } else {
            app.session.message()
        };
        ui.label(RichText::new(text).heading().weak());
        ui.add_space(20.0);
        ui.add(Spinner::new());
    });
}
