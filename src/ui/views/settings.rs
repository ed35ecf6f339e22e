use crate::QuizApp;
use crate::ui::helpers::{INCORRECT, big_button};
use crate::ui::layout::centered_panel;
use egui::{Context, RichText};

pub fn ui_settings(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 260.0, 420.0, |ui| {
        let content_width = ui.available_width();

        ui.heading("Ajustes del quiz");
        ui.add_space(14.0);
        ui.label("Número de preguntas:");
        ui.add_space(6.0);

        let presets = app.config.question_presets.clone();
        ui.horizontal(|ui| {
            for n in presets {
                let selected = app.selected_count == n;
                if ui
                    .selectable_label(selected, RichText::new(n.to_string()).size(18.0))
                    .clicked()
                {
                    app.select_count(n);
                }
            }
        });

        ui.add_space(18.0);
        if big_button(ui, "▶ Empezar quiz", content_width, 40.0, true) {
            app.start_quiz();
        }

        // Errores de conexión / estadísticas de la ronda anterior
        if !app.session.message().is_empty() {
            ui.add_space(10.0);
            ui.label(RichText::new(app.session.message()).color(INCORRECT));
        }
    });
}
