use crate::QuizApp;
use crate::render::{InputView, can_submit_text, render};
use crate::ui::helpers::{CORRECT, INCORRECT, big_button, choice_button, mark_color};
use egui::{CentralPanel, Context, ProgressBar, RichText, Stroke, TextEdit};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let Some(question) = app.session.question().cloned() else {
        return;
    };
    let view = render(&question, app.session.submission(), app.session.verdict());

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ui.vertical_centered(|ui| {
            ui.set_width(panel_width);

            ui.add(
                ProgressBar::new(app.session.progress_fraction()).text(format!(
                    "Pregunta {} de {}",
                    app.session.current_index(),
                    app.session.configured_count()
                )),
            );
            ui.add_space(10.0);

            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(20, 16))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(format!("📚 {}", question.topic)).strong());
                        ui.separator();
                        ui.label(format!(
                            "Dificultad: {} ({})",
                            question.difficulty,
                            question.difficulty_label()
                        ));
                    });
                    ui.add_space(10.0);
                    ui.label(RichText::new(&question.text).heading());
                    ui.add_space(14.0);

                    match &view.input {
                        InputView::Choices(choices) => {
                            for choice in choices {
                                if choice_button(ui, choice, panel_width - 40.0, view.enabled) {
                                    app.procesar_respuesta(&choice.answer);
                                }
                                ui.add_space(4.0);
                            }
                        }
                        InputView::FreeText { mark } => {
                            let stroke = mark_color(*mark)
                                .map(|c| Stroke::new(2.0, c))
                                .unwrap_or_else(|| ui.visuals().widgets.inactive.bg_stroke);
                            let mut submit = false;
                            egui::Frame::default().stroke(stroke).show(ui, |ui| {
                                let response = ui.add_enabled(
                                    view.enabled,
                                    TextEdit::singleline(&mut app.fib_input)
                                        .hint_text("Escribe tu respuesta...")
                                        .desired_width(panel_width - 60.0),
                                );
                                if response.lost_focus()
                                    && ui.input(|i| i.key_pressed(egui::Key::Enter))
                                {
                                    submit = true;
                                }
                            });
                            ui.add_space(6.0);
                            let can_submit =
                                can_submit_text(
                                    &app.fib_input,
                                    app.session.submission(),
                                    app.session.verdict(),
                                );
                            if big_button(ui, "Enviar", 140.0, 36.0, can_submit) {
                                submit = true;
                            }
                            if submit {
                                app.submit_text();
                            }
                        }
                    }
                });

            ui.add_space(10.0);
            if let Some(feedback) = &view.feedback {
                let color = if feedback.correct { CORRECT } else { INCORRECT };
                ui.label(RichText::new(&feedback.text).color(color).heading());
            } else if app.session.is_verifying() {
                ui.label(RichText::new("⏳ Comprobando respuesta...").weak());
            } else if !app.session.message().is_empty() {
                ui.label(RichText::new(app.session.message()).color(INCORRECT));
            }

            ui.add_space(14.0);
            if ui.button("Terminar quiz").clicked() {
                app.end_quiz();
            }
        });
    });
}
