use crate::QuizApp;
use crate::ui::helpers::big_button;
use crate::view_models::{StatsBody, StatsView, final_score_line, finish_note};
use egui::{CentralPanel, Context, Grid, RichText, ScrollArea};

pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    let stats_view = app.session.stats().map(StatsView::from);

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 600.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ui.vertical_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 30))
                .show(ui, |ui| {
                    ui.set_width(panel_width);

                    ui.heading("¡Quiz completado!");
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(final_score_line(
                            app.session.score(),
                            app.session.configured_count(),
                        ))
                        .size(20.0)
                        .strong(),
                    );
                    if let Some(note) = finish_note(app.session.finish()) {
                        ui.label(RichText::new(note).weak());
                    }
                    ui.add_space(14.0);

                    if let Some(view) = &stats_view {
                        ui.label(RichText::new(&view.title).heading());
                        ui.label(RichText::new(&view.difficulty_line).weak());
                        ui.add_space(8.0);

                        ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                            match &view.body {
                                StatsBody::Rows(rows) => {
                                    Grid::new("stats_grid")
                                        .striped(true)
                                        .spacing([24.0, 6.0])
                                        .show(ui, |ui| {
                                            ui.label("Tema");
                                            ui.label("Correctas");
                                            ui.label("Intentadas");
                                            ui.label("Puntuación");
                                            ui.end_row();

                                            for r in rows {
                                                ui.label(&r.topic);
                                                ui.label(r.correct.to_string());
                                                ui.label(r.attempted.to_string());
                                                ui.label(&r.score);
                                                ui.end_row();
                                            }
                                        });
                                }
                                StatsBody::Empty(message) => {
                                    ui.label(RichText::new(message).weak());
                                }
                            }
                        });
                    }

                    ui.add_space(16.0);
                    if big_button(ui, "🔄 Jugar de nuevo", panel_width / 2.0, 40.0, true) {
                        app.play_again();
                    }
                });
        });
    });
}
