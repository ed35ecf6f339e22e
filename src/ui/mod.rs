mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::Screen;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};
use std::time::Instant;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.attach_context(ctx);

        // Resultados de red y avance automático antes de dibujar
        let now = Instant::now();
        self.pump(now);

        top_panel(ctx);
        bottom_panel(ctx);

        // Dispatch por estado a las funciones de views
        match self.session.screen() {
            Screen::Configuring => views::settings::ui_settings(self, ctx),
            Screen::Loading(_) => views::loading::ui_loading(self, ctx),
            Screen::Active => views::quiz::ui_quiz(self, ctx),
            Screen::Results => views::results::ui_results(self, ctx),
        }

        if let Some(wait) = self.next_wakeup(now) {
            ctx.request_repaint_after(wait);
        }
    }
}
