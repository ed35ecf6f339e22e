// src/ui/helpers.rs
use crate::render::{ChoiceView, Mark};
use egui::{Button, Color32, RichText, Stroke, Ui, Vec2};

pub const CORRECT: Color32 = Color32::from_rgb(46, 160, 67);
pub const INCORRECT: Color32 = Color32::from_rgb(200, 55, 55);

pub fn mark_color(mark: Mark) -> Option<Color32> {
    match mark {
        Mark::Neutral => None,
        Mark::Correct => Some(CORRECT),
        Mark::IncorrectSelected => Some(INCORRECT),
    }
}

pub fn big_button(ui: &mut Ui, label: &str, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Botón de opción coloreado según su marca; devuelve true si se pulsó.
pub fn choice_button(ui: &mut Ui, choice: &ChoiceView, width: f32, enabled: bool) -> bool {
    let mut button = Button::new(RichText::new(&choice.label).size(16.0))
        .min_size(Vec2::new(width, 40.0));
    if let Some(color) = mark_color(choice.mark) {
        button = button.fill(color).stroke(Stroke::new(1.5, Color32::WHITE));
    }
    ui.add_enabled(enabled, button).clicked()
}
