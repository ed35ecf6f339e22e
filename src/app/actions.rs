use super::*;
use crate::model::Screen;
use crate::session::{Effect, Event};
use std::time::{Duration, Instant};

impl QuizApp {
    pub fn start_quiz(&mut self) {
        self.dispatch(Event::StartRequested(self.selected_count));
    }

    /// Envía una respuesta de MC/TF (o el texto ya validado de FIB).
    pub fn procesar_respuesta(&mut self, answer: &str) {
        self.dispatch(Event::AnswerSubmitted(answer.to_string()));
    }

    /// Envía el texto del input libre; vacío o solo espacios no sale de aquí.
    pub fn submit_text(&mut self) {
        if self.fib_input.trim().is_empty() {
            return;
        }
        let answer = self.fib_input.clone();
        self.procesar_respuesta(&answer);
    }

    pub fn end_quiz(&mut self) {
        self.dispatch(Event::EndRequested);
    }

    pub fn play_again(&mut self) {
        self.dispatch(Event::PlayAgainRequested);
    }

    pub fn select_count(&mut self, count: usize) {
        if self.session.screen() == Screen::Configuring {
            self.selected_count = count;
        }
    }

    /// Aplica los resultados de red y el temporizador vencido. Se llama en cada frame.
    pub fn pump(&mut self, now: Instant) {
        for event in self.tasks.poll() {
            self.dispatch_at(event, now);
        }
        if let Some(ticket) = self.timer.fire(now) {
            self.dispatch_at(Event::AdvanceDue(ticket), now);
        }
    }

    /// Tiempo hasta el siguiente avance automático, para pedir repintado.
    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        self.timer.remaining(now)
    }

    pub fn is_advance_pending(&self) -> bool {
        self.timer.is_armed()
    }

    pub fn dispatch(&mut self, event: Event) {
        self.dispatch_at(event, Instant::now());
    }

    fn dispatch_at(&mut self, event: Event, now: Instant) {
        let effects = self.session.apply(event);

        // Pregunta nueva (o ronda nueva): el input libre empieza vacío.
        if self.session.current_index() != self.shown_index {
            self.shown_index = self.session.current_index();
            self.fib_input.clear();
        }

        for effect in effects {
            match effect {
                Effect::Request { ticket, call } => self.tasks.spawn(ticket, call),
                Effect::ScheduleAdvance { ticket, delay } => self.timer.arm(ticket, delay, now),
                Effect::CancelAdvance(ticket) => self.timer.cancel(ticket),
            }
        }
    }
}
