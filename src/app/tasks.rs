use crate::client::QuizService;
use crate::session::{Call, Event, Ticket};
use log::debug;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

/// Ejecuta cada llamada remota en su propio hilo y devuelve el evento
/// resultante por un canal que la UI vacía en cada frame.
pub struct TaskRunner {
    service: Arc<dyn QuizService>,
    sender: Sender<Event>,
    receiver: Receiver<Event>,
    repaint: Option<egui::Context>,
}

impl TaskRunner {
    pub fn new(service: Arc<dyn QuizService>) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            service,
            sender,
            receiver,
            repaint: None,
        }
    }

    /// Permite despertar la UI cuando termina un hilo.
    pub fn attach(&mut self, ctx: &egui::Context) {
        if self.repaint.is_none() {
            self.repaint = Some(ctx.clone());
        }
    }

    pub fn spawn(&self, ticket: Ticket, call: Call) {
        debug!("lanzando {call:?} ({ticket:?})");
        let service = Arc::clone(&self.service);
        let sender = self.sender.clone();
        let repaint = self.repaint.clone();

        thread::spawn(move || {
            let event = call.perform(service.as_ref(), ticket);
            let _ = sender.send(event);
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
    }

    pub fn poll(&self) -> Vec<Event> {
        let mut events = Vec::new();
        while let Ok(event) = self.receiver.try_recv() {
            events.push(event);
        }
        events
    }
}
