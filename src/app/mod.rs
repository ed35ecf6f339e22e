use crate::client::{HttpQuizClient, QuizService};
use crate::data::QuizConfig;
use crate::error::ClientError;
use crate::session::Session;
use std::sync::Arc;

// Submódulos
pub mod actions;
pub mod tasks;
pub mod timer;

use tasks::TaskRunner;
use timer::AdvanceTimer;

/// Controlador de la partida: dueño único de la `Session`, del temporizador
/// de avance y de los hilos de red.
pub struct QuizApp {
    pub config: QuizConfig,
    pub session: Session,
    pub selected_count: usize,
    /// Texto en curso del input de respuesta libre (FIB).
    pub fib_input: String,
    tasks: TaskRunner,
    timer: AdvanceTimer,
    shown_index: usize,
}

impl QuizApp {
    pub fn new(config: QuizConfig) -> Result<Self, ClientError> {
        let client = HttpQuizClient::new(&config.endpoint, config.request_timeout())?;
        Ok(Self::with_service(config, Arc::new(client)))
    }

    pub fn with_service(config: QuizConfig, service: Arc<dyn QuizService>) -> Self {
        let selected_count = config.initial_question_count();
        let session = Session::new(config.advance_delay());
        Self {
            config,
            session,
            selected_count,
            fib_input: String::new(),
            tasks: TaskRunner::new(service),
            timer: AdvanceTimer::default(),
            shown_index: 0,
        }
    }

    pub fn attach_context(&mut self, ctx: &egui::Context) {
        self.tasks.attach(ctx);
    }
}
